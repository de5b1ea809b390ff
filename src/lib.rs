//! Corpus Browser
//!
//! Interactive terminal browser over a word-frequency ranking and the corpus
//! it was computed from.
//!
//! Pure core: [`model`], [`analysis`] and [`state`] hold data and the page
//! state machine. Impure shell: [`source`] reads the artifacts, [`input`]
//! decodes raw key bytes and [`view`] owns the terminal.

pub mod analysis;
pub mod config;
pub mod input;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
