//! Corpus analyses backing the filter and pairs pages (pure).

pub mod matcher;
pub mod pairs;

pub use matcher::{TypoTolerantMatcher, WordMatcher};
pub use pairs::{PairCount, PairCounter};
