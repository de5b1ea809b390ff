//! Domain model types (pure).
//!
//! All types in this module are plain data loaded once at startup and never
//! mutated afterwards.

pub mod corpus;
pub mod error;
pub mod key;
pub mod ranked_word;
pub mod sanitize;

// Re-export for convenience
pub use corpus::{Corpus, CorpusLine};
pub use error::{AppError, InputError};
pub use key::Key;
pub use ranked_word::{parse_rank_lines, RankedWord};
