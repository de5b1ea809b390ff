//! Read-once loading of the rank file and corpus.

use crate::model::error::InputError;
use crate::model::{parse_rank_lines, Corpus, RankedWord};
use std::path::Path;
use tracing::{debug, info};

/// Read a whole artifact as UTF-8.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist and
/// `InputError::Read` for every other failure.
fn read_artifact(path: &Path) -> Result<String, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the word ranking, keeping file order.
///
/// Lines that do not match `<digits> "<word>"` are dropped.
///
/// # Errors
///
/// Returns `InputError` if the file is missing or unreadable.
pub fn load_rank_file(path: &Path) -> Result<Vec<RankedWord>, InputError> {
    let text = read_artifact(path)?;
    let words = parse_rank_lines(&text);

    let dropped = text.lines().count() - words.len();
    if dropped > 0 {
        debug!(path = %path.display(), dropped, "Skipped malformed rank lines");
    }
    info!(path = %path.display(), words = words.len(), "Rank file loaded");

    Ok(words)
}

/// Load the corpus, one line per message.
///
/// # Errors
///
/// Returns `InputError` if the file is missing or unreadable.
pub fn load_corpus(path: &Path) -> Result<Corpus, InputError> {
    let text = read_artifact(path)?;
    let corpus = Corpus::from_text(&text);
    info!(path = %path.display(), lines = corpus.len(), "Corpus loaded");
    Ok(corpus)
}
