//! Input artifacts.
//!
//! The browser reads two files produced by an upstream pipeline:
//! - the rank file (`messages.word-rank.txt`): `<count> "<word>"` per line
//! - the corpus (`messages.txt`): one space-padded message per line
//!
//! Both are normally found in one init directory; either can be overridden
//! with an explicit path.

use crate::model::error::InputError;
use crate::model::{Corpus, RankedWord};
use std::path::{Path, PathBuf};

pub mod file;

pub use file::{load_corpus, load_rank_file};

/// File name of the word ranking inside an init directory.
pub const RANK_FILE_NAME: &str = "messages.word-rank.txt";

/// File name of the corpus inside an init directory.
pub const CORPUS_FILE_NAME: &str = "messages.txt";

/// Resolved locations of both artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPaths {
    /// Word ranking.
    pub rank: PathBuf,
    /// Corpus lines.
    pub corpus: PathBuf,
}

/// Everything the browser needs, loaded into memory.
#[derive(Debug, Clone)]
pub struct Inputs {
    /// Ranked words in file order.
    pub words: Vec<RankedWord>,
    /// Corpus lines in file order.
    pub corpus: Corpus,
}

/// Work out where the rank file and corpus live.
///
/// Explicit paths win; missing ones fall back to the standard file names
/// inside `dir`.
///
/// # Errors
///
/// Returns `InputError::NoInput` if nothing at all was given, and
/// `InputError::MissingArtifact` if one path is explicit and the other has
/// no directory to fall back on.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use corpus_browser::source::resolve_inputs;
///
/// let paths = resolve_inputs(Some(Path::new("init")), None, None).unwrap();
/// assert_eq!(paths.rank, PathBuf::from("init/messages.word-rank.txt"));
/// assert_eq!(paths.corpus, PathBuf::from("init/messages.txt"));
/// ```
pub fn resolve_inputs(
    dir: Option<&Path>,
    rank: Option<&Path>,
    corpus: Option<&Path>,
) -> Result<InputPaths, InputError> {
    if dir.is_none() && rank.is_none() && corpus.is_none() {
        return Err(InputError::NoInput);
    }

    let pick = |explicit: Option<&Path>, name: &str, artifact: &'static str| {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| dir.map(|d| d.join(name)))
            .ok_or(InputError::MissingArtifact { artifact })
    };

    Ok(InputPaths {
        rank: pick(rank, RANK_FILE_NAME, "rank")?,
        corpus: pick(corpus, CORPUS_FILE_NAME, "corpus")?,
    })
}

/// Load both artifacts.
///
/// # Errors
///
/// Propagates the first `InputError` from either file.
pub fn load_inputs(paths: &InputPaths) -> Result<Inputs, InputError> {
    Ok(Inputs {
        words: load_rank_file(&paths.rank)?,
        corpus: load_corpus(&paths.corpus)?,
    })
}
