//! Browser state machine (pure).
//!
//! Four pages, each a [`Viewport`] plus its own item derivation, linked by a
//! small directed transition graph:
//!
//! ```text
//! Rank         --right-->       Concordance (word, origin)
//! Rank         --left--->       Filter      (word, origin)
//! Concordance  --left/esc-->    Rank
//! Filter       --right/esc-->   Rank
//! Filter       --left--->       Pairs       (word, origin)
//! Pairs        --esc---->       Rank
//! Pairs        --right-->       Filter      (word, origin)
//! ```
//!
//! Pages never hold references to each other. A page answers a key with a
//! [`Transition`] naming the target by [`PageId`]; the [`Browser`] looks the
//! target up in the [`PageRegistry`] and enters it.

pub mod browser;
pub mod concordance_page;
pub mod filter_page;
pub mod pairs_page;
pub mod rank_page;
pub mod registry;
pub mod viewport;

// Re-export for convenience
pub use browser::{Browser, Control};
pub use concordance_page::ConcordancePage;
pub use filter_page::FilterPage;
pub use pairs_page::PairsPage;
pub use rank_page::RankPage;
pub use registry::PageRegistry;
pub use viewport::{InputMode, KeyOutcome, Rendered, Viewport};

use crate::analysis::matcher::DEFAULT_MAX_TYPOS;
use crate::analysis::pairs::DEFAULT_WINDOW;
use crate::model::Key;
use crate::view::styles::PageStyles;
use viewport::DEFAULT_BODY_HEIGHT;

/// Stable identifier of each page in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    /// Ranked word list; the initial page.
    Rank,
    /// Corpus lines containing a word.
    Concordance,
    /// Ranked words approximately matching a word.
    Filter,
    /// Co-occurrence windows around a word.
    Pairs,
}

impl PageId {
    /// Title shown in banners.
    pub fn title(self) -> &'static str {
        match self {
            PageId::Rank => "word",
            PageId::Concordance => "concordances",
            PageId::Filter => "filter",
            PageId::Pairs => "pairs",
        }
    }
}

/// Parameters carried into a page that derives its items from a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Focus {
    /// The word to look up.
    pub word: String,
    /// Rank-list cursor the word came from.
    pub origin: usize,
}

impl Focus {
    /// Focus on `word`, originating at rank index `origin`.
    pub fn new(word: impl Into<String>, origin: usize) -> Self {
        Self {
            word: word.into(),
            origin,
        }
    }
}

/// A request to switch pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Page to switch to.
    pub target: PageId,
    /// `Some` recomputes the target's items; `None` re-shows it as it was.
    pub focus: Option<Focus>,
}

impl Transition {
    /// Return to `target` without recomputation.
    pub fn back(target: PageId) -> Self {
        Self {
            target,
            focus: None,
        }
    }

    /// Enter `target` with fresh items derived from `focus`.
    pub fn focused(target: PageId, focus: Focus) -> Self {
        Self {
            target,
            focus: Some(focus),
        }
    }
}

/// Behaviour shared by the four pages.
pub trait Page {
    /// Registry identifier.
    fn id(&self) -> PageId;

    /// Activate the page.
    ///
    /// With a focus, items are recomputed from scratch and the cursor resets;
    /// without one, the previous items and cursor are kept.
    fn enter(&mut self, focus: Option<Focus>);

    /// React to a key. Returns a transition when the key leaves the page.
    fn handle_key(&mut self, key: Key) -> Option<Transition>;

    /// Lay out the page's fixed-height region.
    fn render(&self, styles: &PageStyles) -> Rendered;

    /// Whether the page is in navigate or numeric mode.
    fn input_mode(&self) -> InputMode;

    /// Cursor position within the page's items.
    fn cursor(&self) -> usize;

    /// Number of items currently listed.
    fn len(&self) -> usize;

    /// Whether the page lists nothing.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Tunables shared by the pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserOptions {
    /// Rows shown below the focused item.
    pub body_height: usize,
    /// Co-occurrence window width in tokens.
    pub window: usize,
    /// Typos tolerated by the filter page.
    pub max_typos: usize,
}

impl BrowserOptions {
    /// Lines in every rendered frame: chrome plus body.
    pub fn region_height(&self) -> usize {
        viewport::CHROME_HEIGHT + self.body_height
    }
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            body_height: DEFAULT_BODY_HEIGHT,
            window: DEFAULT_WINDOW,
            max_typos: DEFAULT_MAX_TYPOS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_banner_names() {
        assert_eq!(PageId::Rank.title(), "word");
        assert_eq!(PageId::Concordance.title(), "concordances");
        assert_eq!(PageId::Filter.title(), "filter");
        assert_eq!(PageId::Pairs.title(), "pairs");
    }

    #[test]
    fn region_height_adds_chrome_to_body() {
        let options = BrowserOptions {
            body_height: 3,
            ..BrowserOptions::default()
        };
        assert_eq!(options.region_height(), 7);
    }

    #[test]
    fn back_transition_has_no_focus() {
        assert_eq!(Transition::back(PageId::Rank).focus, None);
    }

    #[test]
    fn focused_transition_carries_word_and_origin() {
        let t = Transition::focused(PageId::Filter, Focus::new("cat", 4));
        assert_eq!(t.target, PageId::Filter);
        assert_eq!(t.focus, Some(Focus::new("cat", 4)));
    }

    #[test]
    fn default_options() {
        let options = BrowserOptions::default();
        assert_eq!(options.body_height, 10);
        assert_eq!(options.window, 2);
        assert_eq!(options.max_typos, 1);
    }
}
