//! The ranked word list.

use super::{Focus, InputMode, KeyOutcome, Page, PageId, Rendered, Transition, Viewport};
use crate::model::{Key, RankedWord};
use crate::view::styles::PageStyles;
use ratatui::text::{Line, Span};

/// Lists every ranked word in file order.
///
/// This is the only page whose state survives leaving it: returning from
/// any other page shows the same cursor the user left from.
#[derive(Debug, Clone)]
pub struct RankPage {
    viewport: Viewport<RankedWord>,
    count_width: usize,
}

impl RankPage {
    /// List `words` with the cursor on the most frequent one.
    pub fn new(words: &[RankedWord], body_height: usize) -> Self {
        Self {
            count_width: count_width(words),
            viewport: Viewport::new(words.to_vec(), body_height),
        }
    }

    /// The underlying viewport.
    pub fn viewport(&self) -> &Viewport<RankedWord> {
        &self.viewport
    }

    fn focus_current(&self) -> Option<Focus> {
        let word = self.viewport.current()?;
        Some(Focus::new(word.word.clone(), self.viewport.cursor()))
    }
}

impl Page for RankPage {
    fn id(&self) -> PageId {
        PageId::Rank
    }

    fn enter(&mut self, _focus: Option<Focus>) {
        // items never change; keep the cursor where the user left it
    }

    fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match self.viewport.handle_key(key) {
            KeyOutcome::Consumed => None,
            KeyOutcome::Unhandled(Key::Right) => self
                .focus_current()
                .map(|focus| Transition::focused(PageId::Concordance, focus)),
            KeyOutcome::Unhandled(Key::Left) => self
                .focus_current()
                .map(|focus| Transition::focused(PageId::Filter, focus)),
            KeyOutcome::Unhandled(_) => None,
        }
    }

    fn render(&self, styles: &PageStyles) -> Rendered {
        let width = self.count_width;
        self.viewport.render(
            styles.banner(Some(PageId::Filter), PageId::Rank, Some(PageId::Concordance)),
            vec![styles.label_span("w"), Span::raw(" ")],
            |word| Line::raw(format!("{:width$}", word, width = width)),
        )
    }

    fn input_mode(&self) -> InputMode {
        self.viewport.mode()
    }

    fn cursor(&self) -> usize {
        self.viewport.cursor()
    }

    fn len(&self) -> usize {
        self.viewport.len()
    }
}

/// Digits needed for the largest count, so rows line up.
pub(crate) fn count_width(words: &[RankedWord]) -> usize {
    words.iter().map(RankedWord::count_width).max().unwrap_or(1)
}
