//! Corpus lines containing the focused word.

use super::{Focus, InputMode, KeyOutcome, Page, PageId, Rendered, Transition, Viewport};
use crate::model::{Corpus, Key};
use crate::view::styles::PageStyles;
use ratatui::text::{Line, Span};
use std::rc::Rc;
use tracing::debug;

/// Concordance view: items are line numbers into the shared corpus.
#[derive(Debug, Clone)]
pub struct ConcordancePage {
    corpus: Rc<Corpus>,
    viewport: Viewport<usize>,
    origin: usize,
}

impl ConcordancePage {
    /// Empty until entered with a focus.
    pub fn new(corpus: Rc<Corpus>, body_height: usize) -> Self {
        Self {
            corpus,
            viewport: Viewport::new(Vec::new(), body_height),
            origin: 0,
        }
    }

    /// The underlying viewport.
    pub fn viewport(&self) -> &Viewport<usize> {
        &self.viewport
    }

    /// Rank index the current word came from.
    pub fn origin(&self) -> usize {
        self.origin
    }
}

impl Page for ConcordancePage {
    fn id(&self) -> PageId {
        PageId::Concordance
    }

    fn enter(&mut self, focus: Option<Focus>) {
        let Some(focus) = focus else {
            return;
        };
        let lines = self.corpus.concordance(&focus.word);
        debug!(word = %focus.word, matches = lines.len(), "Concordance computed");
        self.viewport.set_items(lines);
        self.origin = focus.origin;
    }

    fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match self.viewport.handle_key(key) {
            KeyOutcome::Unhandled(Key::Left | Key::Escape) => Some(Transition::back(PageId::Rank)),
            _ => None,
        }
    }

    fn render(&self, styles: &PageStyles) -> Rendered {
        self.viewport.render(
            styles.banner(Some(PageId::Rank), PageId::Concordance, None),
            vec![
                styles.label_span("w"),
                Span::raw(format!(" {} ", self.origin)),
                styles.label_span("c"),
                Span::raw(" "),
            ],
            |&index| {
                self.corpus
                    .line(index)
                    .map(|line| Line::raw(line.text().to_string()))
                    .unwrap_or_default()
            },
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
