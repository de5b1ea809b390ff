//! Ranked words approximately matching the focused word.

use super::rank_page::count_width;
use super::{Focus, InputMode, KeyOutcome, Page, PageId, Rendered, Transition, Viewport};
use crate::analysis::{TypoTolerantMatcher, WordMatcher};
use crate::model::{Key, RankedWord};
use crate::view::styles::PageStyles;
use ratatui::text::{Line, Span};
use std::fmt;
use std::rc::Rc;
use tracing::debug;

/// Fuzzy variants of a word, best match first.
pub struct FilterPage {
    words: Rc<[RankedWord]>,
    matcher: Box<dyn WordMatcher>,
    viewport: Viewport<RankedWord>,
    count_width: usize,
    focus: Option<Focus>,
}

impl FilterPage {
    /// Filter page using the default typo-tolerant matcher.
    pub fn new(words: Rc<[RankedWord]>, body_height: usize, max_typos: usize) -> Self {
        Self::with_matcher(words, body_height, Box::new(TypoTolerantMatcher::new(max_typos)))
    }

    /// Filter page using a custom matcher.
    pub fn with_matcher(
        words: Rc<[RankedWord]>,
        body_height: usize,
        matcher: Box<dyn WordMatcher>,
    ) -> Self {
        Self {
            count_width: count_width(&words),
            words,
            matcher,
            viewport: Viewport::new(Vec::new(), body_height),
            focus: None,
        }
    }

    /// The underlying viewport.
    pub fn viewport(&self) -> &Viewport<RankedWord> {
        &self.viewport
    }

    /// Ranked words matching `focus.word`, or the word at `focus.origin`
    /// alone when nothing matches.
    fn matches(&self, focus: &Focus) -> Vec<RankedWord> {
        let candidates: Vec<&str> = self.words.iter().map(|w| w.word.as_str()).collect();
        let ranked = self.matcher.rank(&focus.word, &candidates);
        debug!(word = %focus.word, matches = ranked.len(), "Filter computed");

        if ranked.is_empty() {
            return self.words.get(focus.origin).cloned().into_iter().collect();
        }
        ranked
            .into_iter()
            .filter_map(|i| self.words.get(i).cloned())
            .collect()
    }
}

impl fmt::Debug for FilterPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPage")
            .field("viewport", &self.viewport)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Page for FilterPage {
    fn id(&self) -> PageId {
        PageId::Filter
    }

    fn enter(&mut self, focus: Option<Focus>) {
        let Some(focus) = focus else {
            return;
        };
        let items = self.matches(&focus);
        self.viewport.set_items(items);
        self.focus = Some(focus);
    }

    fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match self.viewport.handle_key(key) {
            KeyOutcome::Unhandled(Key::Right | Key::Escape) => Some(Transition::back(PageId::Rank)),
            KeyOutcome::Unhandled(Key::Left) => self
                .focus
                .clone()
                .map(|focus| Transition::focused(PageId::Pairs, focus)),
            _ => None,
        }
    }

    fn render(&self, styles: &PageStyles) -> Rendered {
        let width = self.count_width;
        let origin = self.focus.as_ref().map_or(0, |f| f.origin);
        self.viewport.render(
            styles.banner(Some(PageId::Pairs), PageId::Filter, Some(PageId::Rank)),
            vec![
                styles.label_span("w"),
                Span::raw(format!(" {} ", origin)),
                styles.label_span("f"),
                Span::raw(" "),
            ],
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
