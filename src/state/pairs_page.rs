//! Most common co-occurrence windows around the focused word.

use super::{Focus, InputMode, KeyOutcome, Page, PageId, Rendered, Transition, Viewport};
use crate::analysis::{PairCount, PairCounter};
use crate::model::ranked_word::decimal_width;
use crate::model::{Corpus, Key};
use crate::view::styles::PageStyles;
use ratatui::text::{Line, Span};
use std::time::Instant;
use tracing::info;

/// Co-occurrence windows, most frequent first.
#[derive(Debug, Clone)]
pub struct PairsPage {
    counter: PairCounter,
    viewport: Viewport<PairCount>,
    focus: Option<Focus>,
}

impl PairsPage {
    /// Tokenizes the whole corpus up front; windows are counted on entry.
    pub fn new(corpus: &Corpus, body_height: usize, window: usize) -> Self {
        Self::with_counter(PairCounter::new(corpus, window), body_height)
    }

    /// Pairs page over a prepared counter.
    pub fn with_counter(counter: PairCounter, body_height: usize) -> Self {
        Self {
            counter,
            viewport: Viewport::new(Vec::new(), body_height),
            focus: None,
        }
    }

    /// The underlying viewport.
    pub fn viewport(&self) -> &Viewport<PairCount> {
        &self.viewport
    }
}

impl Page for PairsPage {
    fn id(&self) -> PageId {
        PageId::Pairs
    }

    fn enter(&mut self, focus: Option<Focus>) {
        let Some(focus) = focus else {
            return;
        };
        let started = Instant::now();
        let pairs = self.counter.count(&focus.word);
        info!(
            word = %focus.word,
            windows = pairs.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Co-occurrence windows counted"
        );
        self.viewport.set_items(pairs);
        self.focus = Some(focus);
    }

    fn handle_key(&mut self, key: Key) -> Option<Transition> {
        match self.viewport.handle_key(key) {
            KeyOutcome::Unhandled(Key::Escape) => Some(Transition::back(PageId::Rank)),
            KeyOutcome::Unhandled(Key::Right) => self
                .focus
                .clone()
                .map(|focus| Transition::focused(PageId::Filter, focus)),
            _ => None,
        }
    }

    fn render(&self, styles: &PageStyles) -> Rendered {
        // sorted descending, so the first count is the widest
        let width = self
            .viewport
            .items()
            .first()
            .map_or(1, |p| decimal_width(p.count as u64));
        let origin = self.focus.as_ref().map_or(0, |f| f.origin);
        self.viewport.render(
            styles.banner(None, PageId::Pairs, Some(PageId::Filter)),
            vec![
                styles.label_span("w"),
                Span::raw(format!(" {} ", origin)),
                styles.label_span("p"),
                Span::raw(" "),
            ],
            |pair| {
                Line::raw(format!(
                    "{:0width$} [ {} ]",
                    pair.count,
                    pair.window,
                    width = width
                ))
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

#[cfg(test)]
mod tests {
    use super::*;

    fn page(lines: &[&str]) -> PairsPage {
        PairsPage::new(&Corpus::from_text(&lines.join("\n")), 10, 2)
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn enter_counts_windows() {
        let mut page = page(&[" a b c "]);
        page.enter(Some(Focus::new("b", 0)));
        let windows: Vec<_> = page
            .viewport()
            .items()
            .iter()
            .map(|p| (p.window.as_str(), p.count))
            .collect();
        assert_eq!(windows, [("a b", 1), ("b c", 1)]);
    }

    #[test]
    fn transitions() {
        let mut page = page(&[" a b c "]);
        page.enter(Some(Focus::new("b", 4)));
        assert_eq!(page.handle_key(Key::Escape), Some(Transition::back(PageId::Rank)));
        assert_eq!(
            page.handle_key(Key::Right),
            Some(Transition::focused(PageId::Filter, Focus::new("b", 4)))
        );
        assert_eq!(page.handle_key(Key::Left), None);
    }

    #[test]
    fn rows_pad_counts_to_widest() {
        let mut lines = vec![" the cat sat "; 12];
        lines.push(" a cat ran ");
        let mut page = page(&lines);
        page.enter(Some(Focus::new("cat", 1)));
        let rendered = page.render(&PageStyles::default());
        assert_eq!(text(&rendered.lines[1]), "w 1 p 0");
        assert_eq!(text(&rendered.lines[2]), "12 [ the cat ]");
        assert_eq!(text(&rendered.lines[4]), "12 [ cat sat ]");
        assert_eq!(text(&rendered.lines[5]), "01 [ a cat ]");
    }

    #[test]
    fn reentering_recomputes_and_resets_cursor() {
        let mut page = page(&[" a b c ", " b c d "]);
        page.enter(Some(Focus::new("b", 0)));
        page.handle_key(Key::Down);
        assert_eq!(page.cursor(), 1);
        page.enter(Some(Focus::new("d", 0)));
        assert_eq!(page.cursor(), 0);
        assert_eq!(page.len(), 1);
    }
}
