//! Sliding-window co-occurrence counting.

use crate::model::sanitize::tokenize;
use crate::model::Corpus;
use std::collections::HashMap;

/// Default window width in tokens.
pub const DEFAULT_WINDOW: usize = 2;

/// How often one co-occurrence window was seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairCount {
    /// Window tokens joined by single spaces.
    pub window: String,
    /// Number of times the window was produced across the corpus.
    pub count: usize,
}

/// Counts the short token windows surrounding a target word.
///
/// Lines are tokenized once on construction; each [`count`](Self::count)
/// call recomputes the windows from scratch.
#[derive(Debug, Clone)]
pub struct PairCounter {
    lines: Vec<Vec<String>>,
    window: usize,
}

impl PairCounter {
    /// Tokenize every corpus line. A `window` of zero is raised to one.
    pub fn new(corpus: &Corpus, window: usize) -> Self {
        let lines = corpus.lines().map(|line| tokenize(line.text())).collect();
        Self::from_tokens(lines, window)
    }

    /// Build from already tokenized lines.
    pub fn from_tokens(lines: Vec<Vec<String>>, window: usize) -> Self {
        Self {
            lines,
            window: window.max(1),
        }
    }

    /// Window width in tokens.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Count every window that overlaps the first occurrence of `word`.
    ///
    /// Only lines holding more than `window` tokens and containing `word` as
    /// an exact token contribute. The result is sorted by count descending;
    /// equal counts keep the order in which their window was first produced.
    pub fn count(&self, word: &str) -> Vec<PairCount> {
        let word = word.to_lowercase();
        let mut counts: Vec<PairCount> = Vec::new();
        let mut slots: HashMap<String, usize> = HashMap::new();

        for tokens in &self.lines {
            if tokens.len() <= self.window {
                continue;
            }
            let Some(pos) = tokens.iter().position(|t| *t == word) else {
                continue;
            };

            for window in windows_around(tokens, pos, self.window) {
                match slots.get(&window) {
                    Some(&slot) => counts[slot].count += 1,
                    None => {
                        slots.insert(window.clone(), counts.len());
                        counts.push(PairCount { window, count: 1 });
                    }
                }
            }
        }

        // stable: ties stay in first-production order
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}

/// Every `width`-token window of `tokens` that covers position `pos`, joined
/// with single spaces, left to right.
///
/// Requires `tokens.len() >= width` and `pos < tokens.len()`.
pub fn windows_around(tokens: &[String], pos: usize, width: usize) -> Vec<String> {
    let first = (pos + 1).saturating_sub(width);
    let last = (tokens.len() - width).min(pos);
    (first..=last)
        .map(|start| tokens[start..start + width].join(" "))
        .collect()
}
