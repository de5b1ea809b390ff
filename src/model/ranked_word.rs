//! Ranked words parsed from the rank file.

use std::fmt;

/// One entry of the word-frequency ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    /// How often the word occurs in the corpus.
    pub count: u64,
    /// The word itself, lowercased by the upstream ranking stage.
    pub word: String,
}

impl RankedWord {
    /// Create a ranked word.
    pub fn new(count: u64, word: impl Into<String>) -> Self {
        Self {
            count,
            word: word.into(),
        }
    }

    /// Parse one rank-file line of the form `<digits> "<word>"`.
    ///
    /// Leading zeros in the count are cosmetic. Returns `None` for any line
    /// that does not match the grammar, including counts that overflow `u64`
    /// and empty words.
    ///
    /// # Examples
    ///
    /// ```
    /// use corpus_browser::model::RankedWord;
    ///
    /// let parsed = RankedWord::parse(r#"0007 "hello""#).unwrap();
    /// assert_eq!(parsed.count, 7);
    /// assert_eq!(parsed.word, "hello");
    /// assert!(RankedWord::parse("garbage").is_none());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let (digits, quoted) = line.split_once(' ')?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let count = digits.parse::<u64>().ok()?;

        let word = quoted.strip_prefix('"')?.strip_suffix('"')?;
        if word.is_empty() {
            return None;
        }

        Some(Self::new(count, word))
    }

    /// Number of decimal digits needed to print `count`.
    pub fn count_width(&self) -> usize {
        decimal_width(self.count)
    }
}

impl fmt::Display for RankedWord {
    /// Writes `count "word"`, zero-padding the count to the requested width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(0);
        write!(f, "{:0width$} \"{}\"", self.count, self.word, width = width)
    }
}

/// Parse every line of a rank file, silently dropping non-matching lines.
///
/// File order is preserved: the upstream stage already sorted by count
/// descending with ties in first-seen order, and re-sorting here could only
/// disturb that.
pub fn parse_rank_lines(text: &str) -> Vec<RankedWord> {
    text.lines().filter_map(RankedWord::parse).collect()
}

/// Number of decimal digits in `n` (at least 1).
pub fn decimal_width(n: u64) -> usize {
    let mut width = 1;
    let mut rest = n / 10;
    while rest > 0 {
        width += 1;
        rest /= 10;
    }
    width
}
