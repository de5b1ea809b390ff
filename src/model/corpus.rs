//! Corpus lines and whole-word lookup.

/// One message of the corpus.
///
/// The upstream producer pads every line with exactly one leading and one
/// trailing space and collapses internal whitespace, so every word in the
/// text is delimited by plain spaces on both sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusLine {
    text: String,
}

impl CorpusLine {
    /// Wrap one line of corpus text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The raw line text, padding included.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The immutable, ordered sequence of corpus lines.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    lines: Vec<CorpusLine>,
    /// Lowercased copies used for case-insensitive matching.
    folded: Vec<String>,
}

impl Corpus {
    /// Build a corpus from its lines, in order.
    pub fn new(lines: Vec<CorpusLine>) -> Self {
        let folded = lines.iter().map(|l| l.text.to_lowercase()).collect();
        Self { lines, folded }
    }

    /// Split file contents into lines (`\n` or `\r\n`).
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines().map(CorpusLine::new).collect())
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line by line number.
    pub fn line(&self, index: usize) -> Option<&CorpusLine> {
        self.lines.get(index)
    }

    /// Iterate over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &CorpusLine> {
        self.lines.iter()
    }

    /// Line numbers of every line containing `word` as a space-delimited
    /// whole word, compared case-insensitively, in corpus order.
    ///
    /// ```
    /// use corpus_browser::model::{Corpus, CorpusLine};
    ///
    /// let corpus = Corpus::new(vec![
    ///     CorpusLine::new(" the cat sat "),
    ///     CorpusLine::new(" a cat ran "),
    ///     CorpusLine::new(" no match "),
    /// ]);
    /// assert_eq!(corpus.concordance("cat"), vec![0, 1]);
    /// ```
    pub fn concordance(&self, word: &str) -> Vec<usize> {
        let needle = format!(" {} ", word.to_lowercase());
        self.folded
            .iter()
            .enumerate()
            .filter(|(_, text)| text.contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(lines: &[&str]) -> Corpus {
        Corpus::new(lines.iter().copied().map(CorpusLine::new).collect())
    }

    #[test]
    fn concordance_returns_matching_lines_in_order() {
        let corpus = corpus(&[" the cat sat ", " a cat ran ", " no match "]);
        assert_eq!(corpus.concordance("cat"), vec![0, 1]);
    }

    #[test]
    fn concordance_is_case_insensitive() {
        let corpus = corpus(&[" The Cat sat ", " CAT "]);
        assert_eq!(corpus.concordance("cat"), vec![0, 1]);
        assert_eq!(corpus.concordance("CAT"), vec![0, 1]);
    }

    #[test]
    fn concordance_requires_whole_words() {
        let corpus = corpus(&[" concatenate ", " cats ", " cat "]);
        assert_eq!(corpus.concordance("cat"), vec![2]);
    }

    #[test]
    fn concordance_treats_word_literally() {
        let corpus = corpus(&[" a.b ", " axb ", " (x) "]);
        assert_eq!(corpus.concordance("a.b"), vec![0]);
        assert_eq!(corpus.concordance("(x)"), vec![2]);
    }

    #[test]
    fn concordance_on_unknown_word_is_empty() {
        let corpus = corpus(&[" hello world "]);
        assert!(corpus.concordance("absent").is_empty());
    }

    #[test]
    fn from_text_splits_crlf() {
        let corpus = Corpus::from_text(" one \r\n two \n");
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.line(1).map(CorpusLine::text), Some(" two "));
    }
}
