//! Approximate word matching for the filter page.

use strsim::damerau_levenshtein;

/// Default number of typos tolerated by [`TypoTolerantMatcher`].
pub const DEFAULT_MAX_TYPOS: usize = 1;

/// Queries shorter than this are matched literally; a single edit on a one
/// or two letter query would match nearly every word.
const MIN_TYPO_QUERY_LEN: usize = 3;

/// Ranks candidate words against a query.
pub trait WordMatcher {
    /// Indices of the matching `candidates`, best match first.
    ///
    /// Must be deterministic. An empty result means nothing matched.
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<usize>;
}

/// How well a candidate matched; lower is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Typo,
    TypoInside,
}

/// Case-insensitive matcher tolerating a bounded number of edits.
///
/// Candidates are ranked by tier (exact, prefix, substring, whole-word typo,
/// typo inside a longer word); candidates in the same tier keep their input
/// order, which for the rank list means most frequent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypoTolerantMatcher {
    max_typos: usize,
}

impl TypoTolerantMatcher {
    /// Matcher allowing up to `max_typos` insertions, deletions,
    /// substitutions or transpositions.
    pub fn new(max_typos: usize) -> Self {
        Self { max_typos }
    }

    fn tier(&self, query: &[char], candidate: &[char]) -> Option<MatchTier> {
        if candidate == query {
            return Some(MatchTier::Exact);
        }
        if candidate.starts_with(query) {
            return Some(MatchTier::Prefix);
        }
        if candidate.windows(query.len()).any(|w| w == query) {
            return Some(MatchTier::Substring);
        }
        if self.max_typos == 0 || query.len() < MIN_TYPO_QUERY_LEN {
            return None;
        }
        if self.within_typos(query, candidate) {
            return Some(MatchTier::Typo);
        }
        if self.typo_inside(query, candidate) {
            return Some(MatchTier::TypoInside);
        }
        None
    }

    fn within_typos(&self, query: &[char], candidate: &[char]) -> bool {
        if candidate.len().abs_diff(query.len()) > self.max_typos {
            return false;
        }
        let a: String = query.iter().collect();
        let b: String = candidate.iter().collect();
        damerau_levenshtein(&a, &b) <= self.max_typos
    }

    /// Whether some slice of `candidate` is within the typo budget of `query`.
    fn typo_inside(&self, query: &[char], candidate: &[char]) -> bool {
        let shortest = query.len().saturating_sub(self.max_typos).max(1);
        let longest = query.len() + self.max_typos;
        (shortest..=longest.min(candidate.len())).any(|len| {
            candidate
                .windows(len)
                .any(|slice| self.within_typos(query, slice))
        })
    }
}

impl Default for TypoTolerantMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TYPOS)
    }
}

impl WordMatcher for TypoTolerantMatcher {
    fn rank(&self, query: &str, candidates: &[&str]) -> Vec<usize> {
        let query: Vec<char> = query.to_lowercase().chars().collect();
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(MatchTier, usize)> = candidates
            .iter()
            .enumerate()
            .filter_map(|(i, candidate)| {
                let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
                self.tier(&query, &candidate).map(|tier| (tier, i))
            })
            .collect();

        // stable: equal tiers keep candidate order
        hits.sort_by_key(|&(tier, _)| tier);
        hits.into_iter().map(|(_, i)| i).collect()
    }
}
