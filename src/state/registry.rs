//! Flat registry of the four pages, indexed by [`PageId`].

use super::{
    BrowserOptions, ConcordancePage, FilterPage, Page, PageId, PairsPage, RankPage,
};
use crate::model::{Corpus, RankedWord};
use std::rc::Rc;

/// Owns every page. Pages refer to each other only through [`PageId`].
#[derive(Debug)]
pub struct PageRegistry {
    rank: RankPage,
    concordance: ConcordancePage,
    filter: FilterPage,
    pairs: PairsPage,
}

impl PageRegistry {
    /// Build all four pages over the shared, read-only backing data.
    pub fn new(words: Rc<[RankedWord]>, corpus: Rc<Corpus>, options: BrowserOptions) -> Self {
        Self {
            rank: RankPage::new(&words, options.body_height),
            pairs: PairsPage::new(&corpus, options.body_height, options.window),
            concordance: ConcordancePage::new(corpus, options.body_height),
            filter: FilterPage::new(words, options.body_height, options.max_typos),
        }
    }

    /// Look up a page.
    pub fn page(&self, id: PageId) -> &dyn Page {
        match id {
            PageId::Rank => &self.rank,
            PageId::Concordance => &self.concordance,
            PageId::Filter => &self.filter,
            PageId::Pairs => &self.pairs,
        }
    }

    /// Look up a page mutably.
    pub fn page_mut(&mut self, id: PageId) -> &mut dyn Page {
        match id {
            PageId::Rank => &mut self.rank,
            PageId::Concordance => &mut self.concordance,
            PageId::Filter => &mut self.filter,
            PageId::Pairs => &mut self.pairs,
        }
    }

    /// The concordance page.
    pub fn concordance(&self) -> &ConcordancePage {
        &self.concordance
    }

    /// The filter page.
    pub fn filter(&self) -> &FilterPage {
        &self.filter
    }
}
