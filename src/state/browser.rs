//! Top-level page state machine.

use super::{InputMode, Page, PageId, PageRegistry, Rendered, Transition};
use crate::model::Key;
use crate::view::styles::PageStyles;
use tracing::debug;

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Redraw and wait for the next key.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// The active page plus the registry of all pages.
#[derive(Debug)]
pub struct Browser {
    pages: PageRegistry,
    active: PageId,
}

impl Browser {
    /// Start on the rank page.
    pub fn new(pages: PageRegistry) -> Self {
        Self {
            pages,
            active: PageId::Rank,
        }
    }

    /// Identifier of the page currently shown.
    pub fn active(&self) -> PageId {
        self.active
    }

    /// The page currently shown.
    pub fn active_page(&self) -> &dyn Page {
        self.pages.page(self.active)
    }

    /// All pages.
    pub fn pages(&self) -> &PageRegistry {
        &self.pages
    }

    /// Dispatch one key to the active page and follow any transition.
    ///
    /// Interrupt quits from anywhere; `q` quits unless a number is being
    /// typed.
    pub fn handle_key(&mut self, key: Key) -> Control {
        match key {
            Key::Interrupt => return Control::Quit,
            Key::Quit if self.active_page().input_mode() == InputMode::Navigate => {
                return Control::Quit
            }
            _ => {}
        }

        if let Some(transition) = self.pages.page_mut(self.active).handle_key(key) {
            self.switch(transition);
        }
        Control::Continue
    }

    fn switch(&mut self, transition: Transition) {
        debug!(
            from = ?self.active,
            to = ?transition.target,
            word = transition.focus.as_ref().map(|f| f.word.as_str()),
            "Page transition"
        );
        self.pages
            .page_mut(transition.target)
            .enter(transition.focus);
        self.active = transition.target;
    }

    /// Lay out the active page.
    pub fn render(&self, styles: &PageStyles) -> Rendered {
        self.active_page().render(styles)
    }
}
