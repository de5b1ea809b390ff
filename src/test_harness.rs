//! Acceptance Test Harness for TUI testing
//!
//! Wraps `BrowserApp<TestBackend>` with methods for simulating a user at the
//! keyboard and reading back what the terminal shows.

use crate::input::InputDecoder;
use crate::model::{parse_rank_lines, Corpus, Key};
use crate::source::{self, InputPaths, CORPUS_FILE_NAME, RANK_FILE_NAME};
use crate::state::{Browser, BrowserOptions, Control, PageId, PageRegistry};
use crate::view::{BrowserApp, PageStyles, TuiError};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::rc::Rc;

/// Width of the test terminal.
const WIDTH: u16 = 80;

/// Convert a ratatui buffer to one string, one line per row, trailing
/// whitespace trimmed. Blank rows are kept so the height is visible.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

/// Path of the bundled init directory fixture.
pub(crate) fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("init")
}

/// Test harness for acceptance testing
pub struct BrowserHarness {
    app: BrowserApp<TestBackend>,
    decoder: InputDecoder,
    running: bool,
}

impl BrowserHarness {
    /// Browser over in-memory rank and corpus text.
    pub fn from_texts(rank: &str, corpus: &str, options: BrowserOptions) -> Self {
        let words = parse_rank_lines(rank);
        let corpus = Corpus::from_text(corpus);
        Self::build(words, corpus, options)
    }

    /// Browser over the bundled fixture directory.
    pub fn from_fixture(options: BrowserOptions) -> Result<Self, TuiError> {
        let dir = fixture_dir();
        let inputs = source::load_inputs(&InputPaths {
            rank: dir.join(RANK_FILE_NAME),
            corpus: dir.join(CORPUS_FILE_NAME),
        })?;
        Ok(Self::build(inputs.words, inputs.corpus, options))
    }

    fn build(words: Vec<crate::model::RankedWord>, corpus: Corpus, options: BrowserOptions) -> Self {
        let height = options.region_height() as u16;
        let terminal = Terminal::new(TestBackend::new(WIDTH, height))
            .expect("TestBackend terminal never fails");
        let browser = Browser::new(PageRegistry::new(
            Rc::from(words),
            Rc::new(corpus),
            options,
        ));
        Self {
            app: BrowserApp::new_for_test(terminal, browser, PageStyles::default()),
            decoder: InputDecoder::default(),
            running: true,
        }
    }

    /// Send a single key. Returns `true` if the browser quit.
    pub fn send_key(&mut self, key: Key) -> bool {
        if !self.running {
            return true;
        }
        if self.app.handle_key_test(key) == Control::Quit {
            self.running = false;
        }
        !self.running
    }

    /// Send keys in order, stopping at quit.
    pub fn send_keys(&mut self, keys: &[Key]) {
        for &key in keys {
            if self.send_key(key) {
                break;
            }
        }
    }

    /// Decode raw terminal bytes, one chunk per keypress, and send them.
    pub fn send_raw(&mut self, chunks: &[&[u8]]) {
        for chunk in chunks {
            let key = self.decoder.decode(chunk);
            if self.send_key(key) {
                break;
            }
        }
    }

    /// Type a number as digit keys.
    pub fn type_number(&mut self, n: usize) {
        for c in n.to_string().bytes() {
            self.send_key(Key::Digit(c - b'0'));
        }
    }

    /// Render and return the terminal contents.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().expect("TestBackend draw never fails");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Render and return one row.
    pub fn row(&mut self, y: usize) -> String {
        self.render_to_string()
            .split('\n')
            .nth(y)
            .unwrap_or_default()
            .to_string()
    }

    /// The page on screen.
    pub fn active(&self) -> PageId {
        self.app.browser().active()
    }

    /// Cursor of the page on screen.
    pub fn cursor(&self) -> usize {
        self.app.browser().active_page().cursor()
    }

    /// Items listed by the page on screen.
    pub fn len(&self) -> usize {
        self.app.browser().active_page().len()
    }

    /// Whether the browser is still running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The wrapped browser.
    pub fn browser(&self) -> &Browser {
        self.app.browser()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_to_string_keeps_blank_rows() {
        let mut harness = BrowserHarness::from_texts("1 \"a\"\n", " a \n", BrowserOptions::default());
        let screen = harness.render_to_string();
        assert_eq!(screen.split('\n').count(), 14);
    }

    #[test]
    fn fixture_loads() {
        let harness = BrowserHarness::from_fixture(BrowserOptions::default()).unwrap();
        assert!(harness.len() > 10);
        assert_eq!(harness.active(), PageId::Rank);
    }

    #[test]
    fn send_key_after_quit_is_ignored() {
        let mut harness = BrowserHarness::from_texts("1 \"a\"\n", " a \n", BrowserOptions::default());
        assert!(harness.send_key(Key::Quit));
        assert!(!harness.is_running());
        assert!(harness.send_key(Key::Right));
        assert_eq!(harness.active(), PageId::Rank);
    }
}
