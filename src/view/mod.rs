//! Terminal session (impure shell).
//!
//! Owns the terminal, feeds decoded keys to the [`Browser`] and redraws its
//! fixed-height region after every key. The region is an inline ratatui
//! viewport, so only those lines are repainted and the rest of the
//! scrollback is left alone.

pub mod styles;

pub use styles::{ColorConfig, PageStyles};

use crate::input::KeyReader;
use crate::model::{InputError, Key};
use crate::source::{self, InputPaths};
use crate::state::{Browser, BrowserOptions, Control, PageRegistry};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Position,
    widgets::Paragraph,
    Terminal, TerminalOptions,
};
use std::io::{self, Read, Stdout};
use std::rc::Rc;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input artifact error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Raw mode for as long as the guard lives.
///
/// Dropping it shows the cursor and restores cooked mode on every exit
/// path, including errors and panics unwinding through the event loop.
#[derive(Debug)]
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show) {
            warn!(error = %e, "Failed to show cursor");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to leave raw mode");
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct BrowserApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    browser: Browser,
    styles: PageStyles,
}

impl BrowserApp<CrosstermBackend<Stdout>> {
    /// Reserve an inline region of `height` lines below the shell prompt.
    ///
    /// Raw mode must already be on so the backend can query the cursor.
    pub fn new(browser: Browser, styles: PageStyles, height: u16) -> Result<Self, TuiError> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: ratatui::Viewport::Inline(height),
            },
        )?;
        Ok(Self {
            terminal,
            browser,
            styles,
        })
    }
}

impl<B> BrowserApp<B>
where
    B: Backend,
{
    /// Run the event loop until quit or end of input.
    ///
    /// Draws once up front, then once after every key.
    pub fn run<R: Read>(&mut self, keys: &mut KeyReader<R>) -> Result<(), TuiError> {
        self.draw()?;

        while let Some(key) = keys.next_key()? {
            if self.handle_key(key) == Control::Quit {
                debug!("Quit requested");
                return Ok(());
            }
            self.draw()?;
        }

        debug!("Input closed");
        Ok(())
    }

    /// Run, then blank the region on a clean exit.
    ///
    /// A failed run leaves the last frame on screen and returns the run error
    /// untouched.
    pub fn run_session<R: Read>(&mut self, keys: &mut KeyReader<R>) -> Result<(), TuiError> {
        self.run(keys)?;
        self.clear()
    }

    fn handle_key(&mut self, key: Key) -> Control {
        trace!(?key, page = ?self.browser.active(), "Key");
        self.browser.handle_key(key)
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let rendered = self.browser.render(&self.styles);
        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(Paragraph::new(rendered.lines), area);
            if let Some(cursor) = rendered.cursor {
                frame.set_cursor_position(Position::new(area.x + cursor.x, area.y + cursor.y));
            }
        })?;
        Ok(())
    }

    /// Blank the region so nothing of the browser stays on screen.
    fn clear(&mut self) -> Result<(), TuiError> {
        self.terminal.clear()?;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B> BrowserApp<B>
where
    B: Backend,
{
    /// Create BrowserApp for testing over any backend.
    pub(crate) fn new_for_test(terminal: Terminal<B>, browser: Browser, styles: PageStyles) -> Self {
        Self {
            terminal,
            browser,
            styles,
        }
    }

    pub(crate) fn browser(&self) -> &Browser {
        &self.browser
    }

    pub(crate) fn handle_key_test(&mut self, key: Key) -> Control {
        self.handle_key(key)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Load the inputs and run the browser on stdin/stdout.
///
/// This is the main entry point for the TUI. It loads both artifacts before
/// touching the terminal, so load failures are reported on a sane terminal.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_inputs(
    paths: &InputPaths,
    options: BrowserOptions,
    styles: PageStyles,
) -> Result<(), TuiError> {
    let inputs = source::load_inputs(paths)?;
    info!(
        words = inputs.words.len(),
        lines = inputs.corpus.len(),
        "Inputs loaded"
    );

    let pages = PageRegistry::new(Rc::from(inputs.words), Rc::new(inputs.corpus), options);
    let browser = Browser::new(pages);
    let height = u16::try_from(options.region_height()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "browser region taller than the terminal can address",
        )
    })?;

    let _guard = TerminalGuard::acquire()?;
    let mut app = BrowserApp::new(browser, styles, height)?;
    let mut keys = KeyReader::new(io::stdin());

    app.run_session(&mut keys)
}
