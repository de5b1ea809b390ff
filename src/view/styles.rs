//! Page colours and banner layout.
//!
//! Every page has a colour; a page's banner shows its own title between
//! the titles of the pages reached with left and right.

use crate::state::PageId;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag / `no_color` config key
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and the environment.
    ///
    /// Priority (first match wins):
    /// 1. `no_color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Explicitly enabled or disabled colors, ignoring the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PageStyles =====

/// Per-page title colours and the header label style.
///
/// - rank ("word"): cyan
/// - concordance: magenta
/// - filter: yellow
/// - pairs: blue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStyles {
    rank: Style,
    concordance: Style,
    filter: Style,
    pairs: Style,
    label: Style,
}

impl PageStyles {
    /// Styles honouring the color configuration.
    ///
    /// Labels stay italic without colors; only the colors are dropped.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let label = Style::default().add_modifier(Modifier::ITALIC);
        if config.colors_enabled() {
            Self {
                rank: Style::default().fg(Color::Cyan),
                concordance: Style::default().fg(Color::Magenta),
                filter: Style::default().fg(Color::Yellow),
                pairs: Style::default().fg(Color::Blue),
                label,
            }
        } else {
            Self {
                rank: Style::default(),
                concordance: Style::default(),
                filter: Style::default(),
                pairs: Style::default(),
                label,
            }
        }
    }

    /// Title style of a page.
    pub fn page(&self, id: PageId) -> Style {
        match id {
            PageId::Rank => self.rank,
            PageId::Concordance => self.concordance,
            PageId::Filter => self.filter,
            PageId::Pairs => self.pairs,
        }
    }

    /// Style of the single-letter header labels.
    pub fn label(&self) -> Style {
        self.label
    }

    /// Italic header label span.
    pub fn label_span(&self, text: &'static str) -> Span<'static> {
        Span::styled(text, self.label)
    }

    /// Banner for `current`, e.g. `< filter | - word - | concordances >`.
    ///
    /// `left` and `right` are the pages reached with the arrow keys; a side
    /// without a page is left empty.
    pub fn banner(&self, left: Option<PageId>, current: PageId, right: Option<PageId>) -> Line<'static> {
        let mut spans = vec![Span::raw("< ")];
        if let Some(id) = left {
            spans.push(Span::styled(id.title(), self.page(id)));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("- {} -", current.title()),
            self.page(current),
        ));
        spans.push(Span::raw(" |"));
        if let Some(id) = right {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(id.title(), self.page(id)));
        }
        spans.push(Span::raw(" >"));
        Line::from(spans)
    }
}

impl Default for PageStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }
}
