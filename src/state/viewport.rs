//! Generic cursor and fixed-height window over a list of items.
//!
//! Every page composes one `Viewport` and delegates cursor movement,
//! numeric quick-jump and row layout to it. The page only decides what the
//! items are, how one item looks, and where the unhandled keys lead.

use crate::model::Key;
use ratatui::layout::Position;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Rows shown below the current item unless configured otherwise.
pub const DEFAULT_BODY_HEIGHT: usize = 10;

/// Banner, header, current item and separator rule.
pub const CHROME_HEIGHT: usize = 4;

/// Width of the separator rule under the current item.
const RULE_WIDTH: usize = 10;

/// Whether keys move the cursor or edit a jump target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Arrow keys move the cursor; a digit starts numeric input.
    Navigate,
    /// Digits accumulate into a jump target.
    Numeric,
}

/// Result of offering a key to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The viewport used the key.
    Consumed,
    /// The key means nothing to the viewport; the page may act on it.
    Unhandled(Key),
}

/// The fixed-height text of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    /// Exactly [`CHROME_HEIGHT`] + body height lines.
    pub lines: Vec<Line<'static>>,
    /// Where to show the terminal cursor, relative to the region's top-left.
    /// `None` hides it.
    pub cursor: Option<Position>,
}

/// Cursor, numeric input buffer and items of one page.
#[derive(Debug, Clone)]
pub struct Viewport<T> {
    items: Vec<T>,
    cursor: usize,
    numeric: Option<String>,
    body_height: usize,
}

impl<T> Viewport<T> {
    /// Viewport over `items` with the cursor on the first one.
    pub fn new(items: Vec<T>, body_height: usize) -> Self {
        Self {
            items,
            cursor: 0,
            numeric: None,
            body_height,
        }
    }

    /// Replace every item, reset the cursor and leave numeric mode.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.cursor = 0;
        self.numeric = None;
    }

    /// All items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cursor position; always 0 when empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The item under the cursor.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.cursor)
    }

    /// Total rendered height in lines.
    pub fn height(&self) -> usize {
        CHROME_HEIGHT + self.body_height
    }

    /// Current input mode.
    pub fn mode(&self) -> InputMode {
        if self.numeric.is_some() {
            InputMode::Numeric
        } else {
            InputMode::Navigate
        }
    }

    /// The numeric input typed so far, if in numeric mode.
    pub fn numeric_buffer(&self) -> Option<&str> {
        self.numeric.as_deref()
    }

    /// Move by `delta` rows, clamping at both ends.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(self.items.len() - 1);
    }

    /// Start numeric input with its first character.
    pub fn enter_numeric(&mut self, first: char) {
        self.numeric = Some(first.to_string());
    }

    /// Extend numeric input. Ignored outside numeric mode.
    pub fn append_digit(&mut self, digit: char) {
        if let Some(buffer) = self.numeric.as_mut() {
            buffer.push(digit);
        }
    }

    /// Drop the last typed character; no-op on an empty buffer.
    pub fn backspace_digit(&mut self) {
        if let Some(buffer) = self.numeric.as_mut() {
            buffer.pop();
        }
    }

    /// Jump to the typed index and return to navigate mode.
    ///
    /// Out-of-range values clamp to the last item. An empty or non-numeric
    /// buffer leaves the cursor where it was.
    pub fn commit_numeric(&mut self) {
        if let Some(target) = self.jump_target() {
            self.cursor = target;
        }
        self.numeric = None;
    }

    /// Discard numeric input and return to navigate mode.
    pub fn cancel_numeric(&mut self) {
        self.numeric = None;
    }

    /// The clamped index the numeric buffer points at, if it parses.
    fn jump_target(&self) -> Option<usize> {
        let buffer = self.numeric.as_deref()?;
        if self.items.is_empty() || buffer.is_empty() || !buffer.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        // all digits: only overflow can fail, and that is out of range too
        let value = buffer.parse::<usize>().unwrap_or(usize::MAX);
        Some(value.min(self.items.len() - 1))
    }

    /// Apply a key according to the current mode.
    ///
    /// In navigate mode only up, down and digits are consumed. In numeric
    /// mode every key is consumed: up and down commit and then move,
    /// enter commits, escape cancels, and the rest is ignored.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match self.mode() {
            InputMode::Navigate => match key {
                Key::Up => self.move_cursor(-1),
                Key::Down => self.move_cursor(1),
                Key::Digit(_) => {
                    if let Some(c) = key.digit_char() {
                        self.enter_numeric(c);
                    }
                }
                other => return KeyOutcome::Unhandled(other),
            },
            InputMode::Numeric => match key {
                Key::Digit(_) => {
                    if let Some(c) = key.digit_char() {
                        self.append_digit(c);
                    }
                }
                Key::Backspace => self.backspace_digit(),
                Key::Enter => self.commit_numeric(),
                Key::Escape => self.cancel_numeric(),
                Key::Up => {
                    self.commit_numeric();
                    self.move_cursor(-1);
                }
                Key::Down => {
                    self.commit_numeric();
                    self.move_cursor(1);
                }
                _ => {}
            },
        }
        KeyOutcome::Consumed
    }

    /// Lay out the fixed-height region.
    ///
    /// Lines, top to bottom: `banner`, the header (`label` followed by the
    /// cursor index, or the numeric buffer while typing), the focused item,
    /// a rule, then the next `body_height` items. Missing items are blank
    /// lines, so the line count never changes. While typing, the focused
    /// item previews the jump target and the terminal cursor sits after the
    /// buffer.
    pub fn render<F>(&self, banner: Line<'static>, label: Vec<Span<'static>>, format: F) -> Rendered
    where
        F: Fn(&T) -> Line<'static>,
    {
        let label_width: usize = label.iter().map(|span| span.content.width()).sum();
        let mut header = label;

        let (focus, cursor) = match self.numeric.as_deref() {
            Some(buffer) => {
                header.push(Span::raw(buffer.to_string()));
                let x = label_width + buffer.width();
                let position = Position::new(saturating_u16(x), 1);
                (self.jump_target().unwrap_or(self.cursor), Some(position))
            }
            None => {
                header.push(Span::raw(self.cursor.to_string()));
                (self.cursor, None)
            }
        };

        let row = |index: usize| self.items.get(index).map(&format).unwrap_or_default();

        let mut lines = Vec::with_capacity(self.height());
        lines.push(banner);
        lines.push(Line::from(header));
        lines.push(row(focus));
        lines.push(Line::raw("-".repeat(RULE_WIDTH)));
        lines.extend((1..=self.body_height).map(|offset| row(focus + offset)));

        Rendered { lines, cursor }
    }
}

fn saturating_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(len: usize) -> Viewport<usize> {
        Viewport::new((0..len).collect(), DEFAULT_BODY_HEIGHT)
    }

    fn with_buffer(len: usize, buffer: &str) -> Viewport<usize> {
        let mut vp = viewport(len);
        let mut chars = buffer.chars();
        vp.enter_numeric(chars.next().unwrap_or('0'));
        if buffer.is_empty() {
            vp.backspace_digit();
        }
        for c in chars {
            vp.append_digit(c);
        }
        vp
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn render(vp: &Viewport<usize>) -> Rendered {
        vp.render(Line::raw("banner"), vec![Span::raw("w ")], |i| {
            Line::raw(format!("item {}", i))
        })
    }

    // ===== Cursor movement =====

    #[test]
    fn move_cursor_clamps_at_bottom() {
        let mut vp = viewport(3);
        vp.move_cursor(10);
        assert_eq!(vp.cursor(), 2);
    }

    #[test]
    fn move_cursor_clamps_at_top() {
        let mut vp = viewport(3);
        vp.move_cursor(1);
        vp.move_cursor(-5);
        assert_eq!(vp.cursor(), 0);
    }

    #[test]
    fn move_cursor_on_empty_is_noop() {
        let mut vp = viewport(0);
        vp.move_cursor(1);
        assert_eq!(vp.cursor(), 0);
        assert!(vp.current().is_none());
    }

    // ===== Numeric jump =====

    #[test]
    fn commit_jumps_to_index() {
        let mut vp = with_buffer(20, "7");
        vp.commit_numeric();
        assert_eq!(vp.cursor(), 7);
        assert_eq!(vp.mode(), InputMode::Navigate);
    }

    #[test]
    fn commit_clamps_out_of_range() {
        let mut vp = with_buffer(20, "999");
        vp.commit_numeric();
        assert_eq!(vp.cursor(), 19);
    }

    #[test]
    fn commit_clamps_overflowing_number() {
        let mut vp = with_buffer(20, "99999999999999999999999999");
        vp.commit_numeric();
        assert_eq!(vp.cursor(), 19);
    }

    #[test]
    fn commit_ignores_empty_buffer() {
        let mut vp = viewport(20);
        vp.move_cursor(4);
        vp.enter_numeric('1');
        vp.backspace_digit();
        assert_eq!(vp.numeric_buffer(), Some(""));
        vp.commit_numeric();
        assert_eq!(vp.cursor(), 4);
        assert_eq!(vp.mode(), InputMode::Navigate);
    }

    #[test]
    fn commit_ignores_malformed_buffer() {
        let mut vp = viewport(20);
        vp.move_cursor(4);
        vp.enter_numeric('a');
        vp.append_digit('b');
        vp.append_digit('c');
        vp.commit_numeric();
        assert_eq!(vp.cursor(), 4);
        assert_eq!(vp.mode(), InputMode::Navigate);
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut vp = with_buffer(20, "");
        vp.backspace_digit();
        assert_eq!(vp.numeric_buffer(), Some(""));
        assert_eq!(vp.mode(), InputMode::Numeric);
    }

    #[test]
    fn cancel_discards_buffer() {
        let mut vp = with_buffer(20, "12");
        vp.cancel_numeric();
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.mode(), InputMode::Navigate);
    }

    // ===== Key handling =====

    #[test]
    fn navigate_mode_leaves_transitions_to_page() {
        let mut vp = viewport(5);
        for key in [Key::Left, Key::Right, Key::Escape, Key::Enter, Key::Other, Key::Quit] {
            assert_eq!(vp.handle_key(key), KeyOutcome::Unhandled(key));
        }
    }

    #[test]
    fn digits_then_enter_jump() {
        let mut vp = viewport(50);
        vp.handle_key(Key::Digit(1));
        vp.handle_key(Key::Digit(2));
        assert_eq!(vp.numeric_buffer(), Some("12"));
        vp.handle_key(Key::Enter);
        assert_eq!(vp.cursor(), 12);
    }

    #[test]
    fn numeric_mode_consumes_everything() {
        let mut vp = viewport(50);
        vp.handle_key(Key::Digit(3));
        for key in [Key::Left, Key::Right, Key::Other, Key::Quit] {
            assert_eq!(vp.handle_key(key), KeyOutcome::Consumed);
        }
        assert_eq!(vp.numeric_buffer(), Some("3"));
    }

    #[test]
    fn down_in_numeric_mode_commits_then_moves() {
        let mut vp = viewport(50);
        vp.handle_key(Key::Digit(9));
        vp.handle_key(Key::Down);
        assert_eq!(vp.cursor(), 10);
        assert_eq!(vp.mode(), InputMode::Navigate);
    }

    #[test]
    fn escape_in_numeric_mode_cancels() {
        let mut vp = viewport(50);
        vp.handle_key(Key::Down);
        vp.handle_key(Key::Digit(9));
        vp.handle_key(Key::Escape);
        assert_eq!(vp.cursor(), 1);
        assert_eq!(vp.mode(), InputMode::Navigate);
    }

    #[test]
    fn set_items_resets_cursor_and_mode() {
        let mut vp = viewport(10);
        vp.move_cursor(5);
        vp.enter_numeric('2');
        vp.set_items(vec![1, 2]);
        assert_eq!(vp.cursor(), 0);
        assert_eq!(vp.mode(), InputMode::Navigate);
        assert_eq!(vp.items(), &[1, 2]);
    }

    // ===== Rendering =====

    #[test]
    fn render_has_fixed_height() {
        for len in [0, 1, 5, 30] {
            let vp = viewport(len);
            assert_eq!(render(&vp).lines.len(), CHROME_HEIGHT + DEFAULT_BODY_HEIGHT);
        }
    }

    #[test]
    fn render_lays_out_header_focus_rule_and_body() {
        let mut vp = viewport(30);
        vp.move_cursor(3);
        let rendered = render(&vp);

        assert_eq!(text(&rendered.lines[0]), "banner");
        assert_eq!(text(&rendered.lines[1]), "w 3");
        assert_eq!(text(&rendered.lines[2]), "item 3");
        assert_eq!(text(&rendered.lines[3]), "----------");
        assert_eq!(text(&rendered.lines[4]), "item 4");
        assert_eq!(text(&rendered.lines[13]), "item 13");
        assert_eq!(rendered.cursor, None);
    }

    #[test]
    fn render_blanks_rows_past_the_end() {
        let mut vp = viewport(3);
        vp.move_cursor(1);
        let rendered = render(&vp);
        assert_eq!(text(&rendered.lines[4]), "item 2");
        assert_eq!(text(&rendered.lines[5]), "");
        assert_eq!(text(&rendered.lines[13]), "");
    }

    #[test]
    fn render_numeric_previews_target_and_places_cursor() {
        let vp = with_buffer(30, "25");
        let rendered = render(&vp);
        assert_eq!(text(&rendered.lines[1]), "w 25");
        assert_eq!(text(&rendered.lines[2]), "item 25");
        assert_eq!(rendered.cursor, Some(Position::new(4, 1)));
    }

    #[test]
    fn render_numeric_with_empty_buffer_keeps_cursor_item() {
        let vp = with_buffer(30, "");
        let rendered = render(&vp);
        assert_eq!(text(&rendered.lines[1]), "w ");
        assert_eq!(text(&rendered.lines[2]), "item 0");
        assert_eq!(rendered.cursor, Some(Position::new(2, 1)));
    }

    #[test]
    fn render_respects_custom_body_height() {
        let vp: Viewport<usize> = Viewport::new((0..100).collect(), 3);
        assert_eq!(render(&vp).lines.len(), CHROME_HEIGHT + 3);
        assert_eq!(vp.height(), 7);
    }
}
