//! Symbolic keys produced by the input decoder.

/// One decoded keypress.
///
/// The browser accepts no free-text input, so everything that is not a
/// navigation key, a digit, or an exit key collapses into [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Move the cursor up one row. Arrow up.
    Up,
    /// Move the cursor down one row. Arrow down.
    Down,
    /// Page-specific transition. Arrow left.
    Left,
    /// Page-specific transition. Arrow right.
    Right,
    /// Cancel numeric input, or return to the rank page.
    Escape,
    /// Commit numeric input.
    Enter,
    /// Delete the last digit of numeric input.
    Backspace,
    /// A decimal digit `0..=9`; starts or extends numeric input.
    Digit(u8),
    /// Ctrl+C. Exits from any page and any mode.
    Interrupt,
    /// `q`. Exits when not typing a number.
    Quit,
    /// Anything else. Never changes state.
    Other,
}

impl Key {
    /// The ASCII character for a digit key.
    pub fn digit_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            _ => None,
        }
    }
}
