//! Token sanitation shared with the upstream ranking stage.
//!
//! The rank file was produced by stripping punctuation from the corpus and
//! splitting on whitespace. Co-occurrence windows must be built from the same
//! tokens, otherwise a ranked word would never match its own corpus tokens.
//!
//! Rules, applied in order:
//!
//! 1. `"“”´`#€£$%;,*+=!?^_~|{}()[]/\` and newlines become spaces; `’` becomes `'`.
//! 2. A space is inserted after every `>` that is followed by a character.
//! 3. `:` is kept only inside custom emotes (`<:name:123>`, `<a:name:123>`).
//! 4. `@` is kept only in user pings (`<@123>`), `&` only in role pings (`<@&123>`).
//! 5. `'` is kept only between two ASCII letters.
//! 6. Runs of `.` are kept only between two digits.
//! 7. `©`, `®`, general punctuation through CJK symbols, and emoji are split
//!    off into their own tokens.

/// Characters that always become whitespace.
const STRIPPED: &[char] = &[
    '"', '“', '”', '´', '`', '#', '€', '£', '$', '%', ';', ',', '*', '+', '=', '!', '?', '^', '_',
    '~', '|', '{', '}', '(', ')', '[', ']', '/', '\\', '\r', '\n',
];

/// Apply the sanitation rules to `text`.
///
/// # Examples
///
/// ```
/// use corpus_browser::model::sanitize::sanitize;
///
/// assert_eq!(sanitize("wait... what?!").split_whitespace().collect::<Vec<_>>(), ["wait", "what"]);
/// assert_eq!(sanitize("v1.2").trim(), "v1.2");
/// ```
pub fn sanitize(text: &str) -> String {
    let mut chars: Vec<char> = text
        .chars()
        .map(|c| match c {
            c if STRIPPED.contains(&c) => ' ',
            '’' => '\'',
            c => c,
        })
        .collect();

    chars = space_after_angle(&chars);
    strip_colons(&mut chars);
    strip_pings(&mut chars);
    strip_apostrophes(&mut chars);
    strip_dots(&mut chars);

    separate_symbols(&chars).into_iter().collect()
}

/// Lowercase, sanitize and split a line into tokens.
///
/// ```
/// use corpus_browser::model::sanitize::tokenize;
///
/// assert_eq!(tokenize(" The cat, the HAT! "), ["the", "cat", "the", "hat"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    sanitize(&line.to_lowercase())
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

fn space_after_angle(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        if c == '>' && i + 1 < chars.len() {
            out.push(' ');
        }
    }
    out
}

fn strip_colons(chars: &mut [char]) {
    for i in 0..chars.len() {
        if chars[i] != ':' {
            continue;
        }
        let emote_open = i > 0 && matches!(chars[i - 1], '<' | 'a');
        let mut j = i + 1;
        while j < chars.len() && chars[j].is_ascii_digit() {
            j += 1;
        }
        let emote_close = j >= chars.len() || chars[j] == '>';
        if !emote_open && !emote_close {
            chars[i] = ' ';
        }
    }
}

fn strip_pings(chars: &mut [char]) {
    for i in 1..chars.len() {
        let prev = chars[i - 1];
        match chars[i] {
            '@' if prev != '<' => chars[i] = ' ',
            '&' if prev != '@' => chars[i] = ' ',
            _ => {}
        }
    }
}

fn strip_apostrophes(chars: &mut [char]) {
    for i in 0..chars.len() {
        if chars[i] != '\'' {
            continue;
        }
        let letter_before = i > 0 && chars[i - 1].is_ascii_alphabetic();
        let letter_after = chars.get(i + 1).is_some_and(char::is_ascii_alphabetic);
        if !(letter_before && letter_after) {
            chars[i] = ' ';
        }
    }
}

fn strip_dots(chars: &mut [char]) {
    let mut i = 0;
    while i < chars.len() {
        if chars[i] != '.' {
            i += 1;
            continue;
        }
        let start = i;
        while i < chars.len() && chars[i] == '.' {
            i += 1;
        }
        let digit_before = start > 0 && chars[start - 1].is_ascii_digit();
        let digit_after = chars.get(i).is_some_and(char::is_ascii_digit);
        if !(digit_before && digit_after) {
            chars[start..i].fill(' ');
        }
    }
}

fn separate_symbols(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    for &c in chars {
        if is_symbol(c) {
            out.extend([' ', c, ' ']);
        } else {
            out.push(c);
        }
    }
    out
}

fn is_symbol(c: char) -> bool {
    matches!(c, '\u{00a9}' | '\u{00ae}' | '\u{2000}'..='\u{3300}' | '\u{1f000}'..='\u{1fbff}')
}
