//! Formatting utilities for CJK-mixed terminal output.
//! Width math is done on *display* columns (CJK counts as two cells) and
//! ignores ANSI escapes, so colored cells still line up.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

/// Remove ANSI color/style escapes before measuring or truncating.
pub fn strip_ansi(s: &str) -> String {
    let re = Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Terminal cells `s` occupies, escapes excluded.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Left-align `s` into `width` display cells.
pub fn pad_display(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}
