//! Truncation with configurable suffix.
//!
//! Cuts units to fit within a column budget, appending a suffix (e.g. "…" or
//! "...") when anything was removed. Never breaks a unit.

use crate::ansi::strip_ansi;
use crate::line::Line;
use crate::segment::{StyledChar, segment};
use crate::width::{measure, string_width};

/// Truncate units to fit within `max_width` cells.
///
/// If the units are wider than `max_width`, they are cut at a unit boundary
/// and `suffix` is appended. The suffix width is accounted for. Zero-width
/// units directly after the last kept unit stay with it.
pub fn truncate<S: Clone>(
    chars: &[StyledChar<S>],
    max_width: usize,
    suffix: &[StyledChar<S>],
) -> Line<S> {
    if max_width == 0 {
        return Line::new();
    }

    if measure(chars) <= max_width {
        return chars.iter().cloned().collect();
    }

    let suffix_width = measure(suffix);
    if suffix_width >= max_width {
        // Suffix alone fills the budget, so truncate the suffix itself.
        return take_width(suffix, max_width);
    }

    let mut line = take_width(chars, max_width - suffix_width);
    line.extend(suffix.iter().cloned());
    line
}

/// Truncate a string to `max_width` cells, appending `suffix` when cut.
///
/// Text that fits is returned unchanged, escapes included. When a cut is
/// needed, ANSI escape sequences are dropped from the result so no SGR opener
/// is left without its reset.
pub fn truncate_text(text: &str, max_width: usize, suffix: &str) -> String {
    if max_width == 0 {
        return String::new();
    }
    if string_width(text) <= max_width {
        return text.to_string();
    }
    let plain = strip_ansi(text);
    truncate(&segment(&plain), max_width, &segment(suffix)).text()
}

fn take_width<S: Clone>(chars: &[StyledChar<S>], max_width: usize) -> Line<S> {
    let mut line = Line::new();
    for c in chars {
        if line.width() + c.width > max_width {
            break;
        }
        line.push(c.clone());
    }
    line
}
