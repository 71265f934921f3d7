//! Greedy line wrapping at unit boundaries.
//!
//! Any unit boundary is a legal break; there is no word segmentation. That
//! keeps scripts without spaces (Thai, Lao, Khmer, CJK) wrapping correctly
//! and guarantees a base and its marks always land on the same line.
//!
//! A unit wider than the budget is placed alone on its own line rather than
//! dropped. Concatenating every line's text always reproduces the input.

use tracing::{debug, trace};

use crate::error::{Result, check_width};
use crate::line::Line;
use crate::options::WrapOptions;
use crate::segment::{StyledChar, segment};

/// Wrap units into lines no wider than `max_width`, with hard breaks on.
///
/// Unlike a purely greedy fill, a line feed unit always closes its line, so
/// `"ab\n"` wraps to two lines; use [`wrap_with`] and
/// [`WrapOptions::with_hard_breaks`] to treat line feeds as ordinary units.
pub fn wrap<S>(
    chars: impl IntoIterator<Item = StyledChar<S>>,
    max_width: usize,
) -> Result<Vec<Line<S>>> {
    wrap_with(chars, max_width, &WrapOptions::default())
}

/// Wrap units into lines no wider than `max_width`.
///
/// Returns exactly one empty line for empty input.
pub fn wrap_with<S>(
    chars: impl IntoIterator<Item = StyledChar<S>>,
    max_width: usize,
    options: &WrapOptions,
) -> Result<Vec<Line<S>>> {
    check_width(max_width)?;

    let mut lines: Vec<Line<S>> = Vec::new();
    let mut current = Line::new();

    for c in chars {
        if current.width() + c.width > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        if c.width > max_width {
            debug!(
                unit = c.as_str(),
                width = c.width,
                max_width,
                "unit wider than line, placing it alone"
            );
        }

        let hard_break = options.hard_breaks && c.is_line_feed();
        current.push(c);
        if hard_break {
            lines.push(std::mem::take(&mut current));
        }
    }

    lines.push(current);
    trace!(lines = lines.len(), max_width, "wrapped units");
    Ok(lines)
}

/// Number of lines [`wrap`] would produce, without building them.
pub fn line_count<S>(chars: &[StyledChar<S>], max_width: usize) -> Result<usize> {
    line_count_with(chars, max_width, &WrapOptions::default())
}

/// Number of lines [`wrap_with`] would produce, without building them.
pub fn line_count_with<S>(
    chars: &[StyledChar<S>],
    max_width: usize,
    options: &WrapOptions,
) -> Result<usize> {
    check_width(max_width)?;

    let mut lines: usize = 1;
    let mut current_width: usize = 0;
    let mut current_empty = true;

    for c in chars {
        if current_width + c.width > max_width && !current_empty {
            lines += 1;
            current_width = 0;
        }

        current_width += c.width;
        current_empty = false;

        if options.hard_breaks && c.is_line_feed() {
            lines += 1;
            current_width = 0;
            current_empty = true;
        }
    }

    Ok(lines)
}

/// Wrap a plain string and return each line's text.
///
/// The line feed that closes a hard-broken line is not included in its text.
pub fn wrap_text(text: &str, max_width: usize) -> Result<Vec<String>> {
    let lines = wrap(segment(text), max_width)?;
    Ok(lines
        .iter()
        .map(|line| {
            let text = line.text();
            match text.strip_suffix("\r\n").or_else(|| text.strip_suffix('\n')) {
                Some(stripped) => stripped.to_string(),
                None => text,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TextError;
    use crate::segment::reconstruct;
    use crate::types::Style;
    use crate::width::measure;

    fn texts<S>(lines: &[Line<S>]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    // ── wrap ──

    #[test]
    fn wrap_empty_gives_one_empty_line() {
        let lines = wrap(segment(""), 10).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
        assert_eq!(lines[0].width(), 0);
    }

    #[test]
    fn wrap_fits() {
        let lines = wrap(segment("hello"), 10).unwrap();
        assert_eq!(texts(&lines), vec!["hello"]);
    }

    #[test]
    fn wrap_exact_fit() {
        let lines = wrap(segment("hello"), 5).unwrap();
        assert_eq!(texts(&lines), vec!["hello"]);
    }

    #[test]
    fn wrap_break_mid_word() {
        let lines = wrap(segment("abcdef"), 4).unwrap();
        assert_eq!(texts(&lines), vec!["abcd", "ef"]);
    }

    #[test]
    fn wrap_width_zero_rejected() {
        assert_eq!(
            wrap(segment("hello"), 0),
            Err(TextError::InvalidWidth { max_width: 0 })
        );
    }

    #[test]
    fn wrap_cjk() {
        // Each CJK char is 2 cells. Width 5 fits 2 chars (4 cells), wraps on 3rd.
        let lines = wrap(segment("你好世界"), 5).unwrap();
        assert_eq!(texts(&lines), vec!["你好", "世界"]);
    }

    #[test]
    fn wrap_mixed_ascii_cjk() {
        let lines = wrap(segment("hi你好"), 5).unwrap();
        assert_eq!(texts(&lines), vec!["hi你", "好"]);
    }

    #[test]
    fn wrap_never_splits_marks() {
        // "e" + acute sits exactly at the boundary.
        let lines = wrap(segment("abce\u{0301}fg"), 4).unwrap();
        assert_eq!(texts(&lines), vec!["abce\u{0301}", "fg"]);
    }

    #[test]
    fn wrap_thai_six_syllables() {
        let text = "พี่".repeat(6);
        let lines = wrap(segment(&text), 10).unwrap();
        assert!(lines.iter().all(|line| measure(line.chars()) <= 10));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width(), 6);
    }

    #[test]
    fn wrap_thai_twelve_syllables() {
        let text = "พี่".repeat(12);
        let lines = wrap(segment(&text), 10).unwrap();
        assert!(lines.len() >= 2);
        assert!(lines.iter().all(|line| measure(line.chars()) <= 10));
        assert_eq!(texts(&lines), vec!["พี่".repeat(10), "พี่".repeat(2)]);
    }

    #[test]
    fn wrap_forced_overflow() {
        let lines = wrap(segment("a你b"), 1).unwrap();
        assert_eq!(texts(&lines), vec!["a", "你", "b"]);
        assert_eq!(lines[1].width(), 2);
    }

    #[test]
    fn wrap_overwide_unit_stands_alone() {
        let lines = wrap(segment("你\u{0301}你"), 1).unwrap();
        assert_eq!(texts(&lines), vec!["你\u{0301}", "你"]);
    }

    #[test]
    fn wrap_leading_mark() {
        let lines = wrap(segment("\u{0301}abc"), 2).unwrap();
        assert_eq!(texts(&lines), vec!["\u{0301}ab", "c"]);
    }

    #[test]
    fn wrap_round_trip() {
        let text = "Hello café สวัสดี مرحبا 你好世界 e\u{0301}\u{0302}";
        for width in 1..=30 {
            let lines = wrap(segment(text), width).unwrap();
            let joined: String = lines.iter().map(Line::text).collect();
            assert_eq!(joined, text, "width {width}");
        }
    }

    #[test]
    fn wrap_keeps_styles() {
        use crate::style_map::StyleSpan;
        use crate::types::Attr;
        let bold = Style::new().attrs(Attr::BOLD);
        let chars = crate::segment::segment_styled("abcd", &[StyleSpan::new(2..4, bold)]);
        let lines = wrap(chars, 2).unwrap();
        assert!(lines[0].iter().all(|c| c.style == Style::new()));
        assert!(lines[1].iter().all(|c| c.style == bold));
    }

    // ── hard breaks ──

    #[test]
    fn wrap_newlines() {
        let lines = wrap(segment("a\nb\nc"), 10).unwrap();
        assert_eq!(texts(&lines), vec!["a\n", "b\n", "c"]);
    }

    #[test]
    fn wrap_empty_newline() {
        let lines = wrap(segment("a\n\nb"), 10).unwrap();
        assert_eq!(texts(&lines), vec!["a\n", "\n", "b"]);
    }

    #[test]
    fn wrap_trailing_newline() {
        let lines = wrap(segment("ab\n"), 10).unwrap();
        assert_eq!(texts(&lines), vec!["ab\n", ""]);
    }

    #[test]
    fn wrap_newline_at_boundary() {
        // The zero-width line feed still fits on a full line.
        let lines = wrap(segment("abcd\nef"), 4).unwrap();
        assert_eq!(texts(&lines), vec!["abcd\n", "ef"]);
    }

    #[test]
    fn wrap_trailing_newline_hard_vs_greedy() {
        assert_eq!(wrap(segment("ab\n"), 10).unwrap().len(), 2);
        let greedy = WrapOptions::new().with_hard_breaks(false);
        assert_eq!(wrap_with(segment("ab\n"), 10, &greedy).unwrap().len(), 1);
    }

    #[test]
    fn wrap_without_hard_breaks() {
        let opts = WrapOptions::new().with_hard_breaks(false);
        let lines = wrap_with(segment("a\nb"), 10, &opts).unwrap();
        assert_eq!(texts(&lines), vec!["a\nb"]);
        assert_eq!(lines[0].width(), 2);
    }

    // ── line_count ──

    #[test]
    fn line_count_matches_wrap() {
        let samples = [
            "",
            "hello",
            "abcdef",
            "a\nb\nc",
            "a\n\nb",
            "ab\n",
            "abcd\nef",
            "你好世界",
            "a你b",
            "\u{0301}abc",
            "พี่พี่พี่พี่พี่พี่พี่พี่พี่พี่พี่พี่",
        ];
        for text in samples {
            let chars = segment(text);
            for width in 1..=6 {
                let wrapped = wrap(chars.clone(), width).unwrap().len();
                assert_eq!(line_count(&chars, width).unwrap(), wrapped, "{text:?} @ {width}");
            }
        }
    }

    #[test]
    fn line_count_rejects_zero() {
        assert!(line_count(&segment("x"), 0).is_err());
    }

    // ── wrap_text ──

    #[test]
    fn wrap_text_strips_line_feeds() {
        assert_eq!(wrap_text("abcdef\nghi", 4).unwrap(), vec!["abcd", "ef", "ghi"]);
        assert_eq!(wrap_text("a\r\nb", 4).unwrap(), vec!["a", "b"]);
        assert_eq!(wrap_text("", 4).unwrap(), vec![""]);
    }

    #[test]
    fn wrap_text_round_trip_units() {
        let text = "สวัสดีครับ";
        let chars = segment(text);
        let lines = wrap(chars.clone(), 3).unwrap();
        let flattened: Vec<_> = lines.into_iter().flatten().collect();
        assert_eq!(flattened, chars);
        assert_eq!(reconstruct(&flattened), text);
    }
}
