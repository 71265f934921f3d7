//! Core width calculation for terminal text.
//!
//! Measures the display width of codepoints, units and strings in terminal
//! cells. The leading codepoint of a unit decides its width; everything
//! attached to it contributes nothing.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use crate::ansi::strip_ansi;
use crate::classify::classify;
use crate::options::{AmbiguousWidth, ClusterMode, MeasureOptions};
use crate::segment::StyledChar;

/// Display width of a single codepoint in terminal cells.
///
/// - `2` for East Asian Wide and Fullwidth (CJK ideographs, Hangul
///   syllables, fullwidth forms, emoji with default emoji presentation)
/// - `0` for combining marks, controls, format characters, variation
///   selectors and LINE FEED
/// - `1` for everything else (Latin, Thai, Arabic, Hebrew, Ambiguous)
#[inline]
pub fn char_width(c: char) -> usize {
    char_width_with(c, AmbiguousWidth::Narrow)
}

/// [`char_width`] with an explicit policy for East Asian Ambiguous codepoints.
#[inline]
pub fn char_width_with(c: char, ambiguous: AmbiguousWidth) -> usize {
    if c.is_ascii() {
        return usize::from(!c.is_ascii_control());
    }
    if classify(c).is_attached() {
        return 0;
    }
    let east_asian = match ambiguous {
        AmbiguousWidth::Narrow => c.width(),
        AmbiguousWidth::Wide => c.width_cjk(),
    };
    if east_asian == Some(2) { 2 } else { 1 }
}

/// Display width of an extended grapheme cluster in terminal cells.
///
/// Examples:
/// - `é` (e + combining acute) → width 1
/// - `👨‍👩‍👧‍👦` (family ZWJ sequence) → width 2
/// - `🇺🇸` (flag: regional indicator pair) → width 2
/// - `👍🏽` (thumbs up + skin tone) → width 2
///
/// # Rules
///
/// 1. Single codepoint → [`char_width_with`]
/// 2. Regional indicator pair (flags) → 2
/// 3. Emoji sequence (contains ZWJ, VS16, skin tone, keycap) → 2
/// 4. Anything else → width of the first codepoint that is not a mark,
///    control or format character (a cluster can open with a Prepend or
///    format codepoint such as U+0600)
pub fn grapheme_width(grapheme: &str, ambiguous: AmbiguousWidth) -> usize {
    let mut chars = grapheme.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return 0,
    };

    if grapheme.len() == first.len_utf8() {
        return char_width_with(first, ambiguous);
    }

    if (0x1F1E6..=0x1F1FF).contains(&(first as u32)) {
        return 2;
    }

    for c in chars {
        match c as u32 {
            0x200D => return 2,            // ZERO WIDTH JOINER
            0xFE0F => return 2,            // VS16, emoji presentation
            0x1F3FB..=0x1F3FF => return 2, // Fitzpatrick skin tone modifier
            0x20E3 => return 2,            // COMBINING ENCLOSING KEYCAP
            _ => {}
        }
    }

    grapheme
        .chars()
        .find(|&c| !classify(c).is_attached())
        .map_or(0, |c| char_width_with(c, ambiguous))
}

/// Total display width of a unit sequence.
#[inline]
pub fn measure<S>(chars: &[StyledChar<S>]) -> usize {
    chars.iter().map(|c| c.width).sum()
}

/// Display width of a string in terminal cells.
///
/// ANSI escape sequences are stripped first and take no space. Produces the
/// same value as `measure(&segment(text))` on the stripped text, without
/// building the units.
pub fn string_width(s: &str) -> usize {
    if s.is_empty() {
        return 0;
    }

    // Printable ASCII is exactly one cell per byte.
    if s.is_ascii() && !s.as_bytes().contains(&0x1B) {
        return s.bytes().filter(|b| (0x20..0x7F).contains(b)).count();
    }

    strip_ansi(s).chars().map(char_width).sum()
}

/// [`string_width`] under explicit measurement options.
pub fn string_width_with(s: &str, options: &MeasureOptions) -> usize {
    let stripped = strip_ansi(s);
    match options.cluster_mode {
        ClusterMode::Marks => stripped
            .chars()
            .map(|c| char_width_with(c, options.ambiguous))
            .sum(),
        ClusterMode::Graphemes => stripped
            .graphemes(true)
            .map(|g| grapheme_width(g, options.ambiguous))
            .sum(),
    }
}
