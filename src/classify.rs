//! Codepoint classification.
//!
//! Every codepoint is exactly one of [`CodepointClass::Base`],
//! [`CodepointClass::CombiningMark`] or [`CodepointClass::ZeroWidthOther`].
//! Classification is a static table lookup:
//!
//! - Zero-width others (controls, format characters, variation selectors)
//!   come from [`ZERO_WIDTH_OTHER`], a sorted range table searched by
//!   binary search.
//! - Combining marks are General_Category Mark (Mn, Mc, Me), from the
//!   generated tables in `unicode-normalization`.
//!
//! LINE FEED is always a base so it forms its own unit and can act as a hard
//! line break.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;

/// Classification of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodepointClass {
    /// Starts a new display unit.
    Base,
    /// Unicode Mark (Mn, Mc, Me). Attaches to the preceding unit.
    CombiningMark,
    /// Control, format or variation selector. Attaches to the preceding unit.
    ZeroWidthOther,
}

impl CodepointClass {
    /// True for classes that attach to the preceding unit.
    #[inline]
    pub const fn is_attached(self) -> bool {
        !matches!(self, Self::Base)
    }
}

/// Classify a codepoint.
#[inline]
pub fn classify(c: char) -> CodepointClass {
    if c == '\n' {
        return CodepointClass::Base;
    }
    if c.is_ascii() {
        return if c.is_ascii_control() {
            CodepointClass::ZeroWidthOther
        } else {
            CodepointClass::Base
        };
    }
    if is_zero_width_other(c) {
        CodepointClass::ZeroWidthOther
    } else if is_combining_mark(c) {
        CodepointClass::CombiningMark
    } else {
        CodepointClass::Base
    }
}

/// True for control, format and variation selector codepoints.
pub fn is_zero_width_other(c: char) -> bool {
    let cp = c as u32;
    ZERO_WIDTH_OTHER
        .binary_search_by(|&(lo, hi)| {
            if hi < cp {
                Ordering::Less
            } else if lo > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

/// Inclusive ranges, sorted and non-overlapping.
const ZERO_WIDTH_OTHER: &[(u32, u32)] = &[
    (0x0000, 0x001F),   // C0 controls
    (0x007F, 0x009F),   // DEL, C1 controls
    (0x00AD, 0x00AD),   // SOFT HYPHEN
    (0x0600, 0x0605),   // Arabic number signs
    (0x061C, 0x061C),   // ARABIC LETTER MARK
    (0x06DD, 0x06DD),   // ARABIC END OF AYAH
    (0x070F, 0x070F),   // SYRIAC ABBREVIATION MARK
    (0x0890, 0x0891),   // Arabic pound/piastre marks above
    (0x08E2, 0x08E2),   // ARABIC DISPUTED END OF AYAH
    (0x180B, 0x180F),   // Mongolian free variation selectors, vowel separator
    (0x200B, 0x200F),   // ZWSP, ZWNJ, ZWJ, LRM, RLM
    (0x202A, 0x202E),   // bidi embeddings and overrides
    (0x2060, 0x2064),   // WORD JOINER, invisible operators
    (0x2066, 0x206F),   // bidi isolates, deprecated format characters
    (0xFE00, 0xFE0F),   // VS1-VS16
    (0xFEFF, 0xFEFF),   // ZERO WIDTH NO-BREAK SPACE
    (0xFFF9, 0xFFFB),   // interlinear annotation
    (0x110BD, 0x110BD), // KAITHI NUMBER SIGN
    (0x110CD, 0x110CD), // KAITHI NUMBER SIGN ABOVE
    (0x13430, 0x1343F), // Egyptian hieroglyph format controls
    (0x1BCA0, 0x1BCA3), // shorthand format controls
    (0x1D173, 0x1D17A), // musical symbol format controls
    (0xE0001, 0xE0001), // LANGUAGE TAG
    (0xE0020, 0xE007F), // tag characters
    (0xE0100, 0xE01EF), // VS17-VS256
];
