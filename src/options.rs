//! Measurement and wrapping options.
//!
//! Plain value structs with `Default`. Build them with struct-update syntax
//! or the `with_*` helpers:
//!
//! ```
//! use spark_tui_text::{AmbiguousWidth, ClusterMode, MeasureOptions};
//!
//! let opts = MeasureOptions {
//!     ambiguous: AmbiguousWidth::Wide,
//!     ..Default::default()
//! };
//! assert_eq!(opts.cluster_mode, ClusterMode::Marks);
//! ```

/// Width policy for East Asian Width "Ambiguous" codepoints
/// (Greek, Cyrillic, box drawing, `±`, `§` and friends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AmbiguousWidth {
    /// One column. What nearly every modern terminal does.
    #[default]
    Narrow,
    /// Two columns, for CJK legacy terminals.
    Wide,
}

/// How codepoints are grouped into display units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClusterMode {
    /// A base codepoint plus trailing combining marks and zero-width
    /// format codepoints. Emoji sequences are not joined.
    #[default]
    Marks,
    /// UAX #29 extended grapheme clusters. Emoji ZWJ sequences, flags,
    /// skin tones and keycaps form single two-column units.
    Graphemes,
}

/// Options controlling segmentation and per-unit width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasureOptions {
    /// Width of East Asian Ambiguous codepoints.
    pub ambiguous: AmbiguousWidth,
    /// How codepoints group into units.
    pub cluster_mode: ClusterMode,
}

impl MeasureOptions {
    /// Narrow ambiguous width, mark clustering.
    pub const fn new() -> Self {
        Self {
            ambiguous: AmbiguousWidth::Narrow,
            cluster_mode: ClusterMode::Marks,
        }
    }

    #[must_use]
    pub const fn with_ambiguous(mut self, ambiguous: AmbiguousWidth) -> Self {
        self.ambiguous = ambiguous;
        self
    }

    #[must_use]
    pub const fn with_cluster_mode(mut self, cluster_mode: ClusterMode) -> Self {
        self.cluster_mode = cluster_mode;
        self
    }
}

/// Options controlling line wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WrapOptions {
    /// Close the current line after every line feed unit.
    pub hard_breaks: bool,
}

impl WrapOptions {
    /// Hard breaks on.
    pub const fn new() -> Self {
        Self { hard_breaks: true }
    }

    #[must_use]
    pub const fn with_hard_breaks(mut self, hard_breaks: bool) -> Self {
        self.hard_breaks = hard_breaks;
        self
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new()
    }
}
