//! Error types for text measurement and wrapping.
//!
//! Measurement and segmentation are total over valid text. The only failures
//! are caller contract violations, reported at the call boundary.

use thiserror::Error;

/// Errors returned by the text engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// A wrap width of zero columns was requested.
    #[error("wrap width must be at least 1 column, got {max_width}")]
    InvalidWidth { max_width: usize },

    /// A style span is inverted or extends past the end of the text.
    #[error("style span {start}..{end} is invalid for text of length {len}")]
    InvalidSpan { start: usize, end: usize, len: usize },
}

/// Result alias for text engine operations.
pub type Result<T> = std::result::Result<T, TextError>;

/// Reject a zero column budget.
#[inline]
pub(crate) fn check_width(max_width: usize) -> Result<()> {
    if max_width == 0 {
        return Err(TextError::InvalidWidth { max_width });
    }
    Ok(())
}
