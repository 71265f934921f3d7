//! # spark-tui-text
//!
//! Unicode-aware text measurement and wrapping for terminal UIs.
//!
//! Terminal text width depends on more than counting codepoints:
//! - ASCII, Latin, Thai, Arabic, Hebrew base characters: 1 cell
//! - CJK ideographs, Hangul syllables, fullwidth forms, most emoji: 2 cells
//! - Combining marks, controls, format characters: 0 cells
//!
//! ## Architecture
//!
//! Two strictly layered pieces:
//! ```text
//! text (+ style spans) → segment → [StyledChar] → measure → width
//!                                               → wrap    → [Line]
//! ```
//!
//! The segmenter groups each base codepoint with the combining marks that
//! follow it into an indivisible [`StyledChar`]. The width and wrap engine
//! only ever works at that granularity, so a base is never separated from its
//! marks and a mark is never counted as a column.
//!
//! Everything here is a pure function over its input: no shared state, no
//! I/O, safe to call from any thread.
//!
//! ```
//! use spark_tui_text::{measure, segment, wrap};
//!
//! assert_eq!(measure(&segment("cafe\u{301}")), 4);
//! assert_eq!(measure(&segment("สวัสดี")), 4);
//!
//! let lines = wrap(segment(&"พี่".repeat(12)), 10).unwrap();
//! assert_eq!(lines.len(), 2);
//! assert!(lines.iter().all(|line| line.width() <= 10));
//! ```
//!
//! ## Unicode data
//!
//! East Asian Width comes from `unicode-width` (Unicode 16.0), grapheme
//! clusters from `unicode-segmentation` (UAX #29), and the General_Category
//! Mark table from `unicode-normalization`.
//!
//! ## Modules
//!
//! - [`classify`](mod@classify) - Codepoint classes (base, combining mark, zero-width other)
//! - [`segment`](mod@segment) - Text → styled display units
//! - [`width`](mod@width) - Per-codepoint, per-cluster and per-string widths
//! - [`wrap`](mod@wrap) - Greedy wrapping at unit boundaries
//! - [`truncate`](mod@truncate) - Grapheme-safe truncation with suffix
//! - [`ansi`](mod@ansi) - ANSI escape stripping and SGR → style span parsing

pub mod ansi;
pub mod classify;
pub mod error;
pub mod line;
pub mod options;
pub mod segment;
pub mod style_map;
pub mod truncate;
pub mod types;
pub mod width;
pub mod wrap;

pub use ansi::{AnsiText, parse_ansi, strip_ansi};
pub use classify::{CodepointClass, classify};
pub use error::{Result, TextError};
pub use line::Line;
pub use options::{AmbiguousWidth, ClusterMode, MeasureOptions, WrapOptions};
pub use segment::{
    StyledChar, reconstruct, segment, segment_lossy, segment_styled, segment_utf16, segment_with,
};
pub use style_map::{StyleMap, StyleSpan};
pub use truncate::{truncate, truncate_text};
pub use types::{Attr, Rgba, Style};
pub use width::{char_width, char_width_with, grapheme_width, measure, string_width, string_width_with};
pub use wrap::{line_count, line_count_with, wrap, wrap_text, wrap_with};
