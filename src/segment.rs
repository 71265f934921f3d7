//! Styled-character segmentation.
//!
//! Turns text plus optional style spans into an ordered sequence of
//! [`StyledChar`] units. A unit is a leading codepoint followed by everything
//! that attaches to it, and is never split by wrapping or truncation.
//!
//! In [`ClusterMode::Marks`] a [`CodepointClass::Base`] codepoint starts a new
//! unit and combining marks / zero-width others are appended to the current
//! one. Input that starts with an attached codepoint (or has one right after a
//! line feed) gets its own zero-width unit; nothing is dropped.
//!
//! The style in effect at a unit's leading codepoint applies to the whole
//! unit. A style boundary that falls inside a cluster is ignored for that
//! cluster.
//!
//! [`CodepointClass::Base`]: crate::CodepointClass::Base

use std::fmt::{self, Display};

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

use crate::classify::classify;
use crate::options::{ClusterMode, MeasureOptions};
use crate::style_map::{StyleMap, StyleSpan};
use crate::types::Style;
use crate::width::{char_width_with, grapheme_width};

/// An indivisible display unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledChar<S = Style> {
    /// The unit's codepoints, in source order.
    pub text: String,
    /// Display width in cells: 0, 1 or 2.
    pub width: usize,
    /// Offset of the leading codepoint in the source, in source code units.
    pub offset: usize,
    /// Style in effect at the leading codepoint.
    pub style: S,
}

impl<S> StyledChar<S> {
    /// Build a unit from its parts. `width` is taken as given.
    pub fn new(text: impl Into<String>, width: usize, offset: usize, style: S) -> Self {
        Self {
            text: text.into(),
            width,
            offset,
            style,
        }
    }

    /// The unit's text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The leading codepoint.
    #[inline]
    pub fn base(&self) -> Option<char> {
        self.text.chars().next()
    }

    /// True for a unit that ends a hard line (`\n` or `\r\n`).
    #[inline]
    pub fn is_line_feed(&self) -> bool {
        matches!(self.text.as_str(), "\n" | "\r\n")
    }

    /// Replace the style payload, keeping text and geometry.
    pub fn map_style<T>(self, f: impl FnOnce(S) -> T) -> StyledChar<T> {
        StyledChar {
            text: self.text,
            width: self.width,
            offset: self.offset,
            style: f(self.style),
        }
    }
}

impl<S> Display for StyledChar<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Segment unstyled text with default options.
pub fn segment(text: &str) -> Vec<StyledChar> {
    segment_with(text, &StyleMap::default(), &MeasureOptions::default())
}

/// Segment text with style spans given as byte ranges.
pub fn segment_styled<S: Clone + Default>(text: &str, spans: &[StyleSpan<S>]) -> Vec<StyledChar<S>> {
    let styles = StyleMap::new(spans.iter().cloned());
    segment_with(text, &styles, &MeasureOptions::default())
}

/// Segment text with a prepared style map and explicit options.
pub fn segment_with<S: Clone + Default>(
    text: &str,
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    segment_decoded(text, |byte_idx| byte_idx, styles, options)
}

/// Segment UTF-16 code units. Span ranges and unit offsets are in `u16`
/// units.
///
/// Each unpaired surrogate becomes its own width-1 unit holding U+FFFD.
pub fn segment_utf16<S: Clone + Default>(
    units: &[u16],
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    let mut decoded = String::with_capacity(units.len());
    let mut offsets = SourceOffsets::default();
    let mut unit_idx = 0;

    for item in char::decode_utf16(units.iter().copied()) {
        match item {
            Ok(c) => {
                offsets.push(decoded.len(), unit_idx);
                decoded.push(c);
                unit_idx += c.len_utf16();
            }
            Err(_) => {
                offsets.push_opaque(decoded.len(), unit_idx);
                decoded.push(char::REPLACEMENT_CHARACTER);
                unit_idx += 1;
            }
        }
    }

    segment_source(&decoded, &offsets, styles, options)
}

/// Segment raw bytes. Span ranges and unit offsets are byte offsets into
/// `bytes`.
///
/// Each invalid UTF-8 sequence becomes its own width-1 unit holding U+FFFD.
pub fn segment_lossy<S: Clone + Default>(
    bytes: &[u8],
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return segment_with(text, styles, options);
    }

    let mut decoded = String::with_capacity(bytes.len());
    let mut offsets = SourceOffsets::default();
    let mut source_idx = 0;

    for chunk in bytes.utf8_chunks() {
        for (i, c) in chunk.valid().char_indices() {
            offsets.push(decoded.len(), source_idx + i);
            decoded.push(c);
        }
        source_idx += chunk.valid().len();

        if !chunk.invalid().is_empty() {
            offsets.push_opaque(decoded.len(), source_idx);
            decoded.push(char::REPLACEMENT_CHARACTER);
            source_idx += chunk.invalid().len();
        }
    }

    segment_source(&decoded, &offsets, styles, options)
}

// =============================================================================
// Decoded sources
// =============================================================================

/// Maps byte offsets in a decoded string back to source offsets, and
/// remembers which replacement characters stand for undecodable input.
#[derive(Default)]
struct SourceOffsets {
    /// (decoded byte offset, source offset), sorted by decoded offset.
    map: Vec<(usize, usize)>,
    /// Decoded byte offsets of opaque replacement units.
    opaque: Vec<usize>,
}

impl SourceOffsets {
    fn push(&mut self, decoded: usize, source: usize) {
        self.map.push((decoded, source));
    }

    fn push_opaque(&mut self, decoded: usize, source: usize) {
        self.map.push((decoded, source));
        self.opaque.push(decoded);
    }

    fn source(&self, decoded: usize) -> usize {
        match self.map.binary_search_by_key(&decoded, |&(d, _)| d) {
            Ok(idx) => self.map[idx].1,
            Err(idx) => idx.checked_sub(1).map_or(0, |prev| self.map[prev].1),
        }
    }

    fn is_opaque(&self, decoded: usize) -> bool {
        self.opaque.binary_search(&decoded).is_ok()
    }
}

fn segment_source<S: Clone + Default>(
    decoded: &str,
    offsets: &SourceOffsets,
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    if offsets.opaque.is_empty() {
        return segment_decoded(decoded, |idx| offsets.source(idx), styles, options);
    }

    // Undecodable input must stay a standalone unit, so split the decoded
    // text around every opaque replacement character.
    let mut out = Vec::new();
    let mut start = 0;
    for &opaque in &offsets.opaque {
        if start < opaque {
            let piece = &decoded[start..opaque];
            out.extend(segment_decoded(
                piece,
                |idx| offsets.source(start + idx),
                styles,
                options,
            ));
        }
        let source = offsets.source(opaque);
        let style = styles.style_at(source).cloned().unwrap_or_default();
        out.push(StyledChar::new(
            char::REPLACEMENT_CHARACTER.to_string(),
            1,
            source,
            style,
        ));
        start = opaque + char::REPLACEMENT_CHARACTER.len_utf8();
    }
    if start < decoded.len() {
        let piece = &decoded[start..];
        out.extend(segment_decoded(
            piece,
            |idx| offsets.source(start + idx),
            styles,
            options,
        ));
    }
    out
}

// =============================================================================
// Core scan
// =============================================================================

fn segment_decoded<S: Clone + Default>(
    text: &str,
    source_offset: impl Fn(usize) -> usize,
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    let chars = match options.cluster_mode {
        ClusterMode::Marks => segment_marks(text, &source_offset, styles, options),
        ClusterMode::Graphemes => segment_graphemes(text, &source_offset, styles, options),
    };
    trace!(
        bytes = text.len(),
        units = chars.len(),
        mode = ?options.cluster_mode,
        "segmented text"
    );
    chars
}

fn segment_marks<S: Clone + Default>(
    text: &str,
    source_offset: &impl Fn(usize) -> usize,
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    let mut cursor = styles.cursor();
    let mut out: Vec<StyledChar<S>> = Vec::with_capacity(text.len());

    for (byte_idx, c) in text.char_indices() {
        if classify(c).is_attached() {
            if let Some(current) = out.last_mut().filter(|unit| !unit.is_line_feed()) {
                current.text.push(c);
                continue;
            }
        }

        let offset = source_offset(byte_idx);
        out.push(StyledChar::new(
            c.to_string(),
            char_width_with(c, options.ambiguous),
            offset,
            cursor.style_at(offset),
        ));
    }

    out
}

fn segment_graphemes<S: Clone + Default>(
    text: &str,
    source_offset: &impl Fn(usize) -> usize,
    styles: &StyleMap<S>,
    options: &MeasureOptions,
) -> Vec<StyledChar<S>> {
    let mut cursor = styles.cursor();

    text.grapheme_indices(true)
        .map(|(byte_idx, grapheme)| {
            let offset = source_offset(byte_idx);
            StyledChar::new(
                grapheme,
                grapheme_width(grapheme, options.ambiguous),
                offset,
                cursor.style_at(offset),
            )
        })
        .collect()
}

/// Concatenate unit texts back into a string.
pub fn reconstruct<S>(chars: &[StyledChar<S>]) -> String {
    chars.iter().map(StyledChar::as_str).collect()
}
