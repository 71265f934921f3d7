//! ANSI escape sequence handling.
//!
//! Escape sequences take no columns. [`strip_ansi`] removes them;
//! [`parse_ansi`] removes them too, but turns SGR (`ESC [ ... m`) sequences
//! into [`StyleSpan`]s over the remaining text so colored output can be fed
//! straight to the segmenter.
//!
//! Recognized sequences:
//! - CSI sequences: `ESC [` ... final byte (0x40-0x7E)
//! - OSC sequences: `ESC ]` ... BEL (0x07) or ST (ESC \)
//! - DCS/PM/APC sequences: `ESC P`/`ESC ^`/`ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;

use crate::segment::{StyledChar, segment_styled};
use crate::style_map::StyleSpan;
use crate::types::{Attr, Rgba, Style};

/// Strip ANSI escape sequences from a string.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
pub fn strip_ansi(s: &str) -> Cow<'_, str> {
    if !s.as_bytes().contains(&0x1B) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let bytes = s.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == 0x1B {
            i = skip_escape_sequence(bytes, i);
        } else {
            i = copy_plain(s, i, &mut result);
        }
    }

    Cow::Owned(result)
}

/// Plain text plus the SGR styling that applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnsiText {
    /// The input with every escape sequence removed.
    pub text: String,
    /// Byte ranges into `text`, sorted and non-overlapping. Runs in the
    /// terminal's default style are omitted.
    pub spans: Vec<StyleSpan<Style>>,
}

impl AnsiText {
    /// Segment the plain text with its styles attached.
    pub fn segment(&self) -> Vec<StyledChar> {
        segment_styled(&self.text, &self.spans)
    }
}

/// Split escape-coded text into plain text and style spans.
///
/// Non-SGR sequences are dropped. Unknown SGR parameters are ignored.
pub fn parse_ansi(s: &str) -> AnsiText {
    let bytes = s.as_bytes();
    let mut out = AnsiText {
        text: String::with_capacity(s.len()),
        spans: Vec::new(),
    };
    let mut style = Style::default();
    let mut run_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != 0x1B {
            i = copy_plain(s, i, &mut out.text);
            continue;
        }

        let end = skip_escape_sequence(bytes, i);
        if let Some(params) = sgr_params(s, i, end) {
            let next = apply_sgr(style, params);
            if next != style {
                close_run(&mut out, run_start, style);
                style = next;
                run_start = out.text.len();
            }
        }
        i = end;
    }

    close_run(&mut out, run_start, style);
    out
}

fn close_run(out: &mut AnsiText, start: usize, style: Style) {
    let end = out.text.len();
    if start < end && !style.is_plain() {
        out.spans.push(StyleSpan::new(start..end, style));
    }
}

/// Copy everything up to the next ESC. Returns the index of that ESC.
fn copy_plain(s: &str, pos: usize, into: &mut String) -> usize {
    // ESC is a single-byte ASCII character, so slicing at it never splits
    // a UTF-8 sequence.
    let end = s.as_bytes()[pos..]
        .iter()
        .position(|&b| b == 0x1B)
        .map_or(s.len(), |offset| pos + offset);
    into.push_str(&s[pos..end]);
    end
}

/// Parameter text of a complete SGR sequence spanning `start..end`.
fn sgr_params(s: &str, start: usize, end: usize) -> Option<&str> {
    let bytes = s.as_bytes();
    let params_start = start + 2;
    if end <= params_start || bytes.get(start + 1) != Some(&b'[') || bytes[end - 1] != b'm' {
        return None;
    }
    s.get(params_start..end - 1)
}

/// Apply SGR parameters to a style.
fn apply_sgr(mut style: Style, params: &str) -> Style {
    // Empty parameters mean 0.
    let mut codes = params
        .split(';')
        .map(|p| if p.is_empty() { Some(0) } else { p.parse::<u16>().ok() });

    while let Some(code) = codes.next() {
        let Some(code) = code else { continue };
        match code {
            0 => style = Style::default(),
            1 => style.attrs |= Attr::BOLD,
            2 => style.attrs |= Attr::DIM,
            3 => style.attrs |= Attr::ITALIC,
            4 => style.attrs |= Attr::UNDERLINE,
            5 | 6 => style.attrs |= Attr::BLINK,
            7 => style.attrs |= Attr::INVERSE,
            8 => style.attrs |= Attr::HIDDEN,
            9 => style.attrs |= Attr::STRIKETHROUGH,
            22 => style.attrs.remove(Attr::BOLD | Attr::DIM),
            23 => style.attrs.remove(Attr::ITALIC),
            24 => style.attrs.remove(Attr::UNDERLINE),
            25 => style.attrs.remove(Attr::BLINK),
            27 => style.attrs.remove(Attr::INVERSE),
            28 => style.attrs.remove(Attr::HIDDEN),
            29 => style.attrs.remove(Attr::STRIKETHROUGH),
            30..=37 => style.fg = Rgba::ansi((code - 30) as u8),
            38 => {
                if let Some(color) = extended_color(&mut codes) {
                    style.fg = color;
                }
            }
            39 => style.fg = Rgba::TERMINAL_DEFAULT,
            40..=47 => style.bg = Rgba::ansi((code - 40) as u8),
            48 => {
                if let Some(color) = extended_color(&mut codes) {
                    style.bg = color;
                }
            }
            49 => style.bg = Rgba::TERMINAL_DEFAULT,
            90..=97 => style.fg = Rgba::ansi((code - 90 + 8) as u8),
            100..=107 => style.bg = Rgba::ansi((code - 100 + 8) as u8),
            _ => {}
        }
    }

    style
}

/// Parse the tail of `38;5;n` / `38;2;r;g;b` (and the `48` forms).
fn extended_color(codes: &mut impl Iterator<Item = Option<u16>>) -> Option<Rgba> {
    let mut channel = || codes.next().flatten().and_then(|v| u8::try_from(v).ok());
    match channel() {
        Some(5) => channel().map(Rgba::ansi),
        Some(2) => {
            let (r, g, b) = (channel()?, channel()?, channel()?);
            Some(Rgba::rgb(r, g, b))
        }
        _ => None,
    }
}

/// Skip an escape sequence starting at `pos` (which points to ESC byte).
/// Returns the byte index after the complete sequence.
fn skip_escape_sequence(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    if next >= bytes.len() {
        return bytes.len();
    }

    match bytes[next] {
        b'[' => skip_csi(bytes, next + 1),
        b']' | b'P' | b'^' | b'_' => skip_string_terminated(bytes, next + 1),
        // A lone ESC before a multi-byte character: drop the ESC, keep the
        // character whole.
        0x80..=0xFF => next,
        _ => next + 1,
    }
}

/// Skip a CSI sequence. `pos` is the byte after `[`.
///
/// CSI format: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;

    while i < bytes.len() {
        let b = bytes[i];
        if (0x40..=0x7E).contains(&b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(&b) {
            return i; // Invalid byte, abort sequence
        }
        i += 1;
    }

    bytes.len()
}

/// Skip a string-terminated sequence (OSC, DCS, PM, APC).
/// `pos` is the byte after the type indicator.
///
/// Terminates with BEL (0x07) or ST (ESC \).
fn skip_string_terminated(bytes: &[u8], pos: usize) -> usize {
    let mut i = pos;

    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            0x1B if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }

    bytes.len()
}
