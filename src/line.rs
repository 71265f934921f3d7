//! A wrapped line of display units.

use std::fmt::{self, Display};
use std::ops::Deref;

use crate::segment::StyledChar;
use crate::types::Style;

/// Ordered units plus their summed width.
///
/// `width` always equals the sum of the member widths; units only enter
/// through [`Line::push`] and [`FromIterator`], which keep it in step.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line<S = Style> {
    chars: Vec<StyledChar<S>>,
    width: usize,
}

impl<S> Default for Line<S> {
    fn default() -> Self {
        Self {
            chars: Vec::new(),
            width: 0,
        }
    }
}

impl<S> Line<S> {
    /// An empty line of width 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a unit and add its width.
    pub fn push(&mut self, c: StyledChar<S>) {
        self.width += c.width;
        self.chars.push(c);
    }

    /// Summed width of the units, in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The units, in order.
    #[inline]
    pub fn chars(&self) -> &[StyledChar<S>] {
        &self.chars
    }

    /// Take the units out of the line.
    pub fn into_chars(self) -> Vec<StyledChar<S>> {
        self.chars
    }

    /// The line's text, including a trailing line feed if it has one.
    pub fn text(&self) -> String {
        self.chars.iter().map(StyledChar::as_str).collect()
    }

    /// True when the line was closed by a hard break.
    pub fn ends_with_line_feed(&self) -> bool {
        self.chars.last().is_some_and(StyledChar::is_line_feed)
    }
}

impl<S> Deref for Line<S> {
    type Target = [StyledChar<S>];

    fn deref(&self) -> &Self::Target {
        &self.chars
    }
}

impl<S> FromIterator<StyledChar<S>> for Line<S> {
    fn from_iter<I: IntoIterator<Item = StyledChar<S>>>(iter: I) -> Self {
        let mut line = Self::new();
        for c in iter {
            line.push(c);
        }
        line
    }
}

impl<S> Extend<StyledChar<S>> for Line<S> {
    fn extend<I: IntoIterator<Item = StyledChar<S>>>(&mut self, iter: I) {
        for c in iter {
            self.push(c);
        }
    }
}

impl<S> IntoIterator for Line<S> {
    type Item = StyledChar<S>;
    type IntoIter = std::vec::IntoIter<StyledChar<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chars.into_iter()
    }
}

impl<S> Display for Line<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            f.write_str(c.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment;
    use crate::width::measure;

    #[test]
    fn width_tracks_members() {
        let line: Line = segment("a你e\u{0301}").into_iter().collect();
        assert_eq!(line.width(), 4);
        assert_eq!(line.width(), measure(line.chars()));
        assert_eq!(line.len(), 3);
        assert_eq!(line.text(), "a你e\u{0301}");
        assert_eq!(line.to_string(), line.text());
    }

    #[test]
    fn extend_and_push() {
        let mut line: Line = Line::new();
        assert!(line.is_empty());
        line.extend(segment("ab"));
        line.push(StyledChar::new("好", 2, 2, Style::new()));
        assert_eq!(line.width(), 4);
        assert!(!line.ends_with_line_feed());
        line.extend(segment("\n"));
        assert!(line.ends_with_line_feed());
    }
}
