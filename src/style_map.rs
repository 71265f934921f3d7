//! Style spans as an interval map.
//!
//! Styles travel beside the text as half-open offset ranges instead of inline
//! markup. Offsets are in the source's code units: bytes for `&str`, `u16`
//! units for UTF-16 input.
//!
//! Overlapping spans are flattened on construction; a later span wins over
//! the region it overlaps.

use std::collections::BinaryHeap;
use std::ops::Range;

use crate::error::{Result, TextError};

/// A style applied to a half-open offset range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleSpan<S> {
    /// Half-open offsets in source code units.
    pub range: Range<usize>,
    /// Style for every codepoint starting inside `range`.
    pub style: S,
}

impl<S> StyleSpan<S> {
    /// Span covering `range` with `style`.
    pub const fn new(range: Range<usize>, style: S) -> Self {
        Self { range, style }
    }
}

/// Sorted, non-overlapping style runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleMap<S> {
    runs: Vec<StyleSpan<S>>,
}

impl<S> Default for StyleMap<S> {
    fn default() -> Self {
        Self { runs: Vec::new() }
    }
}

impl<S: Clone> StyleMap<S> {
    /// Flatten spans into runs. Empty and inverted spans are ignored.
    pub fn new(spans: impl IntoIterator<Item = StyleSpan<S>>) -> Self {
        Self {
            runs: flatten(spans.into_iter().collect()),
        }
    }

    /// Like [`StyleMap::new`], but rejects spans that are inverted or reach
    /// past `len`.
    pub fn try_new(spans: impl IntoIterator<Item = StyleSpan<S>>, len: usize) -> Result<Self> {
        let mut checked = Vec::new();
        for span in spans {
            let Range { start, end } = span.range;
            if start > end || end > len {
                return Err(TextError::InvalidSpan { start, end, len });
            }
            checked.push(span);
        }
        Ok(Self {
            runs: flatten(checked),
        })
    }
}

/// Resolve overlapping spans into sorted, disjoint runs.
///
/// Sweeps the span boundaries left to right, keeping the spans that cover the
/// current position in a max-heap keyed by insertion index, so the latest
/// span is always on top. `O(k log k)` for `k` spans.
fn flatten<S: Clone>(mut spans: Vec<StyleSpan<S>>) -> Vec<StyleSpan<S>> {
    spans.retain(|span| span.range.start < span.range.end);

    // Already sorted and disjoint: the common case for spans coming out of
    // a left-to-right scanner.
    if spans
        .windows(2)
        .all(|pair| pair[0].range.end <= pair[1].range.start)
    {
        return spans;
    }

    let mut bounds: Vec<usize> = spans
        .iter()
        .flat_map(|span| [span.range.start, span.range.end])
        .collect();
    bounds.sort_unstable();
    bounds.dedup();

    let mut by_start: Vec<usize> = (0..spans.len()).collect();
    by_start.sort_by_key(|&idx| spans[idx].range.start);

    let mut active: BinaryHeap<usize> = BinaryHeap::new();
    let mut next = 0;
    let mut runs: Vec<StyleSpan<S>> = Vec::with_capacity(spans.len());
    let mut last_winner = None;

    for pair in bounds.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);

        while let Some(&idx) = by_start.get(next) {
            if spans[idx].range.start > lo {
                break;
            }
            active.push(idx);
            next += 1;
        }
        while active.peek().is_some_and(|&idx| spans[idx].range.end <= lo) {
            active.pop();
        }

        let winner = active.peek().copied();
        match winner {
            Some(idx) if last_winner == Some(idx) => {
                if let Some(run) = runs.last_mut() {
                    run.range.end = hi;
                }
            }
            Some(idx) => runs.push(StyleSpan::new(lo..hi, spans[idx].style.clone())),
            None => {}
        }
        last_winner = winner;
    }

    runs
}

impl<S> StyleMap<S> {
    /// The flattened runs, sorted by start offset and non-overlapping.
    pub fn runs(&self) -> &[StyleSpan<S>] {
        &self.runs
    }

    /// True when no offset carries a style.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Style covering `offset`, if any.
    pub fn style_at(&self, offset: usize) -> Option<&S> {
        let idx = self.runs.partition_point(|run| run.range.end <= offset);
        self.runs
            .get(idx)
            .filter(|run| run.range.start <= offset)
            .map(|run| &run.style)
    }

    /// Forward-only lookup for monotonically increasing offsets.
    pub(crate) fn cursor(&self) -> StyleCursor<'_, S> {
        StyleCursor { runs: &self.runs, idx: 0 }
    }
}

pub(crate) struct StyleCursor<'a, S> {
    runs: &'a [StyleSpan<S>],
    idx: usize,
}

impl<S: Clone + Default> StyleCursor<'_, S> {
    /// Style at `offset`. Offsets must not decrease between calls.
    pub(crate) fn style_at(&mut self, offset: usize) -> S {
        while self
            .runs
            .get(self.idx)
            .is_some_and(|run| run.range.end <= offset)
        {
            self.idx += 1;
        }
        match self.runs.get(self.idx) {
            Some(run) if run.range.start <= offset => run.style.clone(),
            _ => S::default(),
        }
    }
}
