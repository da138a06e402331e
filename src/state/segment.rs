use serde::{Deserialize, Serialize};

use crate::constants::SEGMENT_NAV_GUARD_SECONDS;

/// A timed subtitle/voice segment on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Declared subtitle number from the source file. Stable identity within
    /// a store snapshot; unique but not necessarily contiguous or sorted.
    pub index: u32,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, strictly greater than `start`
    pub end: f64,
    /// Normalized text (trimmed, internal whitespace collapsed)
    pub text: String,
}

impl Segment {
    pub fn new(index: u32, start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            text: text.into(),
        }
    }

    /// Duration of this segment in seconds
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Check if this segment overlaps a time range
    #[allow(dead_code)]
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.start < end && self.end > start
    }

    /// Check if the playhead is inside this segment
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time < self.end
    }
}

/// Ordered-by-start collection of segments. The single source of truth for
/// timing and text during an editing session.
///
/// Segments are kept sorted ascending by `start` after every timing
/// mutation. Overlapping segments are tolerated; `index` values are not
/// required to be sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentStore {
    segments: Vec<Segment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire contents (new parse or remote load). Re-sorts.
    pub fn replace_all(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
        self.sort_by_start();
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Find a segment by its identity index
    pub fn find(&self, index: u32) -> Option<&Segment> {
        self.segments.iter().find(|s| s.index == index)
    }

    /// Apply a timing update to one segment. Rejects non-positive durations
    /// and unknown indices. The caller is expected to re-sort on gesture end;
    /// bulk updates outside a gesture should call [`sort_by_start`] after.
    ///
    /// [`sort_by_start`]: SegmentStore::sort_by_start
    pub fn apply_timing(&mut self, index: u32, start: f64, end: f64) -> bool {
        if !(start.is_finite() && end.is_finite()) || start < 0.0 || end <= start {
            return false;
        }
        let Some(segment) = self.segments.iter_mut().find(|s| s.index == index) else {
            return false;
        };
        segment.start = start;
        segment.end = end;
        true
    }

    /// Restore the ascending-by-start invariant. Ties keep insertion order.
    pub fn sort_by_start(&mut self) {
        self.segments.sort_by(|a, b| a.start.total_cmp(&b.start));
    }

    /// Closest segment starting more than half a second before `time`.
    /// The guard keeps navigation from re-selecting the active segment.
    pub fn previous_segment(&self, time: f64) -> Option<&Segment> {
        self.segments
            .iter()
            .rev()
            .find(|s| s.start < time - SEGMENT_NAV_GUARD_SECONDS)
    }

    /// Closest segment starting more than half a second after `time`.
    pub fn next_segment(&self, time: f64) -> Option<&Segment> {
        self.segments
            .iter()
            .find(|s| s.start > time + SEGMENT_NAV_GUARD_SECONDS)
    }

    /// Segment under the playhead, if any
    pub fn segment_at(&self, time: f64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(time))
    }

    /// Latest end time across all segments, or 0 when empty. Not the last
    /// segment's end: with overlaps tolerated, an early segment can outlast
    /// everything sorted after it.
    pub fn span_end(&self) -> f64 {
        self.segments.iter().map(|s| s.end).fold(0.0, f64::max)
    }
}
