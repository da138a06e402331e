//! Drag/resize gesture rules for timeline segments.
//!
//! A gesture is pure geometry: it anchors the segment's rendered position
//! at pointer-down and turns every subsequent pointer position into a
//! candidate timing update. The segment store applies the update; the UI
//! layer owns the overlay that captures pointer events for the gesture's
//! lifetime.

use crate::constants::{SEGMENT_MIN_RENDER_WIDTH_PX, SEGMENT_MIN_RESIZE_WIDTH_PX};
use crate::core::mapper::TimelineViewport;
use crate::state::Segment;

/// What part of the segment the pointer grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Shift the whole segment; duration is preserved exactly.
    Move,
    /// Drag the left edge; end time stays fixed.
    ResizeLeft,
    /// Drag the right edge; start time stays fixed.
    ResizeRight,
}

/// Candidate timing produced by a pointer move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingUpdate {
    pub start: f64,
    pub end: f64,
}

/// State of one active gesture, from pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    pub mode: DragMode,
    /// Identity index of the segment being manipulated
    pub segment_index: u32,
    /// Pointer x at gesture start (client space)
    pub anchor_pointer_x: f64,
    /// Segment left edge in pixels at gesture start
    pub anchor_left_px: f64,
    /// Segment width in pixels at gesture start (true width, not the
    /// 40px render floor — the floor never feeds back into timing)
    pub anchor_width_px: f64,
    /// Timing at gesture start, kept in seconds so moves preserve the
    /// duration exactly and left-resizes keep the end bit-identical
    anchor_start_sec: f64,
    anchor_end_sec: f64,
}

impl DragGesture {
    /// Anchor a new gesture on `segment` at the current pointer position.
    pub fn begin(
        mode: DragMode,
        segment: &Segment,
        pointer_x: f64,
        viewport: &TimelineViewport,
    ) -> Self {
        let pps = viewport.pixels_per_second();
        Self {
            mode,
            segment_index: segment.index,
            anchor_pointer_x: pointer_x,
            anchor_left_px: segment.start * pps,
            anchor_width_px: (segment.end - segment.start) * pps,
            anchor_start_sec: segment.start,
            anchor_end_sec: segment.end,
        }
    }

    /// Turn a pointer position into a timing update, or `None` when the
    /// move would violate a floor (resize below 20px) and must be ignored.
    pub fn update(&self, pointer_x: f64, viewport: &TimelineViewport) -> Option<TimingUpdate> {
        let pps = viewport.pixels_per_second();
        let delta = pointer_x - self.anchor_pointer_x;

        match self.mode {
            DragMode::Move => {
                // Left edge floored at zero; duration carried in seconds
                let new_left = (self.anchor_left_px + delta).max(0.0);
                let start = new_left / pps;
                Some(TimingUpdate {
                    start,
                    end: start + (self.anchor_end_sec - self.anchor_start_sec),
                })
            }
            DragMode::ResizeLeft => {
                let new_left = (self.anchor_left_px + delta).max(0.0);
                let new_width = self.anchor_width_px - delta;
                if new_width <= SEGMENT_MIN_RESIZE_WIDTH_PX {
                    return None;
                }
                let start = new_left / pps;
                if start >= self.anchor_end_sec {
                    return None;
                }
                Some(TimingUpdate {
                    start,
                    end: self.anchor_end_sec,
                })
            }
            DragMode::ResizeRight => {
                let new_width = (self.anchor_width_px + delta).max(SEGMENT_MIN_RESIZE_WIDTH_PX);
                Some(TimingUpdate {
                    start: self.anchor_start_sec,
                    end: self.anchor_start_sec + new_width / pps,
                })
            }
        }
    }
}

/// Rendered geometry of a segment: `(left_px, width_px)`.
///
/// The left edge is floored at zero and the width at 40px so tiny segments
/// stay clickable. Display-only; stored timing is never derived from it.
pub fn segment_geometry(segment: &Segment, viewport: &TimelineViewport) -> (f64, f64) {
    let left = viewport.time_to_x(segment.start).max(0.0);
    let right = viewport.time_to_x(segment.end);
    let width = (right - left).max(SEGMENT_MIN_RENDER_WIDTH_PX);
    (left, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> TimelineViewport {
        // 880px container, 60s duration: (880-80)/60 px/s at 100% zoom
        TimelineViewport::new(Some(880.0), 60.0)
    }

    fn segment() -> Segment {
        Segment::new(1, 10.0, 14.0, "text")
    }

    #[test]
    fn test_move_preserves_duration_exactly() {
        let vp = viewport();
        let seg = segment();
        let gesture = DragGesture::begin(DragMode::Move, &seg, 500.0, &vp);
        let duration = seg.end - seg.start;
        for pointer in [400.0, 523.7, 612.1, 499.999] {
            let update = gesture.update(pointer, &vp).unwrap();
            assert!((update.end - update.start - duration).abs() < 1e-12);
        }
    }

    #[test]
    fn test_move_floors_left_edge_at_zero() {
        let vp = viewport();
        let seg = segment();
        let gesture = DragGesture::begin(DragMode::Move, &seg, 500.0, &vp);
        // Drag far past the timeline origin
        let update = gesture.update(-10_000.0, &vp).unwrap();
        assert_eq!(update.start, 0.0);
        assert_eq!(update.end, seg.end - seg.start);
    }

    #[test]
    fn test_resize_left_keeps_end_fixed() {
        let vp = viewport();
        let seg = segment();
        let gesture = DragGesture::begin(DragMode::ResizeLeft, &seg, 500.0, &vp);
        let update = gesture.update(510.0, &vp).unwrap();
        assert_eq!(update.end, seg.end);
        assert!(update.start > seg.start);
    }

    #[test]
    fn test_resize_left_rejects_below_min_width() {
        let vp = viewport();
        let seg = segment();
        let pps = vp.pixels_per_second();
        let width = (seg.end - seg.start) * pps;
        let gesture = DragGesture::begin(DragMode::ResizeLeft, &seg, 500.0, &vp);
        // Shrink to exactly the floor and past it: both rejected
        assert!(gesture
            .update(500.0 + (width - SEGMENT_MIN_RESIZE_WIDTH_PX), &vp)
            .is_none());
        assert!(gesture.update(500.0 + width, &vp).is_none());
        // Just above the floor is accepted
        assert!(gesture
            .update(500.0 + (width - SEGMENT_MIN_RESIZE_WIDTH_PX - 1.0), &vp)
            .is_some());
    }

    #[test]
    fn test_resize_right_keeps_start_fixed_and_clamps() {
        let vp = viewport();
        let seg = segment();
        let pps = vp.pixels_per_second();
        let width = (seg.end - seg.start) * pps;
        let gesture = DragGesture::begin(DragMode::ResizeRight, &seg, 500.0, &vp);

        let grown = gesture.update(520.0, &vp).unwrap();
        assert_eq!(grown.start, seg.start);
        assert!(grown.end > seg.end);

        // Shrinking past the floor clamps the width to 20px
        let shrunk = gesture.update(500.0 - width, &vp).unwrap();
        assert_eq!(shrunk.start, seg.start);
        let min_duration = SEGMENT_MIN_RESIZE_WIDTH_PX / pps;
        assert!((shrunk.end - shrunk.start - min_duration).abs() < 1e-9);
    }

    #[test]
    fn test_stored_duration_never_below_min_width_equivalent() {
        let vp = viewport();
        let seg = segment();
        let pps = vp.pixels_per_second();
        let min_duration = SEGMENT_MIN_RESIZE_WIDTH_PX / pps;

        for mode in [DragMode::ResizeLeft, DragMode::ResizeRight] {
            let gesture = DragGesture::begin(mode, &seg, 500.0, &vp);
            for pointer in (-2000..2000).step_by(37).map(|x| x as f64) {
                if let Some(update) = gesture.update(pointer, &vp) {
                    assert!(update.end - update.start >= min_duration - 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_render_geometry_floor() {
        let vp = viewport();
        let tiny = Segment::new(1, 5.0, 5.05, "blip");
        let (left, width) = segment_geometry(&tiny, &vp);
        assert!((left - vp.time_to_x(5.0)).abs() < 1e-9);
        assert_eq!(width, 40.0);
        // The floor is display-only: the segment's stored timing is untouched
        assert!((tiny.duration() - 0.05).abs() < 1e-9);
    }
}
