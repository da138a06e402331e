//! Timeline components
//!
//! - TimelinePanel: timeline container with header, ruler, and segment track
//! - TimeRuler: tick marks and time labels
//! - SegmentElement: one draggable/resizable subtitle segment

mod panel;
mod ruler;
mod segment_element;

pub use panel::TimelinePanel;

/// Format seconds as `m:ss` for ruler labels and the header timecode.
pub(crate) fn format_clock(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format seconds as `m:ss.mmm` for the playhead readout.
pub(crate) fn format_clock_millis(seconds: f64) -> String {
    let clamped = seconds.max(0.0);
    let millis = ((clamped % 1.0) * 1000.0).floor() as u32;
    format!("{}.{:03}", format_clock(clamped), millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(65.4), "1:05");
        assert_eq!(format_clock(-3.0), "0:00");
    }

    #[test]
    fn test_format_clock_millis() {
        assert_eq!(format_clock_millis(61.25), "1:01.250");
    }
}
