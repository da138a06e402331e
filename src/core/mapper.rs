//! Time <-> pixel coordinate mapping for the timeline.
//!
//! The viewport owns the zoom percentage, the measured container width, and
//! the content duration; everything the timeline renders derives its
//! horizontal geometry from [`TimelineViewport::pixels_per_second`].

use crate::constants::{
    TIMELINE_DEFAULT_ZOOM_PERCENT, TIMELINE_FALLBACK_PX_PER_SEC, TIMELINE_FIT_MARGIN_PX,
    TIMELINE_MAX_ZOOM_PERCENT, TIMELINE_MIN_AVAILABLE_PX, TIMELINE_MIN_PX_PER_SEC,
    TIMELINE_MIN_ZOOM_PERCENT, TIMELINE_UI_MARGIN_PX,
};

/// Viewport state driving the time-to-pixel conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimelineViewport {
    /// Zoom multiplier in percent, clamped to [25, 1000]
    pub zoom_percent: f64,
    /// Measured width of the timeline container, if known
    pub container_width_px: Option<f64>,
    /// Content (video) duration in seconds
    pub content_duration_sec: f64,
}

impl Default for TimelineViewport {
    fn default() -> Self {
        Self {
            zoom_percent: TIMELINE_DEFAULT_ZOOM_PERCENT,
            container_width_px: None,
            content_duration_sec: 0.0,
        }
    }
}

impl TimelineViewport {
    pub fn new(container_width_px: Option<f64>, content_duration_sec: f64) -> Self {
        Self {
            container_width_px,
            content_duration_sec,
            ..Default::default()
        }
    }

    /// Conversion rate between seconds and horizontal pixels. Always
    /// positive and finite.
    ///
    /// With a usable width and duration: reserve the UI margin, floor the
    /// remaining width, derive the base rate, floor it for readability, and
    /// apply the zoom multiplier. Otherwise fall back to a fixed default
    /// rate scaled by zoom.
    pub fn pixels_per_second(&self) -> f64 {
        let zoom_factor = self.zoom_percent / 100.0;

        let width = match self.container_width_px {
            Some(w) if w.is_finite() && w > 0.0 => w,
            _ => return TIMELINE_FALLBACK_PX_PER_SEC * zoom_factor,
        };
        let duration = self.content_duration_sec;
        if !duration.is_finite() || duration <= 0.0 {
            return TIMELINE_FALLBACK_PX_PER_SEC * zoom_factor;
        }

        let available = (width - TIMELINE_UI_MARGIN_PX).max(TIMELINE_MIN_AVAILABLE_PX);
        let base = (available / duration).max(TIMELINE_MIN_PX_PER_SEC);
        base * zoom_factor
    }

    /// Map a time in seconds to a horizontal pixel position. Total over the
    /// reals; callers clamp where their context demands it.
    pub fn time_to_x(&self, time: f64) -> f64 {
        time * self.pixels_per_second()
    }

    /// Map a horizontal pixel position back to seconds.
    pub fn x_to_time(&self, x: f64) -> f64 {
        x / self.pixels_per_second()
    }

    /// Clamp a seek target into the playable range.
    pub fn clamp_seek(&self, time: f64) -> f64 {
        time.clamp(0.0, self.content_duration_sec.max(0.0))
    }

    /// Multiply the zoom percentage by `factor`, clamped to [25, 1000].
    pub fn zoom(&mut self, factor: f64) {
        self.zoom_percent = (self.zoom_percent * factor)
            .clamp(TIMELINE_MIN_ZOOM_PERCENT, TIMELINE_MAX_ZOOM_PERCENT);
    }

    /// Choose a zoom so the full content duration spans the available width.
    /// No-op until the container has been measured.
    pub fn fit_to_window(&mut self) {
        let Some(width) = self.container_width_px.filter(|w| w.is_finite() && *w > 0.0) else {
            return;
        };
        let duration = self.content_duration_sec;
        if !duration.is_finite() || duration <= 0.0 {
            return;
        }

        let optimal = (width - TIMELINE_FIT_MARGIN_PX) / duration;
        let base = (width / duration).max(TIMELINE_FALLBACK_PX_PER_SEC);
        self.zoom_percent = ((optimal / base) * 100.0)
            .clamp(TIMELINE_MIN_ZOOM_PERCENT, TIMELINE_MAX_ZOOM_PERCENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> TimelineViewport {
        TimelineViewport::new(Some(880.0), 60.0)
    }

    #[test]
    fn test_base_rate() {
        // (880 - 80) / 60 = 13.33 px/s at 100% zoom
        let pps = viewport().pixels_per_second();
        assert!((pps - 800.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_readability_floor() {
        // Long content would drop below 10 px/s without the floor
        let vp = TimelineViewport::new(Some(880.0), 600.0);
        assert_eq!(vp.pixels_per_second(), 10.0);
    }

    #[test]
    fn test_fallback_rate_on_bad_geometry() {
        let no_width = TimelineViewport::new(None, 60.0);
        assert_eq!(no_width.pixels_per_second(), 20.0);

        let no_duration = TimelineViewport::new(Some(880.0), 0.0);
        assert_eq!(no_duration.pixels_per_second(), 20.0);

        let mut zoomed = TimelineViewport::new(None, 0.0);
        zoomed.zoom_percent = 50.0;
        assert_eq!(zoomed.pixels_per_second(), 10.0);
    }

    #[test]
    fn test_available_width_floor() {
        // Tiny containers still map against a 200px usable width
        let vp = TimelineViewport::new(Some(120.0), 10.0);
        assert_eq!(vp.pixels_per_second(), 20.0);
    }

    #[test]
    fn test_mapping_round_trip() {
        let vp = viewport();
        for t in [0.0, 0.5, 13.37, 59.99] {
            let x = vp.time_to_x(t);
            assert!((vp.x_to_time(x) - t).abs() < 1e-9);
        }
    }

    #[test]
    fn test_time_to_x_monotonic() {
        let vp = viewport();
        let mut last = f64::NEG_INFINITY;
        for i in 0..100 {
            let x = vp.time_to_x(i as f64 * 0.37);
            assert!(x > last);
            last = x;
        }
    }

    #[test]
    fn test_zoom_clamps_at_max() {
        let mut vp = viewport();
        for _ in 0..50 {
            vp.zoom(1.2);
        }
        assert_eq!(vp.zoom_percent, 1000.0);
        vp.zoom(1.2);
        assert_eq!(vp.zoom_percent, 1000.0);
    }

    #[test]
    fn test_zoom_clamps_at_min() {
        let mut vp = viewport();
        for _ in 0..50 {
            vp.zoom(0.8);
        }
        assert_eq!(vp.zoom_percent, 25.0);
    }

    #[test]
    fn test_zoom_scales_rate() {
        let mut vp = viewport();
        let base = vp.pixels_per_second();
        vp.zoom(2.0);
        assert!((vp.pixels_per_second() - base * 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_fit_to_window() {
        let mut vp = viewport();
        vp.zoom_percent = 400.0;
        vp.fit_to_window();
        // optimal = (880-100)/60 = 13.0; base = max(880/60, 20) = 20
        let expected = (13.0 / 20.0) * 100.0;
        assert!((vp.zoom_percent - expected).abs() < 1e-9);

        // And the fit zoom never leaves the clamp range
        assert!(vp.zoom_percent >= 25.0 && vp.zoom_percent <= 1000.0);
    }

    #[test]
    fn test_fit_to_window_noop_without_measurement() {
        let mut vp = TimelineViewport::new(None, 60.0);
        vp.zoom_percent = 300.0;
        vp.fit_to_window();
        assert_eq!(vp.zoom_percent, 300.0);
    }

    #[test]
    fn test_clamp_seek() {
        let vp = viewport();
        assert_eq!(vp.clamp_seek(-2.0), 0.0);
        assert_eq!(vp.clamp_seek(30.0), 30.0);
        assert_eq!(vp.clamp_seek(600.0), 60.0);
    }
}
