//! Shared UI constants such as colors, panel sizing, and engine policy values
//! (timeline geometry floors, zoom bounds, polling cadence).

pub const BG_BASE: &str = "#0a0a0b";
pub const BG_ELEVATED: &str = "#141414";
pub const BG_SURFACE: &str = "#1a1a1a";
pub const BG_HOVER: &str = "#262626";

pub const BORDER_SUBTLE: &str = "#1f1f1f";
pub const BORDER_DEFAULT: &str = "#27272a";
pub const BORDER_STRONG: &str = "#3f3f46";
pub const BORDER_ACCENT: &str = "#3b82f6";

pub const TEXT_PRIMARY: &str = "#fafafa";
pub const TEXT_SECONDARY: &str = "#a1a1aa";
pub const TEXT_MUTED: &str = "#71717a";
pub const TEXT_DIM: &str = "#52525b";

pub const ACCENT_SEGMENT: &str = "#3b82f6";
pub const ACCENT_SUCCESS: &str = "#22c55e";
pub const ACCENT_ERROR: &str = "#ef4444";
pub const ACCENT_WARNING: &str = "#f97316";

pub const TIMELINE_DEFAULT_HEIGHT: f64 = 220.0;
pub const TIMELINE_COLLAPSED_HEIGHT: f64 = 32.0;

/// Horizontal space reserved for surrounding UI chrome when deriving the
/// base pixels-per-second rate from the container width.
pub const TIMELINE_UI_MARGIN_PX: f64 = 80.0;
/// Floor on the usable width after the margin is reserved.
pub const TIMELINE_MIN_AVAILABLE_PX: f64 = 200.0;
/// Readability floor: never render fewer than this many pixels per second.
pub const TIMELINE_MIN_PX_PER_SEC: f64 = 10.0;
/// Rate used when the container width or content duration is unusable.
pub const TIMELINE_FALLBACK_PX_PER_SEC: f64 = 20.0;
/// Margin left inside the viewport by fit-to-window.
pub const TIMELINE_FIT_MARGIN_PX: f64 = 100.0;

pub const TIMELINE_MIN_ZOOM_PERCENT: f64 = 25.0;
pub const TIMELINE_MAX_ZOOM_PERCENT: f64 = 1000.0;
pub const TIMELINE_DEFAULT_ZOOM_PERCENT: f64 = 100.0;
pub const TIMELINE_ZOOM_IN_FACTOR: f64 = 1.2;
pub const TIMELINE_ZOOM_OUT_FACTOR: f64 = 0.8;

/// Smallest pixel width a resize gesture may leave a segment with.
pub const SEGMENT_MIN_RESIZE_WIDTH_PX: f64 = 20.0;
/// Smallest pixel width a segment is ever rendered with. Display-only;
/// never written back into segment timing.
pub const SEGMENT_MIN_RENDER_WIDTH_PX: f64 = 40.0;

/// Dead zone around the playhead for previous/next segment navigation.
pub const SEGMENT_NAV_GUARD_SECONDS: f64 = 0.5;

pub const POLL_NO_JOB_INTERVAL_MS: u64 = 15_000;
pub const POLL_NO_JOB_SLOW_INTERVAL_MS: u64 = 60_000;
/// Consecutive no-job polls tolerated before slowing down.
pub const POLL_NO_JOB_SLOW_AFTER: u32 = 3;
pub const POLL_COMPLETED_INTERVAL_MS: u64 = 30_000;
pub const POLL_ACTIVE_INTERVAL_MS: u64 = 3_000;
pub const POLL_IDLE_INTERVAL_MS: u64 = 8_000;
pub const POLL_ERROR_BASE_MS: u64 = 5_000;
pub const POLL_ERROR_CAP_MS: u64 = 30_000;

/// Default Processing Service endpoint.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
