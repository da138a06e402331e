//! UI components grouped by feature domain.
mod job_panel;
mod notification;
mod srt_preview;
mod status_bar;

pub use job_panel::JobPanel;
pub use notification::{Notification, NotificationKind};
pub use srt_preview::SrtPreview;
pub use status_bar::StatusBar;
