//! State management module
//!
//! Core data structures for the editor:
//! - Segment / SegmentStore: timed subtitle units and their ordered store
//! - JobStatus / JobPhase: backend job snapshots
//! - EditorSession: one editing session (job id, store, playback, selection)

mod job;
mod segment;
mod session;

pub use job::{JobPhase, JobStatus};
pub use segment::{Segment, SegmentStore};
pub use session::EditorSession;
