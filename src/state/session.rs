use crate::state::{JobStatus, SegmentStore};

/// One editing session: the current backend job, the segment store it is
/// synchronized against, and playback/selection state.
///
/// Created when a source is loaded and replaced wholesale when a new source
/// arrives; components receive it by reference rather than reaching for
/// ambient globals.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    /// Opaque id of the backend job this session tracks, if any
    pub job_id: Option<String>,
    /// Source of truth for segment timing and text
    pub store: SegmentStore,
    /// Identity index of the selected segment (at most one)
    pub selected_index: Option<u32>,
    /// Current playback position in seconds
    pub playback_time: f64,
    /// Content duration in seconds (0 until known)
    pub duration_seconds: f64,
    pub is_playing: bool,
    /// Timing edits not yet pushed to the backend
    pub dirty: bool,
    /// Last status snapshot observed for the current job
    pub last_status: Option<JobStatus>,
}

impl EditorSession {
    /// Start a fresh session for a newly assigned job.
    pub fn for_job(job_id: impl Into<String>) -> Self {
        Self {
            job_id: Some(job_id.into()),
            ..Default::default()
        }
    }

    /// Seek playback, clamped to the known content duration.
    pub fn seek(&mut self, time: f64) {
        let max = if self.duration_seconds > 0.0 {
            self.duration_seconds
        } else {
            f64::MAX
        };
        self.playback_time = time.clamp(0.0, max);
    }

    /// Select a segment and move the playhead to its start.
    pub fn select_segment(&mut self, index: u32) {
        if let Some(start) = self.store.find(index).map(|s| s.start) {
            self.selected_index = Some(index);
            self.seek(start);
        }
    }

    /// Jump selection to the closest segment before the playhead.
    pub fn select_previous(&mut self) {
        if let Some(index) = self
            .store
            .previous_segment(self.playback_time)
            .map(|s| s.index)
        {
            self.select_segment(index);
        }
    }

    /// Jump selection to the closest segment after the playhead.
    pub fn select_next(&mut self) {
        if let Some(index) = self
            .store
            .next_segment(self.playback_time)
            .map(|s| s.index)
        {
            self.select_segment(index);
        }
    }

    /// Drop all job-derived state after the backend lost the job (404).
    /// The in-memory segments survive; only the remote linkage is cleared.
    pub fn clear_job(&mut self) {
        self.job_id = None;
        self.last_status = None;
        self.is_playing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Segment;

    fn session() -> EditorSession {
        let mut session = EditorSession::for_job("job-1");
        session.duration_seconds = 60.0;
        session.store.replace_all(vec![
            Segment::new(1, 1.0, 3.5, "one"),
            Segment::new(2, 10.0, 12.0, "two"),
        ]);
        session
    }

    #[test]
    fn test_select_seeks_to_start() {
        let mut session = session();
        session.select_segment(2);
        assert_eq!(session.selected_index, Some(2));
        assert_eq!(session.playback_time, 10.0);
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut session = session();
        session.seek(120.0);
        assert_eq!(session.playback_time, 60.0);
        session.seek(-5.0);
        assert_eq!(session.playback_time, 0.0);
    }

    #[test]
    fn test_navigation_selects_and_seeks() {
        let mut session = session();
        session.seek(11.0);
        session.select_previous();
        assert_eq!(session.selected_index, Some(1));
        assert_eq!(session.playback_time, 1.0);
        session.select_next();
        assert_eq!(session.selected_index, Some(2));
    }

    #[test]
    fn test_navigation_noop_at_edges() {
        let mut session = session();
        session.seek(0.0);
        session.select_previous();
        assert_eq!(session.selected_index, None);
    }

    #[test]
    fn test_clear_job_keeps_segments() {
        let mut session = session();
        session.clear_job();
        assert!(session.job_id.is_none());
        assert!(session.last_status.is_none());
        assert_eq!(session.store.len(), 2);
    }
}
