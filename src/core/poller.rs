//! Adaptive status-polling state machine.
//!
//! Tracks one backend job and decides how long to wait before the next
//! status fetch. The machine itself is pure: the app layer runs a single
//! background task that sleeps for [`PollSchedule::interval`], performs one
//! fetch, and feeds the outcome back in — so polls can never overlap and a
//! failed fetch only influences the next delay.

use std::time::Duration;

use crate::constants::{
    POLL_ACTIVE_INTERVAL_MS, POLL_COMPLETED_INTERVAL_MS, POLL_ERROR_BASE_MS, POLL_ERROR_CAP_MS,
    POLL_IDLE_INTERVAL_MS, POLL_NO_JOB_INTERVAL_MS, POLL_NO_JOB_SLOW_AFTER,
    POLL_NO_JOB_SLOW_INTERVAL_MS,
};
use crate::state::JobStatus;

/// Lifecycle of the tracked job from the poller's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollerPhase {
    /// No job id assigned; polling idles at a slow cadence.
    #[default]
    NoJob,
    /// A job is assigned and may still change.
    Active,
    /// The job reported terminal success with its artifact; it will not
    /// change again.
    Completed,
}

/// Result of one poll attempt, as seen by the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The tick fired with no job assigned.
    NoJob,
    /// A status snapshot was fetched successfully.
    Snapshot(JobStatus),
    /// The backend answered 404 for a job id we hold: the server lost its
    /// state (restart). Not a transient error.
    JobLost,
    /// Network failure or non-2xx response.
    TransportError,
}

/// Adaptive poll scheduler for a single job.
#[derive(Debug, Clone, Default)]
pub struct PollSchedule {
    phase: PollerPhase,
    consecutive_no_job: u32,
    consecutive_errors: u32,
    last_active_processing: bool,
    interval_ms: u64,
}

impl PollSchedule {
    pub fn new() -> Self {
        Self {
            interval_ms: POLL_NO_JOB_INTERVAL_MS,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> PollerPhase {
        self.phase
    }

    /// Delay to sleep before the next poll attempt.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn consecutive_errors(&self) -> u32 {
        self.consecutive_errors
    }

    /// A job id was assigned; start polling it at the idle cadence.
    pub fn job_assigned(&mut self) {
        self.phase = PollerPhase::Active;
        self.consecutive_no_job = 0;
        self.consecutive_errors = 0;
        self.last_active_processing = false;
        self.interval_ms = POLL_IDLE_INTERVAL_MS;
    }

    /// The job id was cleared; fall back to the no-job baseline.
    pub fn job_cleared(&mut self) {
        *self = Self::new();
    }

    /// Fold one poll outcome into the schedule and recompute the interval.
    pub fn observe(&mut self, outcome: &PollOutcome) {
        match outcome {
            PollOutcome::NoJob => {
                self.consecutive_no_job += 1;
                self.phase = PollerPhase::NoJob;
                self.interval_ms = if self.consecutive_no_job > POLL_NO_JOB_SLOW_AFTER {
                    POLL_NO_JOB_SLOW_INTERVAL_MS
                } else {
                    POLL_NO_JOB_INTERVAL_MS
                };
            }
            PollOutcome::Snapshot(status) => {
                self.consecutive_errors = 0;
                self.consecutive_no_job = 0;
                self.last_active_processing = status.phase.is_active_processing();
                self.phase = if status.is_finished() {
                    PollerPhase::Completed
                } else {
                    PollerPhase::Active
                };
                self.interval_ms = match self.phase {
                    PollerPhase::Completed => POLL_COMPLETED_INTERVAL_MS,
                    _ if self.last_active_processing => POLL_ACTIVE_INTERVAL_MS,
                    _ => POLL_IDLE_INTERVAL_MS,
                };
            }
            PollOutcome::JobLost => {
                // Server lost the job: stop escalating, reset to baseline.
                self.job_cleared();
            }
            PollOutcome::TransportError => {
                self.consecutive_errors += 1;
                self.interval_ms = backoff_ms(self.consecutive_errors);
            }
        }
    }
}

/// Exponential backoff after `errors` consecutive failures, capped at 30s.
fn backoff_ms(errors: u32) -> u64 {
    let factor = 2u64.saturating_pow(errors.min(16));
    POLL_ERROR_BASE_MS.saturating_mul(factor).min(POLL_ERROR_CAP_MS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::JobPhase;

    fn snapshot(phase: JobPhase) -> PollOutcome {
        PollOutcome::Snapshot(JobStatus {
            phase,
            ..Default::default()
        })
    }

    fn finished_snapshot() -> PollOutcome {
        PollOutcome::Snapshot(JobStatus {
            phase: JobPhase::Completed,
            final_video_path: Some("out.mp4".to_string()),
            ..Default::default()
        })
    }

    #[test]
    fn test_no_job_escalates_after_three() {
        let mut schedule = PollSchedule::new();
        for _ in 0..3 {
            schedule.observe(&PollOutcome::NoJob);
            assert_eq!(schedule.interval(), Duration::from_millis(15_000));
        }
        schedule.observe(&PollOutcome::NoJob);
        assert_eq!(schedule.interval(), Duration::from_millis(60_000));
    }

    #[test]
    fn test_active_processing_polls_fast() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        schedule.observe(&snapshot(JobPhase::ProcessingVoice));
        assert_eq!(schedule.interval(), Duration::from_millis(3_000));
        assert_eq!(schedule.phase(), PollerPhase::Active);
    }

    #[test]
    fn test_idle_job_polls_medium() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        schedule.observe(&snapshot(JobPhase::SubtitlesCompleted));
        assert_eq!(schedule.interval(), Duration::from_millis(8_000));
    }

    #[test]
    fn test_completed_job_polls_slow() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        schedule.observe(&finished_snapshot());
        assert_eq!(schedule.phase(), PollerPhase::Completed);
        assert_eq!(schedule.interval(), Duration::from_millis(30_000));
    }

    #[test]
    fn test_terminal_phase_without_artifact_stays_active() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        schedule.observe(&snapshot(JobPhase::Completed));
        assert_eq!(schedule.phase(), PollerPhase::Active);
    }

    #[test]
    fn test_backoff_bounded_and_non_decreasing() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        let mut last = Duration::ZERO;
        for _ in 0..12 {
            schedule.observe(&PollOutcome::TransportError);
            let interval = schedule.interval();
            assert!(interval >= last);
            assert!(interval <= Duration::from_millis(30_000));
            last = interval;
        }
        assert_eq!(last, Duration::from_millis(30_000));
    }

    #[test]
    fn test_backoff_sequence() {
        assert_eq!(backoff_ms(1), 10_000);
        assert_eq!(backoff_ms(2), 20_000);
        assert_eq!(backoff_ms(3), 30_000);
        assert_eq!(backoff_ms(30), 30_000);
    }

    #[test]
    fn test_error_counter_resets_on_success() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        schedule.observe(&PollOutcome::TransportError);
        schedule.observe(&PollOutcome::TransportError);
        assert_eq!(schedule.consecutive_errors(), 2);
        schedule.observe(&snapshot(JobPhase::Uploaded));
        assert_eq!(schedule.consecutive_errors(), 0);
        assert_eq!(schedule.interval(), Duration::from_millis(8_000));
    }

    #[test]
    fn test_job_lost_resets_to_no_job_baseline() {
        let mut schedule = PollSchedule::new();
        schedule.job_assigned();
        schedule.observe(&snapshot(JobPhase::ProcessingVoice));
        schedule.observe(&PollOutcome::TransportError);
        schedule.observe(&PollOutcome::JobLost);
        assert_eq!(schedule.phase(), PollerPhase::NoJob);
        assert_eq!(schedule.consecutive_errors(), 0);
        assert_eq!(schedule.interval(), Duration::from_millis(15_000));
    }

    #[test]
    fn test_lifecycle_transitions() {
        let mut schedule = PollSchedule::new();
        assert_eq!(schedule.phase(), PollerPhase::NoJob);
        schedule.job_assigned();
        assert_eq!(schedule.phase(), PollerPhase::Active);
        schedule.observe(&finished_snapshot());
        assert_eq!(schedule.phase(), PollerPhase::Completed);
        schedule.job_cleared();
        assert_eq!(schedule.phase(), PollerPhase::NoJob);
    }
}
