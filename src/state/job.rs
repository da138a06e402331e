use serde::{Deserialize, Serialize};

/// Backend job phase as reported by the Processing Service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobPhase {
    Uploaded,
    SrtUploaded,
    ProcessingSubtitles,
    SubtitlesCompleted,
    ProcessingVoice,
    VoiceCompleted,
    ProcessingCombined,
    ProcessingFinal,
    CreatingFinalVideo,
    Completed,
    FinalVideoCompleted,
    Error,
    /// Any phase string this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl JobPhase {
    /// Phases where the backend is actively chewing on the job.
    pub fn is_active_processing(self) -> bool {
        matches!(
            self,
            JobPhase::ProcessingSubtitles
                | JobPhase::ProcessingVoice
                | JobPhase::ProcessingCombined
                | JobPhase::ProcessingFinal
                | JobPhase::CreatingFinalVideo
        )
    }

    /// Terminal success phases.
    pub fn is_terminal_success(self) -> bool {
        matches!(self, JobPhase::Completed | JobPhase::FinalVideoCompleted)
    }
}

impl Default for JobPhase {
    fn default() -> Self {
        JobPhase::Unknown
    }
}

/// One status snapshot from the Processing Service. Transient: replaced on
/// every poll, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(rename = "status", default)]
    pub phase: JobPhase,
    /// Overall progress, 0-100
    #[serde(default)]
    pub progress: f64,
    /// Voice synthesis progress, 0-100
    #[serde(default)]
    pub voice_progress: f64,
    /// Human-readable description of the current step
    #[serde(default)]
    pub current_step: Option<String>,
    /// Line currently being synthesized (opaque display string)
    #[serde(default)]
    pub current_dialogue: Option<String>,
    /// Timing of the line currently being synthesized (opaque display string)
    #[serde(default)]
    pub current_timing: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub voice_error: Option<String>,
    #[serde(default)]
    pub final_error: Option<String>,
    /// Present once the backend has produced a subtitle artifact
    #[serde(default)]
    pub srt_path: Option<String>,
    /// Present once the backend has produced the final rendered video
    #[serde(default)]
    pub final_video_path: Option<String>,
}

impl JobStatus {
    /// Whether a subtitle artifact can be fetched for this job.
    pub fn subtitles_available(&self) -> bool {
        self.srt_path.is_some()
    }

    /// Terminal success with the finished artifact present. Jobs in this
    /// state will not change again; polling slows down accordingly.
    pub fn is_finished(&self) -> bool {
        self.phase.is_terminal_success() && self.final_video_path.is_some()
    }

    /// First error string reported by any stage, if the job failed.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or(self.voice_error.as_deref())
            .or(self.final_error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wire_names() {
        let status: JobStatus = serde_json::from_str(
            r#"{"status": "processing_voice", "progress": 42.5, "current_dialogue": "Hello"}"#,
        )
        .unwrap();
        assert_eq!(status.phase, JobPhase::ProcessingVoice);
        assert!(status.phase.is_active_processing());
        assert_eq!(status.progress, 42.5);
        assert_eq!(status.current_dialogue.as_deref(), Some("Hello"));
        assert!(!status.subtitles_available());
    }

    #[test]
    fn test_unknown_phase_falls_back() {
        let status: JobStatus =
            serde_json::from_str(r#"{"status": "reticulating_splines"}"#).unwrap();
        assert_eq!(status.phase, JobPhase::Unknown);
        assert!(!status.phase.is_active_processing());
    }

    #[test]
    fn test_finished_requires_artifact() {
        let completed: JobStatus =
            serde_json::from_str(r#"{"status": "completed", "progress": 100}"#).unwrap();
        assert!(!completed.is_finished());

        let finished: JobStatus = serde_json::from_str(
            r#"{"status": "completed", "progress": 100, "final_video_path": "out.mp4"}"#,
        )
        .unwrap();
        assert!(finished.is_finished());
    }

    #[test]
    fn test_error_message_priority() {
        let status: JobStatus =
            serde_json::from_str(r#"{"status": "error", "voice_error": "tts failed"}"#).unwrap();
        assert_eq!(status.error_message(), Some("tts failed"));
    }
}
