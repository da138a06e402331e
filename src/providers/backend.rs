//! HTTP client for the remote Processing Service.
//!
//! Every call is keyed by the opaque job id. Errors are formatted strings;
//! the one recoverable condition — the server no longer knowing the job —
//! is a [`StatusPoll`] variant rather than an error, because the poller
//! must treat it differently from a transient failure.

use serde_json::json;

use crate::state::{JobStatus, Segment};

/// Result of a status query.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusPoll {
    /// Fresh snapshot for the job.
    Snapshot(JobStatus),
    /// The server answered 404: it restarted and lost the job state.
    JobLost,
}

fn job_url(base_url: &str, path: &str, job_id: &str) -> String {
    format!(
        "{}/api/{}/{}",
        base_url.trim_end_matches('/'),
        path,
        urlencoding::encode(job_id)
    )
}

/// Fetch the current status snapshot for a job.
pub async fn fetch_status(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<StatusPoll, String> {
    let response = client
        .get(job_url(base_url, "status", job_id))
        .send()
        .await
        .map_err(|err| format!("Failed to query job status: {}", err))?;

    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(StatusPoll::JobLost);
    }
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Status query failed: {}", status));
    }

    let snapshot: JobStatus = response
        .json()
        .await
        .map_err(|err| format!("Failed to parse status response: {}", err))?;
    Ok(StatusPoll::Snapshot(snapshot))
}

/// Fetch the raw subtitle text the backend produced for a job.
pub async fn fetch_subtitles(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<String, String> {
    let response = client
        .get(job_url(base_url, "get_subtitles", job_id))
        .send()
        .await
        .map_err(|err| format!("Failed to fetch subtitles: {}", err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Subtitle fetch failed: {}", status));
    }
    response
        .text()
        .await
        .map_err(|err| format!("Failed to read subtitle body: {}", err))
}

/// Push the full ordered segment sequence to the backend.
///
/// Best-effort: gesture handlers fire this without awaiting the UI on it,
/// and a failure must never block or roll back in-memory edits.
pub async fn save_timing(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
    segments: &[Segment],
) -> Result<(), String> {
    let response = client
        .post(job_url(base_url, "update_subtitle_timing", job_id))
        .json(&json!({ "segments": segments }))
        .send()
        .await
        .map_err(|err| format!("Failed to save subtitle timing: {}", err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Timing save rejected: {}", status));
    }
    Ok(())
}

/// Ask the backend to start transcribing the job's video.
pub async fn start_subtitles(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<(), String> {
    post_job_action(client, base_url, "generate_subtitles", job_id).await
}

/// Ask the backend to synthesize voice-over for the job's segments.
pub async fn start_voice(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<(), String> {
    post_job_action(client, base_url, "generate_voice", job_id).await
}

/// Ask the backend to mux the final video.
pub async fn start_final(
    client: &reqwest::Client,
    base_url: &str,
    job_id: &str,
) -> Result<(), String> {
    post_job_action(client, base_url, "create_final_video", job_id).await
}

async fn post_job_action(
    client: &reqwest::Client,
    base_url: &str,
    action: &str,
    job_id: &str,
) -> Result<(), String> {
    let response = client
        .post(job_url(base_url, action, job_id))
        .send()
        .await
        .map_err(|err| format!("Failed to start {}: {}", action, err))?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("Backend rejected {} ({})", action, status));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_url_encodes_id() {
        let url = job_url("http://127.0.0.1:5000/", "status", "job id/1");
        assert_eq!(url, "http://127.0.0.1:5000/api/status/job%20id%2F1");
    }
}
