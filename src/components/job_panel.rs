use dioxus::prelude::*;

use crate::constants::*;
use crate::state::{JobPhase, JobStatus};

/// Progress bar row with a caption
#[component]
fn ProgressRow(label: &'static str, percent: f64, color: &'static str) -> Element {
    let percent = percent.clamp(0.0, 100.0);
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 4px;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-size: 10px; color: {TEXT_MUTED};", "{label}" }
                span { style: "font-size: 10px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;", "{percent:.0}%" }
            }
            div {
                style: "
                    height: 6px; border-radius: 999px;
                    background-color: {BG_BASE}; overflow: hidden;
                ",
                div {
                    style: "height: 100%; width: {percent}%; background-color: {color};",
                }
            }
        }
    }
}

#[component]
fn ActionBtn(
    label: &'static str,
    enabled: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let (color, cursor, border) = if enabled {
        (TEXT_PRIMARY, "pointer", BORDER_DEFAULT)
    } else {
        (TEXT_DIM, "not-allowed", BORDER_SUBTLE)
    };
    rsx! {
        button {
            class: "collapse-btn",
            style: "
                padding: 6px 10px; border-radius: 6px;
                border: 1px solid {border};
                background-color: {BG_SURFACE}; color: {color};
                font-size: 11px; cursor: {cursor};
            ",
            disabled: !enabled,
            onclick: move |e| {
                if enabled {
                    on_click.call(e);
                }
            },
            "{label}"
        }
    }
}

/// Job control panel: launches backend stages for the current job and
/// surfaces the latest status snapshot (phase, progress, errors).
#[component]
pub fn JobPanel(
    job_id: Option<String>,
    status: Option<JobStatus>,
    on_start_subtitles: EventHandler<MouseEvent>,
    on_start_voice: EventHandler<MouseEvent>,
    on_start_final: EventHandler<MouseEvent>,
) -> Element {
    let has_job = job_id.is_some();
    let phase = status.as_ref().map(|s| s.phase);
    let active = phase.map(|p| p.is_active_processing()).unwrap_or(false);

    let subtitles_ready = status
        .as_ref()
        .map(|s| s.subtitles_available())
        .unwrap_or(false);
    let voice_done = matches!(
        phase,
        Some(JobPhase::VoiceCompleted)
            | Some(JobPhase::ProcessingCombined)
            | Some(JobPhase::Completed)
            | Some(JobPhase::FinalVideoCompleted)
    );

    let can_transcribe = has_job && !active;
    let can_voice = has_job && !active && subtitles_ready;
    let can_final = has_job && !active && voice_done;

    let (phase_label, phase_color) = match phase {
        None => ("No job", TEXT_MUTED),
        Some(JobPhase::Error) => ("Failed", ACCENT_ERROR),
        Some(p) if p.is_terminal_success() => ("Done", ACCENT_SUCCESS),
        Some(p) if p.is_active_processing() => ("Running", ACCENT_SEGMENT),
        Some(_) => ("Idle", TEXT_MUTED),
    };

    let progress = status.as_ref().map(|s| s.progress).unwrap_or(0.0);
    let voice_progress = status.as_ref().map(|s| s.voice_progress).unwrap_or(0.0);
    let current_step = status.as_ref().and_then(|s| s.current_step.clone());
    let current_dialogue = status.as_ref().and_then(|s| s.current_dialogue.clone());
    let current_timing = status.as_ref().and_then(|s| s.current_timing.clone());
    let error = status.as_ref().and_then(|s| s.error_message().map(str::to_string));
    let final_video = status.as_ref().and_then(|s| s.final_video_path.clone());

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 10px;
                padding: 12px; background-color: {BG_ELEVATED};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 10px;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-size: 12px; color: {TEXT_PRIMARY};", "Processing" }
                span {
                    style: "
                        padding: 2px 8px; font-size: 9px;
                        color: {phase_color}; border: 1px solid {phase_color};
                        border-radius: 999px; text-transform: uppercase;
                        letter-spacing: 0.6px;
                    ",
                    "{phase_label}"
                }
            }

            div {
                style: "display: flex; gap: 6px;",
                ActionBtn {
                    label: "Transcribe",
                    enabled: can_transcribe,
                    on_click: move |e| on_start_subtitles.call(e),
                }
                ActionBtn {
                    label: "Generate Voice",
                    enabled: can_voice,
                    on_click: move |e| on_start_voice.call(e),
                }
                ActionBtn {
                    label: "Final Video",
                    enabled: can_final,
                    on_click: move |e| on_start_final.call(e),
                }
            }

            ProgressRow { label: "Subtitles", percent: progress, color: ACCENT_SEGMENT }
            ProgressRow { label: "Voice", percent: voice_progress, color: ACCENT_SUCCESS }

            if let Some(step) = current_step {
                span { style: "font-size: 10px; color: {TEXT_MUTED};", "{step}" }
            }
            if let Some(dialogue) = current_dialogue {
                span {
                    style: "font-size: 10px; color: {TEXT_SECONDARY}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "\u{201c}{dialogue}\u{201d}"
                }
            }
            if let Some(timing) = current_timing {
                span {
                    style: "font-size: 10px; color: {TEXT_DIM}; font-family: 'SF Mono', Consolas, monospace;",
                    "{timing}"
                }
            }
            if let Some(error) = error {
                span { style: "font-size: 10px; color: #fca5a5;", "{error}" }
            }
            if let Some(path) = final_video {
                span {
                    style: "font-size: 10px; color: {ACCENT_SUCCESS}; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "Final video: {path}"
                }
            }
        }
    }
}
