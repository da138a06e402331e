//! Root application component
//!
//! This defines the main App component and the overall layout structure.

use dioxus::prelude::*;
use std::time::{Duration, Instant};

use crate::components::{JobPanel, Notification, NotificationKind, SrtPreview, StatusBar};
use crate::constants::*;
use crate::core::mapper::TimelineViewport;
use crate::core::poller::{PollOutcome, PollSchedule};
use crate::core::srt::{format_srt_time, parse_srt, serialize_srt};
use crate::hotkeys::{handle_hotkey, HotkeyAction, HotkeyContext, HotkeyResult};
use crate::providers::backend::{self, StatusPoll};
use crate::state::EditorSession;
use crate::timeline::TimelinePanel;

/// Main application component
#[component]
pub fn App() -> Element {
    // Session state - the core data model
    let mut session = use_signal(EditorSession::default);
    let mut viewport = use_signal(|| TimelineViewport::new(None, 0.0));
    let mut schedule = use_signal(PollSchedule::new);
    let client = use_signal(reqwest::Client::new);

    // UI state
    let mut timeline_collapsed = use_signal(|| false);
    let mut notification = use_signal(|| None::<(NotificationKind, String)>);
    let mut job_id_input = use_signal(String::new);
    let mut input_focused = use_signal(|| false);

    // Background status poller. One task for the app's lifetime: sleep for
    // whatever the schedule currently says, do one fetch, feed the outcome
    // back into the schedule.
    use_future(move || async move {
        loop {
            let wait = schedule.read().interval();
            tokio::time::sleep(wait).await;

            let job_id = session.read().job_id.clone();
            let Some(job_id) = job_id else {
                schedule.write().observe(&PollOutcome::NoJob);
                continue;
            };

            let outcome =
                match backend::fetch_status(&client(), DEFAULT_BACKEND_URL, &job_id).await {
                    Ok(StatusPoll::Snapshot(status)) => PollOutcome::Snapshot(status),
                    Ok(StatusPoll::JobLost) => PollOutcome::JobLost,
                    Err(err) => {
                        tracing::warn!(job_id = %job_id, error = %err, "status poll failed");
                        PollOutcome::TransportError
                    }
                };

            match &outcome {
                PollOutcome::Snapshot(status) => {
                    let fetch_needed =
                        status.subtitles_available() && session.read().store.is_empty();
                    session.write().last_status = Some(status.clone());

                    if fetch_needed {
                        match backend::fetch_subtitles(&client(), DEFAULT_BACKEND_URL, &job_id)
                            .await
                        {
                            Ok(text) => {
                                let segments = parse_srt(&text);
                                let mut s = session.write();
                                s.store.replace_all(segments);
                                s.dirty = false;
                                s.duration_seconds = s.duration_seconds.max(s.store.span_end());
                                let duration = s.duration_seconds;
                                drop(s);
                                viewport.write().content_duration_sec = duration;
                            }
                            Err(err) => {
                                tracing::warn!(job_id = %job_id, error = %err, "subtitle fetch failed");
                            }
                        }
                    }
                }
                PollOutcome::JobLost => {
                    session.write().clear_job();
                    notification.set(Some((
                        NotificationKind::Error,
                        "The processing service no longer knows this job (it may have restarted)."
                            .to_string(),
                    )));
                }
                PollOutcome::NoJob | PollOutcome::TransportError => {}
            }

            schedule.write().observe(&outcome);
        }
    });

    // Playback tick - advances the playhead while playing
    use_future(move || async move {
        let mut last_tick = Instant::now();
        loop {
            tokio::time::sleep(Duration::from_millis(16)).await;
            if !session.read().is_playing {
                last_tick = Instant::now();
                continue;
            }

            let now = Instant::now();
            let delta = now.saturating_duration_since(last_tick);
            last_tick = now;

            let mut s = session.write();
            let duration = s.duration_seconds;
            if duration <= 0.0 {
                s.is_playing = false;
                continue;
            }
            let next_time = (s.playback_time + delta.as_secs_f64()).min(duration);
            s.playback_time = next_time;
            if next_time >= duration {
                s.is_playing = false;
            }
        }
    });

    // Fire-and-forget push of the current timing to the backend. The store
    // stays authoritative; a failed save is logged and never rolled back.
    let mut save_timeline = move || {
        let (job_id, segments) = {
            let s = session.read();
            (s.job_id.clone(), s.store.segments().to_vec())
        };
        let Some(job_id) = job_id else {
            return;
        };
        session.write().dirty = false;
        let http = client();
        spawn(async move {
            if let Err(err) =
                backend::save_timing(&http, DEFAULT_BACKEND_URL, &job_id, &segments).await
            {
                tracing::warn!(job_id = %job_id, error = %err, "timing save failed");
            }
        });
    };

    let mut attach_job = move || {
        let id = job_id_input().trim().to_string();
        if id.is_empty() {
            return;
        }
        session.set(EditorSession::for_job(&id));
        let width = viewport.peek().container_width_px;
        viewport.set(TimelineViewport::new(width, 0.0));
        schedule.write().job_assigned();
        notification.set(Some((
            NotificationKind::Info,
            format!("Tracking job {}", id),
        )));
    };

    let mut open_srt_file = move || {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("SubRip subtitles", &["srt"])
                .pick_file()
                .await;
            let Some(file) = picked else { return };
            let text = String::from_utf8_lossy(&file.read().await).to_string();
            let segments = parse_srt(&text);
            if segments.is_empty() {
                notification.set(Some((
                    NotificationKind::Error,
                    "No usable subtitle blocks found in that file.".to_string(),
                )));
                return;
            }
            let count = segments.len();
            let mut s = session.write();
            s.store.replace_all(segments);
            s.selected_index = None;
            s.dirty = false;
            s.duration_seconds = s.duration_seconds.max(s.store.span_end());
            let duration = s.duration_seconds;
            drop(s);
            viewport.write().content_duration_sec = duration;
            notification.set(Some((
                NotificationKind::Success,
                format!("Loaded {} segments", count),
            )));
        });
    };

    let mut start_stage = move |stage: &'static str| {
        let Some(job_id) = session.read().job_id.clone() else {
            return;
        };
        schedule.write().job_assigned();
        let http = client();
        spawn(async move {
            let result = match stage {
                "subtitles" => backend::start_subtitles(&http, DEFAULT_BACKEND_URL, &job_id).await,
                "voice" => backend::start_voice(&http, DEFAULT_BACKEND_URL, &job_id).await,
                _ => backend::start_final(&http, DEFAULT_BACKEND_URL, &job_id).await,
            };
            if let Err(err) = result {
                tracing::warn!(job_id = %job_id, error = %err, "failed to launch {stage}");
                notification.set(Some((NotificationKind::Error, err)));
            }
        });
    };

    // Snapshot the pieces the layout needs
    let (job_id, selected_index, playback_time, is_playing, dirty, last_status, segments) = {
        let s = session.read();
        (
            s.job_id.clone(),
            s.selected_index,
            s.playback_time,
            s.is_playing,
            s.dirty,
            s.last_status.clone(),
            s.store.segments().to_vec(),
        )
    };
    let segment_count = segments.len();
    let srt_text = serialize_srt(&segments);

    // The timeline always shows at least the span covered by segments
    let content_duration = {
        let s = session.read();
        s.store.span_end().max(s.duration_seconds)
    };
    let render_viewport = {
        let mut vp = viewport();
        vp.content_duration_sec = content_duration;
        vp
    };

    // Explicit selection wins; otherwise show whatever the playhead is inside
    let selected_segment = selected_index
        .and_then(|idx| segments.iter().find(|seg| seg.index == idx).cloned())
        .or_else(|| session.read().store.segment_at(playback_time).cloned());

    let timeline_height = if timeline_collapsed() {
        TIMELINE_COLLAPSED_HEIGHT
    } else {
        TIMELINE_DEFAULT_HEIGHT
    };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                width: 100vw; height: 100vh;
                background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                font-family: -apple-system, 'Segoe UI', system-ui, sans-serif;
                overflow: hidden;
            ",
            tabindex: "0",
            onkeydown: move |e: KeyboardEvent| {
                let hotkey_context = HotkeyContext {
                    input_focused: input_focused(),
                };
                let modifiers = e.modifiers();
                match handle_hotkey(
                    &e.key(),
                    modifiers.shift(),
                    modifiers.ctrl(),
                    modifiers.alt(),
                    modifiers.meta(),
                    &hotkey_context,
                ) {
                    HotkeyResult::Action(action) => {
                        e.prevent_default();
                        match action {
                            HotkeyAction::TimelineZoomIn => {
                                viewport.write().zoom(TIMELINE_ZOOM_IN_FACTOR);
                            }
                            HotkeyAction::TimelineZoomOut => {
                                viewport.write().zoom(TIMELINE_ZOOM_OUT_FACTOR);
                            }
                            HotkeyAction::TimelineFit => {
                                let mut vp = viewport.write();
                                vp.content_duration_sec = content_duration;
                                vp.fit_to_window();
                            }
                            HotkeyAction::PlayPause => {
                                let mut s = session.write();
                                s.is_playing = !s.is_playing;
                            }
                            HotkeyAction::SaveTimeline => save_timeline(),
                            HotkeyAction::PreviousSegment => {
                                session.write().select_previous();
                            }
                            HotkeyAction::NextSegment => {
                                session.write().select_next();
                            }
                        }
                    }
                    HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
                }
            },

            // Title bar
            div {
                style: "
                    display: flex; align-items: center; gap: 12px;
                    height: 40px; padding: 0 14px; flex-shrink: 0;
                    background-color: {BG_SURFACE};
                    border-bottom: 1px solid {BORDER_DEFAULT};
                ",
                span {
                    style: "font-size: 13px; font-weight: 600; color: {TEXT_PRIMARY};",
                    "SubSync Editor"
                }
                div { style: "flex: 1;" }

                input {
                    style: "
                        width: 220px; height: 24px; padding: 0 8px;
                        background-color: {BG_BASE}; color: {TEXT_PRIMARY};
                        border: 1px solid {BORDER_DEFAULT}; border-radius: 6px;
                        font-size: 11px; font-family: 'SF Mono', Consolas, monospace;
                        outline: none;
                    ",
                    placeholder: "job id",
                    value: "{job_id_input}",
                    oninput: move |e| job_id_input.set(e.value()),
                    onfocusin: move |_| input_focused.set(true),
                    onfocusout: move |_| input_focused.set(false),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            attach_job();
                        }
                    },
                }
                button {
                    class: "collapse-btn",
                    style: "
                        padding: 4px 10px; border-radius: 6px;
                        border: 1px solid {BORDER_DEFAULT};
                        background-color: {BG_ELEVATED}; color: {TEXT_PRIMARY};
                        font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| attach_job(),
                    "Track Job"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        padding: 4px 10px; border-radius: 6px;
                        border: 1px solid {BORDER_DEFAULT};
                        background-color: {BG_ELEVATED}; color: {TEXT_PRIMARY};
                        font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| open_srt_file(),
                    "Open SRT…"
                }
                button {
                    class: "collapse-btn",
                    style: "
                        padding: 4px 10px; border-radius: 6px;
                        border: 1px solid {BORDER_DEFAULT};
                        background-color: {BG_ELEVATED}; color: {TEXT_PRIMARY};
                        font-size: 11px; cursor: pointer;
                    ",
                    onclick: move |_| save_timeline(),
                    if dirty { "Save ●" } else { "Save" }
                }
            }

            // Main content row
            div {
                style: "flex: 1; display: flex; min-height: 0;",

                // Left column: job controls + SRT preview
                div {
                    style: "
                        width: 340px; min-width: 340px;
                        display: flex; flex-direction: column; gap: 10px;
                        padding: 12px; overflow: hidden;
                        border-right: 1px solid {BORDER_DEFAULT};
                    ",
                    JobPanel {
                        job_id: job_id.clone(),
                        status: last_status.clone(),
                        on_start_subtitles: move |_| start_stage("subtitles"),
                        on_start_voice: move |_| start_stage("voice"),
                        on_start_final: move |_| start_stage("final"),
                    }
                    SrtPreview {
                        text: srt_text,
                        segment_count: segment_count,
                    }
                }

                // Right: segment inspector
                div {
                    style: "
                        flex: 1; display: flex; flex-direction: column;
                        align-items: center; justify-content: center;
                        padding: 12px; min-width: 0;
                    ",
                    SegmentInspector { segment: selected_segment }
                }
            }

            // Timeline panel
            TimelinePanel {
                height: timeline_height,
                collapsed: timeline_collapsed(),
                on_toggle: move |_| timeline_collapsed.set(!timeline_collapsed()),
                viewport: render_viewport,
                segments: segments.clone(),
                selected_index: selected_index,
                playback_time: playback_time,
                is_playing: is_playing,
                on_seek: move |t| session.write().seek(t),
                on_zoom_in: move |_| viewport.write().zoom(TIMELINE_ZOOM_IN_FACTOR),
                on_zoom_out: move |_| viewport.write().zoom(TIMELINE_ZOOM_OUT_FACTOR),
                on_fit: move |_| {
                    let mut vp = viewport.write();
                    vp.content_duration_sec = content_duration;
                    vp.fit_to_window();
                },
                on_play_pause: move |_| {
                    let mut s = session.write();
                    s.is_playing = !s.is_playing;
                },
                on_previous_segment: move |_| session.write().select_previous(),
                on_next_segment: move |_| session.write().select_next(),
                on_measure: move |width| viewport.write().container_width_px = Some(width),
                on_select: move |index| session.write().select_segment(index),
                on_timing: move |(index, start, end): (u32, f64, f64)| {
                    let mut s = session.write();
                    if s.store.apply_timing(index, start, end) {
                        s.dirty = true;
                    }
                },
                on_gesture_end: move |_| {
                    session.write().store.sort_by_start();
                    save_timeline();
                },
            }

            StatusBar {
                job_id: job_id.clone(),
                phase: last_status.as_ref().map(|s| s.phase),
                segment_count: segment_count,
                dirty: dirty,
            }

            if let Some((kind, message)) = notification() {
                Notification {
                    kind: kind,
                    message: message,
                    on_dismiss: move |_| notification.set(None),
                }
            }
        }
    }
}

/// Detail card for the selected segment
#[component]
fn SegmentInspector(segment: Option<crate::state::Segment>) -> Element {
    let Some(segment) = segment else {
        return rsx! {
            span {
                style: "font-size: 11px; color: {TEXT_DIM};",
                "Select a segment on the timeline to inspect it."
            }
        };
    };

    let start = format_srt_time(segment.start);
    let end = format_srt_time(segment.end);
    let duration = segment.duration();

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 8px;
                width: 100%; max-width: 460px;
                padding: 14px; background-color: {BG_ELEVATED};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 10px;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-size: 12px; color: {TEXT_PRIMARY};", "Segment #{segment.index}" }
                span {
                    style: "font-size: 10px; color: {TEXT_MUTED}; font-family: 'SF Mono', Consolas, monospace;",
                    "{duration:.3}s"
                }
            }
            span {
                style: "font-size: 11px; color: {TEXT_SECONDARY}; font-family: 'SF Mono', Consolas, monospace;",
                "{start} --> {end}"
            }
            span {
                style: "font-size: 12px; color: {TEXT_PRIMARY}; line-height: 1.5;",
                "{segment.text}"
            }
        }
    }
}
