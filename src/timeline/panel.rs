use dioxus::prelude::*;

use crate::constants::{
    BG_ELEVATED, BG_HOVER, BG_SURFACE,
    BORDER_DEFAULT,
    TEXT_DIM, TEXT_MUTED,
    ACCENT_ERROR,
};
use crate::core::mapper::TimelineViewport;
use crate::state::Segment;

use super::format_clock_millis;
use super::ruler::TimeRuler;
use super::segment_element::SegmentElement;

/// Main timeline panel component
#[component]
pub fn TimelinePanel(
    height: f64,
    collapsed: bool,
    on_toggle: EventHandler<MouseEvent>,
    // Timeline state
    viewport: TimelineViewport,
    segments: Vec<Segment>,
    selected_index: Option<u32>,
    playback_time: f64,
    is_playing: bool,
    // Callbacks
    on_seek: EventHandler<f64>,
    on_zoom_in: EventHandler<MouseEvent>,
    on_zoom_out: EventHandler<MouseEvent>,
    on_fit: EventHandler<MouseEvent>,
    on_play_pause: EventHandler<MouseEvent>,
    on_previous_segment: EventHandler<MouseEvent>,
    on_next_segment: EventHandler<MouseEvent>,
    on_measure: EventHandler<f64>,
    // Segment operations
    on_select: EventHandler<u32>,
    on_timing: EventHandler<(u32, f64, f64)>,
    on_gesture_end: EventHandler<()>,
) -> Element {
    let icon = if collapsed { "▲" } else { "▼" };
    let play_icon = if is_playing { "⏸" } else { "▶" };
    let header_cursor = if collapsed { "pointer" } else { "default" };

    let duration = viewport.content_duration_sec.max(0.0);
    let pps = viewport.pixels_per_second();
    let content_width = (duration * pps).max(1.0) as i32;
    let content_width_f = content_width as f64;

    // Clamp so the playhead line never extends past content and grows the scroll area
    let playhead_pos = viewport
        .time_to_x(playback_time)
        .min(content_width_f - 1.0)
        .max(0.0);

    let timecode = format_clock_millis(playback_time);
    let zoom_label = format!("{:.0}%", viewport.zoom_percent);
    let segment_count = segments.len();

    let ruler_height = 24;

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column;
                height: {height}px; min-height: {height}px;
                background-color: {BG_ELEVATED};
                overflow: hidden;
            ",

            // Header
            div {
                style: "
                    display: flex; align-items: center; justify-content: space-between;
                    height: 32px; padding: 0 14px;
                    background-color: {BG_SURFACE}; border-bottom: 1px solid {BORDER_DEFAULT};
                    flex-shrink: 0;
                    cursor: {header_cursor};
                ",
                onclick: move |e| {
                    if collapsed {
                        on_toggle.call(e);
                    }
                },

                // Left: label + zoom controls
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    onclick: move |e| e.stop_propagation(),
                    span {
                        style: "font-size: 11px; font-weight: 500; color: {TEXT_MUTED}; text-transform: uppercase; letter-spacing: 0.5px;",
                        "Timeline"
                    }
                    span {
                        style: "font-size: 10px; color: {TEXT_DIM};",
                        "{segment_count} segments"
                    }

                    // Zoom controls
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |e| on_zoom_out.call(e),
                            "−"
                        }
                        span {
                            style: "font-size: 10px; color: {TEXT_DIM}; min-width: 40px; text-align: center;",
                            "{zoom_label}"
                        }
                        button {
                            class: "collapse-btn",
                            style: "width: 20px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 12px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |e| on_zoom_in.call(e),
                            "+"
                        }
                        button {
                            class: "collapse-btn",
                            style: "padding: 0 6px; height: 20px; border: none; border-radius: 3px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                            onclick: move |e| on_fit.call(e),
                            "Fit"
                        }
                    }
                }

                // Center: playback controls
                div {
                    style: "display: flex; align-items: center; gap: 4px;",
                    onclick: move |e| e.stop_propagation(),
                    PlaybackBtn {
                        icon: "⏮",
                        on_click: move |_| on_seek.call(0.0),
                    }
                    PlaybackBtn {
                        icon: "|◀",
                        on_click: move |e| on_previous_segment.call(e),
                    }
                    PlaybackBtn {
                        icon: play_icon,
                        primary: true,
                        on_click: move |e| on_play_pause.call(e),
                    }
                    PlaybackBtn {
                        icon: "▶|",
                        on_click: move |e| on_next_segment.call(e),
                    }
                    PlaybackBtn {
                        icon: "⏭",
                        on_click: move |_| on_seek.call(duration),
                    }
                }

                // Right: timecode + collapse button
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    span {
                        style: "font-family: 'SF Mono', Consolas, monospace; font-size: 11px; color: {TEXT_DIM};",
                        "{timecode}"
                    }
                    button {
                        class: "collapse-btn",
                        style: "width: 24px; height: 24px; border: none; border-radius: 4px; background: transparent; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center;",
                        onclick: move |e| {
                            e.stop_propagation();
                            on_toggle.call(e);
                        },
                        "{icon}"
                    }
                }
            }

            // Scrollable content: sticky ruler on top, segment track below.
            // The host div is what gets measured for pixels-per-second.
            if !collapsed {
                div {
                    id: "timeline-scroll-host",
                    style: "
                        flex: 1;
                        overflow-x: auto;
                        overflow-y: hidden;
                        position: relative;
                    ",
                    onmounted: move |e| {
                        spawn(async move {
                            if let Ok(rect) = e.data().get_client_rect().await {
                                on_measure.call(rect.size.width);
                            }
                        });
                    },
                    onresize: move |e| {
                        if let Ok(size) = e.get_content_box_size() {
                            on_measure.call(size.width);
                        }
                    },

                    div {
                        style: "
                            min-width: {content_width}px;
                            display: flex;
                            flex-direction: column;
                            position: relative;
                            height: 100%;
                        ",

                        // Ruler row - sticky at top, click to seek
                        div {
                            style: "
                                height: {ruler_height}px;
                                min-height: {ruler_height}px;
                                position: sticky;
                                top: 0;
                                z-index: 15;
                                background-color: {BG_SURFACE};
                                border-bottom: 1px solid {BORDER_DEFAULT};
                                cursor: pointer;
                                overflow: hidden;
                            ",
                            onmousedown: move |e| {
                                e.prevent_default();
                                // element_coordinates is in scroll (content) space
                                let t = viewport.x_to_time(e.element_coordinates().x);
                                on_seek.call(viewport.clamp_seek(t));
                            },

                            TimeRuler { viewport: viewport }

                            // Playhead indicator on ruler
                            div {
                                style: "
                                    position: absolute;
                                    left: {playhead_pos}px;
                                    top: 0;
                                    width: 1px;
                                    height: 100%;
                                    background-color: {ACCENT_ERROR};
                                    pointer-events: none;
                                ",
                            }
                            div {
                                style: "
                                    position: absolute;
                                    left: {playhead_pos - 5.0}px;
                                    top: 0;
                                    width: 0;
                                    height: 0;
                                    border-left: 6px solid transparent;
                                    border-right: 6px solid transparent;
                                    border-top: 8px solid {ACCENT_ERROR};
                                    pointer-events: none;
                                ",
                            }
                        }

                        // Segment track
                        div {
                            style: "
                                flex: 1;
                                position: relative;
                                min-height: 44px;
                            ",
                            onmousedown: move |e| {
                                // Clicking the empty track bed seeks too
                                e.prevent_default();
                                let t = viewport.x_to_time(e.element_coordinates().x);
                                on_seek.call(viewport.clamp_seek(t));
                            },

                            for seg in segments.iter() {
                                SegmentElement {
                                    key: "{seg.index}",
                                    segment: seg.clone(),
                                    viewport: viewport,
                                    is_selected: selected_index == Some(seg.index),
                                    on_select: move |idx| on_select.call(idx),
                                    on_timing: move |update| on_timing.call(update),
                                    on_gesture_end: move |_| on_gesture_end.call(()),
                                }
                            }

                            // Playhead line overlaying the track
                            div {
                                style: "
                                    position: absolute;
                                    left: {playhead_pos}px;
                                    top: 0;
                                    width: 1px;
                                    height: 100%;
                                    background-color: {ACCENT_ERROR};
                                    pointer-events: none;
                                    z-index: 10;
                                ",
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Playback button
#[component]
fn PlaybackBtn(
    icon: &'static str,
    #[props(default = false)] primary: bool,
    on_click: EventHandler<MouseEvent>,
) -> Element {
    let bg = if primary { BG_HOVER } else { "transparent" };
    rsx! {
        button {
            class: "collapse-btn",
            style: "width: 26px; height: 26px; border: none; border-radius: 4px; background-color: {bg}; color: {TEXT_MUTED}; font-size: 10px; cursor: pointer; display: flex; align-items: center; justify-content: center; transition: all 0.12s ease;",
            onclick: move |e| on_click.call(e),
            "{icon}"
        }
    }
}
