use dioxus::prelude::*;

use crate::constants::{ACCENT_SEGMENT, BG_ELEVATED, BORDER_ACCENT, TEXT_PRIMARY};
use crate::core::gesture::{segment_geometry, DragGesture, DragMode};
use crate::core::mapper::TimelineViewport;
use crate::state::Segment;
use crate::timeline::format_clock_millis;

/// Interactive subtitle segment with drag and edge-resize support.
///
/// Timing math lives in [`DragGesture`]; this component only wires DOM
/// events to it. While a gesture is active a full-screen overlay captures
/// mouse movement so fast drags cannot escape the element bounds.
#[component]
pub(crate) fn SegmentElement(
    segment: Segment,
    viewport: TimelineViewport,
    is_selected: bool,
    on_select: EventHandler<u32>,
    on_timing: EventHandler<(u32, f64, f64)>,
    on_gesture_end: EventHandler<()>,
) -> Element {
    let mut gesture = use_signal(|| None::<DragGesture>);

    let (left, width) = segment_geometry(&segment, &viewport);
    let segment_index = segment.index;
    let seg_for_move = segment.clone();
    let seg_for_left = segment.clone();
    let seg_for_right = segment.clone();

    let is_active = gesture().is_some();
    let cursor_style = match gesture().map(|g| g.mode) {
        Some(DragMode::ResizeLeft) | Some(DragMode::ResizeRight) => "ew-resize",
        Some(DragMode::Move) => "grabbing",
        None => "grab",
    };
    let z_index = if is_active { "100" } else { "1" };

    let border_color = if is_selected { BORDER_ACCENT } else { ACCENT_SEGMENT };
    let selection_ring = if is_selected {
        format!("0 0 0 1px {}", BORDER_ACCENT)
    } else {
        "none".to_string()
    };

    let title = format!(
        "#{}  {} → {}",
        segment.index,
        format_clock_millis(segment.start),
        format_clock_millis(segment.end),
    );

    rsx! {
        // Main segment element
        div {
            style: "
                position: absolute;
                left: {left}px;
                top: 4px;
                width: {width}px;
                height: 36px;
                background-color: {BG_ELEVATED};
                border: 1px solid {border_color};
                box-shadow: {selection_ring};
                border-radius: 4px;
                display: flex;
                align-items: center;
                overflow: visible;
                cursor: {cursor_style};
                user-select: none;
                z-index: {z_index};
            ",
            title: "{title}",

            // Left resize handle
            div {
                style: "
                    position: absolute; left: -4px; top: 0; bottom: 0; width: 10px;
                    cursor: ew-resize; z-index: 10;
                    border-radius: 4px 0 0 4px;
                ",
                onmousedown: move |e| {
                    if let Some(btn) = e.trigger_button() {
                        if format!("{:?}", btn) == "Primary" {
                            e.prevent_default();
                            e.stop_propagation();
                            on_select.call(segment_index);
                            gesture.set(Some(DragGesture::begin(
                                DragMode::ResizeLeft,
                                &seg_for_left,
                                e.client_coordinates().x,
                                &viewport,
                            )));
                        }
                    }
                },
            }

            // Center drag area
            div {
                style: "
                    flex: 1; height: 100%; display: flex; align-items: center;
                    padding: 0 8px; overflow: hidden; position: relative; z-index: 1;
                ",
                onmousedown: move |e| {
                    if let Some(btn) = e.trigger_button() {
                        if format!("{:?}", btn) == "Primary" {
                            e.prevent_default();
                            e.stop_propagation();
                            on_select.call(segment_index);
                            gesture.set(Some(DragGesture::begin(
                                DragMode::Move,
                                &seg_for_move,
                                e.client_coordinates().x,
                                &viewport,
                            )));
                        }
                    }
                },
                div {
                    style: "width: 3px; height: 20px; border-radius: 2px; background-color: {ACCENT_SEGMENT}; flex-shrink: 0; margin-right: 6px;",
                }
                span {
                    style: "
                        font-size: 10px; color: {TEXT_PRIMARY};
                        white-space: nowrap; overflow: hidden; text-overflow: ellipsis;
                        flex: 1; min-width: 0;
                    ",
                    "{segment.text}"
                }
            }

            // Right resize handle
            div {
                style: "
                    position: absolute; right: -4px; top: 0; bottom: 0; width: 10px;
                    cursor: ew-resize; z-index: 10;
                    border-radius: 0 4px 4px 0;
                ",
                onmousedown: move |e| {
                    if let Some(btn) = e.trigger_button() {
                        if format!("{:?}", btn) == "Primary" {
                            e.prevent_default();
                            e.stop_propagation();
                            on_select.call(segment_index);
                            gesture.set(Some(DragGesture::begin(
                                DragMode::ResizeRight,
                                &seg_for_right,
                                e.client_coordinates().x,
                                &viewport,
                            )));
                        }
                    }
                },
            }
        }

        // Global drag overlay - captures all mouse events while a gesture is active
        if gesture().is_some() {
            div {
                style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; z-index: 9999; cursor: {cursor_style};",
                oncontextmenu: move |e| e.prevent_default(),
                onmousemove: move |e| {
                    if let Some(active) = gesture() {
                        if let Some(update) = active.update(e.client_coordinates().x, &viewport) {
                            on_timing.call((segment_index, update.start, update.end));
                        }
                    }
                },
                onmouseup: move |_| {
                    gesture.set(None);
                    on_gesture_end.call(());
                },
            }
        }
    }
}
