use dioxus::prelude::*;

use crate::constants::{BORDER_STRONG, BORDER_SUBTLE, TEXT_DIM};
use crate::core::mapper::TimelineViewport;
use crate::timeline::format_clock;

/// Time ruler with tick marks and labels.
/// All elements use pointer-events: none so clicks pass through to the
/// seek handler on the parent.
#[component]
pub(crate) fn TimeRuler(viewport: TimelineViewport) -> Element {
    let duration = viewport.content_duration_sec.max(0.0);
    let pps = viewport.pixels_per_second();

    // Longer content gets sparser major markers
    let major_interval = if duration > 300.0 {
        60.0
    } else if duration > 60.0 {
        30.0
    } else {
        10.0
    };
    let minor_interval = major_interval / 5.0;
    // Minor ticks only once zoomed in enough to keep them readable
    let show_minor = viewport.zoom_percent > 100.0;

    let major_count = (duration / major_interval).floor() as i32 + 1;
    let minor_count = (duration / minor_interval).floor() as i32 + 1;

    rsx! {
        div {
            style: "position: absolute; left: 0; top: 0; width: 100%; height: 100%; pointer-events: none;",

            if show_minor {
                for i in 0..minor_count {
                    {
                        let t = i as f64 * minor_interval;
                        let x = t * pps;
                        let on_major = (t % major_interval).abs() < 1e-9;
                        if !on_major {
                            rsx! {
                                div {
                                    key: "minor-{i}",
                                    style: "
                                        position: absolute;
                                        left: {x}px;
                                        bottom: 0;
                                        width: 1px;
                                        height: 5px;
                                        background-color: {BORDER_SUBTLE};
                                        pointer-events: none;
                                    ",
                                }
                            }
                        } else {
                            rsx! {}
                        }
                    }
                }
            }

            for i in 0..major_count {
                {
                    let t = i as f64 * major_interval;
                    let x = t * pps;
                    let label = format_clock(t);
                    rsx! {
                        div {
                            key: "major-{i}",
                            div {
                                style: "
                                    position: absolute;
                                    left: {x}px;
                                    bottom: 0;
                                    width: 1px;
                                    height: 10px;
                                    background-color: {BORDER_STRONG};
                                    pointer-events: none;
                                ",
                            }
                            div {
                                style: "
                                    position: absolute;
                                    left: {x + 4.0}px;
                                    top: 3px;
                                    font-size: 9px;
                                    color: {TEXT_DIM};
                                    font-family: 'SF Mono', Consolas, monospace;
                                    user-select: none;
                                    pointer-events: none;
                                ",
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
