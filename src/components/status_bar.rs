use dioxus::prelude::*;
use crate::constants::*;
use crate::state::JobPhase;

#[component]
pub fn StatusBar(
    job_id: Option<String>,
    phase: Option<JobPhase>,
    segment_count: usize,
    dirty: bool,
) -> Element {
    let job_label = job_id.unwrap_or_else(|| "no job".to_string());
    let phase_label = match phase {
        Some(p) => format!("{:?}", p),
        None => "Idle".to_string(),
    };
    let dirty_label = if dirty { "● unsaved" } else { "saved" };
    let dirty_color = if dirty { ACCENT_WARNING } else { TEXT_DIM };

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; height: 22px; padding: 0 14px; background-color: {BG_SURFACE}; border-top: 1px solid {BORDER_DEFAULT}; font-size: 11px; color: {TEXT_DIM};",
            span { "{phase_label}" }
            div {
                style: "display: flex; gap: 16px; font-family: 'SF Mono', Consolas, monospace;",
                span { style: "color: {dirty_color};", "{dirty_label}" }
                span { "{segment_count} segments" }
                span { "job: {job_label}" }
            }
        }
    }
}
