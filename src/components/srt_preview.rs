use dioxus::prelude::*;

use crate::constants::*;

/// Read-only preview of the store serialized back to SRT. What you see
/// here is byte-for-byte what a download/export of the file would contain.
#[component]
pub fn SrtPreview(text: String, segment_count: usize) -> Element {
    let body = if text.is_empty() {
        "No subtitles loaded.".to_string()
    } else {
        text
    };

    rsx! {
        div {
            style: "
                display: flex; flex-direction: column; gap: 8px;
                flex: 1; min-height: 0;
                padding: 12px; background-color: {BG_ELEVATED};
                border: 1px solid {BORDER_DEFAULT}; border-radius: 10px;
            ",
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-size: 12px; color: {TEXT_PRIMARY};", "SRT Preview" }
                span { style: "font-size: 10px; color: {TEXT_MUTED};", "{segment_count} cues" }
            }
            pre {
                style: "
                    flex: 1; min-height: 0; margin: 0; padding: 10px;
                    background-color: {BG_BASE};
                    border: 1px solid {BORDER_SUBTLE}; border-radius: 8px;
                    overflow: auto;
                    font-family: 'SF Mono', Consolas, monospace;
                    font-size: 10px; line-height: 1.5; color: {TEXT_SECONDARY};
                    white-space: pre-wrap;
                ",
                "{body}"
            }
        }
    }
}
