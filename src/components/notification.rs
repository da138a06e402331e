use dioxus::prelude::*;

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// One-shot banner shown at the top of the window until dismissed.
#[component]
pub fn Notification(
    kind: NotificationKind,
    message: String,
    on_dismiss: EventHandler<MouseEvent>,
) -> Element {
    let accent = match kind {
        NotificationKind::Info => ACCENT_SEGMENT,
        NotificationKind::Success => ACCENT_SUCCESS,
        NotificationKind::Error => ACCENT_ERROR,
    };

    rsx! {
        div {
            style: "
                position: fixed; top: 12px; left: 50%; transform: translateX(-50%);
                display: flex; align-items: center; gap: 10px;
                max-width: 520px; padding: 8px 12px;
                background-color: {BG_ELEVATED};
                border: 1px solid {accent}; border-left: 3px solid {accent};
                border-radius: 8px;
                box-shadow: 0 12px 28px rgba(0,0,0,0.45);
                z-index: 200; font-size: 11px; color: {TEXT_PRIMARY};
            ",
            span {
                style: "white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                "{message}"
            }
            button {
                class: "collapse-btn",
                style: "
                    width: 18px; height: 18px; border: none; border-radius: 4px;
                    background: transparent; color: {TEXT_MUTED};
                    font-size: 11px; cursor: pointer; flex-shrink: 0;
                ",
                onclick: move |e| on_dismiss.call(e),
                "✕"
            }
        }
    }
}
