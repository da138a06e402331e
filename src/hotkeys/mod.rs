//! Hotkey system
//!
//! Centralized hotkey management for the editor.
//!
//! # Architecture
//!
//! - **HotkeyAction**: Enum of all possible actions that can be triggered by hotkeys
//! - **HotkeyContext**: Determines which hotkeys are active based on app state
//! - **handle_hotkey()**: Main dispatch function that maps key events to actions
//!
//! # Adding New Hotkeys
//!
//! 1. Add a variant to `HotkeyAction`
//! 2. Add the key binding in `handle_hotkey()`
//! 3. Handle the action in the App component's hotkey handler

use dioxus::prelude::Key;

/// All possible actions that can be triggered by hotkeys.
///
/// Each variant represents a semantic action, not a key binding.
/// This decouples "what key was pressed" from "what should happen".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Zoom in on the timeline (increase pixels per second)
    TimelineZoomIn,
    /// Zoom out on the timeline (decrease pixels per second)
    TimelineZoomOut,
    /// Fit the full content duration into the viewport
    TimelineFit,
    /// Toggle playback
    PlayPause,
    /// Push the current segment timing to the backend
    SaveTimeline,
    /// Select and seek to the closest segment before the playhead
    PreviousSegment,
    /// Select and seek to the closest segment after the playhead
    NextSegment,
}

/// Context information that affects which hotkeys are active.
#[derive(Debug, Clone, Default)]
pub struct HotkeyContext {
    /// Whether an input field has focus (should suppress most hotkeys)
    pub input_focused: bool,
}

/// Result of processing a key event.
#[derive(Debug, Clone)]
pub enum HotkeyResult {
    /// A hotkey action was matched and should be executed
    Action(HotkeyAction),
    /// No matching hotkey for this key/context combination
    NoMatch,
    /// Hotkey would match but is suppressed (e.g., input field focused)
    Suppressed,
}

/// Maps a key event to an action, considering the current context.
pub fn handle_hotkey(
    key: &Key,
    _shift: bool,
    ctrl: bool,
    _alt: bool,
    meta: bool,
    context: &HotkeyContext,
) -> HotkeyResult {
    // Suppress hotkeys when typing in an input field
    if context.input_focused {
        return HotkeyResult::Suppressed;
    }

    match key {
        Key::Character(c) if (ctrl || meta) && (c == "s" || c == "S") => {
            return HotkeyResult::Action(HotkeyAction::SaveTimeline);
        }
        Key::Character(c) if c == "+" => return HotkeyResult::Action(HotkeyAction::TimelineZoomIn),
        Key::Character(c) if c == "-" => return HotkeyResult::Action(HotkeyAction::TimelineZoomOut),
        Key::Character(c) if c == "0" && (ctrl || meta) => {
            return HotkeyResult::Action(HotkeyAction::TimelineFit);
        }
        Key::Character(c) if c == " " => return HotkeyResult::Action(HotkeyAction::PlayPause),
        Key::ArrowLeft => return HotkeyResult::Action(HotkeyAction::PreviousSegment),
        Key::ArrowRight => return HotkeyResult::Action(HotkeyAction::NextSegment),
        _ => {}
    }

    HotkeyResult::NoMatch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_zooms_in() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomIn)));
    }

    #[test]
    fn test_minus_zooms_out() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("-".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::TimelineZoomOut)));
    }

    #[test]
    fn test_ctrl_s_saves_timeline() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character("s".to_string()), false, true, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::SaveTimeline)));
    }

    #[test]
    fn test_space_toggles_playback() {
        let ctx = HotkeyContext::default();
        let result = handle_hotkey(&Key::Character(" ".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Action(HotkeyAction::PlayPause)));
    }

    #[test]
    fn test_arrows_navigate_segments() {
        let ctx = HotkeyContext::default();
        let prev = handle_hotkey(&Key::ArrowLeft, false, false, false, false, &ctx);
        assert!(matches!(prev, HotkeyResult::Action(HotkeyAction::PreviousSegment)));
        let next = handle_hotkey(&Key::ArrowRight, false, false, false, false, &ctx);
        assert!(matches!(next, HotkeyResult::Action(HotkeyAction::NextSegment)));
    }

    #[test]
    fn test_suppressed_when_input_focused() {
        let ctx = HotkeyContext {
            input_focused: true,
        };
        let result = handle_hotkey(&Key::Character("+".to_string()), false, false, false, false, &ctx);
        assert!(matches!(result, HotkeyResult::Suppressed));
    }
}
