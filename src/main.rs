//! SubSync Editor
//!
//! A desktop timeline editor for synchronizing subtitle segments against a
//! remote processing service.

mod app;
mod components;
mod constants;
mod core;
mod hotkeys;
mod providers;
mod state;
mod timeline;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "subsync_editor=info".into()),
        )
        .init();

    // Configure the window
    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("SubSync Editor")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None); // Disable default menu bar

    // Launch the Dioxus desktop application
    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
