//! Circle Progress - an animated circular progress ring
//! Built with iced; the ring reveals its progress over two seconds

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = features::Settings::load();
    let window_size = settings.window.size();

    iced::application(
        move || app::App::new(settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window(iced::window::Settings {
        size: window_size,
        resizable: false,
        exit_on_close_request: false,
        ..Default::default()
    })
    .antialiasing(true)
    .run()
    .map_err(|e| anyhow::anyhow!("Failed to run circle progress window: {e}"))
}
