use iced::{Application, Settings, Size};
use timekeep_core::TrackerConfig;
use tracing::{info, warn};

mod app;
mod settings;
mod ui;

use app::TimekeepApp;

fn main() -> iced::Result {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter("info,timekeep=debug")
        .init();

    info!("Starting Timekeep v{}", env!("CARGO_PKG_VERSION"));

    let config = settings::load_settings().unwrap_or_else(|e| {
        warn!("{:#}; using default settings", e);
        TrackerConfig::default()
    });
    info!("Records file: {:?}", config.records_path);

    // Run the application
    TimekeepApp::run(Settings {
        flags: config,
        window: iced::window::Settings {
            size: Size::new(600.0, 520.0),
            min_size: Some(Size::new(480.0, 420.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        ..Default::default()
    })
}
