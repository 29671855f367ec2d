pub mod analysis;
pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod logging;
pub mod notification;
pub mod pipeline;
pub mod render;
pub mod selection;
pub mod state;
pub mod ui;
pub use error::{AppError, AppResult};

/// Entrypoint used by the CLI binary.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting SwatchLens");

    let app = app::App::new();
    app.start()?;

    tracing::info!("viewer closed");
    Ok(())
}
