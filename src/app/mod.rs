use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use gtk4::prelude::*;
use gtk4::Application;

use crate::analysis::AnalysisClient;
use crate::config::{load_config, ResolvedConfig};
use crate::error::{AppError, AppResult};
use crate::extract::{decode_natural, ImageExtractor, ImageSource};
use crate::notification::DesktopNotifier;
use crate::pipeline::SessionPipeline;
use crate::render::ResultRenderer;
use crate::selection::SelectionController;
use crate::ui::LAYOUT_TOKENS;

mod gestures;
mod image_view;
mod overlay_surface;
mod result_panel;
mod runtime_css;
mod startup;
mod window;
mod worker;

use self::gestures::{connect_toggle_button, ViewerContext};
use self::image_view::image_size;
use self::result_panel::GtkPanelHost;
use self::runtime_css::install_runtime_css;
use self::startup::{gtk_launch_args, StartupConfig};
use self::window::build_viewer_window;

const APPLICATION_ID: &str = "io.github.swatchlens";

pub struct App {
    config: ResolvedConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            config: load_config(),
        }
    }

    /// Loads the image named on the command line and runs the viewer until its window closes.
    pub fn start(&self) -> AppResult<()> {
        let startup_config = StartupConfig::from_args();
        let source = startup_config.image.ok_or(AppError::MissingImageArgument)?;
        let image_name = source.display_name();
        tracing::info!(
            source = %image_name,
            service_url = %self.config.service_url,
            jpeg_quality = self.config.jpeg_quality,
            "loading image"
        );

        let bytes = source.fetch()?;
        let image = decode_natural(&bytes)?;
        tracing::info!(width = image.width(), height = image.height(), "image decoded");

        // Sessions crop from the bytes already in memory instead of refetching the source.
        let pipeline = Arc::new(SessionPipeline::new(
            ImageSource::Memory(Arc::from(bytes)),
            ImageExtractor::new(self.config.jpeg_quality),
            AnalysisClient::http(self.config.service_url.clone()),
        ));
        let min_selection_size = self.config.min_selection_size;
        let image = Rc::new(image);

        tracing::info!("starting gtk runtime");
        let application = Application::new(
            Some(APPLICATION_ID),
            gtk4::gio::ApplicationFlags::NON_UNIQUE,
        );

        let activate_once = Rc::new(Cell::new(false));
        application.connect_activate(move |app| {
            if activate_once.replace(true) {
                tracing::debug!("ignoring duplicate gtk activate signal");
                return;
            }
            install_runtime_css(LAYOUT_TOKENS);

            let viewer = build_viewer_window(app, &image, &image_name, LAYOUT_TOKENS);
            let context = ViewerContext {
                overlay: viewer.overlay.clone(),
                canvas: viewer.canvas.clone(),
                toggle_button: viewer.toggle_button.clone(),
                natural: image_size(&image),
                selection: Rc::new(RefCell::new(SelectionController::new(min_selection_size))),
                renderer: Rc::new(RefCell::new(ResultRenderer::new(GtkPanelHost::new(
                    viewer.overlay.clone(),
                    LAYOUT_TOKENS,
                )))),
                pipeline: pipeline.clone(),
                notifier: DesktopNotifier,
            };
            connect_toggle_button(context);

            tracing::info!("presenting viewer window");
            viewer.window.present();
        });

        let gtk_args = gtk_launch_args();
        application.run_with_args(&gtk_args);
        Ok(())
    }
}
