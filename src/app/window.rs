use gtk4::prelude::*;
use gtk4::{Align, Application, ApplicationWindow, Button, DrawingArea, Overlay};
use image::RgbaImage;

use crate::state::toggle_label;
use crate::ui::StyleTokens;

use super::image_view::build_image_canvas;
use super::runtime_css::{ROOT_CSS_CLASS, TOGGLE_CSS_CLASS};

pub(super) struct ViewerWindow {
    pub(super) window: ApplicationWindow,
    pub(super) overlay: Overlay,
    pub(super) canvas: DrawingArea,
    pub(super) toggle_button: Button,
}

/// Window whose overlay root stacks, bottom to top: the image canvas, the
/// toggle button, and any selection surface or result panel added later.
pub(super) fn build_viewer_window(
    app: &Application,
    image: &RgbaImage,
    image_name: &str,
    style_tokens: StyleTokens,
) -> ViewerWindow {
    let window = ApplicationWindow::new(app);
    let title = format!("SwatchLens - {image_name}");
    window.set_title(Some(&title));
    window.add_css_class(ROOT_CSS_CLASS);
    window.set_default_size(
        style_tokens.window_default_width,
        style_tokens.window_default_height,
    );
    window.set_resizable(true);

    let overlay = Overlay::new();
    let canvas = build_image_canvas(image);
    overlay.set_child(Some(&canvas));

    let toggle_button = Button::with_label(toggle_label(false));
    toggle_button.add_css_class(TOGGLE_CSS_CLASS);
    toggle_button.set_focus_on_click(false);
    toggle_button.set_halign(Align::Start);
    toggle_button.set_valign(Align::Start);
    toggle_button.set_margin_start(style_tokens.toggle_margin);
    toggle_button.set_margin_top(style_tokens.toggle_margin);
    overlay.add_overlay(&toggle_button);

    window.set_child(Some(&overlay));
    ViewerWindow {
        window,
        overlay,
        canvas,
        toggle_button,
    }
}
