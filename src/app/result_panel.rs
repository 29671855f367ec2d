use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, DrawingArea, Label, Orientation, Overlay};

use crate::render::{PanelHost, ResultPanel, ResultRow};
use crate::ui::{parse_css_color, CssColor, StyleTokens};

use super::runtime_css::{PANEL_CSS_CLASS, PANEL_ROW_CSS_CLASS};

/// Places result panels on the viewer overlay at absolute window coordinates.
#[derive(Debug)]
pub(super) struct GtkPanelHost {
    overlay: Overlay,
    tokens: StyleTokens,
}

impl GtkPanelHost {
    pub(super) fn new(overlay: Overlay, tokens: StyleTokens) -> Self {
        Self { overlay, tokens }
    }

    fn build_row(&self, row: &ResultRow) -> GtkBox {
        let line = GtkBox::new(Orientation::Horizontal, self.tokens.spacing_8);
        line.add_css_class(PANEL_ROW_CSS_CLASS);

        let swatch = DrawingArea::new();
        swatch.set_content_width(self.tokens.swatch_size);
        swatch.set_content_height(self.tokens.swatch_size);
        swatch.set_valign(Align::Center);
        let color = parse_css_color(&row.swatch).unwrap_or_else(|| {
            tracing::debug!(swatch = %row.swatch, "unparsable swatch color; drawing black");
            CssColor::BLACK
        });
        swatch.set_draw_func(move |_, context, width, height| {
            let (red, green, blue) = color.unit_rgb();
            context.save().ok();
            context.rectangle(0.0, 0.0, f64::from(width), f64::from(height));
            context.set_source_rgb(red, green, blue);
            let _ = context.fill_preserve();
            context.set_source_rgba(0.0, 0.0, 0.0, 0.35);
            context.set_line_width(1.0);
            let _ = context.stroke();
            context.restore().ok();
        });

        let label = Label::new(Some(&row.label));
        label.set_xalign(0.0);

        line.append(&swatch);
        line.append(&label);
        line
    }
}

/// Top-left margins for `panel`, pulled back so its minimum footprint stays
/// inside an overlay of the given size.
fn panel_origin_within(
    panel: &ResultPanel,
    overlay_width: i32,
    overlay_height: i32,
    tokens: StyleTokens,
) -> (i32, i32) {
    let rows = i32::try_from(panel.rows.len()).unwrap_or(i32::MAX);
    let min_height = rows
        .saturating_mul(tokens.swatch_size + tokens.spacing_4)
        .saturating_add(2 * tokens.spacing_8);
    let max_x = overlay_width.saturating_sub(tokens.panel_min_width).max(0);
    let max_y = overlay_height.saturating_sub(min_height).max(0);
    let x = (panel.position.x.round().max(0.0) as i32).min(max_x);
    let y = (panel.position.y.round().max(0.0) as i32).min(max_y);
    (x, y)
}

impl PanelHost for GtkPanelHost {
    type Handle = GtkBox;

    fn install(&mut self, panel: &ResultPanel) -> GtkBox {
        let container = GtkBox::new(Orientation::Vertical, 0);
        container.add_css_class(PANEL_CSS_CLASS);
        container.set_halign(Align::Start);
        container.set_valign(Align::Start);
        let (margin_start, margin_top) = panel_origin_within(
            panel,
            self.overlay.width(),
            self.overlay.height(),
            self.tokens,
        );
        container.set_margin_start(margin_start);
        container.set_margin_top(margin_top);
        container.set_can_target(false);

        for row in &panel.rows {
            container.append(&self.build_row(row));
        }

        self.overlay.add_overlay(&container);
        container
    }

    fn remove(&mut self, handle: GtkBox) {
        self.overlay.remove_overlay(&handle);
    }
}
