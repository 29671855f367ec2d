mod panel;
mod renderer;

pub use panel::{
    build_panel, format_percent, ResultPanel, ResultRow, MIN_DISPLAY_PERCENT, PANEL_MARGIN,
};
pub use renderer::{PanelHost, ResultRenderer};

#[cfg(test)]
pub(crate) use renderer::testing as renderer_testing;
