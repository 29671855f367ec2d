use crate::ui::StyleTokens;
use gtk4::CssProvider;

pub(super) const ROOT_CSS_CLASS: &str = "swatchlens-root";
pub(super) const TOGGLE_CSS_CLASS: &str = "analysis-toggle";
pub(super) const PANEL_CSS_CLASS: &str = "result-panel";
pub(super) const PANEL_ROW_CSS_CLASS: &str = "result-row";

pub(super) fn runtime_css(tokens: StyleTokens) -> String {
    format!(
        "
window.{ROOT_CSS_CLASS} {{
  background: #1e1e1e;
}}
button.{TOGGLE_CSS_CLASS} {{
  border-radius: {control_radius}px;
  padding: {spacing_8}px {spacing_12}px;
  background: #ffffff;
  color: #111111;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.25);
}}
.{PANEL_CSS_CLASS} {{
  background: #ffffff;
  color: #111111;
  border: {border_width}px solid #cccccc;
  border-radius: {panel_radius}px;
  padding: {spacing_8}px;
  min-width: {panel_min_width}px;
  box-shadow: 0 2px 8px rgba(0, 0, 0, 0.2);
}}
.{PANEL_CSS_CLASS} label {{
  color: #111111;
}}
.{PANEL_ROW_CSS_CLASS} {{
  margin-bottom: {spacing_4}px;
}}
",
        control_radius = tokens.control_radius,
        panel_radius = tokens.panel_radius,
        border_width = tokens.border_width,
        panel_min_width = tokens.panel_min_width,
        spacing_4 = tokens.spacing_4,
        spacing_8 = tokens.spacing_8,
        spacing_12 = tokens.spacing_8 + tokens.spacing_4,
    )
}

pub(super) fn install_runtime_css(tokens: StyleTokens) {
    let provider = CssProvider::new();
    provider.load_from_data(&runtime_css(tokens));
    if let Some(display) = gtk4::gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    } else {
        tracing::warn!("no default display; runtime css not installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::LAYOUT_TOKENS;

    #[test]
    fn runtime_css_sizes_panel_from_tokens() {
        let css = runtime_css(LAYOUT_TOKENS);
        assert!(css.contains(".result-panel {"));
        assert!(css.contains("min-width: 200px;"));
        assert!(css.contains("button.analysis-toggle {"));
    }
}
