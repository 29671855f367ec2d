/// Compile-time layout tokens, not user-overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    pub spacing_4: i32,
    pub spacing_8: i32,
    pub toggle_margin: i32,
    pub control_radius: u16,
    pub panel_radius: u16,
    pub panel_min_width: i32,
    pub swatch_size: i32,
    pub border_width: u16,
    pub window_default_width: i32,
    pub window_default_height: i32,
}

pub const LAYOUT_TOKENS: StyleTokens = StyleTokens {
    spacing_4: 4,
    spacing_8: 8,
    toggle_margin: 20,
    control_radius: 6,
    panel_radius: 6,
    panel_min_width: 200,
    swatch_size: 16,
    border_width: 1,
    window_default_width: 1024,
    window_default_height: 768,
};

/// Stroke used for the selection rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionStroke {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub width: f64,
}

pub const SELECTION_STROKE: SelectionStroke = SelectionStroke {
    red: 0.0,
    green: 1.0,
    blue: 0.0,
    width: 2.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_tokens_keep_panel_dimensions() {
        assert_eq!(LAYOUT_TOKENS.panel_min_width, 200);
        assert_eq!(LAYOUT_TOKENS.swatch_size, 16);
        assert_eq!(LAYOUT_TOKENS.toggle_margin, 20);
    }

    #[test]
    fn selection_stroke_is_two_pixel_lime() {
        assert_eq!(SELECTION_STROKE.width, 2.0);
        assert_eq!(
            (SELECTION_STROKE.red, SELECTION_STROKE.green, SELECTION_STROKE.blue),
            (0.0, 1.0, 0.0)
        );
    }
}
