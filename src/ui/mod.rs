pub mod color;
pub mod style;

pub use color::{parse_css_color, CssColor};
pub use style::{SelectionStroke, StyleTokens, LAYOUT_TOKENS, SELECTION_STROKE};
