#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CssColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CssColor {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels in cairo's 0.0..=1.0 range.
    pub fn unit_rgb(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }
}

/// Parses the swatch strings the analysis service returns: `rgb(r,g,b)`,
/// `rgba(r,g,b,a)` (alpha ignored) or six-digit hex.
pub fn parse_css_color(value: &str) -> Option<CssColor> {
    let value = value.trim();
    if let Some(args) = function_args(value, "rgb").or_else(|| function_args(value, "rgba")) {
        return parse_rgb_args(args);
    }
    parse_hex_rgb(value)
}

fn function_args<'a>(value: &'a str, name: &str) -> Option<&'a str> {
    let rest = value.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_rgb_args(args: &str) -> Option<CssColor> {
    let mut channels = args.split(',').map(str::trim);
    let r = parse_channel(channels.next()?)?;
    let g = parse_channel(channels.next()?)?;
    let b = parse_channel(channels.next()?)?;
    Some(CssColor::new(r, g, b))
}

fn parse_channel(raw: &str) -> Option<u8> {
    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_hex_rgb(value: &str) -> Option<CssColor> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let red = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let green = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let blue = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(CssColor::new(red, green, blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_rgb_strings() {
        assert_eq!(parse_css_color("rgb(255,0,0)"), Some(CssColor::new(255, 0, 0)));
        assert_eq!(parse_css_color(" rgb( 12, 34 ,56 ) "), Some(CssColor::new(12, 34, 56)));
        assert_eq!(
            parse_css_color("rgba(1,2,3,0.5)"),
            Some(CssColor::new(1, 2, 3))
        );
    }

    #[test]
    fn clamps_out_of_range_channels() {
        assert_eq!(parse_css_color("rgb(300,-4,127.6)"), Some(CssColor::new(255, 0, 128)));
    }

    #[test]
    fn accepts_hash_or_plain_six_digit_hex() {
        assert_eq!(parse_css_color("#12ab34"), Some(CssColor::new(0x12, 0xab, 0x34)));
        assert_eq!(parse_css_color("12AB34"), Some(CssColor::new(0x12, 0xab, 0x34)));
    }

    #[test]
    fn rejects_unknown_formats() {
        assert_eq!(parse_css_color("#fff"), None);
        assert_eq!(parse_css_color("rgb(1,2)"), None);
        assert_eq!(parse_css_color("hsl(0, 100%, 50%)"), None);
        assert_eq!(parse_css_color(""), None);
    }
}
