use serde::Deserialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn hex(s: &str) -> Self {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() < 6 {
            return Self::rgb(0, 0, 0);
        }
        let r = u8::from_str_radix(&s[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&s[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&s[4..6], 16).unwrap_or(0);
        Self { r, g, b, a: 1.0 }
    }

    pub const fn with_alpha(mut self, a: f64) -> Self {
        self.a = a;
        self
    }

    pub fn to_svg_fill(&self) -> String {
        if (self.a - 1.0).abs() < 1e-6 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_svg_fill())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Color::hex(&s))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

// --- Palettes ---

/// Preferred marker/line colors for ALICE figures, in the order series
/// should pick them: black, red, blue, green, magenta, orange, cyan, olive.
pub const ALICE_MARKER: &[&str] = &[
    "#000000", "#cc0000", "#0000cc", "#007700", "#cc00cc", "#ff8800", "#009999", "#999900",
];

/// Matching pale fill colors for systematic-error bands.
pub const ALICE_BAND: &[&str] = &[
    "#999999", "#f2b8b8", "#b8b8f2", "#bbddbb", "#f2b8f2", "#ffddaa", "#b8eded", "#eeeeaa",
];

/// Grayscale variant for print-safe figures.
pub const GRAY_MARKER: &[&str] =
    &["#000000", "#333333", "#555555", "#777777", "#999999", "#aaaaaa", "#bbbbbb", "#cccccc"];

/// Grayscale band fills.
pub const GRAY_BAND: &[&str] =
    &["#aaaaaa", "#bbbbbb", "#c8c8c8", "#d4d4d4", "#dddddd", "#e4e4e4", "#ebebeb", "#f2f2f2"];

pub fn marker_colors(palette: &str) -> Vec<Color> {
    let strs = match palette {
        "gray" => GRAY_MARKER,
        _ => ALICE_MARKER,
    };
    strs.iter().map(|s| Color::hex(s)).collect()
}

pub fn band_colors(palette: &str) -> Vec<Color> {
    let strs = match palette {
        "gray" => GRAY_BAND,
        _ => ALICE_BAND,
    };
    strs.iter().map(|s| Color::hex(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        let c = Color::hex("#cc0000");
        assert_eq!(c.r, 0xCC);
        assert_eq!(c.g, 0);
        assert_eq!(c.b, 0);
        assert!((c.a - 1.0).abs() < 1e-9);
        assert_eq!(Color::hex("bad"), Color::rgb(0, 0, 0));
    }

    #[test]
    fn svg_fill_opaque() {
        assert_eq!(Color::rgb(204, 0, 0).to_svg_fill(), "#cc0000");
    }

    #[test]
    fn svg_fill_alpha() {
        assert_eq!(Color::rgb(204, 0, 0).with_alpha(0.5).to_svg_fill(), "rgba(204,0,0,0.500)");
    }

    #[test]
    fn palettes_stay_in_step() {
        assert_eq!(ALICE_MARKER.len(), ALICE_BAND.len());
        assert_eq!(marker_colors("alice").len(), band_colors("alice").len());
        assert_eq!(marker_colors("gray")[0], Color::rgb(0, 0, 0));
    }
}
