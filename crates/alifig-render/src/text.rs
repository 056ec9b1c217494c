//! Text measurement without embedded fonts.
//!
//! The canvas emits `font-family: Helvetica` and layout only needs
//! approximate extents (legend boxes, margins), so widths are estimated
//! from a per-character advance table for a generic sans-serif face,
//! expressed in em units.

use crate::primitives::{FontWeight, TextStyle};

#[derive(Debug, Clone, Copy)]
pub struct TextMetrics {
    pub width: f64,
    pub height: f64,
    pub ascent: f64,
}

/// Advance width of one character in em units.
fn char_advance(ch: char) -> f64 {
    match ch {
        'i' | 'j' | 'l' | '!' | '|' | '\'' | '.' | ',' | ':' | ';' => 0.28,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '{' | '}' | '/' | '\\' | ' ' => 0.35,
        'm' | 'w' | 'M' | 'W' | '@' => 0.85,
        '0'..='9' | '+' | '-' | '=' | '_' => 0.56,
        'A'..='Z' => 0.67,
        a if a.is_ascii_lowercase() => 0.52,
        // Non-ASCII (Greek letters, superscripts, angle brackets) tend to be
        // digit-like in sans-serif faces.
        a if !a.is_ascii() => 0.6,
        _ => 0.5,
    }
}

/// Estimate the extent of `text` at `size_pt` points.
pub fn measure_text(text: &str, size_pt: f64) -> TextMetrics {
    let ems: f64 = text.chars().map(char_advance).sum();
    TextMetrics { width: ems * size_pt, height: 1.2 * size_pt, ascent: 0.8 * size_pt }
}

/// Measure text with a [`TextStyle`]; bold runs slightly wider.
pub fn measure_styled(text: &str, style: &TextStyle) -> TextMetrics {
    let mut m = measure_text(text, style.size);
    if style.weight == FontWeight::Bold {
        m.width *= 1.05;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_text_measures_wider() {
        let short = measure_text("pT", 16.0);
        let long = measure_text("1/N_ev d2N/dpT dy", 16.0);
        assert!(long.width > short.width);
    }

    #[test]
    fn scales_with_size() {
        let a = measure_text("ALICE Preliminary", 10.0);
        let b = measure_text("ALICE Preliminary", 20.0);
        assert!((b.width / a.width - 2.0).abs() < 1e-9);
        assert!(b.height > a.height);
        assert!(b.ascent > 0.0);
    }

    #[test]
    fn narrow_chars_are_narrow() {
        let narrow = measure_text("iiii", 16.0);
        let wide = measure_text("mmmm", 16.0);
        assert!(wide.width > 2.0 * narrow.width);
    }
}
