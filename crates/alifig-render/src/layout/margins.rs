use crate::config::PadConfig;

/// Rectangular plot frame within the canvas.
#[derive(Debug, Clone, Copy)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Frame from pad margins given as canvas fractions (ROOT pad
    /// convention: left/right/top/bottom margins eat into the canvas).
    pub fn from_pad(canvas_w: f64, canvas_h: f64, pad: &PadConfig) -> Self {
        let left = canvas_w * pad.left;
        let top = canvas_h * pad.top;
        Self {
            left,
            top,
            width: canvas_w * (1.0 - pad.left - pad.right),
            height: canvas_h * (1.0 - pad.top - pad.bottom),
        }
    }

    /// Canvas-fraction coordinates (origin bottom-left, like ROOT's NDC)
    /// to pixel coordinates (origin top-left).
    pub fn ndc_to_pixel(canvas_w: f64, canvas_h: f64, nx: f64, ny: f64) -> (f64, f64) {
        (canvas_w * nx, canvas_h * (1.0 - ny))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn pad_fractions() {
        let pad = PadConfig { left: 0.15, top: 0.04, right: 0.04, bottom: 0.15 };
        let area = PlotArea::from_pad(800.0, 600.0, &pad);
        assert_abs_diff_eq!(area.left, 120.0);
        assert_abs_diff_eq!(area.top, 24.0);
        assert_abs_diff_eq!(area.width, 800.0 * 0.81, epsilon = 1e-9);
        assert_abs_diff_eq!(area.height, 600.0 * 0.81, epsilon = 1e-9);
        assert_abs_diff_eq!(area.right(), 120.0 + 800.0 * 0.81, epsilon = 1e-9);
    }

    #[test]
    fn ndc_flips_y() {
        let (x, y) = PlotArea::ndc_to_pixel(800.0, 600.0, 0.59, 0.81);
        assert_abs_diff_eq!(x, 472.0);
        assert_abs_diff_eq!(y, 600.0 * 0.19, epsilon = 1e-9);
    }
}
