use crate::canvas::Canvas;
use crate::color::Color;
use crate::primitives::*;

pub struct LegendEntry {
    pub label: String,
    pub kind: LegendKind,
}

/// How a legend swatch is drawn, mirroring the ROOT entry options used in
/// the template: "LPE" (line + point + error bar), "F" for filled bands,
/// and the empty-box variant for uncorrelated systematics.
pub enum LegendKind {
    MarkerLine(MarkerStyle),
    FilledBand(Color),
    OpenBox(Color),
}

/// Draw a borderless legend with its top-left corner at `(x, y)`.
///
/// ALICE legends carry no frame and no background fill; entries are listed
/// top to bottom.
pub fn draw_legend(canvas: &mut Canvas, x: f64, y: f64, entries: &[LegendEntry], font_size: f64) {
    if entries.is_empty() {
        return;
    }

    let row_height = font_size * 1.45;
    let swatch_w = font_size * 1.6;
    let swatch_h = font_size * 0.75;
    let gap = 7.0;

    let text_style =
        TextStyle { size: font_size, baseline: TextBaseline::Central, ..Default::default() };

    for (i, entry) in entries.iter().enumerate() {
        let ey = y + (i as f64 + 0.5) * row_height;

        match &entry.kind {
            LegendKind::MarkerLine(marker) => {
                let ls = LineStyle::solid(marker.color, 1.0);
                canvas.line(x, ey, x + swatch_w, ey, &ls);
                canvas.marker(x + swatch_w / 2.0, ey, marker);
            }
            LegendKind::FilledBand(color) => {
                canvas.rect(x, ey - swatch_h / 2.0, swatch_w, swatch_h, &Style::filled(*color));
            }
            LegendKind::OpenBox(color) => {
                canvas.rect(x, ey - swatch_h / 2.0, swatch_w, swatch_h, &Style::stroked(*color, 1.0));
            }
        }

        canvas.text(x + swatch_w + gap, ey, &entry.label, &text_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_render_in_order() {
        let mut canvas = Canvas::new(800.0, 600.0);
        let entries = vec![
            LegendEntry {
                label: "0-5%, stat errors".into(),
                kind: LegendKind::MarkerLine(MarkerStyle::default()),
            },
            LegendEntry {
                label: "syst error (Uncorrelated)".into(),
                kind: LegendKind::OpenBox(Color::rgb(0, 0, 0)),
            },
            LegendEntry {
                label: "syst error (Correlated)".into(),
                kind: LegendKind::FilledBand(Color::rgb(150, 150, 150)),
            },
        ];
        draw_legend(&mut canvas, 152.0, 348.0, &entries, 15.0);
        let svg = canvas.finish_svg();
        let stat = svg.find("stat errors").unwrap();
        let uncorr = svg.find("Uncorrelated").unwrap();
        let corr = svg.find("Correlated)").unwrap();
        assert!(stat < uncorr && uncorr < corr);
    }

    #[test]
    fn empty_legend_draws_nothing() {
        let mut canvas = Canvas::new(100.0, 100.0);
        let before = canvas.finish_svg();
        draw_legend(&mut canvas, 10.0, 10.0, &[], 12.0);
        assert_eq!(canvas.finish_svg(), before);
    }
}
