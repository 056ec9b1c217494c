use alifig_core::SpectrumArtifact;

use crate::annotate::{draw_annotations, draw_experiment_label};
use crate::canvas::Canvas;
use crate::color::{band_colors, marker_colors};
use crate::config::FigConfig;
use crate::layout::axes::Axis;
use crate::layout::legend::{self, LegendEntry, LegendKind};
use crate::layout::margins::PlotArea;
use crate::plots::axes_draw::draw_frame_axes;
use crate::primitives::*;

/// Render the standardized spectrum figure.
///
/// Drawing order follows the template: correlated systematic band first,
/// then uncorrelated systematics as empty boxes, then the statistical
/// points on top, then labels and legend.
pub fn render(artifact: &SpectrumArtifact, config: &FigConfig) -> crate::Result<String> {
    let n_bins = artifact.n_bins();
    if n_bins == 0 {
        return Ok(empty_svg());
    }

    let mut canvas = Canvas::new(config.figure.width, config.figure.height);
    let area = PlotArea::from_pad(canvas.width, canvas.height, &config.pad);

    let series_color = marker_colors(&config.palette)[0];
    let band_fill = band_colors(&config.palette)[0];

    // Frame limits: x spans the histogram, y is data-driven with headroom.
    let x_lo = artifact.bin_edges[0];
    let x_hi = artifact.bin_edges[n_bins];
    let x_axis = Axis::linear(x_lo, x_hi, 6).with_title(&artifact.x_label);

    let y_max = artifact.max_with_errors();
    let y_axis = if config.figure.log_y {
        let y_min = artifact.min_positive().unwrap_or(1.0);
        Axis::log(y_min * 0.5, (y_max * 2.0).max(y_min)).with_title(&artifact.y_label)
    } else {
        Axis::linear(0.0, y_max * 1.2, 5).with_title(&artifact.y_label)
    };

    draw_frame_axes(&mut canvas, &area, &x_axis, &y_axis, config);

    // On a log frame, empty bins cannot be drawn at all.
    let drawable: Vec<usize> = (0..n_bins)
        .filter(|&i| !config.figure.log_y || artifact.values[i] > 0.0)
        .collect();

    let _clip = canvas.push_clip(area.left, area.top, area.width, area.height);

    // Correlated systematics: filled band through the points.
    let band_x: Vec<f64> = drawable
        .iter()
        .map(|&i| x_axis.to_pixel(artifact.bin_center(i), area.left, area.right()))
        .collect();
    let band_lo: Vec<f64> = drawable
        .iter()
        .map(|&i| {
            let v = artifact.values[i] - artifact.syst_corr[i];
            y_axis.to_pixel(v.max(y_axis.lo * 1e-3), area.bottom(), area.top)
        })
        .collect();
    let band_hi: Vec<f64> = drawable
        .iter()
        .map(|&i| {
            y_axis.to_pixel(artifact.values[i] + artifact.syst_corr[i], area.bottom(), area.top)
        })
        .collect();
    canvas.fill_between(&band_x, &band_lo, &band_hi, &Style::filled(band_fill));

    // Uncorrelated systematics: empty boxes spanning each bin.
    let box_style = Style::stroked(series_color, 1.0);
    for &i in &drawable {
        let px_lo = x_axis.to_pixel(artifact.bin_edges[i], area.left, area.right());
        let px_hi = x_axis.to_pixel(artifact.bin_edges[i + 1], area.left, area.right());
        let v = artifact.values[i];
        let e = artifact.syst_uncorr[i];
        let py_hi = y_axis.to_pixel(v + e, area.bottom(), area.top);
        let py_lo = y_axis.to_pixel((v - e).max(y_axis.lo * 1e-3), area.bottom(), area.top);
        canvas.rect(px_lo, py_hi, px_hi - px_lo, py_lo - py_hi, &box_style);
    }

    // Statistical errors: bars plus markers, same color for both.
    let marker = MarkerStyle { color: series_color, ..Default::default() };
    let err_style = LineStyle::solid(series_color, 1.0);
    for &i in &drawable {
        let px = x_axis.to_pixel(artifact.bin_center(i), area.left, area.right());
        let v = artifact.values[i];
        let e = artifact.stat_errors[i];
        let py = y_axis.to_pixel(v, area.bottom(), area.top);
        let py_hi = y_axis.to_pixel(v + e, area.bottom(), area.top);
        let py_lo = y_axis.to_pixel((v - e).max(y_axis.lo * 1e-3), area.bottom(), area.top);
        canvas.error_bar(px, py_lo, py_hi, 0.0, &err_style);
        canvas.marker(px, py, &marker);
    }

    canvas.pop_clip();

    draw_experiment_label(&mut canvas, &config.experiment, config.font.size);
    draw_annotations(&mut canvas, &config.experiment, config.font.size);

    let entries = vec![
        LegendEntry {
            label: artifact.legend_label.clone(),
            kind: LegendKind::MarkerLine(marker),
        },
        LegendEntry {
            label: "syst error (Uncorrelated)".into(),
            kind: LegendKind::OpenBox(series_color),
        },
        LegendEntry {
            label: "syst error (Correlated)".into(),
            kind: LegendKind::FilledBand(band_fill),
        },
    ];
    let (lx, ly) =
        PlotArea::ndc_to_pixel(canvas.width, canvas.height, config.legend.x, config.legend.y);
    legend::draw_legend(&mut canvas, lx, ly, &entries, config.font.size * 0.8);

    Ok(canvas.finish_svg())
}

fn empty_svg() -> String {
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50"><text x="10" y="30">No spectrum data</text></svg>"#.into()
}
