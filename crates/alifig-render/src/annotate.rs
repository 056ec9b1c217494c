//! Experiment label and free-text annotations.
//!
//! The label is "ALICE" alone for final data and "ALICE <status>" (e.g.
//! "ALICE Preliminary") otherwise; it is only added when the experiment
//! name does not already appear in the legend.

use crate::canvas::Canvas;
use crate::config::ExperimentConfig;
use crate::layout::margins::PlotArea;
use crate::primitives::TextStyle;

/// Draw the experiment label at its configured canvas-fraction position.
pub fn draw_experiment_label(canvas: &mut Canvas, experiment: &ExperimentConfig, font_size: f64) {
    if experiment.name.is_empty() {
        return;
    }
    let label = if experiment.status.is_empty() {
        experiment.name.clone()
    } else {
        format!("{} {}", experiment.name, experiment.status)
    };
    let (x, y) = PlotArea::ndc_to_pixel(
        canvas.width,
        canvas.height,
        experiment.label_x,
        experiment.label_y,
    );
    canvas.text(x, y, &label, &TextStyle { size: font_size, ..Default::default() });
}

/// Draw the annotation lines (colliding system, event classes, ...)
/// stacked below their configured anchor.
pub fn draw_annotations(canvas: &mut Canvas, experiment: &ExperimentConfig, font_size: f64) {
    let (x, y) = PlotArea::ndc_to_pixel(
        canvas.width,
        canvas.height,
        experiment.annotation_x,
        experiment.annotation_y,
    );
    let style = TextStyle { size: font_size, ..Default::default() };
    for (i, line) in experiment.annotations.iter().enumerate() {
        canvas.text(x, y + i as f64 * font_size * 1.4, line, &style);
    }
}
