use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::FigConfig;
use crate::layout::axes::Axis;
use crate::layout::margins::PlotArea;
use crate::primitives::*;

/// Draw the frame with inward ticks and axis titles, ALICE style: box
/// frame, ticks mirrored on the top and right edges, no grid.
pub fn draw_frame_axes(
    canvas: &mut Canvas,
    area: &PlotArea,
    x_axis: &Axis,
    y_axis: &Axis,
    config: &FigConfig,
) {
    let frame_color = Color::rgb(0, 0, 0);
    let frame_style = LineStyle::solid(frame_color, 1.0);
    let tick_style = LineStyle::solid(frame_color, 0.8);
    let minor_style = LineStyle::solid(frame_color, 0.5);

    let tl = config.axes.tick_length;
    let mtl = config.axes.minor_tick_length;
    let mirror = config.axes.mirror_ticks;

    // Frame box
    canvas.line(area.left, area.top, area.right(), area.top, &frame_style);
    canvas.line(area.left, area.bottom(), area.right(), area.bottom(), &frame_style);
    canvas.line(area.left, area.top, area.left, area.bottom(), &frame_style);
    canvas.line(area.right(), area.top, area.right(), area.bottom(), &frame_style);

    // --- X axis ---
    let x_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::Middle,
        baseline: TextBaseline::Hanging,
        ..Default::default()
    };

    for tick in &x_axis.ticks {
        let px = x_axis.to_pixel(tick.pos, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        canvas.line(px, area.bottom(), px, area.bottom() - tl, &tick_style);
        if mirror {
            canvas.line(px, area.top, px, area.top + tl, &tick_style);
        }
        canvas.text(px, area.bottom() + 5.0, &tick.label, &x_label_style);
    }
    for &pos in &x_axis.minor {
        let px = x_axis.to_pixel(pos, area.left, area.right());
        if px < area.left - 0.5 || px > area.right() + 0.5 {
            continue;
        }
        canvas.line(px, area.bottom(), px, area.bottom() - mtl, &minor_style);
        if mirror {
            canvas.line(px, area.top, px, area.top + mtl, &minor_style);
        }
    }

    // --- Y axis ---
    let y_label_style = TextStyle {
        size: config.font.tick_size,
        anchor: TextAnchor::End,
        baseline: TextBaseline::Central,
        ..Default::default()
    };

    for tick in &y_axis.ticks {
        let py = y_axis.to_pixel(tick.pos, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.left + tl, py, &tick_style);
        if mirror {
            canvas.line(area.right(), py, area.right() - tl, py, &tick_style);
        }
        canvas.text(area.left - 6.0, py, &tick.label, &y_label_style);
    }
    for &pos in &y_axis.minor {
        let py = y_axis.to_pixel(pos, area.bottom(), area.top);
        if py < area.top - 0.5 || py > area.bottom() + 0.5 {
            continue;
        }
        canvas.line(area.left, py, area.left + mtl, py, &minor_style);
        if mirror {
            canvas.line(area.right(), py, area.right() - mtl, py, &minor_style);
        }
    }

    // --- Axis titles ---
    let title_style = TextStyle {
        size: config.font.label_size,
        anchor: TextAnchor::Middle,
        ..Default::default()
    };

    if !x_axis.title.is_empty() {
        let y = area.bottom() + config.font.tick_size + config.font.label_size + 10.0;
        canvas.text(area.left + area.width / 2.0, y, &x_axis.title, &title_style);
    }
    if !y_axis.title.is_empty() {
        // Clear the widest tick label, then a gap scaled like the
        // template's y-title offset.
        let max_tick_w = y_axis
            .ticks
            .iter()
            .map(|t| canvas.measure_text(&t.label, &y_label_style).width)
            .fold(0.0_f64, f64::max);
        let x = area.left - max_tick_w - config.font.label_size * 1.25;
        let y = area.top + area.height / 2.0;
        canvas.text_rotated(x, y, &y_axis.title, &title_style, -90.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FigConfig;

    fn area() -> PlotArea {
        PlotArea { left: 120.0, top: 24.0, width: 648.0, height: 486.0 }
    }

    #[test]
    fn draws_ticks_and_titles() {
        let mut canvas = Canvas::new(800.0, 600.0);
        let x = Axis::linear(0.0, 10.0, 6).with_title("p_T (GeV/c)");
        let y = Axis::log(10.0, 1000.0).with_title("yield");
        draw_frame_axes(&mut canvas, &area(), &x, &y, &FigConfig::default());
        let svg = canvas.finish_svg();
        assert!(svg.contains("p_T (GeV/c)"));
        assert!(svg.contains("rotate(-90.0"));
        assert!(svg.contains("10\u{00B2}"));
    }

    #[test]
    fn mirrored_ticks_double_the_tick_lines() {
        let x = Axis::linear(0.0, 10.0, 6);
        let y = Axis::linear(0.0, 1.0, 5);

        let mut mirrored = Canvas::new(800.0, 600.0);
        let mut config = FigConfig::default();
        draw_frame_axes(&mut mirrored, &area(), &x, &y, &config);
        let n_mirrored = mirrored.finish_svg().matches("<line").count();

        config.axes.mirror_ticks = false;
        let mut plain = Canvas::new(800.0, 600.0);
        draw_frame_axes(&mut plain, &area(), &x, &y, &config);
        let n_plain = plain.finish_svg().matches("<line").count();

        // 4 frame lines are always there; the tick lines double.
        assert_eq!(n_mirrored - 4, 2 * (n_plain - 4));
    }
}
