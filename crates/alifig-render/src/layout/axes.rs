/// A major tick: data position plus printed label.
#[derive(Debug, Clone)]
pub struct Tick {
    pub pos: f64,
    pub label: String,
}

/// Axis over a fixed data range, with tick generation and data→pixel
/// mapping. Unlike auto-scaling plot frames, the range is taken as given
/// (the frame limits are part of the figure design) and ticks are placed
/// inside it.
#[derive(Debug, Clone)]
pub struct Axis {
    pub lo: f64,
    pub hi: f64,
    pub log: bool,
    pub title: String,
    pub ticks: Vec<Tick>,
    pub minor: Vec<f64>,
}

impl Axis {
    /// Linear axis with "nice number" tick steps inside `[lo, hi]`.
    pub fn linear(lo: f64, hi: f64, target_ticks: usize) -> Self {
        let range = hi - lo;
        if range <= 0.0 || !range.is_finite() {
            return Self { lo, hi, log: false, title: String::new(), ticks: vec![], minor: vec![] };
        }
        let step = nice_step(range / (target_ticks.max(2) - 1) as f64);
        let eps = step * 1e-6;

        let mut ticks = Vec::new();
        let mut v = (lo / step).ceil() * step;
        while v <= hi + eps {
            ticks.push(Tick { pos: v, label: format_tick(v, step) });
            v += step;
        }

        let minor_step = step / 5.0;
        let mut minor = Vec::new();
        let mut mv = (lo / minor_step).ceil() * minor_step;
        while mv <= hi + eps {
            if !ticks.iter().any(|t| (t.pos - mv).abs() < eps) {
                minor.push(mv);
            }
            mv += minor_step;
        }

        Self { lo, hi, log: false, title: String::new(), ticks, minor }
    }

    /// Logarithmic axis: one major tick per decade inside `[lo, hi]`,
    /// minor ticks at 2..9 within each decade. A range that contains no
    /// power of ten (e.g. 30..80) gets its mantissa points promoted to
    /// labeled major ticks instead, so the axis never comes out bare.
    pub fn log(lo: f64, hi: f64) -> Self {
        let lo = lo.max(1e-20);
        let hi = if hi > lo { hi } else { lo * 10.0 };
        let exp_lo = lo.log10().ceil() as i32;
        let exp_hi = hi.log10().floor() as i32;

        let mut ticks = Vec::new();
        let mut minor = Vec::new();
        for exp in (exp_lo - 1)..=exp_hi {
            let decade = 10.0_f64.powi(exp);
            if decade >= lo * (1.0 - 1e-9) && exp >= exp_lo {
                ticks.push(Tick { pos: decade, label: format!("10{}", superscript(exp)) });
            }
            for m in 2..=9 {
                let mv = m as f64 * decade;
                if mv >= lo && mv <= hi {
                    minor.push(mv);
                }
            }
        }

        if ticks.is_empty() {
            ticks = minor
                .iter()
                .map(|&pos| {
                    let exp = pos.log10().floor() as i32;
                    let label = if exp >= 0 {
                        format!("{}", pos.round() as i64)
                    } else {
                        format!("{:.prec$}", pos, prec = (-exp) as usize)
                    };
                    Tick { pos, label }
                })
                .collect();
            minor = Vec::new();
        }

        Self { lo, hi, log: true, title: String::new(), ticks, minor }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Map a data value to a pixel coordinate.
    pub fn to_pixel(&self, value: f64, px_lo: f64, px_hi: f64) -> f64 {
        let frac = if self.log {
            let v = value.max(1e-20).ln();
            let lo = self.lo.max(1e-20).ln();
            let hi = self.hi.max(1e-20).ln();
            (v - lo) / (hi - lo)
        } else {
            (value - self.lo) / (self.hi - self.lo)
        };
        px_lo + frac * (px_hi - px_lo)
    }
}

/// Round a rough step to 1, 2, or 5 times a power of ten.
fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    if decimals == 0 {
        let v = if value.abs() < step * 0.01 { 0.0 } else { value };
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}

fn superscript(n: i32) -> String {
    n.to_string()
        .chars()
        .map(|c| match c {
            '-' => '\u{207B}',
            '0' => '\u{2070}',
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            '4' => '\u{2074}',
            '5' => '\u{2075}',
            '6' => '\u{2076}',
            '7' => '\u{2077}',
            '8' => '\u{2078}',
            '9' => '\u{2079}',
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linear_ticks_stay_inside_range() {
        let ax = Axis::linear(0.0, 10.0, 6);
        assert!(!ax.ticks.is_empty());
        for t in &ax.ticks {
            assert!(t.pos >= 0.0 && t.pos <= 10.0 + 1e-9);
        }
        assert_abs_diff_eq!(ax.ticks[0].pos, 0.0);
        assert_eq!(ax.ticks[0].label, "0");
    }

    #[test]
    fn linear_pixel_mapping() {
        let ax = Axis::linear(0.0, 100.0, 5);
        assert_abs_diff_eq!(ax.to_pixel(50.0, 0.0, 500.0), 250.0, epsilon = 1e-9);
        // Inverted pixel ranges (y axes) work too.
        assert_abs_diff_eq!(ax.to_pixel(0.0, 600.0, 100.0), 600.0, epsilon = 1e-9);
    }

    #[test]
    fn log_decades() {
        let ax = Axis::log(10.0, 1000.0);
        assert!(ax.log);
        let positions: Vec<f64> = ax.ticks.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![10.0, 100.0, 1000.0]);
        assert_eq!(ax.ticks[0].label, "10\u{00B9}");
        assert!(ax.minor.iter().all(|&m| (10.0..=1000.0).contains(&m)));
    }

    #[test]
    fn log_sub_decade_range_still_gets_labeled_ticks() {
        // No power of ten falls inside [30, 80]; mantissa ticks take over.
        let ax = Axis::log(30.0, 80.0);
        assert_abs_diff_eq!(ax.hi, 80.0);
        let positions: Vec<f64> = ax.ticks.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
        assert_eq!(ax.ticks[0].label, "30");
        assert!(ax.minor.is_empty());

        let ax = Axis::log(0.3, 0.8);
        assert_eq!(ax.ticks[0].label, "0.3");
    }

    #[test]
    fn log_pixel_mapping_is_decade_uniform() {
        let ax = Axis::log(10.0, 1000.0);
        let mid = ax.to_pixel(100.0, 0.0, 500.0);
        assert_abs_diff_eq!(mid, 250.0, epsilon = 1e-9);
    }

    #[test]
    fn nice_step_values() {
        assert_abs_diff_eq!(nice_step(3.2), 2.0);
        assert_abs_diff_eq!(nice_step(0.7), 0.5);
        assert_abs_diff_eq!(nice_step(15.0), 10.0);
        assert_abs_diff_eq!(nice_step(4.5), 5.0);
        assert_abs_diff_eq!(nice_step(1.2), 1.0);
    }

    #[test]
    fn fractional_tick_labels() {
        let ax = Axis::linear(0.0, 1.0, 6);
        assert!(ax.ticks.iter().any(|t| t.label == "0.2"));
    }
}
