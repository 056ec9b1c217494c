use crate::config::*;

/// Built-in figure styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinStyle {
    /// Default publication style: color palette, "ALICE Preliminary" label.
    AlicePublic,
    /// Print-safe grayscale palette, otherwise identical to AlicePublic.
    AliceGray,
    /// Bare frame: no experiment label, no annotations.
    Minimal,
}

impl BuiltinStyle {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "gray" | "alice_gray" => Self::AliceGray,
            "minimal" => Self::Minimal,
            _ => Self::AlicePublic,
        }
    }

    pub fn base_config(self) -> FigConfig {
        match self {
            Self::AlicePublic => alice_public(),
            Self::AliceGray => alice_gray(),
            Self::Minimal => minimal(),
        }
    }
}

fn alice_public() -> FigConfig {
    FigConfig {
        style: "alice_public".into(),
        figure: FigureConfig::default(),
        font: FontConfig::default(),
        pad: PadConfig::default(),
        axes: AxesConfig::default(),
        experiment: ExperimentConfig::default(),
        legend: LegendConfig::default(),
        palette: "alice".into(),
        output: OutputConfig::default(),
    }
}

fn alice_gray() -> FigConfig {
    FigConfig { style: "alice_gray".into(), palette: "gray".into(), ..alice_public() }
}

fn minimal() -> FigConfig {
    FigConfig {
        style: "minimal".into(),
        experiment: ExperimentConfig {
            name: String::new(),
            status: String::new(),
            annotations: Vec::new(),
            ..ExperimentConfig::default()
        },
        ..alice_public()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_lenient() {
        assert_eq!(BuiltinStyle::parse("gray"), BuiltinStyle::AliceGray);
        assert_eq!(BuiltinStyle::parse("ALICE_GRAY"), BuiltinStyle::AliceGray);
        assert_eq!(BuiltinStyle::parse("minimal"), BuiltinStyle::Minimal);
        assert_eq!(BuiltinStyle::parse("anything else"), BuiltinStyle::AlicePublic);
    }

    #[test]
    fn gray_only_swaps_the_palette() {
        let a = alice_public();
        let g = alice_gray();
        assert_eq!(g.palette, "gray");
        assert_eq!(g.figure.width, a.figure.width);
        assert_eq!(g.experiment.name, a.experiment.name);
    }

    #[test]
    fn minimal_has_no_labels() {
        let m = minimal();
        assert!(m.experiment.name.is_empty());
        assert!(m.experiment.annotations.is_empty());
    }
}
