use serde::Deserialize;

use crate::style::BuiltinStyle;

/// Top-level figure configuration (YAML or programmatic).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigConfig {
    pub style: String,
    pub figure: FigureConfig,
    pub font: FontConfig,
    pub pad: PadConfig,
    pub axes: AxesConfig,
    pub experiment: ExperimentConfig,
    pub legend: LegendConfig,
    pub palette: String,
    pub output: OutputConfig,
}

impl Default for FigConfig {
    fn default() -> Self {
        BuiltinStyle::AlicePublic.base_config()
    }
}

/// Canvas size and y-axis scale.
///
/// Stick to the default 800x600 canvas unless the plot absolutely needs
/// something else; 800x800 is the accepted square variant.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FigureConfig {
    pub width: f64,
    pub height: f64,
    pub log_y: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self { width: 800.0, height: 600.0, log_y: true }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Base text size (annotations, experiment label).
    pub size: f64,
    /// Axis title size.
    pub label_size: f64,
    /// Tick label size.
    pub tick_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self { size: 19.0, label_size: 22.0, tick_size: 18.0 }
    }
}

/// Pad margins as fractions of the canvas, ROOT-style.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self { left: 0.15, top: 0.04, right: 0.04, bottom: 0.15 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AxesConfig {
    /// Mirror ticks on the top and right frame edges (PadTickX/Y).
    pub mirror_ticks: bool,
    pub tick_length: f64,
    pub minor_tick_length: f64,
}

impl Default for AxesConfig {
    fn default() -> Self {
        Self { mirror_ticks: true, tick_length: 8.0, minor_tick_length: 4.5 }
    }
}

/// Experiment label and collision-system annotations.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Experiment name; empty suppresses the label entirely.
    pub name: String,
    /// Qualifier after the name: "Preliminary", "Performance", ... Empty
    /// means final data, which prints the bare experiment name.
    pub status: String,
    /// Label position as canvas fractions, measured from the bottom left.
    pub label_x: f64,
    pub label_y: f64,
    /// Extra annotation lines: colliding system and energy first (notation
    /// pp, p-Pb, Pb-Pb with sqrt(s_NN) for ion runs), then event classes.
    pub annotations: Vec<String>,
    /// Anchor of the first annotation line, canvas fractions.
    pub annotation_x: f64,
    pub annotation_y: f64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            name: "ALICE".into(),
            status: "Preliminary".into(),
            label_x: 0.59,
            label_y: 0.81,
            annotations: vec![
                "p-Pb \u{221A}s_NN = 5.02 TeV".into(),
                "V0A Multiplicity Classes (Pb-Side)".into(),
            ],
            annotation_x: 0.55,
            annotation_y: 0.73,
        }
    }
}

/// Legend placement, canvas fractions from the bottom left.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub x: f64,
    pub y: f64,
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self { x: 0.19, y: 0.42 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub dpi: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: "svg".into(), dpi: 300 }
    }
}

/// Resolve a FigConfig from an optional YAML override string.
pub fn resolve_config(user_yaml: Option<&str>) -> crate::Result<FigConfig> {
    match user_yaml {
        None => Ok(FigConfig::default()),
        Some(yaml) => {
            let config: FigConfig = serde_yaml_ng::from_str(yaml)
                .map_err(|e| crate::RenderError::Config(e.to_string()))?;
            Ok(config)
        }
    }
}
