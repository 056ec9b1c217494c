pub mod annotate;
pub mod canvas;
pub mod color;
pub mod config;
pub mod layout;
pub mod output;
pub mod plots;
pub mod primitives;
pub mod style;
pub mod text;

use config::FigConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("artifact error: {0}")]
    Artifact(#[from] alifig_core::Error),
    #[error("deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),
    #[error("config error: {0}")]
    Config(String),
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "png")]
    #[error("PNG encoding error: {0}")]
    Png(String),
    #[cfg(feature = "pdf")]
    #[error("PDF conversion error: {0}")]
    Pdf(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Render a spectrum artifact JSON to an SVG string.
pub fn render_svg(artifact_json: &str, config: &FigConfig) -> Result<String> {
    let art: alifig_core::SpectrumArtifact = serde_json::from_str(artifact_json)?;
    // serde accepts shape-mismatched arrays; the plot code indexes them.
    art.validate()?;
    plots::spectrum::render(&art, config)
}

/// Render a spectrum artifact JSON to bytes in the specified format.
pub fn render_to_bytes(artifact_json: &str, format: &str, config: &FigConfig) -> Result<Vec<u8>> {
    let svg = render_svg(artifact_json, config)?;
    match format {
        "svg" => Ok(svg.into_bytes()),
        #[cfg(feature = "png")]
        "png" => output::png::svg_to_png(&svg, config.output.dpi),
        #[cfg(feature = "pdf")]
        "pdf" => output::pdf::svg_to_pdf(&svg),
        other => Err(RenderError::UnknownFormat(other.to_string())),
    }
}

/// Render a spectrum artifact JSON to a file (format inferred from extension).
pub fn render_to_file(
    artifact_json: &str,
    path: &std::path::Path,
    config: &FigConfig,
) -> Result<()> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("svg");
    let bytes = render_to_bytes(artifact_json, ext, config)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
