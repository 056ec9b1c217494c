//! Spectrum plot artifact.
//!
//! The artifact is the contract between the data side and the renderer: a
//! flat, JSON-friendly description of one measured spectrum with statistical
//! errors and uncorrelated/correlated systematic errors per bin.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hist::Hist1;

/// Schema tag written into every artifact.
pub const SCHEMA_VERSION: &str = "alifig_spectrum_v1";

/// Commonly used axis titles for ALICE spectra.
///
/// Pick from these instead of inventing new wording, so figures stay
/// consistent across publications.
pub mod labels {
    /// x: transverse momentum.
    pub const PT_X: &str = "p_T (GeV/c)";
    /// y: invariant yield vs transverse momentum.
    pub const PT_Y: &str = "1/N_ev 1/(2\u{03C0}p_T) d\u{00B2}N/(dp_T dy) ((GeV/c)\u{207B}\u{00B2})";
    /// x: transverse mass.
    pub const MT_X: &str = "m_T (GeV/c\u{00B2})";
    /// y: invariant yield vs transverse mass.
    pub const MT_Y: &str =
        "1/N_ev 1/(2\u{03C0}m_T) d\u{00B2}N/(dm_T dy) ((GeV/c\u{00B2})\u{207B}\u{00B2})";
    /// x: invariant mass with decay products K and pi.
    pub const MASS_X: &str = "M_K\u{03C0} (GeV/c\u{00B2})";
    /// y: yield vs invariant mass.
    pub const MASS_Y: &str = "dN/dM_K\u{03C0}";
    /// Mean transverse momentum.
    pub const MEAN_PT: &str = "\u{27E8}p_T\u{27E9} (GeV/c)";
    /// Mean number of participants.
    pub const MEAN_NPART: &str = "\u{27E8}N_part\u{27E9}";
}

/// Plot-friendly artifact for a single measured spectrum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpectrumArtifact {
    /// Schema tag, see [`SCHEMA_VERSION`].
    pub schema_version: String,
    /// x-axis title.
    pub x_label: String,
    /// y-axis title.
    pub y_label: String,
    /// Legend label for the data points (e.g. "0-5%, stat errors").
    pub legend_label: String,
    /// Bin edges (length `n_bins + 1`, strictly increasing).
    pub bin_edges: Vec<f64>,
    /// Bin contents (length `n_bins`).
    pub values: Vec<f64>,
    /// Statistical errors (length `n_bins`).
    pub stat_errors: Vec<f64>,
    /// Point-to-point (uncorrelated) systematic errors (length `n_bins`).
    pub syst_uncorr: Vec<f64>,
    /// Correlated systematic errors (length `n_bins`).
    pub syst_corr: Vec<f64>,
}

impl SpectrumArtifact {
    /// Build an artifact from flat arrays, validating the shapes.
    pub fn new(
        x_label: &str,
        y_label: &str,
        legend_label: &str,
        bin_edges: Vec<f64>,
        values: Vec<f64>,
        stat_errors: Vec<f64>,
        syst_uncorr: Vec<f64>,
        syst_corr: Vec<f64>,
    ) -> Result<Self> {
        let art = Self {
            schema_version: SCHEMA_VERSION.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            legend_label: legend_label.to_string(),
            bin_edges,
            values,
            stat_errors,
            syst_uncorr,
            syst_corr,
        };
        art.validate()?;
        Ok(art)
    }

    /// Check the shape invariants the accessors rely on.
    ///
    /// `new` and `from_hists` enforce these on construction, but serde does
    /// not: an artifact deserialized from JSON must be re-checked before its
    /// per-bin arrays are indexed. [`from_json`](Self::from_json) does this.
    pub fn validate(&self) -> Result<()> {
        let n_bins = self.bin_edges.len().saturating_sub(1);
        if n_bins == 0 {
            return Err(Error::Validation("bin edges must define at least 1 bin".into()));
        }
        if self.bin_edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::Validation("bin edges must be strictly increasing".into()));
        }
        for (name, arr) in [
            ("values", &self.values),
            ("stat_errors", &self.stat_errors),
            ("syst_uncorr", &self.syst_uncorr),
            ("syst_corr", &self.syst_corr),
        ] {
            if arr.len() != n_bins {
                return Err(Error::Validation(format!(
                    "{name} length {} != n_bins {n_bins}",
                    arr.len()
                )));
            }
        }
        if self.stat_errors.iter().chain(&self.syst_uncorr).chain(&self.syst_corr).any(|&e| e < 0.0)
        {
            return Err(Error::Validation("errors must be non-negative".into()));
        }
        Ok(())
    }

    /// Parse an artifact from JSON and validate its shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let art: Self = serde_json::from_str(json)?;
        art.validate()?;
        Ok(art)
    }

    /// Load an artifact from a JSON file and validate its shape.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Build an artifact from three histograms sharing the same binning:
    /// the statistical histogram plus the two systematic-error histograms.
    pub fn from_hists(
        x_label: &str,
        y_label: &str,
        legend_label: &str,
        stat: &Hist1,
        syst: &Hist1,
        syst_corr: &Hist1,
    ) -> Result<Self> {
        for (name, h) in [("syst", syst), ("syst_corr", syst_corr)] {
            if h.n_bins() != stat.n_bins() || h.lo() != stat.lo() || h.hi() != stat.hi() {
                return Err(Error::Validation(format!(
                    "{name} histogram binning does not match the stat histogram"
                )));
            }
        }
        Self::new(
            x_label,
            y_label,
            legend_label,
            stat.edges(),
            stat.values(),
            stat.errors(),
            syst.errors(),
            syst_corr.errors(),
        )
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.values.len()
    }

    /// Center of a bin.
    pub fn bin_center(&self, bin: usize) -> f64 {
        0.5 * (self.bin_edges[bin] + self.bin_edges[bin + 1])
    }

    /// Smallest strictly positive bin content, for log-scale frames.
    /// `None` if all bins are empty or negative.
    pub fn min_positive(&self) -> Option<f64> {
        self.values.iter().copied().filter(|&v| v > 0.0).reduce(f64::min)
    }

    /// Largest `value + stat + syst` over all bins, for frame headroom.
    pub fn max_with_errors(&self) -> f64 {
        (0..self.n_bins())
            .map(|i| self.values[i] + self.stat_errors[i] + self.syst_uncorr[i] + self.syst_corr[i])
            .fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn simple_artifact() -> SpectrumArtifact {
        SpectrumArtifact::new(
            labels::PT_X,
            labels::PT_Y,
            "0-5%, stat errors",
            vec![0.0, 1.0, 2.0, 3.0],
            vec![10.0, 5.0, 2.0],
            vec![1.0, 0.7, 0.5],
            vec![0.8, 0.4, 0.16],
            vec![1.5, 0.75, 0.3],
        )
        .unwrap()
    }

    #[test]
    fn shape_validation() {
        let r = SpectrumArtifact::new(
            "x",
            "y",
            "l",
            vec![0.0, 1.0],
            vec![1.0, 2.0],
            vec![0.1],
            vec![0.1],
            vec![0.1],
        );
        assert!(r.is_err());

        let r = SpectrumArtifact::new(
            "x",
            "y",
            "l",
            vec![0.0, 1.0, 0.5],
            vec![1.0, 2.0],
            vec![0.1, 0.1],
            vec![0.1, 0.1],
            vec![0.1, 0.1],
        );
        assert!(r.is_err());

        let r = SpectrumArtifact::new(
            "x",
            "y",
            "l",
            vec![0.0, 1.0],
            vec![1.0],
            vec![-0.1],
            vec![0.1],
            vec![0.1],
        );
        assert!(r.is_err());
    }

    #[test]
    fn accessors() {
        let art = simple_artifact();
        assert_eq!(art.n_bins(), 3);
        assert_eq!(art.schema_version, SCHEMA_VERSION);
        assert_abs_diff_eq!(art.bin_center(1), 1.5);
        assert_abs_diff_eq!(art.min_positive().unwrap(), 2.0);
        assert_abs_diff_eq!(art.max_with_errors(), 13.3, epsilon = 1e-12);
    }

    #[test]
    fn from_hists_checks_binning() {
        let mut stat = Hist1::new(3, 0.0, 3.0).unwrap();
        stat.fill(0.5);
        let syst = Hist1::new(3, 0.0, 3.0).unwrap();
        let other = Hist1::new(4, 0.0, 3.0).unwrap();
        assert!(SpectrumArtifact::from_hists("x", "y", "l", &stat, &syst, &other).is_err());
        let art = SpectrumArtifact::from_hists("x", "y", "l", &stat, &syst, &syst).unwrap();
        assert_abs_diff_eq!(art.values[0], 1.0);
    }

    #[test]
    fn json_round_trip() {
        let art = simple_artifact();
        let json = serde_json::to_string(&art).unwrap();
        let back = SpectrumArtifact::from_json(&json).unwrap();
        assert_eq!(back.values, art.values);
        assert_eq!(back.x_label, art.x_label);
    }

    #[test]
    fn from_json_rejects_mismatched_array_lengths() {
        // Structurally valid JSON that plain serde accepts: two bin edges
        // (one bin) but three entries per data array. Indexing
        // `bin_edges[bin + 1]` on it would go out of bounds.
        let json = r#"{
            "schema_version": "alifig_spectrum_v1",
            "x_label": "x", "y_label": "y", "legend_label": "l",
            "bin_edges": [0.0, 1.0],
            "values": [1.0, 2.0, 3.0],
            "stat_errors": [0.1, 0.1, 0.1],
            "syst_uncorr": [0.1, 0.1, 0.1],
            "syst_corr": [0.1, 0.1, 0.1]
        }"#;
        let lenient: SpectrumArtifact = serde_json::from_str(json).unwrap();
        assert!(lenient.validate().is_err());
        assert!(SpectrumArtifact::from_json(json).is_err());
    }

    #[test]
    fn from_json_file_loads_and_validates() {
        let dir = std::env::temp_dir().join("alifig-spectrum-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("artifact.json");
        std::fs::write(&path, serde_json::to_string(&simple_artifact()).unwrap()).unwrap();
        let art = SpectrumArtifact::from_json_file(&path).unwrap();
        assert_eq!(art.n_bins(), 3);
        std::fs::write(&path, "{not json").unwrap();
        assert!(SpectrumArtifact::from_json_file(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
