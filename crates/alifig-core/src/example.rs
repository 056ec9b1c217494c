//! Placeholder example data for the figure template.
//!
//! Authors copying the template replace this with real analysis output; the
//! shapes here only exist so the figure renders something sensible out of
//! the box. The spectrum is sampled from a falling exponential and the
//! systematic errors are flat percentages of the bin content.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::Result;
use crate::hist::Hist1;
use crate::spectrum::{SpectrumArtifact, labels};

/// Default RNG seed, so the shipped example is reproducible.
pub const DEFAULT_SEED: u64 = 0x414c_4943_45;

const N_BINS: usize = 100;
const X_LO: f64 = 0.0;
const X_HI: f64 = 10.0;
const N_SAMPLES: usize = 20_000;
const EXPO_SLOPE: f64 = 0.3;
const SYST_UNCORR_FRAC: f64 = 0.08;
const SYST_CORR_FRAC: f64 = 0.15;

/// Draw from `exp(-slope * x)` truncated to `[lo, hi)` by inverse transform.
fn sample_truncated_expo<R: Rng>(rng: &mut R, slope: f64, lo: f64, hi: f64) -> f64 {
    let u: f64 = rng.random();
    let span = 1.0 - (-slope * (hi - lo)).exp();
    lo - (1.0 - u * span).ln() / slope
}

/// Generate the three example histograms: statistical, uncorrelated
/// systematic (8% of content), correlated systematic (15% of content).
pub fn example_histograms(seed: u64) -> Result<(Hist1, Hist1, Hist1)> {
    let mut rng = Pcg64::seed_from_u64(seed);

    let mut stat = Hist1::new(N_BINS, X_LO, X_HI)?;
    for _ in 0..N_SAMPLES {
        stat.fill(sample_truncated_expo(&mut rng, EXPO_SLOPE, X_LO, X_HI));
    }

    let mut syst = Hist1::new(N_BINS, X_LO, X_HI)?;
    let mut syst_corr = Hist1::new(N_BINS, X_LO, X_HI)?;
    for bin in 0..N_BINS {
        let v = stat.value(bin);
        syst.set_bin(bin, v, v * SYST_UNCORR_FRAC)?;
        syst_corr.set_bin(bin, v, v * SYST_CORR_FRAC)?;
    }

    Ok((stat, syst, syst_corr))
}

/// Generate the example spectrum artifact with the template's default labels.
pub fn example_spectrum(seed: u64) -> Result<SpectrumArtifact> {
    let (stat, syst, syst_corr) = example_histograms(seed)?;
    SpectrumArtifact::from_hists(
        labels::PT_X,
        labels::PT_Y,
        "0-5%, stat errors",
        &stat,
        &syst,
        &syst_corr,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn deterministic_for_fixed_seed() {
        let (a, _, _) = example_histograms(42).unwrap();
        let (b, _, _) = example_histograms(42).unwrap();
        assert_eq!(a, b);
        let (c, _, _) = example_histograms(43).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn samples_land_inside_range() {
        let (stat, _, _) = example_histograms(DEFAULT_SEED).unwrap();
        assert_eq!(stat.entries(), N_SAMPLES as u64);
        assert_abs_diff_eq!(stat.integral(), N_SAMPLES as f64);
        assert_abs_diff_eq!(stat.underflow(), 0.0);
        assert_abs_diff_eq!(stat.overflow(), 0.0);
    }

    #[test]
    fn spectrum_falls_with_x() {
        // An exponential with slope 0.3 must populate low bins far more
        // heavily than high ones.
        let (stat, _, _) = example_histograms(DEFAULT_SEED).unwrap();
        let low: f64 = (0..10).map(|b| stat.value(b)).sum();
        let high: f64 = (90..100).map(|b| stat.value(b)).sum();
        assert!(low > 4.0 * high, "low {low} not well above high {high}");
    }

    #[test]
    fn syst_errors_are_fixed_fractions() {
        let (stat, syst, syst_corr) = example_histograms(DEFAULT_SEED).unwrap();
        for bin in [0, 17, 50, 99] {
            let v = stat.value(bin);
            assert_abs_diff_eq!(syst.value(bin), v);
            assert_abs_diff_eq!(syst.error(bin), v * 0.08, epsilon = 1e-9);
            assert_abs_diff_eq!(syst_corr.error(bin), v * 0.15, epsilon = 1e-9);
        }
    }

    #[test]
    fn artifact_has_template_labels() {
        let art = example_spectrum(DEFAULT_SEED).unwrap();
        assert_eq!(art.n_bins(), N_BINS);
        assert_eq!(art.x_label, labels::PT_X);
        assert_eq!(art.legend_label, "0-5%, stat errors");
    }
}
