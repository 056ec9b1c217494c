//! A minimal uniformly-binned 1-D histogram.
//!
//! Keeps the sum of weights and the sum of squared weights per bin, so bin
//! errors behave like ROOT's `Sumw2` histograms: for unweighted fills the
//! error is `sqrt(n)`, and `set_bin` can impose an arbitrary error.

use crate::error::{Error, Result};

/// Uniformly-binned 1-D histogram with per-bin value and error.
#[derive(Debug, Clone, PartialEq)]
pub struct Hist1 {
    lo: f64,
    hi: f64,
    sumw: Vec<f64>,
    sumw2: Vec<f64>,
    entries: u64,
    underflow: f64,
    overflow: f64,
}

impl Hist1 {
    /// Create an empty histogram with `n_bins` uniform bins over `[lo, hi)`.
    pub fn new(n_bins: usize, lo: f64, hi: f64) -> Result<Self> {
        if n_bins == 0 {
            return Err(Error::Validation("histogram needs at least 1 bin".into()));
        }
        if !(lo < hi) {
            return Err(Error::Validation(format!(
                "invalid histogram range: lo {lo} must be below hi {hi}"
            )));
        }
        Ok(Self {
            lo,
            hi,
            sumw: vec![0.0; n_bins],
            sumw2: vec![0.0; n_bins],
            entries: 0,
            underflow: 0.0,
            overflow: 0.0,
        })
    }

    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.sumw.len()
    }

    /// Lower edge of the axis range.
    pub fn lo(&self) -> f64 {
        self.lo
    }

    /// Upper edge of the axis range.
    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Width of a single bin.
    pub fn bin_width(&self) -> f64 {
        (self.hi - self.lo) / self.n_bins() as f64
    }

    /// Number of fill calls, including under/overflow.
    pub fn entries(&self) -> u64 {
        self.entries
    }

    /// Weight accumulated below the axis range.
    pub fn underflow(&self) -> f64 {
        self.underflow
    }

    /// Weight accumulated above the axis range.
    pub fn overflow(&self) -> f64 {
        self.overflow
    }

    /// Bin index for a value, or `None` if it falls outside the axis range.
    pub fn find_bin(&self, x: f64) -> Option<usize> {
        if x < self.lo || x >= self.hi {
            return None;
        }
        let idx = ((x - self.lo) / self.bin_width()) as usize;
        // Guard against floating-point edge effects at the upper boundary.
        Some(idx.min(self.n_bins() - 1))
    }

    /// Fill with unit weight.
    pub fn fill(&mut self, x: f64) {
        self.fill_w(x, 1.0);
    }

    /// Fill with weight `w`.
    pub fn fill_w(&mut self, x: f64, w: f64) {
        self.entries += 1;
        match self.find_bin(x) {
            Some(i) => {
                self.sumw[i] += w;
                self.sumw2[i] += w * w;
            }
            None if x < self.lo => self.underflow += w,
            None => self.overflow += w,
        }
    }

    /// Overwrite a bin with an explicit value and error.
    pub fn set_bin(&mut self, bin: usize, value: f64, error: f64) -> Result<()> {
        if bin >= self.n_bins() {
            return Err(Error::Validation(format!(
                "bin index {bin} out of range for {} bins",
                self.n_bins()
            )));
        }
        self.sumw[bin] = value;
        self.sumw2[bin] = error * error;
        Ok(())
    }

    /// Bin content.
    pub fn value(&self, bin: usize) -> f64 {
        self.sumw[bin]
    }

    /// Bin error: `sqrt(sum of squared weights)`.
    pub fn error(&self, bin: usize) -> f64 {
        self.sumw2[bin].sqrt()
    }

    /// All bin contents.
    pub fn values(&self) -> Vec<f64> {
        self.sumw.clone()
    }

    /// All bin errors.
    pub fn errors(&self) -> Vec<f64> {
        self.sumw2.iter().map(|s| s.sqrt()).collect()
    }

    /// Low edge of a bin.
    pub fn low_edge(&self, bin: usize) -> f64 {
        self.lo + bin as f64 * self.bin_width()
    }

    /// High edge of a bin.
    pub fn high_edge(&self, bin: usize) -> f64 {
        self.lo + (bin + 1) as f64 * self.bin_width()
    }

    /// Center of a bin.
    pub fn center(&self, bin: usize) -> f64 {
        self.lo + (bin as f64 + 0.5) * self.bin_width()
    }

    /// All bin edges (length `n_bins + 1`).
    pub fn edges(&self) -> Vec<f64> {
        (0..=self.n_bins()).map(|i| self.lo + i as f64 * self.bin_width()).collect()
    }

    /// Sum of all bin contents (under/overflow excluded).
    pub fn integral(&self) -> f64 {
        self.sumw.iter().sum()
    }
}
