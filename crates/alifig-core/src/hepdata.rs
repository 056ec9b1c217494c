//! Export a spectrum to the plain-text HEP-data submission format.
//!
//! The output is the classic `*dataset:` ... `*dataend:` block used to
//! publish digitized plot data: metadata headers followed by one row per
//! bin, `  <lo> TO <hi>; <value> +- <stat> (DSYS=+<syst>,-<syst>);`.
//! Bins with zero content and zero statistical error are skipped.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::spectrum::SpectrumArtifact;

/// Default output file name used by the figure template.
pub const DEFAULT_FILE_NAME: &str = "figTemplateHEPData.txt";

/// Builder for one HEP-data table.
///
/// The metadata strings are free-form but conventionally follow the HEP-data
/// keyword style, e.g. reaction `"RE: P PB --> PI + X"` and energy
/// `"SQRT(SNN) : 5020.0 GeV"`.
#[derive(Debug, Clone)]
pub struct HepDataExport<'a> {
    spectrum: &'a SpectrumArtifact,
    title: String,
    observable: String,
    x_header: String,
    y_header: String,
    reaction: String,
    energy: String,
    rapidity_range: String,
}

impl<'a> HepDataExport<'a> {
    /// Start an export for a spectrum, with the template's default metadata.
    pub fn new(spectrum: &'a SpectrumArtifact) -> Self {
        Self {
            spectrum,
            title: "pt distribution of pi+-, arXiv:XXXX.YYYY".into(),
            observable: "DN/DPT".into(),
            x_header: "PT IN GEV/c".into(),
            y_header: "1/Nev 1/p_T 1/2pi d^2N/(dp_Tdy) (GeV/c)^{-1}".into(),
            reaction: "RE: P PB --> PI + X".into(),
            energy: "SQRT(SNN) : 5020.0 GeV".into(),
            rapidity_range: "YRAP : -0.5 - +0.5".into(),
        }
    }

    /// Dataset comment, typically the observable plus the arXiv reference.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Observable key (e.g. `DN/DPT`).
    pub fn with_observable(mut self, observable: &str) -> Self {
        self.observable = observable.into();
        self
    }

    /// x-axis header (e.g. `PT IN GEV/c`).
    pub fn with_x_header(mut self, x_header: &str) -> Self {
        self.x_header = x_header.into();
        self
    }

    /// y-axis header.
    pub fn with_y_header(mut self, y_header: &str) -> Self {
        self.y_header = y_header.into();
        self
    }

    /// Reaction string (e.g. `RE: P PB --> PI + X`).
    pub fn with_reaction(mut self, reaction: &str) -> Self {
        self.reaction = reaction.into();
        self
    }

    /// Collision energy qualifier (e.g. `SQRT(SNN) : 5020.0 GeV`).
    pub fn with_energy(mut self, energy: &str) -> Self {
        self.energy = energy.into();
        self
    }

    /// Rapidity range qualifier (e.g. `YRAP : -0.5 - +0.5`).
    pub fn with_rapidity_range(mut self, rapidity_range: &str) -> Self {
        self.rapidity_range = rapidity_range.into();
        self
    }

    /// Write the table to any writer.
    pub fn write<W: Write>(&self, mut w: W) -> Result<()> {
        let s = self.spectrum;

        writeln!(w, "*dataset:")?;
        writeln!(w, "*dscomment: {}", self.title)?;
        writeln!(w, "*reackey: {}", self.reaction)?;
        writeln!(w, "*obskey: {}", self.observable)?;
        writeln!(w, "*qual: {}", self.energy)?;
        writeln!(w, "*qual: {}", self.rapidity_range)?;
        writeln!(w, "*xheader: {}", self.x_header)?;
        writeln!(w, "*yheader: {}", self.y_header)?;
        writeln!(w, "*data: x : y")?;

        for bin in 0..s.n_bins() {
            let value = s.values[bin];
            let stat = s.stat_errors[bin];
            if value == 0.0 && stat == 0.0 {
                continue;
            }
            let syst = s.syst_uncorr[bin];
            writeln!(
                w,
                "  {} TO {}; {} +- {} (DSYS=+{},-{});",
                fmt_num(s.bin_edges[bin]),
                fmt_num(s.bin_edges[bin + 1]),
                fmt_num(value),
                fmt_num(stat),
                fmt_num(syst),
                fmt_num(syst),
            )?;
        }

        writeln!(w, "*dataend:")?;
        Ok(())
    }

    /// Write the table to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        self.write(&mut file)?;
        file.flush()?;
        Ok(())
    }
}

/// Compact decimal formatting: up to six significant decimals, trailing
/// zeros removed, so `0.1` stays `0.1` and not `0.100000`.
fn fmt_num(v: f64) -> String {
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0');
    let s = s.trim_end_matches('.');
    if s.is_empty() || s == "-" { "0".into() } else { s.to_string() }
}
