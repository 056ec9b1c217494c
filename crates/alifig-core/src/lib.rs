//! # alifig-core
//!
//! Data side of the alifig figure template: a minimal 1-D histogram with
//! Sumw2-style errors, a plot-friendly spectrum artifact (flat arrays,
//! serde JSON), a placeholder example-data generator, and an exporter for
//! the plain-text HEP-data submission format.
//!
//! This crate is intentionally dependency-light; rendering lives in
//! `alifig-render`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod example;
pub mod hepdata;
pub mod hist;
pub mod spectrum;

pub use error::{Error, Result};
pub use hepdata::HepDataExport;
pub use hist::Hist1;
pub use spectrum::SpectrumArtifact;
