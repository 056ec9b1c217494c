//! alifig CLI

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use alifig_core::example::{DEFAULT_SEED, example_spectrum};
use alifig_core::hepdata::{DEFAULT_FILE_NAME, HepDataExport};
use alifig_core::spectrum::SpectrumArtifact;
use alifig_render::config::resolve_config;
use alifig_render::style::BuiltinStyle;

mod summary;
use summary::SummaryDoc;

#[derive(Parser)]
#[command(name = "alifig")]
#[command(about = "Standardized ALICE-style figures from spectrum artifacts")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the placeholder example spectrum as artifact JSON
    Example {
        /// Output file for the artifact JSON
        #[arg(short, long)]
        output: PathBuf,

        /// RNG seed for the example sampling
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render a spectrum artifact to a figure (svg, png, or pdf by extension)
    Render {
        /// Input artifact JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output figure file; the extension selects the format
        #[arg(short, long)]
        output: PathBuf,

        /// Built-in style: alice (default), gray, minimal
        #[arg(long)]
        style: Option<String>,

        /// YAML config file; keys not set fall back to the default style.
        /// Takes precedence over --style.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Export a spectrum artifact to the HEP-data text format
    Hepdata {
        /// Input artifact JSON
        #[arg(short, long)]
        input: PathBuf,

        /// Output text file
        #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
        output: PathBuf,

        /// Dataset comment (title plus arXiv reference)
        #[arg(long)]
        title: Option<String>,

        /// Observable key, e.g. "DN/DPT"
        #[arg(long)]
        observable: Option<String>,

        /// x-axis header, e.g. "PT IN GEV/c"
        #[arg(long)]
        x_header: Option<String>,

        /// y-axis header
        #[arg(long)]
        y_header: Option<String>,

        /// Reaction string, e.g. "RE: P PB --> PI + X"
        #[arg(long)]
        reaction: Option<String>,

        /// Energy qualifier, e.g. "SQRT(SNN) : 5020.0 GeV"
        #[arg(long)]
        energy: Option<String>,

        /// Rapidity qualifier, e.g. "YRAP : -0.5 - +0.5"
        #[arg(long)]
        rapidity: Option<String>,
    },

    /// Assemble rendered figures into a LaTeX beamer summary document
    Summary {
        /// Rendered figure files to include, in order (pdf or png)
        #[arg(required = true)]
        figures: Vec<PathBuf>,

        /// Output .tex file
        #[arg(short, long, default_value = "summary.tex")]
        output: PathBuf,

        /// Document title
        #[arg(long, default_value = "Figure summary")]
        title: String,

        /// Document author
        #[arg(long, default_value = "")]
        author: String,

        /// Section title the figures are grouped under
        #[arg(long, default_value = "Figures")]
        section: String,
    },
}

fn load_artifact(path: &PathBuf) -> Result<SpectrumArtifact> {
    SpectrumArtifact::from_json_file(path)
        .with_context(|| format!("loading artifact {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Example { output, seed } => {
            let art = example_spectrum(seed.unwrap_or(DEFAULT_SEED))?;
            let json = serde_json::to_string_pretty(&art)?;
            fs::write(&output, json)
                .with_context(|| format!("writing artifact {}", output.display()))?;
            tracing::info!("wrote example spectrum to {}", output.display());
        }

        Commands::Render { input, output, style, config } => {
            let config = match config {
                None => {
                    BuiltinStyle::parse(style.as_deref().unwrap_or("alice")).base_config()
                }
                Some(path) => {
                    if style.is_some() {
                        tracing::warn!(
                            "--config replaces --style: the YAML file is applied on top \
                             of the defaults, not the requested style"
                        );
                    }
                    let yaml = fs::read_to_string(&path)
                        .with_context(|| format!("reading config {}", path.display()))?;
                    resolve_config(Some(&yaml))?
                }
            };
            let json = fs::read_to_string(&input)
                .with_context(|| format!("reading artifact {}", input.display()))?;
            alifig_render::render_to_file(&json, &output, &config)?;
            tracing::info!("wrote figure to {}", output.display());
        }

        Commands::Hepdata {
            input,
            output,
            title,
            observable,
            x_header,
            y_header,
            reaction,
            energy,
            rapidity,
        } => {
            let art = load_artifact(&input)?;
            let mut export = HepDataExport::new(&art);
            if let Some(v) = &title {
                export = export.with_title(v);
            }
            if let Some(v) = &observable {
                export = export.with_observable(v);
            }
            if let Some(v) = &x_header {
                export = export.with_x_header(v);
            }
            if let Some(v) = &y_header {
                export = export.with_y_header(v);
            }
            if let Some(v) = &reaction {
                export = export.with_reaction(v);
            }
            if let Some(v) = &energy {
                export = export.with_energy(v);
            }
            if let Some(v) = &rapidity {
                export = export.with_rapidity_range(v);
            }
            export.save(&output)?;
            tracing::info!("wrote HEP-data table to {}", output.display());
        }

        Commands::Summary { figures, output, title, author, section } => {
            let mut doc = SummaryDoc::new(&title, &author);
            doc.add_section(&section);
            for fig in &figures {
                if !fig.is_file() {
                    anyhow::bail!("figure not found: {}", fig.display());
                }
                doc.add_figure(fig);
            }
            fs::write(&output, doc.to_latex())
                .with_context(|| format!("writing summary {}", output.display()))?;
            tracing::info!("wrote summary document to {}", output.display());
        }
    }

    Ok(())
}
