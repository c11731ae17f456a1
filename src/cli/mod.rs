use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use spectrumlook::series::FragmentationMode;

mod build;
mod config;
mod labels;
mod series;

pub use config::Config;

/// SpectrumLook - fragment ladders for annotated MS/MS spectra
#[derive(Parser)]
#[command(name = "spectrumlook")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Fragmentation mode deciding the available ion series.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    /// Collision-induced dissociation (b/y ions)
    Cid,
    /// Electron-transfer dissociation (c/z ions)
    Etd,
}

impl From<ModeArg> for FragmentationMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Cid => FragmentationMode::Cid,
            ModeArg::Etd => FragmentationMode::Etd,
        }
    }
}

/// Output layout of the build command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Residue table with series columns
    #[default]
    Table,
    /// JSON ladder document
    Json,
    /// One tab-separated line per series with `<mz>|<matched>` cells
    Legacy,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the fragment ladder for a peptide from an element table
    Build {
        /// Tab-separated element table (annotation, mz, [intensity], matched)
        #[arg(value_name = "ELEMENTS")]
        elements: PathBuf,

        /// Peptide sequence, modification markers included
        #[arg(short = 'p', long)]
        peptide: String,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Fragmentation mode (cid, etd)
        #[arg(short = 'm', long, value_enum)]
        mode: Option<ModeArg>,

        /// Series to display (repeatable); defaults to the mode's selection
        #[arg(short = 's', long = "series", value_name = "KEY")]
        series: Vec<String>,

        /// Output format (table, json, legacy)
        #[arg(short = 'f', long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// List the ion series offered by a fragmentation mode
    Series {
        /// Fragmentation mode (cid, etd)
        #[arg(short = 'm', long, default_value = "cid", value_enum)]
        mode: ModeArg,
    },

    /// Show residue labels and the residue count of a peptide
    Labels {
        /// Peptide sequence, modification markers included
        #[arg(short = 'p', long)]
        peptide: String,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            elements,
            peptide,
            config,
            mode,
            series,
            format,
        } => build::run(
            elements,
            peptide,
            config,
            mode.map(FragmentationMode::from),
            series,
            format,
        ),
        Commands::Series { mode } => series::run(FragmentationMode::from(mode)),
        Commands::Labels { peptide, config } => labels::run(peptide, config),
    }
}
