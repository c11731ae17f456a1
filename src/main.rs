//! # SpectrumLook
//!
//! A command-line tool for building fragment ladders from annotated MS/MS
//! fragment ions.
//!
//! ## Usage
//!
//! ```bash
//! # Build the ladder for a peptide
//! spectrumlook build elements.tsv --peptide PE*PTIDE --config spectrumlook.toml
//!
//! # List the ion series of a fragmentation mode
//! spectrumlook series --mode etd
//!
//! # Show residue labels and positions
//! spectrumlook labels --peptide PE*PTIDE
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity
    cli::init_logging(cli.verbosity());

    cli::dispatch(cli)
}
