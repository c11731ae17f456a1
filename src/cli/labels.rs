use anyhow::{Context, Result};
use std::path::PathBuf;

use spectrumlook::peptide::{effective_length, normalize_peptide_input, residue_labels};

use super::Config;

/// Print the residue labels of a peptide with forward and reverse positions
pub fn run(peptide: String, config: Option<PathBuf>) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let modifications = config.modification_table()?;
    let peptide = normalize_peptide_input(&peptide).context("Peptide sequence is empty")?;

    let length = effective_length(&peptide, &modifications);
    println!("Peptide: {}", peptide);
    println!("Residues: {}", length);
    println!();

    for (i, label) in residue_labels(&peptide, &modifications).iter().enumerate() {
        println!("{:>4}  {:<4}{:>4}", i + 1, label, length - i);
    }

    Ok(())
}
