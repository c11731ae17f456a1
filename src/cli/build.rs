use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

use spectrumlook::input::{ElementSource, TsvElementReader};
use spectrumlook::ladder::{build_ladder, LadderInstance, LadderTable};
use spectrumlook::peptide::{normalize_peptide_input, ModificationTable};
use spectrumlook::series::FragmentationMode;

use super::{Config, OutputFormat};

/// Build and print the fragment ladder for a peptide
pub fn run(
    elements: PathBuf,
    peptide: String,
    config: Option<PathBuf>,
    mode: Option<FragmentationMode>,
    series: Vec<String>,
    format: OutputFormat,
) -> Result<()> {
    let config = Config::load(config.as_deref())?;
    let modifications = config.modification_table()?;
    let mode = mode.or(config.ladder.mode).unwrap_or_default();
    let selection = if series.is_empty() {
        config.series_selection(mode)
    } else {
        series
    };

    let peptide = normalize_peptide_input(&peptide).context("Peptide sequence is empty")?;

    let mut reader = TsvElementReader::from_path(&elements)
        .with_context(|| format!("Failed to open element table: {}", elements.display()))?;
    let elements = reader
        .collect_elements()
        .with_context(|| format!("Failed to read element table: {}", elements.display()))?;

    info!("Read {} elements", elements.len());
    info!("Mode: {}, series: {}", mode, selection.join(", "));

    for key in selection.iter().filter(|k| !mode.offers(k)) {
        warn!("Series {} is not part of the {} catalog", key, mode);
    }

    let ladder = build_ladder(&elements, &peptide, &modifications);
    println!("{}", render(&ladder, &selection, &modifications, format)?);

    Ok(())
}

fn render(
    ladder: &LadderInstance,
    selection: &[String],
    modifications: &ModificationTable,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let table = LadderTable::new(ladder, selection, modifications);
            #[cfg(feature = "colorized_output")]
            {
                Ok(table.format_colored())
            }

            #[cfg(not(feature = "colorized_output"))]
            {
                Ok(table.to_string())
            }
        }
        OutputFormat::Json => ladder.to_json().context("Failed to serialize ladder"),
        OutputFormat::Legacy => Ok(ladder
            .rows()
            .iter()
            .map(|row| format!("{}\t{}", row.series_key, row.legacy_cells().join("\t")))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
