use anyhow::Result;

use spectrumlook::series::{terminus_of, FragmentationMode, Terminus};

/// Print the series catalog of a fragmentation mode
pub fn run(mode: FragmentationMode) -> Result<()> {
    println!("{}", catalog_listing(mode));
    Ok(())
}

/// One line per series; `*` marks the default selection
fn catalog_listing(mode: FragmentationMode) -> String {
    let defaults = mode.default_selection();
    let mut output = format!("Ion series for {}:\n", mode.to_string().to_uppercase());

    for key in mode.series_catalog() {
        let marker = if defaults.contains(key) { '*' } else { ' ' };
        let terminus = match terminus_of(key) {
            Some(Terminus::N) => "N-term",
            Some(Terminus::C) => "C-term",
            None => "",
        };
        output.push_str(&format!("  {} {:<10} {}\n", marker, key, terminus));
    }

    output.push_str("\n* selected by default");
    output
}
