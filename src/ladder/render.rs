//! Text rendering of a fragment ladder.
//!
//! The table has one line per residue. N-terminal series are printed in
//! front of the residue column next to a forward position index, C-terminal
//! series after it next to a reverse index, so that `y1` lines up with the
//! last residue.

use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

use super::{LadderCell, LadderInstance, LadderRow};
use crate::peptide::{residue_labels, ModificationTable};
use crate::series::{split_by_terminus, terminus_of, Terminus};

const POSITION_HEADER: &str = "#";
const RESIDUE_HEADER: &str = "AA";
const COLUMN_GAP: &str = "  ";

/// Displayable view of selected ladder series around the peptide
#[derive(Debug)]
pub struct LadderTable<'a> {
    n_terminal: Vec<&'a LadderRow>,
    c_terminal: Vec<&'a LadderRow>,
    labels: Vec<String>,
    length: usize,
}

impl<'a> LadderTable<'a> {
    /// Arrange `selection` from `instance`; series without a row are skipped
    pub fn new<S: AsRef<str>>(
        instance: &'a LadderInstance,
        selection: &[S],
        modifications: &ModificationTable,
    ) -> Self {
        let (n_keys, c_keys) = split_by_terminus(selection);
        Self {
            n_terminal: instance.select(n_keys),
            c_terminal: instance.select(c_keys),
            labels: residue_labels(instance.peptide(), modifications),
            length: instance.effective_length(),
        }
    }

    /// Number of residue lines
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the table has no residue lines
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Cell shown on residue line `line`.
    ///
    /// C-terminal series count from the last residue wherever their column
    /// sits; series of unknown terminus follow the side they are drawn on.
    fn cell_on_line(
        &self,
        row: &'a LadderRow,
        line: usize,
        side: Terminus,
    ) -> Option<&'a LadderCell> {
        match terminus_of(&row.series_key).unwrap_or(side) {
            Terminus::N => row.at_position(line + 1),
            Terminus::C => row.at_position(self.length - line),
        }
    }

    fn render(&self, paint: &dyn Fn(&str, Option<&LadderCell>) -> String) -> String {
        let cell_text = |cell: Option<&LadderCell>| -> String {
            match cell {
                Some(c) if c.matched => c.formatted_mz(),
                Some(c) => format!("({})", c.formatted_mz()),
                None => String::new(),
            }
        };

        let column_width = |row: &LadderRow| -> usize {
            row.cells
                .iter()
                .map(|c| cell_text(c.as_ref()).len())
                .chain(std::iter::once(row.series_key.len()))
                .max()
                .unwrap_or(0)
        };

        let n_widths: Vec<usize> = self.n_terminal.iter().map(|r| column_width(*r)).collect();
        let c_widths: Vec<usize> = self.c_terminal.iter().map(|r| column_width(*r)).collect();
        let index_width = self.length.to_string().len().max(POSITION_HEADER.len());
        let residue_width = self
            .labels
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(RESIDUE_HEADER.len()))
            .max()
            .unwrap_or(0);

        let mut output = String::new();

        // Header
        let mut header: Vec<String> = Vec::new();
        for (row, width) in self.n_terminal.iter().zip(&n_widths) {
            header.push(format!("{:>width$}", row.series_key, width = *width));
        }
        header.push(format!("{:>width$}", POSITION_HEADER, width = index_width));
        header.push(format!("{:^width$}", RESIDUE_HEADER, width = residue_width));
        header.push(format!("{:<width$}", POSITION_HEADER, width = index_width));
        for (row, width) in self.c_terminal.iter().zip(&c_widths) {
            header.push(format!("{:<width$}", row.series_key, width = *width));
        }
        output.push_str(header.join(COLUMN_GAP).trim_end());
        output.push('\n');

        for line in 0..self.length {
            let mut fields: Vec<String> = Vec::new();
            for (row, width) in self.n_terminal.iter().zip(&n_widths) {
                let cell = self.cell_on_line(*row, line, Terminus::N);
                let text = format!("{:>width$}", cell_text(cell), width = *width);
                fields.push(paint(&text, cell));
            }
            fields.push(format!("{:>width$}", line + 1, width = index_width));
            let label = self.labels.get(line).map(String::as_str).unwrap_or("");
            fields.push(format!("{:^width$}", label, width = residue_width));
            fields.push(format!("{:<width$}", self.length - line, width = index_width));
            for (row, width) in self.c_terminal.iter().zip(&c_widths) {
                let cell = self.cell_on_line(*row, line, Terminus::C);
                let text = format!("{:<width$}", cell_text(cell), width = *width);
                fields.push(paint(&text, cell));
            }
            output.push_str(fields.join(COLUMN_GAP).trim_end());
            output.push('\n');
        }

        output
    }

    /// Format the table with matched fragments highlighted (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            self.render(&|text, cell| match cell {
                Some(c) if c.matched => style(text).green().bold().to_string(),
                Some(_) => style(text).dim().to_string(),
                None => text.to_string(),
            })
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for LadderTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&|text, _| text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element;
    use crate::ladder::build_ladder;

    fn sample() -> LadderInstance {
        let elements = vec![
            Element::with_mz("b1", 98.06, true),
            Element::with_mz("b2", 227.10, false),
            Element::with_mz("y1", 148.06, true),
            Element::with_mz("y2", 263.09, true),
        ];
        build_ladder(&elements, "PEPTIDE", &ModificationTable::new())
    }

    #[test]
    fn test_table_layout() {
        let ladder = sample();
        let table = LadderTable::new(&ladder, &["b", "y"], &ModificationTable::new());
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(table.len(), 7);
        assert_eq!(lines.len(), 8);
        assert!(lines[0].trim_start().starts_with("b  #  AA  #  y"));
        assert!(lines[1].contains(" 98.06"));
        assert!(lines[1].contains(" P "));
        assert!(lines[2].contains("(227.10)"));
        // y1 sits on the last residue, y2 on the one before
        assert!(lines[7].ends_with("148.06"));
        assert!(lines[6].ends_with("263.09"));
        assert!(!lines[1].contains("148.06"));
    }

    #[test]
    fn test_position_columns() {
        let ladder = sample();
        let table = LadderTable::new(&ladder, &["b", "y"], &ModificationTable::new());
        let text = table.to_string();
        let first = text.lines().nth(1).unwrap();
        let last = text.lines().last().unwrap();

        let first_fields: Vec<&str> = first.split_whitespace().collect();
        assert_eq!(first_fields, vec!["98.06", "1", "P", "7"]);
        let last_fields: Vec<&str> = last.split_whitespace().collect();
        assert_eq!(last_fields, vec!["7", "E", "1", "148.06"]);
    }

    #[test]
    fn test_modified_residue_labels() {
        let mods = ModificationTable::new().with('*', 79.9663);
        let elements = vec![Element::with_mz("b2", 307.07, true)];
        let ladder = build_ladder(&elements, "PE*PTIDE", &mods);
        let table = LadderTable::new(&ladder, &["b"], &mods);
        let text = table.to_string();

        assert_eq!(table.len(), 7);
        let second: Vec<&str> = text.lines().nth(2).unwrap().split_whitespace().collect();
        assert_eq!(second, vec!["307.07", "2", "E*", "6"]);
    }

    #[test]
    fn test_missing_series_skipped() {
        let ladder = sample();
        let table = LadderTable::new(&ladder, &["b", "b++", "y"], &ModificationTable::new());
        let header = table.to_string().lines().next().unwrap().to_string();
        assert!(!header.contains("b++"));
    }

    #[test]
    fn test_n_terminal_series_after_c_terminal() {
        let ladder = sample();
        let table = LadderTable::new(&ladder, &["y", "b"], &ModificationTable::new());
        let text = table.to_string();
        let lines: Vec<&str> = text.lines().collect();

        // Both columns follow the residues, but b1 stays on the first residue
        assert!(lines[0].trim_start().starts_with("#  AA  #  y"));
        assert!(lines[1].ends_with("98.06"));
        assert!(lines[2].ends_with("(227.10)"));
        assert!(lines[7].contains("148.06"));
        assert!(!lines[7].contains("98.06"));
    }

    #[test]
    fn test_empty_peptide() {
        let ladder = build_ladder(&[], "", &ModificationTable::new());
        let table = LadderTable::new(&ladder, &["b"], &ModificationTable::new());
        assert!(table.is_empty());
        assert_eq!(table.to_string().lines().count(), 1);
    }
}
