use csv::StringRecord;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{ElementSource, InputError};
use crate::element::Element;

const ANNOTATION_COLUMN: &str = "annotation";
const MZ_COLUMN: &str = "mz";
const INTENSITY_COLUMN: &str = "intensity";
const MATCHED_COLUMN: &str = "matched";

#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    annotation: usize,
    mz: usize,
    intensity: Option<usize>,
    matched: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, InputError> {
        let names: Vec<String> = headers
            .iter()
            .map(|s| s.trim().to_lowercase())
            .collect();
        let find = |name: &str| names.iter().position(|h| h == name);
        let require = |name: &str| find(name).ok_or_else(|| InputError::MissingColumn(name.to_string()));

        Ok(Self {
            annotation: require(ANNOTATION_COLUMN)?,
            mz: require(MZ_COLUMN)?,
            intensity: find(INTENSITY_COLUMN),
            matched: require(MATCHED_COLUMN)?,
        })
    }
}

/// Reads fragment elements from a tab-separated table
pub struct TsvElementReader<R: Read> {
    reader: csv::Reader<R>,
    columns: ColumnIndex,
    record: StringRecord,
}

impl TsvElementReader<BufReader<File>> {
    /// Open an element table on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        debug!("Reading elements from {}", path.display());
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read> TsvElementReader<R> {
    /// Wrap a reader; the header row is read immediately
    pub fn new(reader: R) -> Result<Self, InputError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .has_headers(true)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(reader.headers()?)?;

        Ok(Self {
            reader,
            columns,
            record: StringRecord::new(),
        })
    }

    fn field(&self, index: usize) -> &str {
        self.record.get(index).map(str::trim).unwrap_or("")
    }

    fn line(&self) -> u64 {
        self.record.position().map(|p| p.line()).unwrap_or(0)
    }

    fn invalid(&self, column: &'static str, value: &str) -> InputError {
        InputError::InvalidValue {
            column,
            line: self.line(),
            value: value.to_string(),
        }
    }

    fn parse_record(&self) -> Result<Element, InputError> {
        let annotation = self.field(self.columns.annotation);
        if annotation.is_empty() {
            return Err(self.invalid(ANNOTATION_COLUMN, annotation));
        }

        let mz_text = self.field(self.columns.mz);
        let mz: f64 = mz_text
            .parse()
            .map_err(|_| self.invalid(MZ_COLUMN, mz_text))?;

        let intensity: f64 = match self.columns.intensity.map(|i| self.field(i)) {
            Some(text) if !text.is_empty() => text
                .parse()
                .map_err(|_| self.invalid(INTENSITY_COLUMN, text))?,
            _ => 0.0,
        };

        let matched_text = self.field(self.columns.matched);
        let matched = parse_flag(matched_text).ok_or_else(|| self.invalid(MATCHED_COLUMN, matched_text))?;

        Ok(Element::new(annotation, mz, intensity, matched))
    }
}

/// Interpret a match flag written by common tools
fn parse_flag(text: &str) -> Option<bool> {
    match text.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Some(true),
        "false" | "0" | "no" | "n" => Some(false),
        _ => None,
    }
}

impl<R: Read> ElementSource for TsvElementReader<R> {
    fn next_element(&mut self) -> Result<Option<Element>, InputError> {
        loop {
            if !self.reader.read_record(&mut self.record)? {
                return Ok(None);
            }
            // Skip blank lines
            if self.record.iter().all(|f| f.trim().is_empty()) {
                continue;
            }
            return self.parse_record().map(Some);
        }
    }
}

impl<R: Read> Iterator for TsvElementReader<R> {
    type Item = Result<Element, InputError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().transpose()
    }
}
