use std::path::Path;

use crate::error::SnpTabError;

/// An ordered table of string cells with named columns.
///
/// Rows keep their insertion order; filtering produces a new table and never
/// touches the source.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl VariantTable {
    pub fn new<S: Into<String>>(columns: Vec<S>) -> Self {
        VariantTable {
            columns: columns.into_iter().map(|c| c.into()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Retain rows whose Quality cell parses as a number `>= min_quality`.
    ///
    /// A cell that does not parse (e.g. ".") is a missing value and its row is
    /// excluded regardless of the threshold. All columns and the original row
    /// order are preserved.
    pub fn filter_by_quality(&self, min_quality: f64) -> VariantTable {
        let mut filtered = VariantTable::new(self.columns.clone());
        let qi = match self.column_index("Quality") {
            Some(qi) => qi,
            None => return filtered,
        };
        for row in &self.rows {
            let quality = row.get(qi).and_then(|cell| cell.parse::<f64>().ok());
            if let Some(q) = quality {
                if q >= min_quality {
                    filtered.push_row(row.clone());
                }
            }
        }
        filtered
    }

    /// Write the table as delimited text: one header row of column names, one
    /// line per row, no index column, UTF-8.
    pub fn write_to<P: AsRef<Path>>(&self, path: P, delimiter: u8) -> Result<(), SnpTabError> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .from_path(path)?;
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
