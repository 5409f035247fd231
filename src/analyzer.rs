use rust_htslib::bcf::{self, Read};

use crate::error::SnpTabError;
use crate::record::{VariantRow, COLUMNS};
use crate::table::VariantTable;

pub const DEFAULT_OUTPUT: &str = "snp_results.csv";
/// Semicolon, so the comma-joined Alternative and Filter cells stay unambiguous.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Reads a VCF/BCF file record-by-record, projects each record into a
/// [`VariantRow`], and accumulates the rows for filtering and export.
///
/// The accumulation is append-only: `parse` is the only mutating operation,
/// and each call appends one full scan of the input. `filter_by_quality` and
/// `export` only read it.
pub struct SnpAnalyzer {
    vcf_path: String,
    variants: Vec<VariantRow>,
}

impl SnpAnalyzer {
    pub fn new<S: Into<String>>(vcf_path: S) -> Self {
        SnpAnalyzer {
            vcf_path: vcf_path.into(),
            variants: Vec::new(),
        }
    }

    /// Scan the whole input, appending one row per record, and return the
    /// six-column table over everything accumulated so far.
    ///
    /// Fails with [`SnpTabError::EmptyVcf`] if the scan leaves the
    /// accumulation empty, so callers can tell "no variants in the file" from
    /// "none passed a filter". Reader errors from rust-htslib propagate
    /// unchanged.
    pub fn parse(&mut self) -> Result<VariantTable, SnpTabError> {
        let mut reader = match self.vcf_path.as_str() {
            "-" | "stdin" => bcf::Reader::from_stdin()?,
            path => bcf::Reader::from_path(path)?,
        };
        _ = reader.set_threads(2);

        for result in reader.records() {
            let record = result?;
            self.variants.push(VariantRow::from_record(&record)?);
        }

        if self.variants.is_empty() {
            return Err(SnpTabError::EmptyVcf(self.vcf_path.clone()));
        }
        log::info!(
            "parsed {} variant records from {}",
            self.variants.len(),
            self.vcf_path
        );
        Ok(self.table())
    }

    /// The six-column table over the accumulated rows.
    pub fn table(&self) -> VariantTable {
        let mut table = VariantTable::new(COLUMNS.to_vec());
        for variant in &self.variants {
            table.push_row(variant.cells());
        }
        table
    }

    /// Rows whose quality is `>= min_quality`, as a new table. Does not
    /// mutate the accumulation.
    pub fn filter_by_quality(&self, min_quality: f64) -> VariantTable {
        self.table().filter_by_quality(min_quality)
    }

    /// Write the FULL accumulated table to `output` (default
    /// [`DEFAULT_OUTPUT`]) as delimited text.
    ///
    /// This always serializes everything parsed, never a filtered subset.
    /// To export filtered rows, call [`VariantTable::write_to`] on the table
    /// returned by [`SnpAnalyzer::filter_by_quality`].
    pub fn export(&self, output: Option<&str>, delimiter: u8) -> Result<(), SnpTabError> {
        let path = output.unwrap_or(DEFAULT_OUTPUT);
        self.table().write_to(path, delimiter)?;
        log::debug!("wrote {} rows to {}", self.variants.len(), path);
        Ok(())
    }

    pub fn variants(&self) -> &[VariantRow] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
