use rust_htslib::bcf;
use rust_htslib::errors::Error as HtslibError;

/// Column order of the tabular view. Fixed; export writes exactly this header.
pub const COLUMNS: [&str; 6] = [
    "Chromosome",
    "Position",
    "Reference",
    "Alternative",
    "Quality",
    "Filter",
];

/// Fixed-shape projection of a single VCF/BCF record.
///
/// The six fields are extracted once at parse time; everything downstream
/// (filtering, export) works on this struct or its string cells.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRow {
    pub chromosome: String,
    /// 1-based genomic coordinate.
    pub position: u64,
    pub reference: String,
    /// Alternate alleles joined with ','. Empty when the record declares none.
    pub alternative: String,
    /// QUAL, or 0 when the source value is missing.
    pub quality: f64,
    /// Filter labels joined with ','. The literal "PASS" when the record
    /// carries no labels.
    pub filter: String,
}

impl VariantRow {
    pub fn from_record(record: &bcf::Record) -> Result<Self, HtslibError> {
        let header = record.header();

        let chromosome = match record.rid() {
            Some(rid) => String::from_utf8_lossy(header.rid2name(rid)?).into_owned(),
            None => String::from("."),
        };

        // alleles()[0] is REF, the rest are ALT.
        let alleles = record.alleles();
        let reference = alleles
            .first()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .unwrap_or_default();
        let alternative = alleles
            .iter()
            .skip(1)
            .map(|a| String::from_utf8_lossy(a))
            .collect::<Vec<_>>()
            .join(",");

        // htslib encodes a missing QUAL as a NaN payload.
        let qual = record.qual();
        let quality = if qual.is_nan() { 0.0 } else { f64::from(qual) };

        let labels: Vec<String> = record
            .filters()
            .map(|id| String::from_utf8_lossy(&header.id_to_name(id)).into_owned())
            .collect();
        let filter = if labels.is_empty() {
            String::from("PASS")
        } else {
            labels.join(",")
        };

        Ok(VariantRow {
            chromosome,
            position: (record.pos() + 1) as u64,
            reference,
            alternative,
            quality,
            filter,
        })
    }

    /// String cells in `COLUMNS` order.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.chromosome.clone(),
            self.position.to_string(),
            self.reference.clone(),
            self.alternative.clone(),
            self.quality.to_string(),
            self.filter.clone(),
        ]
    }
}
