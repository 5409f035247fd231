pub mod analyzer;
pub mod error;
pub mod record;
pub mod table;

pub use analyzer::SnpAnalyzer;
pub use error::SnpTabError;
pub use record::{VariantRow, COLUMNS};
pub use table::VariantTable;
