//! Case Builder Library
//!
//! Test-case tooling for TeamBuilder:
//! - synthetic player sheets (random or balanced) → CSV
//! - free-text SSV answers → canonical sport names

pub mod error;
pub mod generate;
pub mod normalize;
pub mod table;

pub use error::{CaseError, Result};
pub use generate::{build_test_case, test_case_file_name, GenerateOptions};
pub use normalize::{
    convert_sport_names, converted_output_path, find_ssv_column, normalize_file,
    ClassificationStats, NormalizeReport,
};
pub use table::{read_table, write_records, write_table, Table};
