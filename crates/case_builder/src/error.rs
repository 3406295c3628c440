use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("No matching column: none of [{columns}] contains \"ssv\"")]
    MissingColumn { columns: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaseError>;
