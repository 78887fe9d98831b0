use thiserror::Error;

pub type CastResult<T> = Result<T, CastError>;

#[derive(Error, Debug)]
pub enum CastError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel error: {0}")]
    Excel(#[from] calamine::XlsxError),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{failed} of {total} sheets failed to convert")]
    PartialFailure { failed: usize, total: usize },
}
