use thiserror::Error;

pub type Result<T> = std::result::Result<T, FecError>;

#[derive(Debug, Error)]
pub enum FecError {
    #[error("table validation error: {0}")]
    Validation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
