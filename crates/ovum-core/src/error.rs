use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OvumError {
    #[error("Degenerate geometry: {0}")]
    Degenerate(String),

    #[error("Zero-length vector: {0}")]
    ZeroVector(&'static str),

    #[error("Non-finite value in {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, OvumError>;
