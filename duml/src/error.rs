//! High-level error types

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Core codec error: {0}")]
    Core(#[from] duml_core::Error),

    #[error("Failed to init logging: {0}")]
    Logging(String),
}
