use thiserror::Error;

/// Core error type shared across Datamask crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A column reference could not be parsed.
    #[error("invalid column reference: {0}")]
    InvalidColumnRef(String),
}

/// Convenience alias for results returned by Datamask crates.
pub type Result<T> = std::result::Result<T, Error>;
