use thiserror::Error;

/// Errors emitted by processors and the run context.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("unknown processor '{0}'")]
    UnknownProcessor(String),
    #[error("date format is not ISO-8601 ({reason}): {input:?}")]
    DateFormat { input: String, reason: String },
    #[error(
        "jaro-winkler: {score:.4} < {threshold:.4} after {attempts} attempts (input: {input:?}, last candidate: {candidate:?})"
    )]
    SimilarityExhausted {
        score: f64,
        threshold: f64,
        attempts: u32,
        input: String,
        candidate: String,
    },
    #[error("uuid generation failed: {0}")]
    UuidGeneration(String),
    #[error("invalid uuid: {0:?}")]
    InvalidUuid(String),
    #[error("consistency table '{0}' is poisoned")]
    StorePoisoned(&'static str),
    #[error("invalid settings: {0}")]
    Settings(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ProcessError {
    /// Stable identifier used in run reports and structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            ProcessError::UnknownProcessor(_) => "unknown_processor",
            ProcessError::DateFormat { .. } => "date_format",
            ProcessError::SimilarityExhausted { .. } => "similarity_exhausted",
            ProcessError::UuidGeneration(_) => "uuid_generation",
            ProcessError::InvalidUuid(_) => "invalid_uuid",
            ProcessError::StorePoisoned(_) => "store_poisoned",
            ProcessError::Settings(_) => "settings",
            ProcessError::Io(_) => "io",
            ProcessError::Toml(_) => "toml",
        }
    }
}
