use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ProcessError;
use crate::faker_rs::LocaleKey;
use crate::scrub::DEFAULT_MASK_CHAR;
use crate::similarity::DEFAULT_ATTEMPTS;

/// What `RandomUUID` does with input that is not a UUID.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidUuidPolicy {
    /// Return an empty string without an error.
    #[default]
    Empty,
    /// Fail with `ProcessError::InvalidUuid`.
    Error,
}

/// Options for an anonymization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessSettings {
    /// Seed for a deterministic random source; OS entropy when absent.
    pub seed: Option<u64>,
    /// Locale of synthetic values.
    pub locale: LocaleKey,
    /// Character used by `ScrubString`.
    pub mask_char: char,
    /// Candidates tried by the similarity gate before giving up.
    pub similarity_attempts: u32,
    pub invalid_uuid: InvalidUuidPolicy,
}

impl Default for ProcessSettings {
    fn default() -> Self {
        Self {
            seed: None,
            locale: LocaleKey::default(),
            mask_char: DEFAULT_MASK_CHAR,
            similarity_attempts: DEFAULT_ATTEMPTS,
            invalid_uuid: InvalidUuidPolicy::default(),
        }
    }
}

impl ProcessSettings {
    /// Read settings from a TOML file and validate them.
    pub fn load(path: &Path) -> Result<Self, ProcessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ProcessError> {
        let settings: ProcessSettings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ProcessError> {
        if self.similarity_attempts == 0 {
            return Err(ProcessError::Settings(
                "similarity_attempts must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
