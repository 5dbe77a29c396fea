// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use async_trait::async_trait;
use portal_model::{Dataset, ValidationError};
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use tracing::warn;

mod defaults;
mod sources;

pub use defaults::default_dataset;
pub use sources::{JsonFileSource, StaticSource};

pub const CRATE_NAME: &str = "portal-store";

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
    Read { path: PathBuf, message: String },
    Parse(String),
    Malformed(ValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "failed to read {}: {message}", path.display())
            }
            Self::Parse(message) => write!(f, "invalid data document: {message}"),
            Self::Malformed(err) => write!(f, "malformed data: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Malformed(value)
    }
}

/// Read-only origin of the portal dataset.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn fetch(&self) -> Result<Dataset, StoreError>;

    fn describe(&self) -> String;
}

/// Parses and validates a backing document.
pub fn parse_dataset(bytes: &[u8]) -> Result<Dataset, StoreError> {
    let dataset: Dataset =
        serde_json::from_slice(bytes).map_err(|e| StoreError::Parse(e.to_string()))?;
    dataset.validate()?;
    Ok(dataset)
}

pub async fn try_load(source: &dyn RecordSource) -> Result<Dataset, StoreError> {
    source.fetch().await
}

/// Loads the dataset, substituting the built-in records on any failure.
pub async fn load(source: &dyn RecordSource) -> Dataset {
    match source.fetch().await {
        Ok(dataset) => dataset,
        Err(err) => {
            warn!(
                source = %source.describe(),
                error = %err,
                "data source unavailable; serving built-in dataset"
            );
            default_dataset()
        }
    }
}
