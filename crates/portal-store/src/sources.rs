// SPDX-License-Identifier: Apache-2.0

use crate::{parse_dataset, RecordSource, StoreError};
use async_trait::async_trait;
use portal_model::Dataset;
use std::path::PathBuf;

/// Reads the dataset from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn fetch(&self) -> Result<Dataset, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::Read {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        parse_dataset(&bytes)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory source, optionally failing every fetch.
#[derive(Debug, Clone)]
pub struct StaticSource {
    outcome: Result<Dataset, StoreError>,
}

impl StaticSource {
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            outcome: Ok(dataset),
        }
    }

    #[must_use]
    pub fn failing(err: StoreError) -> Self {
        Self { outcome: Err(err) }
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    async fn fetch(&self) -> Result<Dataset, StoreError> {
        self.outcome.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}
