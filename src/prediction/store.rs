use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{PredictionModel, PredictionRecord};
use super::StorageError;

/// Persistent home of a user's prediction history.
#[async_trait]
pub trait PredictionStore: Send + Sync {
    async fn save(&self, model: PredictionModel, record: &PredictionRecord) -> Result<(), StorageError>;
}

/// Record store reached over HTTP, one save URL per model.
pub struct HttpPredictionStore {
    client: reqwest::Client,
    diabetes_url: String,
    hypertension_url: String,
}

impl HttpPredictionStore {
    pub fn new(client: reqwest::Client, diabetes_url: &str, hypertension_url: &str) -> Self {
        Self {
            client,
            diabetes_url: diabetes_url.to_string(),
            hypertension_url: hypertension_url.to_string(),
        }
    }

    pub fn url_for(&self, model: PredictionModel) -> &str {
        match model {
            PredictionModel::Diabetes => &self.diabetes_url,
            PredictionModel::Hypertension => &self.hypertension_url,
        }
    }
}

#[async_trait]
impl PredictionStore for HttpPredictionStore {
    async fn save(&self, model: PredictionModel, record: &PredictionRecord) -> Result<(), StorageError> {
        let response = self
            .client
            .post(self.url_for(model))
            .json(record)
            .send()
            .await
            .map_err(|e| StorageError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StorageError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Mock store for testing. Keeps records in memory or always fails.
pub struct MockPredictionStore {
    failure: Option<StorageError>,
    saved: Mutex<Vec<(PredictionModel, PredictionRecord)>>,
}

impl MockPredictionStore {
    pub fn new() -> Self {
        Self {
            failure: None,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: StorageError) -> Self {
        Self {
            failure: Some(error),
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn saved(&self) -> Vec<(PredictionModel, PredictionRecord)> {
        self.saved.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Default for MockPredictionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PredictionStore for MockPredictionStore {
    async fn save(&self, model: PredictionModel, record: &PredictionRecord) -> Result<(), StorageError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        if let Ok(mut saved) = self.saved.lock() {
            saved.push((model, record.clone()));
        }
        Ok(())
    }
}
