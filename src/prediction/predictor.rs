use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::types::PredictionModel;
use super::PredictionError;

/// External model scoring a feature vector.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn predict(
        &self,
        model: PredictionModel,
        features: &[f64],
    ) -> Result<String, PredictionError>;
}

/// HTTP predictor: `POST {base_url}/predict/{model}`.
pub struct RemotePredictor {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct PredictBody<'a> {
    model: PredictionModel,
    features: &'a [f64],
}

#[derive(Deserialize)]
struct PredictResponse {
    prediction: serde_json::Value,
}

impl RemotePredictor {
    pub fn new(base_url: &str, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl Predictor for RemotePredictor {
    async fn predict(
        &self,
        model: PredictionModel,
        features: &[f64],
    ) -> Result<String, PredictionError> {
        let url = format!("{}/predict/{}", self.base_url, model);
        let response = self
            .client
            .post(&url)
            .json(&PredictBody { model, features })
            .send()
            .await
            .map_err(|e| PredictionError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictionError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PredictResponse = response
            .json()
            .await
            .map_err(|e| PredictionError::Parse(e.to_string()))?;

        // Labels are usually strings; numeric classes are kept as their JSON text.
        match parsed.prediction {
            serde_json::Value::String(label) => Ok(label),
            serde_json::Value::Null => Err(PredictionError::Parse("prediction is null".into())),
            other => Ok(other.to_string()),
        }
    }
}

/// Mock predictor for testing with a fixed result.
pub struct MockPredictor {
    result: Result<String, PredictionError>,
    calls: Mutex<Vec<(PredictionModel, Vec<f64>)>>,
}

impl MockPredictor {
    pub fn new(result: &str) -> Self {
        Self {
            result: Ok(result.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: PredictionError) -> Self {
        Self {
            result: Err(error),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> Option<(PredictionModel, Vec<f64>)> {
        self.calls.lock().ok().and_then(|c| c.last().cloned())
    }
}

#[async_trait]
impl Predictor for MockPredictor {
    async fn predict(
        &self,
        model: PredictionModel,
        features: &[f64],
    ) -> Result<String, PredictionError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((model, features.to_vec()));
        }
        self.result.clone()
    }
}
