//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::gate::ChatGate;
use crate::llm::{ChatClient, DeepSeekClient};
use crate::prediction::{HttpPredictionStore, PredictionRelay, Predictor, PredictionStore, RemotePredictor};

// ═══════════════════════════════════════════════════════════
// API context
// ═══════════════════════════════════════════════════════════

/// Shared context for all routes. Cheap to clone.
#[derive(Clone)]
pub struct ApiContext {
    pub gate: Arc<ChatGate>,
    pub predictions: PredictionRelay,
}

impl ApiContext {
    pub fn new(
        client: Arc<dyn ChatClient>,
        predictor: Arc<dyn Predictor>,
        store: Arc<dyn PredictionStore>,
    ) -> Self {
        Self {
            gate: Arc::new(ChatGate::new(client)),
            predictions: PredictionRelay::new(predictor, store),
        }
    }

    /// Wire the production adapters from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, String> {
        let client = DeepSeekClient::from_config(&config.llm)
            .map_err(|e| format!("Cannot create language model client: {e}"))?;

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.prediction.timeout_secs))
            .build()
            .map_err(|e| format!("Cannot create prediction HTTP client: {e}"))?;
        let predictor = RemotePredictor::new(&config.prediction.predictor_base_url, http.clone());
        let store = HttpPredictionStore::new(
            http,
            &config.prediction.diabetes_store_url,
            &config.prediction.hypertension_store_url,
        );

        Ok(Self::new(Arc::new(client), Arc::new(predictor), Arc::new(store)))
    }
}
