//! Measurement prediction relay.
//!
//! A prediction request carries measurements plus the id of the user they
//! belong to. The measurements go to an external predictor, the result is
//! saved to the user's record store, and only then returned to the caller.

pub mod predictor;
pub mod store;
pub mod types;

pub use predictor::{MockPredictor, Predictor, RemotePredictor};
pub use store::{HttpPredictionStore, MockPredictionStore, PredictionStore};
pub use types::{
    BloodPressureInput, DiabetesInput, Measurements, PredictionModel, PredictionRecord,
    PredictionRequest,
};

use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PredictionError {
    #[error("Predictor unreachable: {0}")]
    Request(String),

    #[error("Predictor returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed predictor response: {0}")]
    Parse(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Record store unreachable: {0}")]
    Request(String),

    #[error("Record store returned {0}")]
    Status(u16),

    #[error("Cannot encode record: {0}")]
    Encode(String),
}

/// Failure of the predict-then-store flow, by step.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error(transparent)]
    Predict(#[from] PredictionError),

    #[error(transparent)]
    Store(#[from] StorageError),
}

/// Predict, persist, respond. Shared by every measurement endpoint.
#[derive(Clone)]
pub struct PredictionRelay {
    predictor: Arc<dyn Predictor>,
    store: Arc<dyn PredictionStore>,
}

impl PredictionRelay {
    pub fn new(predictor: Arc<dyn Predictor>, store: Arc<dyn PredictionStore>) -> Self {
        Self { predictor, store }
    }

    /// Returns the prediction only once it has been stored.
    pub async fn predict_and_store<M: Measurements>(
        &self,
        request: PredictionRequest<M>,
    ) -> Result<String, RelayError> {
        let model = M::MODEL;
        let features = request.measurements.features();

        let prediction = self.predictor.predict(model, &features).await.map_err(|e| {
            tracing::error!(model = %model, error = %e, "Prediction failed");
            e
        })?;

        let record = PredictionRecord::new(&request, &prediction)?;
        self.store.save(model, &record).await.map_err(|e| {
            tracing::error!(model = %model, user_id = %request.user_id, error = %e, "Failed to send prediction");
            e
        })?;

        tracing::info!(model = %model, user_id = %request.user_id, "Prediction stored");
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diabetes_request() -> PredictionRequest<DiabetesInput> {
        PredictionRequest {
            measurements: DiabetesInput {
                pregnancies: 2,
                glucose: 138.0,
                blood_pressure: 62.0,
                skin_thickness: 35.0,
                insulin: 0.0,
                bmi: 33.6,
                diabetes_pedigree: 0.127,
                age: 47,
            },
            user_id: "user-42".into(),
        }
    }

    #[tokio::test]
    async fn prediction_is_stored_then_returned() {
        let predictor = Arc::new(MockPredictor::new("Diabetic"));
        let store = Arc::new(MockPredictionStore::new());
        let relay = PredictionRelay::new(predictor.clone(), store.clone());

        let result = relay.predict_and_store(diabetes_request()).await.unwrap();
        assert_eq!(result, "Diabetic");

        let (model, features) = predictor.last_call().unwrap();
        assert_eq!(model, PredictionModel::Diabetes);
        assert_eq!(features, vec![2.0, 138.0, 62.0, 35.0, 0.0, 33.6, 0.127, 47.0]);

        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, PredictionModel::Diabetes);
        assert_eq!(saved[0].1.user_id, "user-42");
        assert_eq!(saved[0].1.result, "Diabetic");
    }

    #[tokio::test]
    async fn predictor_failure_skips_storage() {
        let predictor = Arc::new(MockPredictor::failing(PredictionError::Request("down".into())));
        let store = Arc::new(MockPredictionStore::new());
        let relay = PredictionRelay::new(predictor, store.clone());

        let err = relay.predict_and_store(diabetes_request()).await.unwrap_err();
        assert!(matches!(err, RelayError::Predict(_)));
        assert!(store.saved().is_empty());
    }

    #[tokio::test]
    async fn storage_failure_withholds_prediction() {
        let relay = PredictionRelay::new(
            Arc::new(MockPredictor::new("Normal")),
            Arc::new(MockPredictionStore::failing(StorageError::Status(503))),
        );
        let err = relay.predict_and_store(diabetes_request()).await.unwrap_err();
        assert_eq!(err, RelayError::Store(StorageError::Status(503)));
    }
}
