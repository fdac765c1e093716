//! Measurement prediction endpoints.
//!
//! - `POST /diabetes/predict`
//! - `POST /blood_pressure/predict`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::prediction::{BloodPressureInput, DiabetesInput, PredictionRequest};

#[derive(Serialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

pub async fn diabetes(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PredictionRequest<DiabetesInput>>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(req) = payload?;
    let prediction = ctx.predictions.predict_and_store(req).await?;
    Ok(Json(PredictionResponse { prediction }))
}

pub async fn blood_pressure(
    State(ctx): State<ApiContext>,
    payload: Result<Json<PredictionRequest<BloodPressureInput>>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(req) = payload?;
    let prediction = ctx.predictions.predict_and_store(req).await?;
    Ok(Json(PredictionResponse { prediction }))
}
