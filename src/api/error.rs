//! API error types with structured JSON responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::gate::GateError;
use crate::prediction::RelayError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Chat processing failed: {0}")]
    ChatFailed(String),
    #[error("Record store failed: {0}")]
    StoreFailed(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::ChatFailed(detail) => {
                tracing::error!(detail, "Chat request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CHAT_FAILED",
                    "Internal server error while processing your request".to_string(),
                )
            }
            ApiError::StoreFailed(detail) => {
                tracing::error!(detail, "Prediction not stored");
                (
                    StatusCode::BAD_GATEWAY,
                    "STORE_FAILED",
                    "Failed to send prediction to Node backend.".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "Internal server error.".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<GateError> for ApiError {
    fn from(err: GateError) -> Self {
        match err {
            GateError::UnknownChatType(_) => ApiError::BadRequest(err.to_string()),
            GateError::Dispatch(e) => ApiError::ChatFailed(e.to_string()),
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Predict(e) => ApiError::Internal(e.to_string()),
            RelayError::Store(e) => ApiError::StoreFailed(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    use crate::llm::LlmError;
    use crate::prediction::{PredictionError, StorageError};

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn bad_request_returns_400_with_detail() {
        let response = ApiError::BadRequest("session_id is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "BAD_REQUEST");
        assert_eq!(json["error"]["message"], "session_id is required");
    }

    #[tokio::test]
    async fn unknown_chat_type_maps_to_400() {
        let response = ApiError::from(GateError::UnknownChatType("diet".into())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Invalid chat type: diet. Must be 'symptom', 'qa', 'food', or 'explore'"
        );
    }

    #[tokio::test]
    async fn dispatch_failure_hides_detail() {
        let err = GateError::Dispatch(LlmError::Status {
            status: 401,
            body: "invalid api key sk-secret".into(),
        });
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(
            json["error"]["message"],
            "Internal server error while processing your request"
        );
        assert!(!json.to_string().contains("sk-secret"));
    }

    #[tokio::test]
    async fn storage_failure_returns_502() {
        let response = ApiError::from(RelayError::Store(StorageError::Status(503))).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = body_json(response).await;
        assert_eq!(json["error"]["message"], "Failed to send prediction to Node backend.");
    }

    #[tokio::test]
    async fn predictor_failure_returns_500() {
        let err = RelayError::Predict(PredictionError::Request("connection refused".into()));
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "INTERNAL");
        assert_eq!(json["error"]["message"], "Internal server error.");
    }
}
