use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::repositories::StoreError;

#[derive(Debug)]
pub enum AppError {
    DogNotFound,
    InternalServerError,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::DogNotFound => {
                (StatusCode::NOT_FOUND, Json(json!({"error": "Dog not found"}))).into_response()
            }
            AppError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "internal server error"})),
            )
                .into_response(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        tracing::error!(error = %err, "store read failed");
        AppError::InternalServerError
    }
}
