use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dropforge_core::error::ForgeError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Forge(#[from] ForgeError),

    #[error("invalid JSON body: {0}")]
    BadJson(#[from] JsonRejection),

    #[error("invalid query: {0}")]
    BadQuery(#[from] QueryRejection),

    #[error("invalid path: {0}")]
    BadPath(#[from] PathRejection),

    #[error("{0}")]
    Validation(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Forge(ForgeError::Validation(s) | ForgeError::Conflict(s)) => {
                (StatusCode::BAD_REQUEST, s)
            }
            AppError::Forge(ForgeError::NotFound(s)) => (StatusCode::NOT_FOUND, s),
            AppError::Forge(e) => {
                tracing::error!("Store Error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::BadJson(e) => (
                StatusCode::BAD_REQUEST,
                format!("invalid JSON body: {}", e.body_text()),
            ),
            AppError::BadQuery(e) => (
                StatusCode::BAD_REQUEST,
                format!("invalid query: {}", e.body_text()),
            ),
            AppError::BadPath(e) => (
                StatusCode::BAD_REQUEST,
                format!("invalid path: {}", e.body_text()),
            ),
            AppError::Validation(s) => (StatusCode::BAD_REQUEST, s),
        };

        (status, Json(json!({ "error": msg }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
