use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::warn;

use crate::models::response::ApiResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Parameter {0} is required")]
    MissingParam(&'static str),

    #[error("Unknown banlist format: {0}")]
    UnknownFormat(String),

    #[error("Card not found")]
    CardNotFound,

    #[error("{0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Failed to parse upstream JSON")]
    MalformedUpstream(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MissingParam(_) | AppError::UnknownFormat(_) => StatusCode::BAD_REQUEST,
            AppError::CardNotFound => StatusCode::NOT_FOUND,
            AppError::Upstream(_) | AppError::MalformedUpstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if status.is_server_error() {
            warn!("Upstream request failed: {self}");
        }

        (status, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
