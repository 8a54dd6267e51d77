//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error of the dashboard server. It wraps the
//! startup configuration errors and the failures that can happen while
//! forwarding a request to the bot API, and implements `IntoResponse` so
//! handlers can return it directly. Response bodies use the same `ErrorDto`
//! shape as the bot API so the client decodes both the same way.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// HTTP client error while talking to the bot API.
    ///
    /// Results in 502 Bad Gateway: the dashboard is up but the bot is not
    /// answering.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 502 Bad Gateway - For `ReqwestErr`, the bot API is unreachable or timed out
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(msg, "BAD_REQUEST")),
            )
                .into_response(),
            Self::ReqwestErr(err) => {
                tracing::error!("Bot API request failed: {}", err);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto::new(
                        "The bot is not responding, try again later.",
                        "UPSTREAM_UNAVAILABLE",
                    )),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid
/// leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("Internal server error", "INTERNAL_ERROR")),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("Invalid API path".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn config_error_maps_to_500() {
        let err: AppError = ConfigError::MissingEnvVar("BOT_API_URL".to_string()).into();

        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
