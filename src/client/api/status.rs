use crate::{
    client::model::error::ApiError,
    model::status::{nullify_non_finite, StatusDto},
};

use super::helper::{get, parse_text_response, send_request};

/// Get the bot's readiness, latency and guild count
///
/// The bot reports its latency as `NaN` or `Infinity` until the gateway has
/// answered a heartbeat, which strict JSON parsers reject.
pub async fn get_status() -> Result<StatusDto, ApiError> {
    let response = send_request(get("/api/status")).await?;
    let body = parse_text_response(response).await?;

    serde_json::from_str(&nullify_non_finite(&body))
        .map_err(|e| ApiError::internal(format!("Failed to parse response: {}", e)))
}
