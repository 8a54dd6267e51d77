use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

/// Parse a response body as `T`, or turn an error response into an [`ApiError`].
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = parse_text_response(response).await?;

    serde_json::from_str::<T>(&body)
        .map_err(|e| ApiError::internal(format!("Failed to parse response: {}", e)))
}

/// Return the raw body of a successful response, or turn an error response
/// into an [`ApiError`].
pub async fn parse_text_response(response: Response) -> Result<String, ApiError> {
    let status = response.status() as u64;
    let body = read_body(&response).await?;

    if (200..300).contains(&status) {
        Ok(body)
    } else {
        Err(error_from_body(status, body))
    }
}

async fn read_body(response: &Response) -> Result<String, ApiError> {
    response
        .text()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to read response: {}", e)))
}

fn error_from_body(status: u64, body: String) -> ApiError {
    match serde_json::from_str::<ErrorDto>(&body) {
        Ok(dto) => ApiError::from_dto(status, dto),
        Err(_) if body.is_empty() => ApiError {
            status,
            message: "Unknown error".to_string(),
            code: None,
        },
        Err(_) => ApiError {
            status,
            message: body,
            code: None,
        },
    }
}

/// Create a GET request with credentials
pub fn get(url: &str) -> Request {
    Request::get(url)
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
}

/// Create a PATCH request with credentials carrying a plain text body
pub fn patch_text(url: &str, body: &str) -> Request {
    Request::patch(url)
        .credentials(RequestCredentials::Include)
        .header("Accept", "application/json")
        .header("Content-Type", "text/plain; charset=utf-8")
        .body(body.to_string())
}

/// Send a request and handle common errors
pub async fn send_request(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to send request: {}", e)))
}
