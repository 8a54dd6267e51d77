use axum::{
    body::Bytes,
    extract::State,
    http::{
        header::{ACCEPT, CONTENT_TYPE, COOKIE, SET_COOKIE},
        HeaderMap, HeaderName, Method, Uri,
    },
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use url::Url;

use crate::server::{error::AppError, state::AppState};

/// Request headers passed on to the bot API.
const FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [COOKIE, CONTENT_TYPE, ACCEPT];

/// Response headers passed back to the browser.
const FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [CONTENT_TYPE, SET_COOKIE];

/// Forwards an `/api/*` request to the bot API and relays its answer.
///
/// The upstream status and body are returned untouched, so bot API errors
/// such as `NO_AUTH` reach the client as-is.
///
/// # Returns
/// - The upstream response, with only `content-type` and `set-cookie` headers kept
/// - `400 Bad Request` - The path would escape the configured bot API base URL
/// - `502 Bad Gateway` - The bot API could not be reached or timed out
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());
    let target = upstream_url(&state.bot_api_url, path_and_query)?;

    tracing::debug!("Forwarding {} {} to {}", method, uri.path(), target);

    let mut request = state.http_client.request(method, target);
    for name in FORWARDED_REQUEST_HEADERS.iter() {
        for value in headers.get_all(name) {
            request = request.header(name.clone(), value.clone());
        }
    }

    let upstream = request.body(body).send().await?;
    let status = upstream.status();

    let mut response_headers = HeaderMap::new();
    for name in FORWARDED_RESPONSE_HEADERS.iter() {
        for value in upstream.headers().get_all(name) {
            response_headers.append(name.clone(), value.clone());
        }
    }

    let body = upstream.bytes().await?;

    Ok((status, response_headers, body).into_response())
}

/// Resolves a request path against the bot API base URL.
///
/// The result must stay under `base`; dot segments that climb out of it are
/// rejected.
pub fn upstream_url(base: &Url, path_and_query: &str) -> Result<Url, AppError> {
    let relative = path_and_query.trim_start_matches('/');

    let url = base
        .join(relative)
        .map_err(|e| AppError::BadRequest(format!("Invalid API path '{}': {}", path_and_query, e)))?;

    if !url.as_str().starts_with(base.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Invalid API path '{}'",
            path_and_query
        )));
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(url: &str) -> Url {
        Url::parse(url).unwrap()
    }

    #[test]
    fn appends_path_to_base() {
        let url = upstream_url(&base("http://127.0.0.1:8993/"), "/api/guilds").unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:8993/api/guilds");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let url = upstream_url(&base("https://dog.example.com/bot/"), "/api/status").unwrap();

        assert_eq!(url.as_str(), "https://dog.example.com/bot/api/status");
    }

    #[test]
    fn keeps_query_string() {
        let url = upstream_url(
            &base("http://bot.local/"),
            "/api/guild/228317351672545290/config?format=yaml",
        )
        .unwrap();

        assert_eq!(
            url.as_str(),
            "http://bot.local/api/guild/228317351672545290/config?format=yaml"
        );
    }

    #[test]
    fn rejects_paths_escaping_base() {
        let result = upstream_url(&base("https://dog.example.com/bot/"), "/api/../../admin");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn leading_slashes_cannot_switch_host() {
        let url = upstream_url(&base("http://bot.local/"), "//evil.example.com/api").unwrap();

        assert_eq!(url.host_str(), Some("bot.local"));
    }
}
