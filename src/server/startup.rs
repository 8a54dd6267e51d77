use crate::server::{config::Config, error::AppError};

/// Builds the HTTP client used to reach the bot API.
///
/// Redirects are disabled so a misbehaving upstream cannot bounce requests,
/// along with the forwarded session cookie, to another host.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(config.bot_api_timeout)
        .build()?;

    Ok(client)
}
