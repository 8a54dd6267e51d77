use dioxus_logger::tracing;

use crate::{
    client::model::error::ApiError,
    model::{api::SuccessDto, config::GuildConfigDto, guild::GuildDto},
};

use super::helper::{get, parse_response, patch_text, send_request};

/// Get the guilds the current user may configure
pub async fn get_guilds() -> Result<Vec<GuildDto>, ApiError> {
    let response = send_request(get("/api/guilds")).await?;
    parse_response(response).await
}

/// Get a guild's YAML configuration
pub async fn get_guild_config(guild_id: String) -> Result<GuildConfigDto, ApiError> {
    let url = format!("/api/guild/{}/config", guild_id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Replace a guild's configuration with the given YAML document
pub async fn update_guild_config(guild_id: String, yaml: String) -> Result<(), ApiError> {
    let url = format!("/api/guild/{}/config", guild_id);
    tracing::debug!("Saving {} bytes of config for guild {}", yaml.len(), guild_id);

    let response = send_request(patch_text(&url, &yaml)).await?;
    let reply: SuccessDto = parse_response(response).await?;
    accepted(reply)
}

/// A `200` whose body says `success: false` is still a failed save.
fn accepted(reply: SuccessDto) -> Result<(), ApiError> {
    if reply.success {
        Ok(())
    } else {
        Err(ApiError::internal("The bot did not accept the configuration."))
    }
}
