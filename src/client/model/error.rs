use std::str::FromStr;

use thiserror::Error;

use crate::model::api::ErrorDto;

/// Machine-readable error codes sent by the bot API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// No session cookie, the user has to log in.
    NoAuth,
    /// The session user is not visible to the bot.
    UnknownDiscordUser,
    UnknownGuild,
    /// The user may not edit this guild's configuration.
    ConfigForbidden,
    InvalidYaml,
    /// The YAML parsed but is not a mapping.
    InvalidConfig,
    Other(String),
}

impl FromStr for ApiErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Ok(match code {
            "NO_AUTH" => Self::NoAuth,
            "UNKNOWN_DISCORD_USER" => Self::UnknownDiscordUser,
            "UNKNOWN_GUILD" => Self::UnknownGuild,
            "CONFIG_FORBIDDEN" => Self::ConfigForbidden,
            "INVALID_YAML" => Self::InvalidYaml,
            "INVALID_CONFIG" => Self::InvalidConfig,
            other => Self::Other(other.to_string()),
        })
    }
}

#[derive(Error, Clone, Debug, PartialEq)]
#[error("{message}")]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    pub code: Option<ApiErrorCode>,
}

impl ApiError {
    /// Error that never reached the bot API or could not be decoded.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            message: message.into(),
            code: None,
        }
    }

    pub fn from_dto(status: u64, dto: ErrorDto) -> Self {
        let code = dto.code.parse().ok();
        Self {
            status,
            message: dto.message,
            code,
        }
    }

    /// Whether logging in again could resolve the error.
    pub fn needs_login(&self) -> bool {
        matches!(
            self.code,
            Some(ApiErrorCode::NoAuth | ApiErrorCode::UnknownDiscordUser)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_bot_error_body() {
        let dto: ErrorDto = serde_json::from_str(
            r#"{"error": true, "message": "You are unable to edit this guild.", "code": "CONFIG_FORBIDDEN"}"#,
        )
        .unwrap();

        let err = ApiError::from_dto(401, dto);

        assert_eq!(err.status, 401);
        assert_eq!(err.code, Some(ApiErrorCode::ConfigForbidden));
        assert_eq!(err.to_string(), "You are unable to edit this guild.");
        assert!(!err.needs_login());
    }

    #[test]
    fn keeps_unrecognized_codes() {
        let err = ApiError::from_dto(502, ErrorDto::new("down", "UPSTREAM_UNAVAILABLE"));

        assert_eq!(
            err.code,
            Some(ApiErrorCode::Other("UPSTREAM_UNAVAILABLE".to_string()))
        );
    }

    #[test]
    fn auth_codes_need_login() {
        let no_auth = ApiError::from_dto(401, ErrorDto::new("log in", "NO_AUTH"));
        let unknown_user = ApiError::from_dto(401, ErrorDto::new("who", "UNKNOWN_DISCORD_USER"));

        assert!(no_auth.needs_login());
        assert!(unknown_user.needs_login());
        assert!(!ApiError::internal("boom").needs_login());
    }
}
