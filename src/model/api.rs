use serde::{Deserialize, Serialize};

/// Error body returned by the bot API and by the dashboard server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: bool,
    pub message: String,
    pub code: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Body of a successful write such as a config update.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SuccessDto {
    pub success: bool,
}
