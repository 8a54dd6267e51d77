use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds something that is not a URL.
    #[error("Environment variable {var} is not a valid URL ('{value}'): {source}")]
    InvalidUrl {
        var: String,
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// The bot API can only be reached over http or https.
    #[error("Environment variable {var} must use http or https, got '{scheme}'")]
    UnsupportedScheme { var: String, scheme: String },

    /// Environment variable holds something that is not a whole number.
    #[error("Environment variable {var} is not a valid number ('{value}'): {source}")]
    InvalidNumber {
        var: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
