//! Data transfer objects shared between the web client and the server.
//!
//! These mirror the JSON bodies produced by the bot's web API.

pub mod api;
pub mod config;
pub mod guild;
pub mod status;
