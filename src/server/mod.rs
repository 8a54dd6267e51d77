//! Fullstack server for the dashboard.
//!
//! Serves the Dioxus application and forwards every `/api/*` request to the
//! bot's own web API, so the browser only ever talks to one origin and the
//! bot's session cookie keeps working.
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Controller** (`controller/`) - The forwarding handler
//! - **Error** (`error/`) - Application error types and HTTP response mapping
//! - **Router** (`router`) - Axum route configuration
//! - **Startup** (`startup`) - HTTP client initialization
//! - **State** (`state`) - Shared application state
//!
//! This module is only available with the `server` feature flag enabled.

pub mod config;
pub mod controller;
pub mod error;
pub mod router;
pub mod startup;
pub mod state;
