use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::server::{controller::proxy::forward, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/{*path}", any(forward))
        .layer(TraceLayer::new_for_http())
}
