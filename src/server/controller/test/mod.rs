use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::server::{
    config::Config, router::router, startup::setup_reqwest_client, state::AppState,
};


/// Serves `router` on an ephemeral local port.
async fn serve(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

/// Serves the dashboard proxy pointed at a bot API listening on `upstream`.
async fn serve_proxy(upstream: SocketAddr) -> SocketAddr {
    let bot_api_url = format!("http://{}", upstream);
    let config = Config::from_lookup(|key| match key {
        "BOT_API_URL" => Some(bot_api_url.clone()),
        "BOT_API_TIMEOUT_SECS" => Some("2".to_string()),
        _ => None,
    })
    .unwrap();

    let http_client = setup_reqwest_client(&config).unwrap();
    let state = AppState::new(http_client, config.bot_api_url);

    serve(router().with_state(state)).await
}
