mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, router, startup, state::AppState};

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let http_client = startup::setup_reqwest_client(&config)?;

        tracing::info!(
            "Forwarding /api requests to {} (timeout {}s)",
            config.bot_api_url,
            config.bot_api_timeout.as_secs()
        );

        let mut router = dioxus::server::router(App);
        let server_routes =
            router::router().with_state(AppState::new(http_client, config.bot_api_url));
        router = router.merge(server_routes);

        Ok(router)
    })
}
