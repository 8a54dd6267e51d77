use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCircle, Icon};

use crate::{client::model::view_state::ViewState, model::status::StatusDto};

#[cfg(feature = "web")]
use crate::client::api::get_status;

/// Bot readiness indicator shown in the header. Renders nothing until the
/// status request succeeds.
#[component]
pub fn StatusBadge() -> Element {
    #[cfg(feature = "web")]
    let status = use_resource(get_status);

    #[cfg(feature = "web")]
    let state = ViewState::<StatusDto>::from(status.read().clone());

    #[cfg(not(feature = "web"))]
    let state = ViewState::<StatusDto>::Loading;

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Err(err)) = &*status.read() {
            dioxus_logger::tracing::warn!("Failed to fetch bot status: {}", err);
        }
    });

    let Some(status) = state.data() else {
        return rsx!();
    };

    let color = if status.ready {
        "text-success"
    } else {
        "text-warning"
    };

    rsx!(
        div {
            class: "flex items-center gap-2 text-sm",
            Icon {
                width: 10,
                height: 10,
                class: "{color}",
                icon: FaCircle
            }
            span { "{status.label()}" }
            if let Some(ms) = status.latency_ms() {
                span {
                    class: "opacity-70",
                    "{ms} ms"
                }
            }
            span {
                class: "opacity-70",
                "{status.guilds} servers"
            }
        }
    )
}
