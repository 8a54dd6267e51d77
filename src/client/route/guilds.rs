use dioxus::prelude::*;

use crate::{
    client::{
        component::{GuildCard, Notice, Page},
        constant::SITE_NAME,
        model::{mood::Mood, view_state::ViewState},
        router::Route,
    },
    model::guild::GuildDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::get_guilds;

pub const LOADING_TEXT: &str = "Loading servers...";
pub const EMPTY_TEXT: &str = "No servers.";

/// Servers the current user can configure.
///
/// The guild list is fetched once per mount. The resource belongs to this
/// component's scope, so an unmount drops the pending request with it.
#[component]
pub fn Guilds() -> Element {
    #[cfg(feature = "web")]
    let guilds = use_resource(get_guilds);

    #[cfg(feature = "web")]
    let state = ViewState::<Vec<GuildDto>>::from(guilds.read().clone());

    #[cfg(not(feature = "web"))]
    let state = ViewState::<Vec<GuildDto>>::Loading;

    #[cfg(feature = "web")]
    use_effect(move || {
        if let Some(Err(err)) = &*guilds.read() {
            tracing::error!("Failed to fetch guilds: {}", err);
        }
    });

    rsx! {
        Title { "Servers | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-3xl",
                h1 {
                    class: "text-2xl font-bold mb-6",
                    "Servers"
                }
                GuildList { state }
            }
        }
    }
}

#[component]
fn GuildList(state: ViewState<Vec<GuildDto>>) -> Element {
    match state {
        ViewState::Loading => rsx! {
            p { {LOADING_TEXT} }
        },
        ViewState::Failed(err) => rsx! {
            Notice {
                mood: Mood::Danger,
                p { "Failed to load servers: {err}" }
                if err.needs_login() {
                    p {
                        class: "text-sm mt-2",
                        "Log in again to see the servers you manage."
                    }
                }
            }
        },
        ViewState::Loaded(guilds) if guilds.is_empty() => rsx! {
            p { {EMPTY_TEXT} }
        },
        ViewState::Loaded(guilds) => rsx! {
            ul {
                class: "flex flex-col gap-3",
                for guild in guilds {
                    li {
                        key: "{guild.id}",
                        Link {
                            to: Route::Guild { id: guild.id.clone() },
                            GuildCard { guild: guild.clone() }
                        }
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::model::error::ApiError;
    use crate::model::{api::ErrorDto, guild::GuildOwnerDto};

    /// Single-route app so `Link` has a router to resolve against.
    #[derive(Routable, Clone, Debug, PartialEq)]
    enum Fixture {
        #[route("/")]
        Listing {},
    }

    #[component]
    fn Listing() -> Element {
        let state = use_context::<ViewState<Vec<GuildDto>>>();

        rsx! {
            GuildList { state }
        }
    }

    fn app() -> Element {
        rsx! {
            Router::<Fixture> {}
        }
    }

    fn render(state: ViewState<Vec<GuildDto>>) -> String {
        let mut dom = VirtualDom::new(app).with_root_context(state);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn guild(id: &str, name: &str) -> GuildDto {
        GuildDto {
            id: id.to_string(),
            name: name.to_string(),
            members: 3,
            owner: GuildOwnerDto {
                id: 97104885337575424,
                tag: "slice#4274".to_string(),
            },
            icon_url: String::new(),
        }
    }

    #[test]
    fn pending_fetch_shows_loading_text() {
        let html = render(ViewState::Loading);

        assert!(html.contains("Loading servers..."));
        assert!(!html.contains("<li"));
    }

    #[test]
    fn empty_list_shows_no_servers() {
        let html = render(ViewState::Loaded(Vec::new()));

        assert!(html.contains("No servers."));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn one_link_per_guild() {
        let html = render(ViewState::Loaded(vec![
            guild("228317351672545290", "dogbot hq"),
            guild("300000000000000000", "testing"),
        ]));

        assert_eq!(html.matches("<li").count(), 2);
        assert_eq!(html.matches("href=").count(), 2);
        assert!(html.contains(r#"href="/guild/228317351672545290""#));
        assert!(html.contains(r#"href="/guild/300000000000000000""#));
        assert!(html.contains("dogbot hq"));
        assert!(!html.contains("No servers."));
    }

    #[test]
    fn failed_fetch_shows_danger_notice() {
        let err = ApiError::from_dto(
            401,
            ErrorDto::new("You must be logged in to do that.", "NO_AUTH"),
        );

        let html = render(ViewState::Failed(err));

        assert!(html.contains(r#"data-mood="danger""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("Failed to load servers: You must be logged in to do that."));
        assert!(html.contains("Log in again"));
        assert!(!html.contains("Loading servers..."));
    }
}
