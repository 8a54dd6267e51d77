use dioxus::prelude::*;

use crate::client::component::Layout;
use crate::client::route::{Guild, Guilds, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Guilds {},

        #[route("/guild/:id")]
        Guild { id: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guild_route_links_to_guild_page() {
        let route = Route::Guild {
            id: "228317351672545290".to_string(),
        };

        assert_eq!(route.to_string(), "/guild/228317351672545290");
    }

    #[test]
    fn parses_guild_page_path() {
        let route: Route = "/guild/42".parse().unwrap();

        assert_eq!(
            route,
            Route::Guild {
                id: "42".to_string()
            }
        );
    }

    #[test]
    fn server_list_is_the_index() {
        assert_eq!(Route::Guilds {}.to_string(), "/");
        assert_eq!("/".parse::<Route>().unwrap(), Route::Guilds {});
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route: Route = "/settings/advanced".parse().unwrap();

        assert!(matches!(route, Route::NotFound { .. }));
    }
}
