use dioxus::prelude::*;

use crate::model::guild::GuildDto;

#[component]
pub fn GuildCard(guild: GuildDto) -> Element {
    rsx!(
        div {
            class: "flex items-center gap-4 p-4 border border-neutral rounded-lg hover:bg-base-200 transition-colors",
            if let Some(icon_url) = guild.icon() {
                img {
                    src: "{icon_url}",
                    alt: "{guild.name} icon",
                    class: "w-12 h-12 rounded-full",
                }
            } else {
                div {
                    class: "w-12 h-12 rounded-full bg-neutral flex items-center justify-center font-bold",
                    "{guild.initial()}"
                }
            }
            div {
                class: "flex-1",
                h3 {
                    class: "font-semibold",
                    "{guild.name}"
                }
                p {
                    class: "text-sm",
                    "{guild.member_label()}"
                }
                if !guild.owner.tag.is_empty() {
                    p {
                        class: "text-sm opacity-70",
                        "Owned by {guild.owner.tag}"
                    }
                }
            }
        }
    )
}
