use dioxus::prelude::*;

use crate::client::{component::Notice, model::mood::Mood};

#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "min-h-screen pt-24 p-4 {class}",
            {children}
        }
    )
}

#[component]
pub fn ErrorPage(status: u64, message: String) -> Element {
    rsx!(
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-xl",
                h1 {
                    class: "text-2xl font-bold mb-4",
                    "{status}"
                }
                Notice {
                    mood: Mood::Danger,
                    "{message}"
                }
            }
        }
    )
}
