use dioxus::prelude::*;

use crate::client::model::mood::{Mood, MoodPalette};

/// Bordered message block styled by its [`Mood`].
#[component]
pub fn Notice(
    #[props(default)] mood: Mood,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let MoodPalette { border, background } = mood.palette();
    let class: &str = class.unwrap_or_default();

    rsx!(
        div {
            class: "border-l-4 rounded p-4 {border} {background} {class}",
            role: mood.role(),
            "data-mood": "{mood}",
            {children}
        }
    )
}
