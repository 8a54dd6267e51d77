use dioxus::prelude::*;

use crate::{
    client::{
        component::{Notice, Page},
        constant::SITE_NAME,
        model::{mood::Mood, save_state::SaveState, view_state::ViewState},
        router::Route,
    },
    model::config::GuildConfigDto,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[cfg(feature = "web")]
use crate::client::api::{get_guild_config, update_guild_config};

/// How long the "saved" notice stays up.
#[cfg(feature = "web")]
const SAVED_NOTICE_MS: u32 = 3_000;

/// YAML configuration editor for one guild.
#[component]
pub fn Guild(id: String) -> Element {
    let mut draft = use_signal(String::new);
    let mut save = use_signal(SaveState::default);
    let save_count = use_signal(|| 0u64);

    #[cfg(feature = "web")]
    let config = use_resource(use_reactive((&id,), |(id,)| async move {
        get_guild_config(id).await
    }));

    #[cfg(feature = "web")]
    let state = ViewState::<GuildConfigDto>::from(config.read().clone());

    #[cfg(not(feature = "web"))]
    let state = ViewState::<GuildConfigDto>::Loading;

    // Seed the editor whenever a config arrives
    #[cfg(feature = "web")]
    use_effect(move || match &*config.read() {
        Some(Ok(loaded)) => {
            draft.set(loaded.text().to_string());
            save.set(SaveState::Idle);
        }
        Some(Err(err)) => tracing::error!("Failed to fetch guild config: {}", err),
        None => (),
    });

    let save_id = id.clone();
    let on_save = move |_: MouseEvent| {
        if save.peek().is_saving() {
            return;
        }

        #[cfg(feature = "web")]
        spawn_save(save_id.clone(), draft(), save, save_count);
    };

    rsx! {
        Title { "Server {id} | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-3xl flex flex-col gap-4",
                Link {
                    to: Route::Guilds {},
                    class: "link text-sm",
                    "Back to servers"
                }
                h1 {
                    class: "text-2xl font-bold",
                    "Server {id}"
                }
                {match state {
                    ViewState::Loading => rsx! {
                        p { "Loading configuration..." }
                    },
                    ViewState::Failed(err) => rsx! {
                        Notice {
                            mood: Mood::Danger,
                            p { "{err}" }
                        }
                    },
                    ViewState::Loaded(_) => rsx! {
                        textarea {
                            class: "textarea textarea-bordered font-mono w-full",
                            rows: 20,
                            spellcheck: "false",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        div {
                            class: "flex justify-end",
                            button {
                                class: "btn btn-primary",
                                disabled: save().is_saving(),
                                onclick: on_save,
                                if save().is_saving() { "Saving..." } else { "Save" }
                            }
                        }
                    },
                }}
                {match save() {
                    SaveState::Saved { .. } => rsx! {
                        Notice {
                            mood: Mood::Success,
                            p { "Configuration saved." }
                        }
                    },
                    SaveState::Failed(err) => rsx! {
                        Notice {
                            mood: Mood::Danger,
                            p { "Failed to save configuration: {err}" }
                        }
                    },
                    SaveState::Idle | SaveState::Saving => rsx! {},
                }}
            }
        }
    }
}

/// Send the draft to the bot and track the outcome in `save`. The task is
/// scoped to the calling component.
#[cfg(feature = "web")]
fn spawn_save(
    guild_id: String,
    yaml: String,
    mut save: Signal<SaveState>,
    mut save_count: Signal<u64>,
) {
    *save_count.write() += 1;
    let save_id = *save_count.peek();
    save.set(SaveState::Saving);

    spawn(async move {
        let result = update_guild_config(guild_id, yaml).await;
        if let Err(err) = &result {
            tracing::error!("Failed to save guild config: {}", err);
        }

        save.set(SaveState::settle(result, save_id));
        if !save.peek().is_saved_by(save_id) {
            return;
        }

        gloo_timers::future::TimeoutFuture::new(SAVED_NOTICE_MS).await;
        if save.peek().is_saved_by(save_id) {
            save.set(SaveState::Idle);
        }
    });
}
