//! Create-setting form bound to the draft in `SettingsState`.

use leptos::prelude::*;

use crate::net::api::HttpApi;
use crate::net::types::{Language, ThemeMode};
use crate::state::settings::SettingsState;

#[cfg(feature = "csr")]
const SUCCESS_BANNER_DURATION: std::time::Duration = std::time::Duration::from_secs(3);

#[component]
pub fn SettingForm(settings: RwSignal<SettingsState>) -> impl IntoView {
    let api = expect_context::<HttpApi>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = settings.with_untracked(|s| s.draft);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_setting(&draft).await;
            let shown = settings.try_update(|s| s.apply_create_result(result)).unwrap_or(false);
            #[cfg(feature = "csr")]
            {
                if shown {
                    gloo_timers::future::sleep(SUCCESS_BANNER_DURATION).await;
                    settings.update(SettingsState::dismiss_success);
                }
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = shown;
            }
        });
    };

    view! {
        <Show when=move || settings.with(|s| s.create_success)>
            <div class="console-success">"Campaign setting created successfully!"</div>
        </Show>
        <form class="setting-form" on:submit=on_submit>
            <label class="setting-form__label">"Campaign Theme"</label>
            <select
                class="setting-form__select"
                prop:value=move || settings.with(|s| s.draft.theme.as_str())
                on:change=move |ev| {
                    if let Some(theme) = ThemeMode::parse(&event_target_value(&ev)) {
                        settings.update(|s| s.draft.theme = theme);
                    }
                }
            >
                {ThemeMode::ALL
                    .into_iter()
                    .map(|theme| view! { <option value=theme.as_str()>{theme.as_str()}</option> })
                    .collect_view()}
            </select>
            <label class="setting-form__label">"Notification Language"</label>
            <select
                class="setting-form__select"
                prop:value=move || settings.with(|s| s.draft.language.as_str())
                on:change=move |ev| {
                    if let Some(language) = Language::parse(&event_target_value(&ev)) {
                        settings.update(|s| s.draft.language = language);
                    }
                }
            >
                {Language::ALL
                    .into_iter()
                    .map(|language| view! { <option value=language.as_str()>{language.as_str()}</option> })
                    .collect_view()}
            </select>
            <button class="setting-form__submit" type="submit">
                "Create Campaign Setting"
            </button>
        </form>
    }
}
