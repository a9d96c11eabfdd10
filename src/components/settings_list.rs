//! Campaign-settings list with loading, error and empty states.

use leptos::prelude::*;

use crate::state::settings::SettingsState;

#[component]
pub fn SettingsList(settings: RwSignal<SettingsState>) -> impl IntoView {
    move || {
        let state = settings.get();
        if state.loading {
            return view! { <div class="spinner"></div> }.into_any();
        }
        if let Some(error) = state.error {
            return view! { <p class="console-error">{error}</p> }.into_any();
        }
        if state.items.is_empty() {
            return view! { <p class="console-empty">"No campaign settings found"</p> }.into_any();
        }
        view! {
            <ul class="settings-list">
                {state
                    .items
                    .into_iter()
                    .map(|setting| {
                        view! {
                            <li class="settings-list__item">
                                <p>"Campaign Theme: " {setting.theme.as_str()}</p>
                                <p>"Notification Language: " {setting.language.as_str()}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    }
}
