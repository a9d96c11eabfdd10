//! Home page: account summary and campaign-settings management.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. Arriving here revalidates the session
//! (see `state::gate`); until the session is ready with an identity, only a
//! spinner renders, and an anonymous session is redirected to `/login`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::account_card::AccountCard;
use crate::components::nav_bar::NavBar;
use crate::components::setting_form::SettingForm;
use crate::components::settings_list::SettingsList;
use crate::net::api::HttpApi;
use crate::net::types::UserIdentity;
use crate::state::session::ConsoleSession;
use crate::state::settings::SettingsState;
use crate::util::auth::{can_render_protected, install_unauth_redirect};

fn welcome_message(identity: Option<&UserIdentity>) -> String {
    match identity {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Welcome back".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<ConsoleSession>();
    install_unauth_redirect(session.clone(), use_navigate());

    let protected = move || can_render_protected(&session.session());

    view! {
        <Show
            when=protected
            fallback=|| view! { <div class="page-loading"><div class="spinner"></div></div> }
        >
            <ConsoleHome/>
        </Show>
    }
}

#[component]
fn ConsoleHome() -> impl IntoView {
    let session = expect_context::<ConsoleSession>();
    let api = expect_context::<HttpApi>();
    let settings = RwSignal::new(SettingsState::default());

    leptos::task::spawn_local(async move {
        let result = api.fetch_settings().await;
        settings.update(|s| s.apply_fetch_result(result));
    });

    let identity = Signal::derive(move || session.identity());
    let welcome = Signal::derive(move || welcome_message(identity.get().as_ref()));

    view! {
        <div class="console">
            <NavBar welcome=welcome/>
            <main class="console-main">
                <AccountCard identity=identity/>
                <section class="console-card">
                    <h2>"Phishing Campaign Settings"</h2>
                    <SettingsList settings=settings/>
                </section>
                <section class="console-card">
                    <h2>"Create New Campaign Setting"</h2>
                    <SettingForm settings=settings/>
                </section>
            </main>
        </div>
    }
}
