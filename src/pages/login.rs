//! Login page: email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::SIGNUP_ROUTE;
use crate::net::types::Credentials;
use crate::state::session::ConsoleSession;
use crate::util::auth::{auth_error_message, install_authed_redirect};

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const MISSING_FIELDS_MESSAGE: &str = "Enter both email and password.";

fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<ConsoleSession>();
    // Success navigates through the redirect once the session is established.
    install_authed_redirect(session.clone(), use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = session.login(credentials).await {
                error.set(auth_error_message(&e, INVALID_CREDENTIALS_MESSAGE).to_owned());
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-hero">
                <h1>"Phishing Campaign Management"</h1>
                <p>"Sign in to manage your phishing simulation campaigns"</p>
            </div>
            <div class="auth-card">
                <h2>"Welcome Back"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>
                    <label class="auth-label">"Email"</label>
                    <input
                        id="email"
                        class="auth-input"
                        type="email"
                        placeholder="Enter your email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="auth-label">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Enter your password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <p class="auth-switch">
                    "Don't have an account? "
                    <A href=SIGNUP_ROUTE>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
