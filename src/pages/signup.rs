//! Signup page: account creation followed by an immediate session.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_ROUTE;
use crate::net::types::SignupRequest;
use crate::state::session::ConsoleSession;
use crate::util::auth::{auth_error_message, install_authed_redirect};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const SIGNUP_REJECTED_MESSAGE: &str = "Could not create account. The email may already be registered.";
const MISSING_FIELDS_MESSAGE: &str = "Name, email and password are required.";
const SHORT_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters.";

fn validate_signup_input(name: &str, email: &str, password: &str) -> Result<SignupRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD_MESSAGE);
    }
    Ok(SignupRequest { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<ConsoleSession>();
    // Success navigates through the redirect once the session is established.
    install_authed_redirect(session.clone(), use_navigate());

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request =
            match validate_signup_input(&name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
                Ok(request) => request,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        error.set(String::new());
        busy.set(true);

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let SignupRequest { name, email, password } = request;
            if let Err(e) = session.signup(name, email, password).await {
                error.set(auth_error_message(&e, SIGNUP_REJECTED_MESSAGE).to_owned());
                busy.set(false);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-hero">
                <h1>"Phishing Campaign Management"</h1>
                <p>"Create an account to start managing campaigns"</p>
            </div>
            <div class="auth-card">
                <h2>"Create Account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || !error.get().is_empty()>
                        <p class="auth-error">{move || error.get()}</p>
                    </Show>
                    <label class="auth-label">"Name"</label>
                    <input
                        id="name"
                        class="auth-input"
                        type="text"
                        placeholder="Enter your name"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="At least 8 characters"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <A href=LOGIN_ROUTE>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
