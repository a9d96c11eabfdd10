//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages send
//! unauthenticated users to `/login`, auth forms send authenticated users home.
//! Nothing identity-dependent renders while the session is loading.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{HOME_ROUTE, LOGIN_ROUTE};
use crate::state::session::{AuthError, ConsoleSession, Session};

/// Whether identity-gated content may be rendered.
pub fn can_render_protected(session: &Session) -> bool {
    !session.is_loading() && session.is_authenticated()
}

/// Whether a protected page should bounce to the login form.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_loading() && !session.is_authenticated()
}

/// Whether a login/signup page should bounce to the home page.
pub fn should_redirect_authed(session: &Session) -> bool {
    !session.is_loading() && session.is_authenticated()
}

/// Redirect to `/login` whenever the session has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: ConsoleSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.session()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever the session has loaded with a user present.
pub fn install_authed_redirect<F>(session: ConsoleSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authed(&session.session()) {
            navigate(HOME_ROUTE, NavigateOptions::default());
        }
    });
}

pub const UNREACHABLE_MESSAGE: &str = "Unable to reach the server. Please try again.";
pub const INVALID_RESPONSE_MESSAGE: &str = "The server sent an unexpected response. Please try again.";

/// User-facing text for a failed login or signup.
///
/// `rejected` is the form-specific message shown when the server refuses the
/// submitted details.
pub fn auth_error_message(err: &AuthError, rejected: &'static str) -> &'static str {
    match err {
        AuthError::Rejected { .. } => rejected,
        AuthError::Unreachable(_) => UNREACHABLE_MESSAGE,
        AuthError::InvalidResponse(_) => INVALID_RESPONSE_MESSAGE,
    }
}
