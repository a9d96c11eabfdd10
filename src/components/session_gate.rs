//! Router-level observer that feeds navigation events to the session gate.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::ConsoleConfig;
use crate::state::gate::SessionGate;
use crate::state::session::ConsoleSession;

/// Must be mounted inside `<Router>`. Renders nothing.
#[component]
pub fn SessionGateObserver() -> impl IntoView {
    let session = expect_context::<ConsoleSession>();
    let config = expect_context::<ConsoleConfig>();
    let gate = SessionGate::new(session, config.home_route);
    let location = use_location();

    Effect::new(move || {
        let path = location.pathname.get();
        if let Some(refresh) = gate.on_navigate(&path) {
            leptos::task::spawn_local(refresh);
        }
    });
}
