//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::session_gate::SessionGateObserver;
use crate::config::ConsoleConfig;
use crate::net::api::HttpApi;
use crate::pages::{home::HomePage, login::LoginPage, signup::SignupPage};
use crate::state::session::{ConsoleSession, SessionStore};

/// Root application component.
///
/// Provides the configuration, API client and the single session store, then
/// sets up client-side routing with the session gate observing navigation.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ConsoleConfig::from_build_env();
    let api = HttpApi::new(config.clone());
    let session: ConsoleSession = SessionStore::new(api.clone());

    provide_context(config);
    provide_context(api);
    provide_context(session);

    view! {
        <Title text="Phishing Campaign Management"/>

        <Router>
            <SessionGateObserver/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
            </Routes>
        </Router>
    }
}
