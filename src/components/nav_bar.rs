//! Top navigation bar with the console title and logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::LOGIN_ROUTE;
use crate::state::session::ConsoleSession;

#[component]
pub fn NavBar(welcome: Signal<String>) -> impl IntoView {
    let session = expect_context::<ConsoleSession>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_logout = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        });
    };

    view! {
        <nav class="nav-bar">
            <div class="nav-bar__brand">
                <span class="nav-bar__logo">"C"</span>
                <div>
                    <h1 class="nav-bar__title">"Phishing Campaign Management"</h1>
                    <p class="nav-bar__welcome">{move || welcome.get()}</p>
                </div>
            </div>
            <button class="nav-bar__logout" on:click=on_logout disabled=move || busy.get()>
                "Logout"
            </button>
        </nav>
    }
}
