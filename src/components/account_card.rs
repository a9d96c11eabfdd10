//! Account details for the logged-in user.

use leptos::prelude::*;

use crate::net::types::UserIdentity;

#[component]
pub fn AccountCard(identity: Signal<Option<UserIdentity>>) -> impl IntoView {
    let name = move || identity.get().map(|u| u.name).unwrap_or_default();
    let email = move || identity.get().map(|u| u.email).unwrap_or_default();

    view! {
        <section class="console-card">
            <h2>"Account Information"</h2>
            <p class="account-card__row">
                <span class="account-card__label">"Name: "</span>
                {name}
            </p>
            <p class="account-card__row">
                <span class="account-card__label">"Email: "</span>
                {email}
            </p>
        </section>
    }
}
