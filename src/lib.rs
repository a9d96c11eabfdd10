//! # campaign-console
//!
//! Leptos frontend for managing phishing-simulation campaign settings.
//!
//! This crate contains pages, components, the authenticated session store with
//! its navigation gate, and the REST client for the remote console API. The
//! browser build is enabled with the `csr` feature; without it every network
//! call is a stub so the session lifecycle can be exercised natively in tests.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;

/// Install browser logging and mount the application into `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let config = config::ConsoleConfig::from_build_env();
    let _ = console_log::init_with_level(config.log_level);
    log::info!("campaign console starting (api base: {:?})", config.api_base_url);
    leptos::mount::mount_to_body(app::App);
}
