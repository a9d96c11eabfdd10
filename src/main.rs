//! Trunk entry point for the browser build.

fn main() {
    #[cfg(feature = "csr")]
    campaign_console::mount();
}
