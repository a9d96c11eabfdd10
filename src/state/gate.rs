//! Navigation gate deciding when the cached session must be revalidated.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home route is the re-entry point after external navigation (bookmark,
//! browser restart), so arriving there forces a refresh. Every other route is
//! assumed to be reached in-app and trusts the cached session. Deep links to
//! other routes therefore skip revalidation.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use super::session::SessionStore;
use crate::net::api::AuthApi;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Refresh,
    TrustCached,
}

/// Decide how to treat the session for a navigation to `path`.
pub fn decide(path: &str, home: &str) -> GateDecision {
    if normalize(path) == normalize(home) {
        GateDecision::Refresh
    } else {
        GateDecision::TrustCached
    }
}

fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// Applies `decide` to a `SessionStore` on each navigation.
pub struct SessionGate<A> {
    store: SessionStore<A>,
    home: String,
}

impl<A> Clone for SessionGate<A> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), home: self.home.clone() }
    }
}

impl<A: AuthApi + 'static> SessionGate<A> {
    pub fn new(store: SessionStore<A>, home: impl Into<String>) -> Self {
        Self { store, home: home.into() }
    }

    /// Handle "navigated to `path`".
    ///
    /// Trusting the cache resolves the status immediately and returns `None`.
    /// A refresh is issued before returning; the caller must drive the
    /// returned future to apply its result.
    #[must_use = "a returned refresh must be spawned or awaited to apply its result"]
    pub fn on_navigate(&self, path: &str) -> Option<impl Future<Output = ()> + 'static> {
        match decide(path, &self.home) {
            GateDecision::Refresh => {
                log::debug!("navigated to {path}: revalidating session");
                Some(self.store.refresh())
            }
            GateDecision::TrustCached => {
                self.store.trust_cached();
                None
            }
        }
    }
}
