//! Authenticated-session state and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root `App` and provided through
//! context. It is the only writer of `Session`; views read identity and
//! status through it and call `login`/`signup`/`logout` from forms.
//!
//! ORDERING
//! ========
//! Mutations apply in the order responses arrive. Between refreshes the last
//! one to complete wins. Every explicit mutation (`login`, `signup`, `logout`)
//! starts a new epoch; a refresh issued in an older epoch has its identity
//! result discarded and resolves the status to `Ready` only when no other
//! refresh is still pending.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use thiserror::Error;

use crate::net::api::{ApiError, AuthApi, HttpApi};
use crate::net::types::{Credentials, SignupRequest, UserIdentity};

/// Whether the session has been resolved since the last gating decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Ready,
}

/// Handle for one issued refresh, returned by `Session::begin_refresh`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefreshTicket {
    seq: u64,
    epoch: u64,
}

impl RefreshTicket {
    pub fn seq(self) -> u64 {
        self.seq
    }
}

/// What `Session::complete_refresh` did with a refresh result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    Applied,
    /// A login, signup or logout happened after the refresh was issued.
    Discarded,
}

/// Who is logged in, as last proven by the remote collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<UserIdentity>,
    status: SessionStatus,
    epoch: u64,
    issued: u64,
    /// Refreshes issued but not yet completed or abandoned.
    in_flight: u64,
}

impl Session {
    pub fn identity(&self) -> Option<&UserIdentity> {
        self.identity.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Start a revalidation: status returns to `Loading` until a refresh completes.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.in_flight += 1;
        self.status = SessionStatus::Loading;
        RefreshTicket { seq: self.issued, epoch: self.epoch }
    }

    /// Apply a refresh result. `None` means the lookup failed.
    ///
    /// A result from an older epoch is discarded and only resolves the status
    /// once no other refresh is still pending.
    pub fn complete_refresh(&mut self, ticket: RefreshTicket, identity: Option<UserIdentity>) -> RefreshOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        if ticket.epoch != self.epoch {
            if self.in_flight == 0 {
                self.status = SessionStatus::Ready;
            }
            return RefreshOutcome::Discarded;
        }
        self.identity = identity;
        self.status = SessionStatus::Ready;
        RefreshOutcome::Applied
    }

    /// Release a refresh whose future was dropped before it completed.
    pub fn abandon_refresh(&mut self, ticket: RefreshTicket) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.status = SessionStatus::Ready;
        }
        log::debug!("session refresh #{} dropped before completing", ticket.seq());
    }

    /// Record an identity proven by login or signup.
    pub fn establish(&mut self, identity: UserIdentity) {
        self.epoch += 1;
        self.identity = Some(identity);
        self.status = SessionStatus::Ready;
    }

    /// Forget the identity after a logout.
    pub fn terminate(&mut self) {
        self.epoch += 1;
        self.identity = None;
        self.status = SessionStatus::Ready;
    }

    /// Accept the cached identity as-is.
    pub fn mark_ready(&mut self) {
        self.status = SessionStatus::Ready;
    }
}

/// Failure of a user-initiated login or signup.
///
/// Surfaced to the submitting form; never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("credentials rejected (status {status})")]
    Rejected { status: u16 },
    #[error("server unreachable: {0}")]
    Unreachable(String),
    #[error("invalid identity response: {0}")]
    InvalidResponse(String),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status(status) if (400..500).contains(&status) => Self::Rejected { status },
            ApiError::Decode(detail) => Self::InvalidResponse(detail),
            other => Self::Unreachable(other.to_string()),
        }
    }
}

/// An issued refresh owned by its future.
struct PendingRefresh {
    session: RwSignal<Session>,
    ticket: RefreshTicket,
    settled: bool,
}

impl PendingRefresh {
    fn settle(&mut self, identity: Option<UserIdentity>) {
        self.settled = true;
        let ticket = self.ticket;
        let outcome = self.session.try_update(|s| s.complete_refresh(ticket, identity));
        if outcome == Some(RefreshOutcome::Discarded) {
            log::debug!("session refresh #{} superseded by a newer login/logout", ticket.seq());
        }
    }
}

impl Drop for PendingRefresh {
    fn drop(&mut self) {
        if !self.settled {
            let ticket = self.ticket;
            self.session.try_update(|s| s.abandon_refresh(ticket));
        }
    }
}

/// The session store used by the application.
pub type ConsoleSession = SessionStore<HttpApi>;

/// Single source of truth for the logged-in user.
pub struct SessionStore<A> {
    session: RwSignal<Session>,
    api: Arc<A>,
}

impl<A> Clone for SessionStore<A> {
    fn clone(&self) -> Self {
        Self { session: self.session, api: Arc::clone(&self.api) }
    }
}

impl<A: AuthApi + 'static> SessionStore<A> {
    pub fn new(api: A) -> Self {
        Self { session: RwSignal::new(Session::default()), api: Arc::new(api) }
    }

    /// Tracked read of the whole session.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn identity(&self) -> Option<UserIdentity> {
        self.session.with(|s| s.identity().cloned())
    }

    pub fn status(&self) -> SessionStatus {
        self.session.with(Session::status)
    }

    /// Revalidate the session against `GET /auth/me`.
    ///
    /// The refresh is issued when this is called; the returned future performs
    /// the lookup and applies the result. Lookup failures resolve to "no
    /// session" and are never returned. Dropping the future unpolled releases
    /// the refresh so the status cannot stay `Loading`.
    pub fn refresh(&self) -> impl Future<Output = ()> + 'static {
        let pending = self
            .session
            .try_update(Session::begin_refresh)
            .map(|ticket| PendingRefresh { session: self.session, ticket, settled: false });
        let api = Arc::clone(&self.api);
        async move {
            let Some(mut pending) = pending else {
                return;
            };
            log::debug!("session refresh #{} issued", pending.ticket.seq());
            let identity = match api.current_user().await {
                Ok(user) => Some(user),
                Err(e) => {
                    log::debug!("session refresh #{}: no session ({e})", pending.ticket.seq());
                    None
                }
            };
            pending.settle(identity);
        }
    }

    /// Authenticate with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` when the server rejects the credentials, cannot be
    /// reached, or answers with a malformed identity. The session is untouched.
    pub async fn login(&self, credentials: Credentials) -> Result<(), AuthError> {
        let user = self.api.login(&credentials).await.map_err(|e| {
            log::info!("login rejected: {e}");
            AuthError::from(e)
        })?;
        log::info!("logged in as {}", user.email);
        self.session.update(|s| s.establish(user));
        Ok(())
    }

    /// Create an account and log into it.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub async fn signup(&self, name: String, email: String, password: String) -> Result<(), AuthError> {
        let request = SignupRequest { name, email, password };
        let user = self.api.signup(&request).await.map_err(|e| {
            log::info!("signup rejected: {e}");
            AuthError::from(e)
        })?;
        log::info!("account created for {}", user.email);
        self.session.update(|s| s.establish(user));
        Ok(())
    }

    /// End the session. Local state is cleared even if the server call fails.
    pub async fn logout(&self) {
        if let Err(e) = self.api.logout().await {
            log::warn!("remote logout failed, clearing local session anyway: {e}");
        }
        self.session.update(Session::terminate);
    }

    /// Trust the cached identity without a network call.
    pub fn trust_cached(&self) {
        self.session.update(Session::mark_ready);
    }
}
