//! In-memory authentication collaborator for session and gate tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use futures::channel::oneshot;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{Credentials, SignupRequest, UserIdentity};

pub(crate) fn user(name: &str, email: &str) -> UserIdentity {
    UserIdentity { name: name.to_owned(), email: email.to_owned() }
}

pub(crate) fn creds(email: &str, password: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: password.to_owned() }
}

/// Poll a future once with a no-op waker.
pub(crate) fn poll_once<F: Future + Unpin>(fut: &mut F) -> Poll<F::Output> {
    let waker = futures::task::noop_waker();
    let mut cx = Context::from_waker(&waker);
    Pin::new(fut).poll(&mut cx)
}

type Lookup = Result<UserIdentity, ApiError>;

#[derive(Default)]
struct FakeState {
    accounts: Vec<(String, String, UserIdentity)>,
    logged_in: Option<UserIdentity>,
    offline: bool,
    logout_fails: bool,
    deferred_lookups: VecDeque<oneshot::Receiver<Lookup>>,
    calls: Vec<&'static str>,
}

/// Server double that remembers which account the "cookie" belongs to.
///
/// Clones share state, so a test keeps one handle while the store owns another.
#[derive(Clone, Default)]
pub(crate) struct FakeAuthApi {
    state: Rc<RefCell<FakeState>>,
}

impl FakeAuthApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_account(self, name: &str, email: &str, password: &str) -> Self {
        self.state
            .borrow_mut()
            .accounts
            .push((email.to_owned(), password.to_owned(), user(name, email)));
        self
    }

    pub(crate) fn set_logged_in(&self, identity: Option<UserIdentity>) {
        self.state.borrow_mut().logged_in = identity;
    }

    pub(crate) fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }

    pub(crate) fn fail_logout(&self) {
        self.state.borrow_mut().logout_fails = true;
    }

    /// Hold the next `/auth/me` lookup open until the returned sender fires.
    pub(crate) fn defer_lookup(&self) -> oneshot::Sender<Lookup> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().deferred_lookups.push_back(rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn lookup_count(&self) -> usize {
        self.state.borrow().calls.iter().filter(|c| **c == "me").count()
    }
}

impl AuthApi for FakeAuthApi {
    async fn current_user(&self) -> Result<UserIdentity, ApiError> {
        let deferred = {
            let mut state = self.state.borrow_mut();
            state.calls.push("me");
            state.deferred_lookups.pop_front()
        };
        if let Some(rx) = deferred {
            return rx.await.unwrap_or_else(|_| Err(ApiError::Network("lookup dropped".to_owned())));
        }
        let state = self.state.borrow();
        if state.offline {
            return Err(ApiError::Network("offline".to_owned()));
        }
        state.logged_in.clone().ok_or(ApiError::Status(401))
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push("login");
        if state.offline {
            return Err(ApiError::Network("offline".to_owned()));
        }
        let found = state
            .accounts
            .iter()
            .find(|(email, password, _)| *email == credentials.email && *password == credentials.password)
            .map(|(_, _, identity)| identity.clone());
        match found {
            Some(identity) => {
                state.logged_in = Some(identity.clone());
                Ok(identity)
            }
            None => Err(ApiError::Status(401)),
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserIdentity, ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push("signup");
        if state.offline {
            return Err(ApiError::Network("offline".to_owned()));
        }
        if state.accounts.iter().any(|(email, _, _)| *email == request.email) {
            return Err(ApiError::Status(409));
        }
        let identity = user(&request.name, &request.email);
        state
            .accounts
            .push((request.email.clone(), request.password.clone(), identity.clone()));
        state.logged_in = Some(identity.clone());
        Ok(identity)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push("logout");
        if state.logout_fails || state.offline {
            return Err(ApiError::Network("connection reset".to_owned()));
        }
        state.logged_in = None;
        Ok(())
    }
}
