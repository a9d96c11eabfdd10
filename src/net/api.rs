//! REST API client for the console server.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`, sent with
//! `credentials: include` so the session cookie travels with each request.
//! Native builds: stubs returning `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and schema failures are reported as `ApiError`. Whether a
//! failure is surfaced or swallowed is decided by the caller: the session store
//! downgrades lookup failures to "no session" and turns login/signup failures
//! into `AuthError`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{CampaignSetting, Credentials, NewCampaignSetting, SignupRequest, UserIdentity};
use crate::config::ConsoleConfig;

pub const AUTH_ME_PATH: &str = "/auth/me";
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_SIGNUP_PATH: &str = "/auth/signup";
pub const AUTH_LOGOUT_PATH: &str = "/auth/logout";
pub const SETTINGS_PATH: &str = "/settings";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

/// The remote authentication collaborator consumed by `SessionStore`.
///
/// Futures are not required to be `Send`; they run on the UI thread through
/// `spawn_local`.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /auth/me`: the identity behind the ambient session cookie.
    async fn current_user(&self) -> Result<UserIdentity, ApiError>;

    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, ApiError>;

    /// `POST /auth/signup`.
    async fn signup(&self, request: &SignupRequest) -> Result<UserIdentity, ApiError>;

    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
}

/// HTTP implementation of the console API.
#[derive(Clone, Debug, Default)]
pub struct HttpApi {
    config: ConsoleConfig,
}

impl HttpApi {
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Fetch all campaign settings via `GET /settings`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-OK status, or a body
    /// that is not a settings list.
    pub async fn fetch_settings(&self) -> Result<Vec<CampaignSetting>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = build(gloo_net::http::Request::get(&self.config.endpoint(SETTINGS_PATH)))?;
            let body = send(request).await?;
            decode_json(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    /// Create a campaign setting via `POST /settings`.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport failure, non-OK status, or a body
    /// that is not a campaign setting.
    pub async fn create_setting(&self, setting: &NewCampaignSetting) -> Result<CampaignSetting, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = post_json(&self.config.endpoint(SETTINGS_PATH), setting)?;
            let body = send(request).await?;
            decode_json(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = setting;
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthApi for HttpApi {
    async fn current_user(&self) -> Result<UserIdentity, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = build(gloo_net::http::Request::get(&self.config.endpoint(AUTH_ME_PATH)))?;
            let body = send(request).await?;
            UserIdentity::from_json(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<UserIdentity, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = post_json(&self.config.endpoint(AUTH_LOGIN_PATH), credentials)?;
            let body = send(request).await?;
            UserIdentity::from_json(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, request: &SignupRequest) -> Result<UserIdentity, ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = post_json(&self.config.endpoint(AUTH_SIGNUP_PATH), request)?;
            let body = send(request).await?;
            UserIdentity::from_json(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let request = build(gloo_net::http::Request::post(&self.config.endpoint(AUTH_LOGOUT_PATH)))?;
            send(request).await.map(|_| ())
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn build(builder: gloo_net::http::RequestBuilder) -> Result<gloo_net::http::Request, ApiError> {
    builder
        .credentials(web_sys::RequestCredentials::Include)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<gloo_net::http::Request, ApiError> {
    gloo_net::http::Request::post(url)
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(feature = "csr")]
async fn send(request: gloo_net::http::Request) -> Result<String, ApiError> {
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.text().await.map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn decode_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
