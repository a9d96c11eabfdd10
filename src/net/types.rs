//! Wire-protocol DTOs for the console API boundary.
//!
//! DESIGN
//! ======
//! Every payload has an explicit serde schema. Responses that fail to decode,
//! or decode with blank identity fields, are rejected at this layer so the
//! session store never holds a partially-valid identity.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// An authenticated user as returned by `/auth/me`, `/auth/login` and `/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
}

impl UserIdentity {
    /// Decode and validate an identity payload.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if the body is not an identity object or if
    /// `name`/`email` are blank.
    pub fn from_json(body: &str) -> Result<Self, ApiError> {
        let user: Self = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        if user.name.trim().is_empty() {
            return Err(ApiError::Decode("identity name is empty".to_owned()));
        }
        if user.email.trim().is_empty() {
            return Err(ApiError::Decode("identity email is empty".to_owned()));
        }
        Ok(user)
    }
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Visual theme applied to a phishing campaign.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "LIGHT",
            Self::Dark => "DARK",
            Self::System => "SYSTEM",
        }
    }

    /// Parse a `<select>` value back into a theme.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Language used for campaign notification emails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Es,
    He,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::En, Self::Es, Self::He];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
            Self::He => "HE",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == raw)
    }
}

/// A persisted campaign setting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignSetting {
    /// Server-assigned identifier. Accepts `_id` from document stores.
    #[serde(alias = "_id")]
    pub id: String,
    pub theme: ThemeMode,
    pub language: Language,
}

/// Body of `POST /settings`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewCampaignSetting {
    pub theme: ThemeMode,
    pub language: Language,
}
