//! Campaign-settings list and create-form state for the home page.
//!
//! DESIGN
//! ======
//! Fetch and create results are folded in through pure transition functions
//! so the page only spawns requests and forwards their outcomes.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use crate::net::api::ApiError;
use crate::net::types::{CampaignSetting, NewCampaignSetting};

pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch settings";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to create setting";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsState {
    pub items: Vec<CampaignSetting>,
    pub loading: bool,
    pub error: Option<String>,
    /// Drives the transient "created" banner.
    pub create_success: bool,
    pub draft: NewCampaignSetting,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            create_success: false,
            draft: NewCampaignSetting::default(),
        }
    }
}

impl SettingsState {
    pub fn apply_fetch_result(&mut self, result: Result<Vec<CampaignSetting>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("settings fetch failed: {e}");
                self.error = Some(FETCH_FAILED_MESSAGE.to_owned());
            }
        }
    }

    /// Returns `true` when the success banner should be shown.
    pub fn apply_create_result(&mut self, result: Result<CampaignSetting, ApiError>) -> bool {
        match result {
            Ok(setting) => {
                self.items.push(setting);
                self.draft = NewCampaignSetting::default();
                self.create_success = true;
                true
            }
            Err(e) => {
                log::warn!("settings create failed: {e}");
                self.error = Some(CREATE_FAILED_MESSAGE.to_owned());
                false
            }
        }
    }

    pub fn dismiss_success(&mut self) {
        self.create_success = false;
    }
}
