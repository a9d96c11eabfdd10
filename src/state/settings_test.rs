use super::*;
use crate::net::types::{Language, ThemeMode};

fn setting(id: &str, theme: ThemeMode, language: Language) -> CampaignSetting {
    CampaignSetting { id: id.to_owned(), theme, language }
}

#[test]
fn settings_state_starts_loading_with_default_draft() {
    let state = SettingsState::default();
    assert!(state.loading);
    assert!(state.items.is_empty());
    assert_eq!(state.draft, NewCampaignSetting { theme: ThemeMode::System, language: Language::En });
}

#[test]
fn fetch_success_replaces_items_and_clears_error() {
    let mut state = SettingsState { error: Some("stale".to_owned()), ..SettingsState::default() };
    state.apply_fetch_result(Ok(vec![setting("s-1", ThemeMode::Dark, Language::He)]));
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn fetch_failure_sets_message_and_stops_loading() {
    let mut state = SettingsState::default();
    state.apply_fetch_result(Err(ApiError::Status(500)));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[test]
fn create_success_appends_and_resets_draft() {
    let mut state = SettingsState::default();
    state.draft = NewCampaignSetting { theme: ThemeMode::Light, language: Language::Es };
    let shown = state.apply_create_result(Ok(setting("s-9", ThemeMode::Light, Language::Es)));
    assert!(shown);
    assert!(state.create_success);
    assert_eq!(state.items.last().map(|s| s.id.as_str()), Some("s-9"));
    assert_eq!(state.draft, NewCampaignSetting::default());
}

#[test]
fn create_failure_keeps_draft_and_reports_error() {
    let mut state = SettingsState::default();
    state.draft = NewCampaignSetting { theme: ThemeMode::Dark, language: Language::He };
    let shown = state.apply_create_result(Err(ApiError::Network("offline".to_owned())));
    assert!(!shown);
    assert!(!state.create_success);
    assert_eq!(state.error.as_deref(), Some(CREATE_FAILED_MESSAGE));
    assert_eq!(state.draft.theme, ThemeMode::Dark);
}

#[test]
fn dismiss_success_hides_banner() {
    let mut state = SettingsState { create_success: true, ..SettingsState::default() };
    state.dismiss_success();
    assert!(!state.create_success);
}
