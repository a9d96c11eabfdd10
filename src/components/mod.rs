//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome and forms while reading/writing shared
//! state from Leptos context providers or signals passed in as props.

pub mod account_card;
pub mod nav_bar;
pub mod session_gate;
pub mod setting_form;
pub mod settings_list;
