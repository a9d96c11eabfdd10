//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate route-guard concerns from page logic to
//! improve reuse and testability.

pub mod auth;
