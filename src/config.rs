//! Console configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so settings are baked in
//! with `option_env!` when the WASM bundle is compiled. Parsing is split into
//! pure helpers so defaults and fallbacks are testable natively.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Route whose navigation forces the session to be revalidated.
pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";

pub const DEFAULT_API_BASE_URL: &str = "";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Prefix for every API path. Empty means same origin as the console.
    pub api_base_url: String,
    pub home_route: &'static str,
    pub log_level: log::Level,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

impl ConsoleConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `CONSOLE_API_BASE_URL`: API origin/prefix, default same origin
    /// - `CONSOLE_LOG_LEVEL`: `error|warn|info|debug|trace`, default `info`
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("CONSOLE_API_BASE_URL"), option_env!("CONSOLE_LOG_LEVEL"))
    }

    pub fn from_values(api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            api_base_url: normalize_base_url(api_base_url.unwrap_or(DEFAULT_API_BASE_URL)),
            home_route: HOME_ROUTE,
            log_level: parse_log_level(log_level),
        }
    }

    /// Join an absolute API path onto the configured base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => log::Level::Error,
        Some("warn") => log::Level::Warn,
        Some("info") => log::Level::Info,
        Some("debug") => log::Level::Debug,
        Some("trace") => log::Level::Trace,
        _ => DEFAULT_LOG_LEVEL,
    }
}
