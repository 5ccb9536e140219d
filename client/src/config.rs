//! Application configuration resolved from build-time environment variables.
//!
//! The browser has no process environment, so values are captured with
//! `option_env!` when the WASM bundle is compiled. Parsing lives in
//! [`AppConfig::from_lookup`] so it can be exercised with any key lookup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_APP_NAME: &str = "BioCure";
pub const DEFAULT_APP_DESCRIPTION: &str = "BioCure Learning Platform";

pub const ENV_API_BASE_URL: &str = "BIOCURE_API_BASE_URL";
pub const ENV_API_TIMEOUT_MS: &str = "BIOCURE_API_TIMEOUT_MS";
pub const ENV_APP_NAME: &str = "BIOCURE_APP_NAME";
pub const ENV_APP_DESCRIPTION: &str = "BIOCURE_APP_DESCRIPTION";
pub const ENV_ENABLE_DEBUG: &str = "BIOCURE_ENABLE_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend API root, without a trailing slash.
    pub api_base_url: String,
    /// Upper bound for a single API request, enforced by the transport.
    pub api_timeout: Duration,
    pub app_name: String,
    pub app_description: String,
    pub app_version: String,
    pub enable_debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `BIOCURE_API_BASE_URL`: default `http://localhost:8000/api`
    /// - `BIOCURE_API_TIMEOUT_MS`: default 10000
    /// - `BIOCURE_APP_NAME`: default `BioCure`
    /// - `BIOCURE_APP_DESCRIPTION`: default `BioCure Learning Platform`
    /// - `BIOCURE_ENABLE_DEBUG`: `true` (default) or anything else for false
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| build_env(key).map(str::to_owned))
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_base_url = var(ENV_API_BASE_URL)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let api_timeout_ms = parse_timeout_ms(var(ENV_API_TIMEOUT_MS).as_deref());

        Self {
            api_base_url,
            api_timeout: Duration::from_millis(api_timeout_ms),
            app_name: var(ENV_APP_NAME).unwrap_or_else(|| DEFAULT_APP_NAME.to_owned()),
            app_description: var(ENV_APP_DESCRIPTION).unwrap_or_else(|| DEFAULT_APP_DESCRIPTION.to_owned()),
            app_version: env!("CARGO_PKG_VERSION").to_owned(),
            enable_debug: var(ENV_ENABLE_DEBUG).map_or(true, |value| value == "true"),
        }
    }

    /// Join an endpoint path such as `/auth/login/` onto the API base URL.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.api_base_url)
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    match raw.map(|value| value.trim().parse::<u64>()) {
        None => DEFAULT_API_TIMEOUT_MS,
        Some(Ok(ms)) if ms > 0 => ms,
        Some(_) => {
            log::warn!("ignoring invalid {ENV_API_TIMEOUT_MS}; using {DEFAULT_API_TIMEOUT_MS} ms");
            DEFAULT_API_TIMEOUT_MS
        }
    }
}

fn build_env(key: &str) -> Option<&'static str> {
    match key {
        ENV_API_BASE_URL => option_env!("BIOCURE_API_BASE_URL"),
        ENV_API_TIMEOUT_MS => option_env!("BIOCURE_API_TIMEOUT_MS"),
        ENV_APP_NAME => option_env!("BIOCURE_APP_NAME"),
        ENV_APP_DESCRIPTION => option_env!("BIOCURE_APP_DESCRIPTION"),
        ENV_ENABLE_DEBUG => option_env!("BIOCURE_ENABLE_DEBUG"),
        _ => None,
    }
}
