use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = AppConfig::from_lookup(|_| None);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.api_timeout, Duration::from_millis(DEFAULT_API_TIMEOUT_MS));
    assert_eq!(cfg.app_name, "BioCure");
    assert_eq!(cfg.app_description, "BioCure Learning Platform");
    assert!(cfg.enable_debug);
}

#[test]
fn from_lookup_applies_overrides_and_trims_base_url() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        (ENV_API_BASE_URL, "https://api.dishom.test/api/"),
        (ENV_API_TIMEOUT_MS, "2500"),
        (ENV_APP_NAME, "Dishom Classes"),
        (ENV_ENABLE_DEBUG, "false"),
    ]));
    assert_eq!(cfg.api_base_url, "https://api.dishom.test/api");
    assert_eq!(cfg.api_timeout, Duration::from_millis(2500));
    assert_eq!(cfg.app_name, "Dishom Classes");
    assert!(!cfg.enable_debug);
}

#[test]
fn empty_values_count_as_unset() {
    let cfg = AppConfig::from_lookup(lookup_from(&[(ENV_API_BASE_URL, ""), (ENV_APP_NAME, "")]));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.app_name, DEFAULT_APP_NAME);
}

#[test]
fn invalid_timeout_falls_back_to_default() {
    for raw in ["abc", "0", "-5", "1.5"] {
        let cfg = AppConfig::from_lookup(lookup_from(&[(ENV_API_TIMEOUT_MS, raw)]));
        assert_eq!(cfg.api_timeout, Duration::from_millis(DEFAULT_API_TIMEOUT_MS), "raw = {raw}");
    }
}

#[test]
fn debug_flag_only_true_for_literal_true() {
    let on = AppConfig::from_lookup(lookup_from(&[(ENV_ENABLE_DEBUG, "true")]));
    let off = AppConfig::from_lookup(lookup_from(&[(ENV_ENABLE_DEBUG, "TRUE")]));
    assert!(on.enable_debug);
    assert!(!off.enable_debug);
}

#[test]
fn endpoint_url_joins_base_and_path() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.endpoint_url("/auth/login/"), "http://localhost:8000/api/auth/login/");
}
