use std::collections::HashMap;
use std::env::VarError;
use std::path::{Path, PathBuf};

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

fn config_dir() -> Option<PathBuf> {
    Some(PathBuf::from("/home/test/.config"))
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map), config_dir());
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.api_base_url, "http://127.0.0.1:8000/api/");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "leadscope/0.1 (lead-intake)");
    assert_eq!(cfg.download_dir, Path::new("."));
    assert_eq!(cfg.page_path, Path::new("./leads.html"));
    assert_eq!(
        cfg.prefs_path,
        Path::new("/home/test/.config/leadscope/prefs.yaml")
    );
    assert!(cfg.terminal_colors.is_none());
}

#[test]
fn prefs_path_falls_back_to_working_directory_without_config_dir() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map), None).unwrap();
    assert_eq!(cfg.prefs_path, Path::new("./.leadscope/prefs.yaml"));
}

#[test]
fn prefs_path_override() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_PREFS_PATH", "/tmp/prefs.yaml");
    let cfg = build_app_config(lookup_from_map(&map), config_dir()).unwrap();
    assert_eq!(cfg.prefs_path, Path::new("/tmp/prefs.yaml"));
}

#[test]
fn api_base_url_gains_trailing_slash() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_API_BASE_URL", "https://leads.example.com/api");
    let cfg = build_app_config(lookup_from_map(&map), config_dir()).unwrap();
    assert_eq!(cfg.api_base_url, "https://leads.example.com/api/");
}

#[test]
fn api_base_url_collapses_repeated_trailing_slashes() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_API_BASE_URL", "http://localhost:8000/api//");
    let cfg = build_app_config(lookup_from_map(&map), config_dir()).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:8000/api/");
}

#[test]
fn api_base_url_without_scheme_fails() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_API_BASE_URL", "localhost:8000/api");
    let result = build_app_config(lookup_from_map(&map), config_dir());
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOPE_API_BASE_URL"),
        "expected InvalidEnvVar(LEADSCOPE_API_BASE_URL), got: {result:?}"
    );
}

#[test]
fn api_base_url_without_host_fails() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_API_BASE_URL", "https://");
    let result = build_app_config(lookup_from_map(&map), config_dir());
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn api_base_url_rejected_when_url_does_not_parse() {
    for raw in ["http://:80", "http://exa mple.com/api", "ftp://leads.example.com/api"] {
        let mut map = HashMap::new();
        map.insert("LEADSCOPE_API_BASE_URL", raw);
        let result = build_app_config(lookup_from_map(&map), config_dir());
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOPE_API_BASE_URL"),
            "{raw}: got {result:?}"
        );
    }
}

#[test]
fn request_timeout_override() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_REQUEST_TIMEOUT_SECS", "5");
    let cfg = build_app_config(lookup_from_map(&map), config_dir()).unwrap();
    assert_eq!(cfg.request_timeout_secs, 5);
}

#[test]
fn request_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map), config_dir());
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LEADSCOPE_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(LEADSCOPE_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn request_timeout_zero_is_rejected() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_REQUEST_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map), config_dir());
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn path_and_agent_overrides() {
    let mut map = HashMap::new();
    map.insert("LEADSCOPE_DOWNLOAD_DIR", "/tmp/downloads");
    map.insert("LEADSCOPE_PAGE_PATH", "/tmp/out.html");
    map.insert("LEADSCOPE_USER_AGENT", "custom-agent/2.0");
    map.insert("LEADSCOPE_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map), config_dir()).unwrap();
    assert_eq!(cfg.download_dir, Path::new("/tmp/downloads"));
    assert_eq!(cfg.page_path, Path::new("/tmp/out.html"));
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn terminal_colors_are_captured() {
    let mut map = HashMap::new();
    map.insert("COLORFGBG", "15;0");
    let cfg = build_app_config(lookup_from_map(&map), config_dir()).unwrap();
    assert_eq!(cfg.terminal_colors.as_deref(), Some("15;0"));
}
