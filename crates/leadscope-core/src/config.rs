use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api/";
pub const DEFAULT_USER_AGENT: &str = "leadscope/0.1 (lead-intake)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key), dirs::config_dir())
}

/// Build application configuration using the provided env-var lookup function.
///
/// `config_dir` is the platform configuration directory used for the default
/// preferences path; `None` falls back to `./.leadscope/prefs.yaml`.
fn build_app_config<F>(lookup: F, config_dir: Option<PathBuf>) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let api_base_url = parse_base_url(&or_default("LEADSCOPE_API_BASE_URL", DEFAULT_API_BASE_URL))?;
    let log_level = or_default("LEADSCOPE_LOG_LEVEL", "info");

    let request_timeout_secs = parse_u64("LEADSCOPE_REQUEST_TIMEOUT_SECS", "30")?;
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADSCOPE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("LEADSCOPE_USER_AGENT", DEFAULT_USER_AGENT);
    let download_dir = PathBuf::from(or_default("LEADSCOPE_DOWNLOAD_DIR", "."));
    let page_path = PathBuf::from(or_default("LEADSCOPE_PAGE_PATH", "./leads.html"));
    let prefs_path = lookup("LEADSCOPE_PREFS_PATH").map_or_else(
        |_| default_prefs_path(config_dir),
        PathBuf::from,
    );
    let terminal_colors = lookup("COLORFGBG").ok();

    Ok(AppConfig {
        api_base_url,
        log_level,
        request_timeout_secs,
        user_agent,
        download_dir,
        page_path,
        prefs_path,
        terminal_colors,
    })
}

/// Accepts only `http://` and `https://` base URLs with a host and normalises
/// them to end with exactly one slash, so endpoint paths join underneath
/// instead of replacing the last segment.
fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: "LEADSCOPE_API_BASE_URL".to_string(),
        reason,
    };

    let normalised = format!("{}/", trimmed.trim_end_matches('/'));
    let url = url::Url::parse(&normalised).map_err(|e| invalid(format!("\"{trimmed}\": {e}")))?;
    if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
        return Err(invalid(format!(
            "expected an http(s) URL, got \"{trimmed}\""
        )));
    }
    Ok(url.to_string())
}

fn default_prefs_path(config_dir: Option<PathBuf>) -> PathBuf {
    config_dir.map_or_else(
        || PathBuf::from("./.leadscope/prefs.yaml"),
        |dir| dir.join("leadscope").join("prefs.yaml"),
    )
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
