//! Persisted light/dark preference for the results page.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ConfigError::InvalidTheme(other.to_string())),
        }
    }
}

/// On-disk shape of the preferences file. Only the `theme` key exists today.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<Theme>,
}

/// Reads and writes the `theme` key of a YAML preferences file.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the saved theme, or `None` when the file or key does not exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn saved(&self) -> Result<Option<Theme>, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ConfigError::PrefsFileIo {
                    path: self.path.display().to_string(),
                    source: e,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(None);
        }
        let prefs: Preferences =
            serde_yaml::from_str(&content).map_err(ConfigError::PrefsFileParse)?;
        Ok(prefs.theme)
    }

    /// Persists `theme`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory or file cannot be written.
    pub fn save(&self, theme: Theme) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::PrefsFileIo {
            path: self.path.display().to_string(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let prefs = Preferences { theme: Some(theme) };
        let yaml = serde_yaml::to_string(&prefs).map_err(ConfigError::PrefsFileParse)?;
        std::fs::write(&self.path, yaml).map_err(io_err)?;
        tracing::debug!(path = %self.path.display(), %theme, "saved theme preference");
        Ok(())
    }

    /// Saved theme, falling back to the system preference.
    ///
    /// A corrupt preferences file is logged and ignored; it never blocks the
    /// results page from rendering.
    #[must_use]
    pub fn resolve(&self, terminal_colors: Option<&str>) -> Theme {
        let saved = self.saved().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable theme preference");
            None
        });
        resolve_theme(saved, system_prefers_dark(terminal_colors))
    }
}

/// Picks the saved theme when present, else dark if the system prefers it.
#[must_use]
pub fn resolve_theme(saved: Option<Theme>, system_prefers_dark: bool) -> Theme {
    match saved {
        Some(theme) => theme,
        None if system_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Reads the terminal background from a `COLORFGBG` value such as `"15;0"`.
///
/// The last field is the background colour index; indices 0-6 and 8 are the
/// dark half of the standard 16-colour palette.
#[must_use]
pub fn system_prefers_dark(terminal_colors: Option<&str>) -> bool {
    terminal_colors
        .and_then(|v| v.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}
