//! Theme preference command handlers for the CLI.

use clap::Subcommand;
use leadscope_core::{Theme, ThemeStore};

/// Sub-commands available under `theme`.
#[derive(Debug, Subcommand)]
pub enum ThemeCommands {
    /// Print the resolved theme and where it came from
    Show,
    /// Flip between light and dark and save the result
    Toggle,
    /// Save a specific theme
    Set {
        /// `light` or `dark`
        theme: Theme,
    },
}

/// Runs a `theme` sub-command. `None` behaves like `show`.
///
/// # Errors
///
/// Returns an error if the preference cannot be saved, or if `show` finds an
/// unreadable preferences file.
pub(crate) fn run_theme(
    store: &ThemeStore,
    terminal_colors: Option<&str>,
    command: Option<&ThemeCommands>,
) -> anyhow::Result<Theme> {
    match command.unwrap_or(&ThemeCommands::Show) {
        ThemeCommands::Show => {
            let saved = store.saved()?;
            let theme = store.resolve(terminal_colors);
            let source = if saved.is_some() {
                "saved"
            } else {
                "system default"
            };
            println!("{theme} ({source}, {})", store.path().display());
            Ok(theme)
        }
        ThemeCommands::Toggle => {
            let theme = store.resolve(terminal_colors).toggled();
            store.save(theme)?;
            println!("{theme}");
            Ok(theme)
        }
        ThemeCommands::Set { theme } => {
            store.save(*theme)?;
            println!("{theme}");
            Ok(*theme)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_system_default_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("prefs.yaml"));

        let theme = run_theme(&store, Some("15;0"), Some(&ThemeCommands::Toggle)).unwrap();

        assert_eq!(theme, Theme::Light);
        assert_eq!(store.saved().unwrap(), Some(Theme::Light));
    }

    #[test]
    fn set_then_show_reads_saved_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("prefs.yaml"));

        run_theme(
            &store,
            None,
            Some(&ThemeCommands::Set { theme: Theme::Dark }),
        )
        .unwrap();
        let shown = run_theme(&store, Some("0;15"), None).unwrap();

        assert_eq!(shown, Theme::Dark);
    }

    #[test]
    fn show_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "theme: [unterminated").unwrap();
        let store = ThemeStore::new(path);

        assert!(run_theme(&store, None, Some(&ThemeCommands::Show)).is_err());
    }
}
