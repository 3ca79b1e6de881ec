use leadscope_core::Theme;

use super::*;

#[test]
fn parses_scrape_with_url() {
    let cli = Cli::try_parse_from(["leadscope", "scrape", "https://acme.test"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Scrape {
            ref url,
            page: None,
            export: false
        } if url == "https://acme.test"
    ));
}

#[test]
fn parses_scrape_with_page_and_export() {
    let cli = Cli::try_parse_from([
        "leadscope",
        "scrape",
        "https://acme.test",
        "--page",
        "/tmp/out.html",
        "--export",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Scrape {
            page: Some(ref p),
            export: true,
            ..
        } if p == &PathBuf::from("/tmp/out.html")
    ));
}

#[test]
fn scrape_requires_url() {
    assert!(Cli::try_parse_from(["leadscope", "scrape"]).is_err());
}

#[test]
fn parses_session() {
    let cli = Cli::try_parse_from(["leadscope", "session"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Session { page: None }));
}

#[test]
fn bare_theme_has_no_subcommand() {
    let cli = Cli::try_parse_from(["leadscope", "theme"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Commands::Theme { command: None }));
}

#[test]
fn parses_theme_set() {
    let cli = Cli::try_parse_from(["leadscope", "theme", "set", "dark"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Commands::Theme {
            command: Some(ThemeCommands::Set { theme: Theme::Dark })
        }
    ));
}

#[test]
fn theme_set_rejects_unknown_value() {
    assert!(Cli::try_parse_from(["leadscope", "theme", "set", "sepia"]).is_err());
}

#[test]
fn parses_theme_toggle() {
    let cli =
        Cli::try_parse_from(["leadscope", "theme", "toggle"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Theme {
            command: Some(ThemeCommands::Toggle)
        }
    ));
}

#[test]
fn missing_command_is_an_error() {
    assert!(Cli::try_parse_from(["leadscope"]).is_err());
}
