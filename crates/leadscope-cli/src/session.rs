//! Line-oriented interactive loop: one command per stdin line.

use std::io::Write;

use leadscope_core::ThemeStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::pipeline::LeadSession;
use crate::view::LeadView;

pub const HELP_TEXT: &str = "\
commands:
  <url>          extract and score the page at <url>
  export         save the current leads as leads.csv
  details <n>    show the detail view for row <n>
  theme          toggle between light and dark
  help           show this message
  quit           leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Anything that is not a keyword is treated as a URL, including an empty
    /// line (which the pipeline rejects with a notification).
    Scrape(String),
    Export,
    Details(usize),
    ToggleTheme,
    Help,
    Quit,
    /// A keyword with bad arguments; carries the usage hint.
    Invalid(&'static str),
}

#[must_use]
pub fn parse_command(line: &str) -> SessionCommand {
    let line = line.trim();
    let mut parts = line.split_whitespace();
    let keyword = parts.next().unwrap_or_default();

    match keyword.to_ascii_lowercase().as_str() {
        "quit" | "exit" => SessionCommand::Quit,
        "help" | "?" => SessionCommand::Help,
        "export" => SessionCommand::Export,
        "theme" => SessionCommand::ToggleTheme,
        "details" => match (parts.next().map(str::parse::<usize>), parts.next()) {
            (Some(Ok(row)), None) if row > 0 => SessionCommand::Details(row),
            _ => SessionCommand::Invalid("usage: details <n>  (n starts at 1)"),
        },
        _ => SessionCommand::Scrape(line.to_string()),
    }
}

/// Runs commands from `input` until `quit` or end of input.
///
/// Pipeline failures are surfaced through the view and never end the loop.
/// Direct output (help, details) goes to `out`.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub async fn run_session<V, R, W>(
    session: &mut LeadSession<V>,
    store: &ThemeStore,
    input: R,
    out: &mut W,
) -> anyhow::Result<()>
where
    V: LeadView,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    writeln!(out, "type a URL to scrape, or `help`")?;

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            SessionCommand::Quit => break,
            SessionCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            SessionCommand::Invalid(usage) => writeln!(out, "{usage}")?,
            SessionCommand::Scrape(url) => {
                session.scrape(&url).await;
            }
            SessionCommand::Export => {
                session.export().await;
            }
            SessionCommand::Details(row) => match session.details(row) {
                Some(json) => writeln!(out, "{json}")?,
                None => writeln!(out, "no lead at row {row}")?,
            },
            SessionCommand::ToggleTheme => {
                let theme = session.state().theme().toggled();
                if let Err(e) = store.save(theme) {
                    tracing::warn!(error = %e, "failed to persist theme preference");
                }
                session.apply_theme(theme);
                writeln!(out, "theme: {theme}")?;
            }
        }
    }

    tracing::debug!("session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use leadscope_client::LeadsClient;
    use leadscope_core::{LeadMetrics, Theme};
    use wiremock::MockServer;

    use super::*;
    use crate::state::AppState;

    #[derive(Default)]
    struct NoticeView {
        notices: Vec<String>,
    }

    impl LeadView for NoticeView {
        fn set_busy(&mut self, _busy: bool) {}

        fn notify(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }

        fn clear_results(&mut self, _theme: Theme) {}

        fn render_results(&mut self, _state: &AppState, _metrics: Option<&LeadMetrics>) {}
    }

    #[test]
    fn keywords_are_recognised() {
        assert_eq!(parse_command("quit"), SessionCommand::Quit);
        assert_eq!(parse_command(" EXIT "), SessionCommand::Quit);
        assert_eq!(parse_command("help"), SessionCommand::Help);
        assert_eq!(parse_command("export"), SessionCommand::Export);
        assert_eq!(parse_command("theme"), SessionCommand::ToggleTheme);
        assert_eq!(parse_command("details 2"), SessionCommand::Details(2));
    }

    #[test]
    fn bad_details_arguments_are_invalid() {
        for line in ["details", "details 0", "details x", "details 1 2"] {
            assert!(
                matches!(parse_command(line), SessionCommand::Invalid(_)),
                "{line}"
            );
        }
    }

    #[test]
    fn anything_else_is_a_url() {
        assert_eq!(
            parse_command("  https://acme.test  "),
            SessionCommand::Scrape("https://acme.test".to_string())
        );
        assert_eq!(parse_command(""), SessionCommand::Scrape(String::new()));
    }

    #[tokio::test]
    async fn loop_stops_at_quit_and_reports_through_view() {
        let server = MockServer::start().await;
        let client = LeadsClient::new(&server.uri(), 5, "leadscope-test/0.1").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("prefs.yaml"));
        let mut session = LeadSession::new(
            client,
            NoticeView::default(),
            Theme::Light,
            dir.path().to_path_buf(),
        );
        let input: &[u8] = b"\nexport\ndetails 1\ntheme\nquit\nhttps://never.test\n";
        let mut out = Vec::new();

        run_session(&mut session, &store, input, &mut out)
            .await
            .unwrap();

        assert_eq!(
            session.view().notices,
            vec!["Please enter a URL.", "No leads to export."]
        );
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("no lead at row 1"));
        assert!(printed.contains("theme: dark"));
        assert_eq!(session.state().theme(), Theme::Dark);
        assert_eq!(store.saved().unwrap(), Some(Theme::Dark));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
