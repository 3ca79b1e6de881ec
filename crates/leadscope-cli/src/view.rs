//! Output surfaces the orchestrator drives.

use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use leadscope_core::{LeadMetrics, Theme};

use crate::present::{render_page, PageContext};
use crate::state::AppState;
use crate::table::{format_metrics, format_table, terminal_safe};

/// What the orchestrator can do to the user-facing surface.
///
/// Mirrors the controls of the results page: a trigger that can be disabled
/// with a busy indicator, a transient notification, and the results area
/// (table plus metrics bar).
pub trait LeadView {
    /// `true` disables the trigger and shows the busy indicator; `false`
    /// re-enables the trigger and hides it.
    fn set_busy(&mut self, busy: bool);

    /// Shows a transient notification.
    fn notify(&mut self, message: &str);

    /// Removes all rows and hides the table and metrics.
    fn clear_results(&mut self, theme: Theme);

    /// Replaces all rows with `state.leads()`. `None` metrics hides the bar.
    fn render_results(&mut self, state: &AppState, metrics: Option<&LeadMetrics>);
}

/// Terminal surface: spinner on stderr, notifications on stderr, the table on
/// stdout, and the HTML results page on disk.
pub struct TerminalView {
    spinner: Option<ProgressBar>,
    page_path: Option<PathBuf>,
}

impl TerminalView {
    /// `page_path` is where the HTML page is (re)written; `None` disables it.
    #[must_use]
    pub fn new(page_path: Option<PathBuf>) -> Self {
        Self {
            spinner: None,
            page_path,
        }
    }

    fn write_page(&self, context: &PageContext<'_>) {
        let Some(path) = &self.page_path else {
            return;
        };
        if let Err(e) = std::fs::write(path, render_page(context)) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write results page");
        } else {
            tracing::debug!(path = %path.display(), "wrote results page");
        }
    }
}

impl LeadView for TerminalView {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message("Extracting and scoring...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        } else if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    fn notify(&mut self, message: &str) {
        let message = terminal_safe(message);
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| eprintln!("! {message}")),
            None => eprintln!("! {message}"),
        }
    }

    fn clear_results(&mut self, theme: Theme) {
        self.write_page(&PageContext::hidden(theme));
    }

    fn render_results(&mut self, state: &AppState, metrics: Option<&LeadMetrics>) {
        let table = format_table(state.leads());
        let summary = metrics.map(format_metrics);
        let print = || {
            print!("{table}");
            if let Some(summary) = &summary {
                println!("{summary}");
            }
        };
        match &self.spinner {
            Some(spinner) => spinner.suspend(print),
            None => print(),
        }

        self.write_page(&PageContext::results(state.leads(), metrics, state.theme()));
        if let Some(path) = &self.page_path {
            tracing::info!(path = %path.display(), "results page updated");
        }
    }
}
