//! Two-phase scrape pipeline (extract, then process) and the busy/notify
//! state machine around it.
//!
//! Every run moves Idle -> Busy -> (Success | Failure) -> Idle. Failures are
//! never fatal: they end up as a notification and an empty result area.

use std::ops::{Deref, DerefMut};
use std::path::PathBuf;

use leadscope_client::{Endpoint, LeadsClient, LeadsClientError};
use leadscope_core::{compute_metrics, Lead, Theme};
use tracing::Instrument;
use uuid::Uuid;

use crate::export::{self, ExportError};
use crate::state::AppState;
use crate::view::LeadView;

pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL.";
pub const NO_DATA_MESSAGE: &str = "No data extracted.";
pub const EXTRACT_FAILED_MESSAGE: &str = "Failed to extract data.";
pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process leads.";
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to export leads.";
pub const NOTHING_TO_EXPORT_MESSAGE: &str = "No leads to export.";
const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// How a scrape request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// Input failed local validation; nothing was sent.
    Rejected,
    /// A phase failed; carries the message shown to the user.
    Failed(String),
    /// Results were rendered; carries the number of leads.
    Rendered(usize),
}

/// How an export request ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing to export; nothing was sent.
    Empty,
    Failed(String),
    Saved(PathBuf),
}

/// Owns the lead collection and drives the view through each run.
pub struct LeadSession<V> {
    client: LeadsClient,
    view: V,
    state: AppState,
    download_dir: PathBuf,
}

impl<V: LeadView> LeadSession<V> {
    pub fn new(client: LeadsClient, view: V, theme: Theme, download_dir: PathBuf) -> Self {
        Self {
            client,
            view,
            state: AppState::new(theme),
            download_dir,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Runs extract then process for `input` and renders the result.
    ///
    /// An empty or whitespace-only input is rejected before any request. The
    /// previous collection is cleared when a run starts, so a failed run
    /// leaves no results behind.
    pub async fn scrape(&mut self, input: &str) -> ScrapeOutcome {
        let url = input.trim();
        if url.is_empty() {
            self.view.notify(EMPTY_URL_MESSAGE);
            return ScrapeOutcome::Rejected;
        }

        let span = tracing::info_span!("scrape", run_id = %Uuid::new_v4(), url);
        self.run_scrape(url).instrument(span).await
    }

    async fn run_scrape(&mut self, url: &str) -> ScrapeOutcome {
        let mut view = BusyScope::enter(&mut self.view);
        self.state.clear();
        view.clear_results(self.state.theme());

        match run_pipeline(&self.client, url).await {
            Ok(leads) => {
                self.state.replace_leads(leads);
                let metrics = compute_metrics(self.state.leads());
                view.render_results(&self.state, metrics.as_ref());
                tracing::info!(leads = self.state.leads().len(), "scrape complete");
                ScrapeOutcome::Rendered(self.state.leads().len())
            }
            Err(err) => {
                tracing::warn!(error = %err, "scrape failed");
                let message = failure_message(&err);
                view.notify(&message);
                ScrapeOutcome::Failed(message)
            }
        }
    }

    /// Exports the current collection to `leads.csv`.
    pub async fn export(&mut self) -> ExportOutcome {
        if self.state.leads().is_empty() {
            self.view.notify(NOTHING_TO_EXPORT_MESSAGE);
            return ExportOutcome::Empty;
        }

        match export::export_leads(&self.client, self.state.leads(), &self.download_dir).await {
            Ok(path) => {
                tracing::info!(path = %path.display(), leads = self.state.leads().len(), "export saved");
                self.view.notify(&format!("Saved {}", path.display()));
                ExportOutcome::Saved(path)
            }
            Err(err) => {
                tracing::warn!(error = %err, "export failed");
                let message = match &err {
                    ExportError::Request(_) => EXPORT_FAILED_MESSAGE.to_string(),
                    ExportError::Save { .. } => err.to_string(),
                };
                self.view.notify(&message);
                ExportOutcome::Failed(message)
            }
        }
    }

    /// Pretty JSON detail projection of the 1-based `row`.
    #[must_use]
    pub fn details(&self, row: usize) -> Option<String> {
        let lead = self.state.leads().get(row.checked_sub(1)?)?;
        match lead.detail().to_pretty_json() {
            Ok(json) => Some(json),
            Err(e) => {
                tracing::warn!(row, error = %e, "failed to serialize lead detail");
                None
            }
        }
    }

    /// Switches the theme and re-renders visible results with it.
    pub fn apply_theme(&mut self, theme: Theme) {
        self.state.set_theme(theme);
        if self.state.results_shown() {
            let metrics = compute_metrics(self.state.leads());
            self.view.render_results(&self.state, metrics.as_ref());
        }
    }
}

/// Extract, seed `source_urls`, then process as a one-element batch.
async fn run_pipeline(client: &LeadsClient, url: &str) -> Result<Vec<Lead>, LeadsClientError> {
    let extracted = client.extract(url).await?;
    tracing::info!(fields = extracted.fields().len(), "extraction complete");

    let lead = extracted.seeded_with_source(url);
    let processed = client.process_leads(std::slice::from_ref(&lead)).await?;
    tracing::info!(leads = processed.len(), "processing complete");
    Ok(processed)
}

/// User-facing text for a pipeline failure.
fn failure_message(err: &LeadsClientError) -> String {
    match err {
        LeadsClientError::ExtractionFailed(message) => message.clone(),
        LeadsClientError::NoData => NO_DATA_MESSAGE.to_string(),
        other => match other.endpoint() {
            Some(Endpoint::Extract) => EXTRACT_FAILED_MESSAGE,
            Some(Endpoint::ProcessLeads) => PROCESS_FAILED_MESSAGE,
            Some(Endpoint::ExportLeads) => EXPORT_FAILED_MESSAGE,
            None => GENERIC_FAILURE_MESSAGE,
        }
        .to_string(),
    }
}

/// Holds the view in the busy state for its lifetime.
///
/// `set_busy(false)` runs from `Drop`, so the trigger is re-enabled on every
/// exit path, including an unwinding panic.
struct BusyScope<'a, V: LeadView> {
    view: &'a mut V,
}

impl<'a, V: LeadView> BusyScope<'a, V> {
    fn enter(view: &'a mut V) -> Self {
        view.set_busy(true);
        Self { view }
    }
}

impl<V: LeadView> Deref for BusyScope<'_, V> {
    type Target = V;

    fn deref(&self) -> &V {
        self.view
    }
}

impl<V: LeadView> DerefMut for BusyScope<'_, V> {
    fn deref_mut(&mut self) -> &mut V {
        self.view
    }
}

impl<V: LeadView> Drop for BusyScope<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(false);
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
