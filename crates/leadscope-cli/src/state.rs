//! Session state shared by the orchestrator and the renderers.

use leadscope_core::{Lead, Theme};

/// The in-memory lead collection plus the current theme.
///
/// Only [`crate::pipeline::LeadSession`] mutates this; views receive it by
/// shared reference for the duration of one render.
#[derive(Debug, Clone)]
pub struct AppState {
    leads: Vec<Lead>,
    results_shown: bool,
    theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            leads: Vec::new(),
            results_shown: false,
            theme,
        }
    }

    #[must_use]
    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    /// Whether the last run ended with rendered results (possibly zero rows).
    #[must_use]
    pub fn results_shown(&self) -> bool {
        self.results_shown
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Drops the current collection and hides results.
    pub(crate) fn clear(&mut self) {
        self.leads.clear();
        self.results_shown = false;
    }

    /// Replaces the collection wholesale.
    pub(crate) fn replace_leads(&mut self, leads: Vec<Lead>) {
        self.leads = leads;
        self.results_shown = true;
    }
}
