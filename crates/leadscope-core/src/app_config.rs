use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Base URL the `extract/`, `process_leads/` and `export_leads/` paths are joined onto.
    pub api_base_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Directory `leads.csv` is saved into.
    pub download_dir: PathBuf,
    /// Where the HTML results page is written.
    pub page_path: PathBuf,
    /// YAML file holding the persisted theme preference.
    pub prefs_path: PathBuf,
    /// Raw `COLORFGBG` value, used as the system dark-mode signal.
    pub terminal_colors: Option<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("download_dir", &self.download_dir)
            .field("page_path", &self.page_path)
            .field("prefs_path", &self.prefs_path)
            .finish_non_exhaustive()
    }
}
