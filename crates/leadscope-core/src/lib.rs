pub mod app_config;
pub mod badges;
pub mod config;
pub mod lead;
pub mod metrics;
pub mod theme;

pub use app_config::AppConfig;
pub use badges::{validation_badges, Badge, BadgeKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use lead::{Lead, LeadDetail};
pub use metrics::{compute_metrics, LeadMetrics};
pub use theme::{Theme, ThemeStore};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid theme \"{0}\": expected \"light\" or \"dark\"")]
    InvalidTheme(String),

    #[error("failed to access preferences file {path}: {source}")]
    PrefsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse preferences file: {0}")]
    PrefsFileParse(#[from] serde_yaml::Error),
}
