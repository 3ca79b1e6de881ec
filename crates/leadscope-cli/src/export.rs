//! Sends the current collection to the export service and saves the file.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use leadscope_client::{LeadsClient, LeadsClientError};
use leadscope_core::Lead;
use thiserror::Error;

/// Name the exported file is always saved under.
pub const EXPORT_FILENAME: &str = "leads.csv";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Request(#[from] LeadsClientError),

    #[error("failed to save {path}: {source}")]
    Save {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Requests the export for `leads` and saves it as `leads.csv` in `dir`.
///
/// Callers must not pass an empty collection; the empty case is reported to
/// the user without issuing a request.
///
/// # Errors
///
/// Returns [`ExportError::Request`] if the export call fails and
/// [`ExportError::Save`] if the file cannot be written.
pub async fn export_leads(
    client: &LeadsClient,
    leads: &[Lead],
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let payload = client.export_leads(leads).await?;
    tracing::debug!(bytes = payload.len(), "received export payload");
    save_download(dir, &payload).map_err(|source| ExportError::Save {
        path: dir.join(EXPORT_FILENAME).display().to_string(),
        source,
    })
}

/// Writes `bytes` to `dir/leads.csv`.
///
/// The bytes first go to a temporary file in `dir`, which is then renamed
/// over the destination. On any failure the temporary file is removed, so a
/// partial `leads.csv` is never left behind.
///
/// # Errors
///
/// Returns the underlying I/O error.
pub fn save_download(dir: &Path, bytes: &[u8]) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::Builder::new()
        .prefix(".leads-")
        .suffix(".csv.part")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let destination = dir.join(EXPORT_FILENAME);
    tmp.persist(&destination).map_err(|e| e.error)?;
    Ok(destination)
}
