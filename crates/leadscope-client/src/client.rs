//! HTTP client for the lead extraction, processing, and export API.
//!
//! Every call is a JSON `POST` relative to a configured base URL. Non-2xx
//! answers become [`LeadsClientError::UnexpectedStatus`]; nothing is retried.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use leadscope_core::Lead;

use crate::error::LeadsClientError;
use crate::types::{
    ExtractRequest, ExtractResponse, ExtractedLead, LeadsRequest, ProcessLeadsResponse,
};

/// The three remote collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Extract,
    ProcessLeads,
    ExportLeads,
}

impl Endpoint {
    /// Path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Extract => "extract/",
            Endpoint::ProcessLeads => "process_leads/",
            Endpoint::ExportLeads => "export_leads/",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Extract => write!(f, "extract"),
            Endpoint::ProcessLeads => write!(f, "process_leads"),
            Endpoint::ExportLeads => write!(f, "export_leads"),
        }
    }
}

/// Client for the lead API.
///
/// Requests share one `reqwest::Client` whose timeout bounds every call, so a
/// hung collaborator ends as [`LeadsClientError::Transport`].
pub struct LeadsClient {
    client: Client,
    base_url: Url,
}

impl LeadsClient {
    /// Creates a client rooted at `base_url` (e.g. `http://127.0.0.1:8000/api/`).
    ///
    /// # Errors
    ///
    /// Returns [`LeadsClientError::InvalidBaseUrl`] if `base_url` does not
    /// parse, or [`LeadsClientError::Build`] if the `reqwest::Client` cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, LeadsClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()
            .map_err(LeadsClientError::Build)?;

        // Normalise to exactly one trailing slash so `Url::join` appends the
        // endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| LeadsClientError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Sends `url` to the extraction service.
    ///
    /// # Errors
    ///
    /// - [`LeadsClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LeadsClientError::ExtractionFailed`] when the body has no `data`
    ///   object but carries an `error` message.
    /// - [`LeadsClientError::NoData`] when it has neither, including a body
    ///   that is valid JSON but not an object (`null`, `[]`, `"ok"`).
    /// - [`LeadsClientError::Transport`] / [`LeadsClientError::Deserialize`]
    ///   on network or decoding failure.
    pub async fn extract(&self, url: &str) -> Result<ExtractedLead, LeadsClientError> {
        let body: Value = self
            .post_json(Endpoint::Extract, &ExtractRequest { url })
            .await?;
        let body = ExtractResponse::from_body(body);

        match body.data {
            Some(Value::Object(fields)) => Ok(ExtractedLead::new(fields)),
            _ => {
                let message = body
                    .error
                    .as_ref()
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .map(str::to_owned);
                tracing::debug!(url, ?message, "extraction returned no data");
                Err(message.map_or(LeadsClientError::NoData, LeadsClientError::ExtractionFailed))
            }
        }
    }

    /// Sends a batch of leads for deduplication and scoring.
    ///
    /// # Errors
    ///
    /// - [`LeadsClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LeadsClientError::Transport`] / [`LeadsClientError::Deserialize`]
    ///   on network or decoding failure (including a missing
    ///   `processed_leads` key).
    pub async fn process_leads<T: Serialize>(
        &self,
        leads: &[T],
    ) -> Result<Vec<Lead>, LeadsClientError> {
        let body: ProcessLeadsResponse = self
            .post_json(Endpoint::ProcessLeads, &LeadsRequest { leads })
            .await?;
        Ok(body.processed_leads)
    }

    /// Sends leads to the export service and returns the file payload.
    ///
    /// # Errors
    ///
    /// - [`LeadsClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`LeadsClientError::Transport`] on network failure.
    pub async fn export_leads(&self, leads: &[Lead]) -> Result<Vec<u8>, LeadsClientError> {
        let endpoint = Endpoint::ExportLeads;
        let response = self.post(endpoint, &LeadsRequest { leads }).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|source| LeadsClientError::Transport { endpoint, source })?;
        Ok(bytes.to_vec())
    }

    /// Absolute URL of `endpoint`.
    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, LeadsClientError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| LeadsClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// POSTs a JSON body and returns the response once its status is 2xx.
    async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: Endpoint,
        body: &B,
    ) -> Result<Response, LeadsClientError> {
        let url = self.endpoint_url(endpoint)?;
        tracing::debug!(%endpoint, %url, "sending request");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|source| LeadsClientError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LeadsClientError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    /// POSTs a JSON body and decodes a JSON response.
    async fn post_json<B, R>(&self, endpoint: Endpoint, body: &B) -> Result<R, LeadsClientError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let response = self.post(endpoint, body).await?;
        let text = response
            .text()
            .await
            .map_err(|source| LeadsClientError::Transport { endpoint, source })?;
        serde_json::from_str(&text)
            .map_err(|source| LeadsClientError::Deserialize { endpoint, source })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
