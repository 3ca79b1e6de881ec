//! Request and response envelopes for the lead API.
//!
//! ### `extract/`
//! Answers `{"url": ..., "data": {...}}` on success. When the page could not
//! be fetched the service still answers 200, with `{"error": "..."}` and no
//! `data`. `data` may also be `null`, and a body that is not an object at all
//! is read as carrying neither field.
//!
//! ### `process_leads/`
//! Answers `{"processed_leads": [...]}`; each entry is a full [`Lead`].
//!
//! ### `export_leads/`
//! Answers a `text/csv` attachment, read as raw bytes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use leadscope_core::Lead;

#[derive(Debug, Serialize)]
pub(crate) struct ExtractRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Default)]
pub(crate) struct ExtractResponse {
    pub data: Option<Value>,
    pub error: Option<Value>,
}

impl ExtractResponse {
    /// Picks `data` and `error` out of an object body; any other JSON value
    /// yields neither.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut map) => Self {
                data: map.remove("data"),
                error: map.remove("error"),
            },
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LeadsRequest<'a, T> {
    pub leads: &'a [T],
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProcessLeadsResponse {
    pub processed_leads: Vec<Lead>,
}

/// Raw fields returned by the extraction service for one page.
///
/// Kept untyped: the processing service owns the lead schema, and this client
/// only adds the `source_urls` seed before forwarding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedLead(Map<String, Value>);

impl ExtractedLead {
    #[must_use]
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Merges `source_urls: [url]` into the extracted fields, replacing any
    /// `source_urls` the extraction service may have sent.
    #[must_use]
    pub fn seeded_with_source(mut self, url: &str) -> Value {
        self.0.insert(
            "source_urls".to_string(),
            Value::Array(vec![Value::String(url.to_string())]),
        );
        Value::Object(self.0)
    }
}
