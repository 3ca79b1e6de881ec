//! Lead records exchanged with the processing and export services.
//!
//! ## Observed shape from the processing service
//!
//! ### `emails` / `phones`
//! Always arrays in practice, but older extraction payloads sent `null` when
//! nothing was found. Both `null` and a missing key decode to an empty `Vec`.
//!
//! ### `has_contact_page` / `has_pricing`
//! Booleans; `null` or missing is treated as `false`.
//!
//! ### `score`
//! Integer or float. Kept as a [`serde_json::Number`] so the value is sent back
//! to the export service exactly as it was received (`7` stays `7`, not `7.0`).
//!
//! ### Opaque fields
//! `score_breakdown`, `industry`, `tech_stack`, `title` and `intent_phrases`
//! have no stable shape and are carried as raw JSON.
//!
//! ### Round-tripping
//! The typed fields are a read-only view. Serializing a [`Lead`] writes the
//! record exactly as it was received: keys the service omitted stay omitted,
//! `null` stays `null`, and anything this client does not interpret
//! (`raw_snippet`, `id`, `estimated_revenue`, ...) is passed through.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// A scored lead as returned by `process_leads`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Lead {
    pub company_name: Option<String>,
    /// Stable identity key of the originating site (e.g. `"acme.test"`).
    pub domain: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub linkedin: Option<String>,
    pub has_contact_page: bool,
    pub has_pricing: bool,
    pub score: Option<Number>,
    pub score_breakdown: Option<Value>,
    /// Free-text rationale for the score. May contain `\n` line breaks.
    pub justification: Option<String>,
    pub industry: Option<Value>,
    pub tech_stack: Option<Value>,
    pub title: Option<Value>,
    pub intent_phrases: Option<Value>,
    pub source_urls: Vec<String>,
    raw: Map<String, Value>,
}

/// Decoding rules for the typed view.
#[derive(Deserialize)]
struct LeadFields {
    #[serde(default)]
    company_name: Option<String>,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    phones: Vec<String>,
    #[serde(default)]
    linkedin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    has_contact_page: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    has_pricing: bool,
    #[serde(default)]
    score: Option<Number>,
    #[serde(default)]
    score_breakdown: Option<Value>,
    #[serde(default)]
    justification: Option<String>,
    #[serde(default)]
    industry: Option<Value>,
    #[serde(default)]
    tech_stack: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    intent_phrases: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    source_urls: Vec<String>,
}

impl TryFrom<Map<String, Value>> for Lead {
    type Error = serde_json::Error;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: LeadFields = serde_json::from_value(Value::Object(raw.clone()))?;
        Ok(Self {
            company_name: fields.company_name,
            domain: fields.domain,
            emails: fields.emails,
            phones: fields.phones,
            linkedin: fields.linkedin,
            has_contact_page: fields.has_contact_page,
            has_pricing: fields.has_pricing,
            score: fields.score,
            score_breakdown: fields.score_breakdown,
            justification: fields.justification,
            industry: fields.industry,
            tech_stack: fields.tech_stack,
            title: fields.title,
            intent_phrases: fields.intent_phrases,
            source_urls: fields.source_urls,
            raw,
        })
    }
}

impl Serialize for Lead {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl Lead {
    /// The record as received, including fields this client does not
    /// interpret.
    #[must_use]
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    #[must_use]
    pub fn has_emails(&self) -> bool {
        !self.emails.is_empty()
    }

    #[must_use]
    pub fn has_phones(&self) -> bool {
        !self.phones.is_empty()
    }

    /// `true` when a non-empty `LinkedIn` URL is present.
    #[must_use]
    pub fn has_linkedin(&self) -> bool {
        self.linkedin.as_deref().is_some_and(|l| !l.is_empty())
    }

    /// Score used for aggregation. A missing or non-finite score counts as `0`.
    #[must_use]
    pub fn score_value(&self) -> f64 {
        self.score
            .as_ref()
            .and_then(Number::as_f64)
            .filter(|s| s.is_finite())
            .unwrap_or(0.0)
    }

    /// Splits the justification on line breaks. Empty when there is none.
    pub fn justification_lines(&self) -> impl Iterator<Item = &str> {
        self.justification
            .as_deref()
            .filter(|j| !j.is_empty())
            .into_iter()
            .flat_map(|j| j.split('\n'))
    }

    /// Allow-listed projection shown in the details view.
    #[must_use]
    pub fn detail(&self) -> LeadDetail<'_> {
        LeadDetail {
            company_name: self.company_name.as_deref(),
            domain: self.domain.as_deref(),
            emails: &self.emails,
            phones: &self.phones,
            linkedin: self.linkedin.as_deref(),
            has_contact_page: self.has_contact_page,
            has_pricing: self.has_pricing,
            score: self.score.as_ref(),
            score_breakdown: self.score_breakdown.as_ref(),
            industry: self.industry.as_ref(),
            tech_stack: self.tech_stack.as_ref(),
            title: self.title.as_ref(),
            intent_phrases: self.intent_phrases.as_ref(),
            source_urls: &self.source_urls,
        }
    }
}

/// Borrowed view of the fields a user may inspect for one lead.
///
/// Field order is the display order. Internal identifiers and any other
/// uninterpreted field are absent. Missing optional values are
/// omitted from the JSON rather than printed as `null`.
#[derive(Debug, Serialize)]
pub struct LeadDetail<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<&'a str>,
    pub emails: &'a [String],
    pub phones: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<&'a str>,
    pub has_contact_page: bool,
    pub has_pricing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<&'a Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_breakdown: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_phrases: Option<&'a Value>,
    pub source_urls: &'a [String],
}

impl LeadDetail<'_> {
    /// Pretty-printed JSON with two-space indentation.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
#[path = "lead_test.rs"]
mod tests;
