//! Aggregate coverage and quality statistics over a lead collection.

use crate::lead::Lead;

/// Summary shown in the metrics bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadMetrics {
    pub count: usize,
    /// Percentage of leads with at least one email, truncated toward zero.
    pub email_coverage_pct: u8,
    /// Percentage of leads with at least one phone, truncated toward zero.
    pub phone_coverage_pct: u8,
    /// Mean score formatted with exactly one fractional digit.
    pub average_score: String,
}

/// Computes metrics for a non-empty collection.
///
/// Returns `None` for an empty collection: the metrics bar is hidden in that
/// case rather than showing `0` / `0%` / `NaN`.
#[must_use]
pub fn compute_metrics(leads: &[Lead]) -> Option<LeadMetrics> {
    if leads.is_empty() {
        return None;
    }

    let count = leads.len();
    let with_email = leads.iter().filter(|l| l.has_emails()).count();
    let with_phone = leads.iter().filter(|l| l.has_phones()).count();
    let total_score: f64 = leads.iter().map(Lead::score_value).sum();

    #[allow(clippy::cast_precision_loss)]
    let average = total_score / count as f64;

    Some(LeadMetrics {
        count,
        email_coverage_pct: coverage_pct(with_email, count),
        phone_coverage_pct: coverage_pct(with_phone, count),
        average_score: format_one_decimal(average),
    })
}

/// One fractional digit, with ties rounded away from zero (`7.25` -> `7.3`).
///
/// `format!("{:.1}")` alone rounds exact ties to even, so the value is
/// rounded to tenths first.
fn format_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

/// `floor(100 * part / total)` in integer arithmetic. `part <= total`.
fn coverage_pct(part: usize, total: usize) -> u8 {
    u8::try_from(part * 100 / total).unwrap_or(100)
}
