//! Plain-text rendering of leads for the terminal.

use std::fmt::Write as _;

use leadscope_core::{validation_badges, Lead, LeadMetrics};

use crate::present::{score_text, yes_no};

const COLUMN_WIDTH: usize = 28;

/// Fixed-width table, one line per lead, followed by indented justification
/// lines.
#[must_use]
pub fn format_table(leads: &[Lead]) -> String {
    let mut out = String::new();
    if leads.is_empty() {
        out.push_str("no leads returned\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:<4}{:<w$}{:<w$}{:<w$}{:<w$}{:<9}{:<9}{:<7}VALIDATION",
        "#",
        "COMPANY",
        "DOMAIN",
        "EMAILS",
        "PHONES",
        "CONTACT",
        "PRICING",
        "SCORE",
        w = COLUMN_WIDTH
    );
    for (index, lead) in leads.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4}{:<w$}{:<w$}{:<w$}{:<w$}{:<9}{:<9}{:<7}{}",
            index + 1,
            cell(lead.company_name.as_deref().unwrap_or("\u{2014}")),
            cell(lead.domain.as_deref().unwrap_or("\u{2014}")),
            cell(&lead.emails.join(", ")),
            cell(&lead.phones.join(", ")),
            yes_no(lead.has_contact_page),
            yes_no(lead.has_pricing),
            terminal_safe(&score_text(lead)),
            format_badges(lead),
            w = COLUMN_WIDTH
        );
        if let Some(linkedin) = lead.linkedin.as_deref().filter(|l| !l.is_empty()) {
            let _ = writeln!(out, "    linkedin: {}", terminal_safe(linkedin));
        }
        for line in lead.justification_lines() {
            let _ = writeln!(out, "    {}", terminal_safe(line));
        }
    }
    out
}

/// `+Email -Phone ...` in badge order.
#[must_use]
pub fn format_badges(lead: &Lead) -> String {
    validation_badges(lead)
        .iter()
        .map(|b| format!("{}{}", if b.ok { '+' } else { '-' }, b.label()))
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn format_metrics(metrics: &LeadMetrics) -> String {
    format!(
        "leads: {}  email coverage: {}%  phone coverage: {}%  avg score: {}",
        metrics.count, metrics.email_coverage_pct, metrics.phone_coverage_pct, metrics.average_score
    )
}

/// Replaces control characters with their `\u{..}` escapes so scraped text
/// cannot drive the terminal (cursor moves, title changes, colours, bells).
#[must_use]
pub fn terminal_safe(value: &str) -> String {
    if !value.chars().any(char::is_control) {
        return value.to_string();
    }
    value
        .chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn cell(value: &str) -> String {
    truncate(&terminal_safe(value))
}

fn truncate(value: &str) -> String {
    let limit = COLUMN_WIDTH - 2;
    if value.chars().count() > limit {
        format!("{}...", value.chars().take(limit - 3).collect::<String>())
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use leadscope_core::compute_metrics;
    use serde_json::json;

    use super::*;

    fn acme() -> Lead {
        serde_json::from_value(json!({
            "company_name": "Acme",
            "emails": ["a@acme.test"],
            "phones": [],
            "score": 7.5,
            "justification": "Has email\nNo phone",
            "source_urls": ["https://acme.test"]
        }))
        .unwrap()
    }

    #[test]
    fn table_lists_each_lead_with_badges() {
        let table = format_table(&[acme()]);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("#"));
        assert!(lines[1].starts_with("1   Acme"));
        assert!(lines[1].ends_with("+Email -Phone -LinkedIn -Contact -Pricing"));
        assert!(lines[1].contains("7.5"));
        assert_eq!(lines[2], "    Has email");
        assert_eq!(lines[3], "    No phone");
    }

    #[test]
    fn empty_table_says_so() {
        assert_eq!(format_table(&[]), "no leads returned\n");
    }

    #[test]
    fn control_characters_are_escaped() {
        let hostile: Lead = serde_json::from_value(json!({
            "company_name": "Evil\u{1b}[2J\u{1b}]0;pwned\u{7}",
            "emails": ["ok\u{1b}[31mRED"],
            "linkedin": "https://x.test/\u{1b}[0m",
            "justification": "line\r\u{1b}[1Aup"
        }))
        .unwrap();

        let table = format_table(&[hostile]);

        assert!(!table.contains('\u{1b}'), "{table:?}");
        assert!(!table.contains('\u{7}'));
        assert!(!table.contains('\r'));
        assert!(table.contains(r"Evil\u{1b}[2J"));
        assert!(table.contains(r"    line\r\u{1b}[1Aup"));
    }

    #[test]
    fn plain_text_passes_through_unchanged() {
        assert_eq!(terminal_safe("Acme Café, Inc."), "Acme Café, Inc.");
        assert_eq!(terminal_safe("tab\there"), r"tab\there");
    }

    #[test]
    fn long_values_are_truncated() {
        let long = "x".repeat(80);
        let truncated = truncate(&long);
        assert_eq!(truncated.chars().count(), COLUMN_WIDTH - 2);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn metrics_line() {
        let metrics = compute_metrics(&[acme()]).unwrap();
        assert_eq!(
            format_metrics(&metrics),
            "leads: 1  email coverage: 100%  phone coverage: 0%  avg score: 7.5"
        );
    }
}
