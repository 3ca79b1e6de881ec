//! HTML results page: lead table, validation badges, metrics bar and one
//! detail dialog per row.
//!
//! Every piece of lead text comes from an arbitrary third-party page, so all
//! of it goes through `html_escape` before it reaches the markup.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use leadscope_core::{validation_badges, Lead, LeadMetrics, Theme};

const PAGE_STYLE: &str = r#"
:root{--bg:#fafafa;--fg:#1a1a1a;--muted:#666;--card:#fff;--border:#e0e0e0;}
[data-theme="dark"]{--bg:#121212;--fg:#eee;--muted:#aaa;--card:#1e1e1e;--border:#333;}
*{box-sizing:border-box;}
body{margin:0;font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:var(--bg);color:var(--fg);}
.container{max-width:1200px;margin:0 auto;padding:24px;}
.hidden{display:none !important;}
.metrics{display:flex;gap:24px;margin-bottom:16px;padding:12px 16px;background:var(--card);border:1px solid var(--border);border-radius:8px;}
.metrics .label{color:var(--muted);font-size:12px;text-transform:uppercase;}
.metrics .value{font-size:20px;font-weight:600;}
table{width:100%;border-collapse:collapse;background:var(--card);}
th,td{padding:8px;border-bottom:1px solid var(--border);text-align:left;vertical-align:top;font-size:14px;}
.badge{display:inline-block;padding:2px 8px;margin:1px;border-radius:12px;font-size:11px;font-weight:600;}
.badge.ok{background:#e8f5e9;color:#2e7d32;}
.badge.warn{background:#fff3e0;color:#e65100;}
dialog.modal{border:none;padding:0;background:transparent;max-width:720px;width:90%;}
dialog.modal::backdrop{background:rgba(0,0,0,.5);}
.modal-content{background:var(--card);color:var(--fg);border-radius:8px;padding:16px;position:relative;}
.modal-close{position:absolute;top:8px;right:8px;border:none;background:none;font-size:20px;cursor:pointer;color:var(--fg);}
pre{white-space:pre-wrap;word-break:break-word;font-size:13px;}
.generated{color:var(--muted);font-size:12px;margin-top:16px;}
"#;

// Clicks on the dialog element itself land on the backdrop, i.e. outside
// `.modal-content`.
const PAGE_SCRIPT: &str = r"
document.querySelectorAll('.details-btn').forEach(function (btn) {
  btn.addEventListener('click', function () {
    document.getElementById(btn.dataset.modal).showModal();
  });
});
document.querySelectorAll('dialog.modal').forEach(function (dialog) {
  dialog.querySelector('.modal-close').addEventListener('click', function () { dialog.close(); });
  dialog.addEventListener('click', function (e) { if (e.target === dialog) dialog.close(); });
});
";

/// Everything the page renderer needs for one render.
#[derive(Debug, Clone)]
pub struct PageContext<'a> {
    /// `None` hides the results area entirely.
    pub results: Option<&'a [Lead]>,
    /// `None` hides the metrics bar.
    pub metrics: Option<&'a LeadMetrics>,
    pub theme: Theme,
    pub generated_at: DateTime<Utc>,
}

impl<'a> PageContext<'a> {
    /// Page with no results and no metrics, as after a failed run.
    #[must_use]
    pub fn hidden(theme: Theme) -> Self {
        Self {
            results: None,
            metrics: None,
            theme,
            generated_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn results(leads: &'a [Lead], metrics: Option<&'a LeadMetrics>, theme: Theme) -> Self {
        Self {
            results: Some(leads),
            metrics,
            theme,
            generated_at: Utc::now(),
        }
    }
}

/// Renders the full standalone HTML document.
#[must_use]
pub fn render_page(context: &PageContext<'_>) -> String {
    let leads = context.results.unwrap_or_default();
    let results_class = if context.results.is_some() {
        "results"
    } else {
        "results hidden"
    };

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n");
    let _ = writeln!(
        html,
        r#"<html lang="en" data-theme="{}">"#,
        context.theme.as_str()
    );
    html.push_str("<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str("<title>Leads</title>\n<style>");
    html.push_str(PAGE_STYLE);
    html.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");
    html.push_str(&render_metrics_bar(context.metrics));
    let _ = writeln!(html, r#"<div id="results-container" class="{results_class}">"#);
    html.push_str("<table id=\"results-table\">\n<thead><tr>");
    for heading in [
        "Company", "Domain", "Emails", "Phones", "LinkedIn", "Contact Page", "Pricing",
        "Validation", "Score", "Justification", "",
    ] {
        let _ = write!(html, "<th>{heading}</th>");
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    html.push_str(&render_rows(leads));
    html.push_str("</tbody>\n</table>\n</div>\n");
    html.push_str(&render_detail_dialogs(leads));
    let _ = writeln!(
        html,
        r#"<p class="generated">Generated {}</p>"#,
        context.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    html.push_str("</div>\n<script>");
    html.push_str(PAGE_SCRIPT);
    html.push_str("</script>\n</body>\n</html>\n");
    html
}

/// Metrics bar markup; carries the `hidden` class when there are no metrics.
#[must_use]
pub fn render_metrics_bar(metrics: Option<&LeadMetrics>) -> String {
    let Some(m) = metrics else {
        return "<div id=\"metrics\" class=\"metrics hidden\"></div>\n".to_string();
    };
    format!(
        concat!(
            "<div id=\"metrics\" class=\"metrics\">",
            "<div><div class=\"label\">Leads</div><div class=\"value\" id=\"m-count\">{}</div></div>",
            "<div><div class=\"label\">Email coverage</div><div class=\"value\" id=\"m-email\">{}%</div></div>",
            "<div><div class=\"label\">Phone coverage</div><div class=\"value\" id=\"m-phone\">{}%</div></div>",
            "<div><div class=\"label\">Avg score</div><div class=\"value\" id=\"m-avg\">{}</div></div>",
            "</div>\n"
        ),
        m.count,
        m.email_coverage_pct,
        m.phone_coverage_pct,
        encode_text(&m.average_score),
    )
}

/// One `<tr>` per lead, replacing whatever was rendered before.
#[must_use]
pub fn render_rows(leads: &[Lead]) -> String {
    leads
        .iter()
        .enumerate()
        .map(|(index, lead)| render_row(index, lead))
        .collect()
}

fn render_row(index: usize, lead: &Lead) -> String {
    let cells = [
        text_cell(lead.company_name.as_deref().unwrap_or_default()),
        text_cell(lead.domain.as_deref().unwrap_or_default()),
        text_cell(&lead.emails.join(", ")),
        text_cell(&lead.phones.join(", ")),
        text_cell(lead.linkedin.as_deref().unwrap_or_default()),
        text_cell(yes_no(lead.has_contact_page)),
        text_cell(yes_no(lead.has_pricing)),
        format!("<td>{}</td>", render_badges(lead)),
        text_cell(&score_text(lead)),
        format!("<td>{}</td>", justification_html(lead)),
        format!(
            r#"<td><button class="details-btn" data-modal="{}">Details</button></td>"#,
            encode_double_quoted_attribute(&modal_id(index))
        ),
    ];
    format!("<tr>{}</tr>\n", cells.concat())
}

/// Five `<span class="badge ok|warn">` elements separated by spaces.
#[must_use]
pub fn render_badges(lead: &Lead) -> String {
    validation_badges(lead)
        .iter()
        .map(|b| {
            format!(
                r#"<span class="badge {}">{}</span>"#,
                b.state_class(),
                b.label()
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escapes each line of the justification and joins them with `<br>`.
#[must_use]
pub fn justification_html(lead: &Lead) -> String {
    lead.justification_lines()
        .map(|line| encode_text(line).into_owned())
        .collect::<Vec<_>>()
        .join("<br>")
}

fn render_detail_dialogs(leads: &[Lead]) -> String {
    let mut html = String::new();
    for (index, lead) in leads.iter().enumerate() {
        let detail = lead.detail().to_pretty_json().unwrap_or_else(|e| {
            tracing::warn!(index, error = %e, "failed to serialize lead detail");
            "{}".to_string()
        });
        let _ = writeln!(
            html,
            concat!(
                r#"<dialog class="modal" id="{}"><div class="modal-content">"#,
                r#"<button class="modal-close" aria-label="Close">&times;</button>"#,
                "<pre>{}</pre></div></dialog>"
            ),
            encode_double_quoted_attribute(&modal_id(index)),
            encode_text(&detail),
        );
    }
    html
}

/// Score as received (`7`, `7.5`); blank when absent or zero.
pub(crate) fn score_text(lead: &Lead) -> String {
    lead.score
        .as_ref()
        .filter(|n| n.as_f64().is_some_and(|v| v != 0.0))
        .map(ToString::to_string)
        .unwrap_or_default()
}

pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn text_cell(text: &str) -> String {
    format!("<td>{}</td>", encode_text(text))
}

fn modal_id(index: usize) -> String {
    format!("lead-details-{index}")
}

#[cfg(test)]
#[path = "present_test.rs"]
mod tests;
