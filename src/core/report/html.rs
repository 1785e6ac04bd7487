//! HTML rendering of the diagnostic report.
//!
//! Self-contained dark-theme document: four summary metric cards, the
//! alert and recommendation lists, and the full plain-text report for
//! reference.

use std::fmt::Write;

use crate::core::alerts::AlertSeverity;
use crate::core::diagnostics::DiagnosticReport;

use super::text::render_text;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const STYLE: &str = "\
body { background: #11151c; color: #d7dce2; font-family: 'Segoe UI', Roboto, sans-serif; margin: 0; padding: 2rem; }
h1 { color: #e8edf2; font-size: 1.6rem; margin-bottom: 0.2rem; }
.meta { color: #8a94a0; margin-bottom: 1.5rem; }
.cards { display: flex; gap: 1rem; flex-wrap: wrap; margin-bottom: 2rem; }
.card { background: #1a212b; border: 1px solid #2a3340; border-radius: 8px; padding: 1rem 1.5rem; min-width: 10rem; }
.card .value { font-size: 2rem; font-weight: bold; }
.card .label { color: #8a94a0; font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.05em; }
.ok { color: #4cc38a; }
.warning { color: #e5c07b; }
.critical { color: #e06c75; }
ul { list-style: none; padding: 0; }
li { background: #1a212b; border-left: 4px solid #2a3340; border-radius: 4px; margin-bottom: 0.5rem; padding: 0.6rem 1rem; }
li.warning { border-left-color: #e5c07b; }
li.critical { border-left-color: #e06c75; }
h2 { color: #e8edf2; border-bottom: 1px solid #2a3340; padding-bottom: 0.3rem; margin-top: 2rem; }
pre { background: #0c0f14; border: 1px solid #2a3340; border-radius: 8px; padding: 1rem; overflow-x: auto; font-size: 0.85rem; }
.action { color: #8a94a0; }
";

pub fn render_html(report: &DiagnosticReport) -> String {
    let status_class = if report.critical_count() > 0 {
        "critical"
    } else if !report.alerts.is_empty() {
        "warning"
    } else {
        "ok"
    };

    let mut body = String::new();

    let _ = writeln!(body, "<h1>System Diagnostic Report</h1>");
    let _ = writeln!(
        body,
        "<p class=\"meta\">Generated {}</p>",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    );

    let _ = writeln!(body, "<div class=\"cards\">");
    let _ = writeln!(
        body,
        "<div class=\"card\"><div class=\"value\">{}</div><div class=\"label\">Alerts</div></div>",
        report.alerts.len()
    );
    let _ = writeln!(
        body,
        "<div class=\"card\"><div class=\"value critical\">{}</div><div class=\"label\">Critical</div></div>",
        report.critical_count()
    );
    let _ = writeln!(
        body,
        "<div class=\"card\"><div class=\"value\">{}</div><div class=\"label\">Recommendations</div></div>",
        report.recommendations.len()
    );
    let _ = writeln!(
        body,
        "<div class=\"card\"><div class=\"value {}\">{}</div><div class=\"label\">Status</div></div>",
        status_class,
        escape(report.status_label())
    );
    let _ = writeln!(body, "</div>");

    let _ = writeln!(body, "<h2>Alerts</h2>");
    if report.alerts.is_empty() {
        let _ = writeln!(
            body,
            "<p class=\"ok\">No alerts; all readings within thresholds.</p>"
        );
    } else {
        let _ = writeln!(body, "<ul>");
        for alert in &report.alerts {
            let class = match alert.severity {
                AlertSeverity::Critical => "critical",
                AlertSeverity::Warning => "warning",
            };
            let _ = writeln!(
                body,
                "<li class=\"{}\"><strong>{}</strong> {}</li>",
                class,
                escape(&alert.component),
                escape(&alert.message)
            );
        }
        let _ = writeln!(body, "</ul>");
    }

    let _ = writeln!(body, "<h2>Recommendations</h2>");
    let _ = writeln!(body, "<ul>");
    for rec in &report.recommendations {
        let _ = writeln!(
            body,
            "<li><strong>[{}] {}</strong>: {}<br><span class=\"action\">{}</span></li>",
            rec.priority,
            escape(&rec.category),
            escape(&rec.problem),
            escape(&rec.action)
        );
    }
    let _ = writeln!(body, "</ul>");

    let _ = writeln!(body, "<h2>Full Report</h2>");
    let _ = writeln!(body, "<pre>{}</pre>", escape(&render_text(report)));

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>System Diagnostic Report</title>\n<style>\n{}</style>\n</head>\n\
         <body>\n{}</body>\n</html>\n",
        STYLE, body
    )
}
