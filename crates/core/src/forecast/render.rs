//! Markdown rendering of a forecast report.

use std::fmt::Write;

use crate::domain::report::Report;

/// Sector commentary appended to every report. Independent of the date.
pub const SECTOR_COMMENTARY: [(&str, &str); 7] = [
    (
        "9:30-10:00",
        "Banking & Financials likely to be weaker; IT may show early resilience; FMCG remains steady.",
    ),
    (
        "10:00-10:30",
        "IT & Pharma may begin to recover slightly while Banking remains cautious.",
    ),
    (
        "10:55-11:20",
        "High volatility across sectors; prefer minimal trading unless using tight stops.",
    ),
    (
        "11:20-11:45",
        "Banking & Financials might rebound; IT & FMCG could follow the positive trend.",
    ),
    (
        "12:30-13:00",
        "Renewed caution across cyclical sectors; blue-chips may hold steadier.",
    ),
    (
        "13:25-14:00",
        "Banking & IT likely to lead in a strong recovery; Consumer Discretionary sees buying interest.",
    ),
    (
        "Post 14:00",
        "Profit taking and cautious moves dominate; defensive sectors may outperform.",
    ),
];

pub fn header_line(date_input: &str) -> String {
    format!("### Intraday Trading Signal Forecast for {date_input} (IST):")
}

pub fn render_markdown(report: &Report) -> String {
    let mut out = header_line(&report.date_input);
    out.push_str("\n\n");

    for row in &report.slots {
        let _ = write!(out, "**{} (IST)** → **{}**\n\n", row.label, row.signal);
    }

    out.push_str("#### Sector-Specific Forecast:\n\n");
    for (window, text) in SECTOR_COMMENTARY {
        let _ = write!(out, "- **{window}**: {text}\n\n");
    }

    out
}

impl Report {
    pub fn to_markdown(&self) -> String {
        render_markdown(self)
    }
}
