//! Self-contained HTML comparison report.

use std::fmt::Write;

use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use tracing::debug;
use twindiff_diff::split_lines;
use twindiff_types::{DiffEntry, SideLine, Stats};

use crate::error::ExportResult;
use crate::patch::{DEFAULT_LEFT_NAME, DEFAULT_RIGHT_NAME};

const STYLE: &str = "\
body{font-family:sans-serif;margin:1.5em}\
table{border-collapse:collapse;width:100%;font-family:monospace;font-size:13px}\
td{padding:0 .5em;vertical-align:top;white-space:pre-wrap}\
td.num{color:#888;text-align:right;user-select:none;width:3em}\
tr.deleted td.left,tr.modified td.left{background:#fdd}\
tr.added td.right,tr.modified td.right{background:#dfd}\
td.gap{background:#f4f4f4}\
ul.stats{list-style:none;padding:0}\
ul.stats li{display:inline;margin-right:1.5em}";

/// Labels used in the report header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub title: String,
    pub left_name: String,
    pub right_name: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: "Comparison report".to_string(),
            left_name: DEFAULT_LEFT_NAME.to_string(),
            right_name: DEFAULT_RIGHT_NAME.to_string(),
        }
    }
}

/// Render a side-by-side HTML document for already-computed entries.
///
/// Every piece of user text (line content, names, title) is escaped.
pub fn write_report(
    left: &str,
    right: &str,
    entries: &[DiffEntry],
    stats: &Stats,
    options: &ReportOptions,
) -> ExportResult<String> {
    let mut out = String::new();
    render(&mut out, left, right, entries, stats, options)?;
    debug!(rows = entries.len(), bytes = out.len(), "report written");
    Ok(out)
}

fn render(
    out: &mut String,
    left: &str,
    right: &str,
    entries: &[DiffEntry],
    stats: &Stats,
    options: &ReportOptions,
) -> std::fmt::Result {
    let title = encode_text(&options.title);
    let left_name = encode_text(&options.left_name);
    let right_name = encode_text(&options.right_name);

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{title}</title>")?;
    writeln!(out, "<style>{STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h1>{title}</h1>")?;

    writeln!(out, "<ul class=\"stats\">")?;
    writeln!(out, "<li>{left_name}: {} lines</li>", split_lines(left).len())?;
    writeln!(out, "<li>{right_name}: {} lines</li>", split_lines(right).len())?;
    writeln!(out, "<li class=\"unchanged\">unchanged: {}</li>", stats.unchanged)?;
    writeln!(out, "<li class=\"deleted\">deleted: {}</li>", stats.deleted)?;
    writeln!(out, "<li class=\"added\">added: {}</li>", stats.added)?;
    writeln!(out, "<li class=\"modified\">modified: {}</li>", stats.modified)?;
    writeln!(out, "</ul>")?;

    writeln!(out, "<table>")?;
    writeln!(
        out,
        "<thead><tr><th></th><th>{left_name}</th><th></th><th>{right_name}</th></tr></thead>"
    )?;
    writeln!(out, "<tbody>")?;
    for entry in entries {
        write!(out, "<tr class=\"{}\">", entry.kind())?;
        cells(out, entry.left(), "left")?;
        cells(out, entry.right(), "right")?;
        writeln!(out, "</tr>")?;
    }
    writeln!(out, "</tbody>")?;
    writeln!(out, "</table>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn cells(out: &mut String, line: Option<&SideLine>, class: &str) -> std::fmt::Result {
    match line {
        Some(line) => write!(
            out,
            "<td class=\"num\">{}</td><td class=\"{class}\">{}</td>",
            line.number,
            encode_text(&line.text)
        ),
        None => write!(out, "<td class=\"num gap\"></td><td class=\"{class} gap\"></td>"),
    }
}
