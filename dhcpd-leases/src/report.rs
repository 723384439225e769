use colored::Colorize;
use dhcpd_leases_core::{
    format_summary, format_text, Directive, LeaseRecord, LineDiagnostic, ParseReport,
};
use serde::Serialize;

/// Render leases for terminal output.
pub fn render_text(leases: &[LeaseRecord]) -> String {
    if leases.is_empty() {
        return "no leases found".dimmed().to_string();
    }

    let raw = format_text(leases);
    let mut out = Vec::new();

    for line in raw.lines() {
        let colored = if line.starts_with("lease ") {
            line.bold().to_string()
        } else if let Some(state) = line.strip_prefix(BINDING_PREFIX) {
            format!("{BINDING_PREFIX}{}", color_state(state))
        } else {
            line.to_string()
        };
        out.push(colored);
    }

    out.join("\n")
}

const BINDING_PREFIX: &str = "  binding-state: ";

fn color_state(state: &str) -> String {
    match state {
        "active" => state.green().to_string(),
        "free" | "backup" => state.cyan().to_string(),
        "expired" | "released" => state.yellow().to_string(),
        "abandoned" => state.red().to_string(),
        _ => state.to_string(),
    }
}

/// Render per-state counts for terminal output.
pub fn render_summary(leases: &[LeaseRecord]) -> String {
    format_summary(leases).cyan().to_string()
}

/// Render rejected lines, one per row.
pub fn render_diagnostics(diagnostics: &[LineDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|diagnostic| {
            format!(
                "line {} ({}): {}",
                diagnostic.line, diagnostic.directive, diagnostic.error
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON view of a parse report.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub leases: &'a [LeaseRecord],
    pub diagnostics: Vec<JsonDiagnostic>,
    pub lines_read: usize,
    pub blocks_closed: usize,
    pub blocks_discarded: usize,
    pub dangling: bool,
}

#[derive(Debug, Serialize)]
pub struct JsonDiagnostic {
    pub line: usize,
    pub directive: Directive,
    pub message: String,
}

impl<'a> JsonReport<'a> {
    pub fn new(report: &'a ParseReport) -> Self {
        Self {
            leases: &report.leases,
            diagnostics: report
                .diagnostics
                .iter()
                .map(|diagnostic| JsonDiagnostic {
                    line: diagnostic.line,
                    directive: diagnostic.directive,
                    message: diagnostic.error.to_string(),
                })
                .collect(),
            lines_read: report.lines_read,
            blocks_closed: report.blocks_closed,
            blocks_discarded: report.blocks_discarded,
            dangling: report.dangling,
        }
    }
}
