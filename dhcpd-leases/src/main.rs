use std::fs::File;

use anyhow::{bail, Context, Result};
use clap::Parser;
use dhcpd_leases::report::{render_diagnostics, render_summary, render_text, JsonReport};
use dhcpd_leases::settings::{load_settings, Settings};
use dhcpd_leases_core::parse_report;
use env_logger::{Builder, Env};
use log::{debug, info};

mod cli;

use cli::{Cli, OutputFormat};

const LOG_ENV: &str = "DHCPD_LEASES_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    Builder::from_env(Env::new().filter_or(LOG_ENV, default_filter))
        .format_timestamp(None)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let settings = match &cli.config {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings {}", path.display()))?,
        None => Settings::default(),
    };
    let path = settings.lease_file(cli.file.as_deref());
    let options = settings.parse_options(
        cli.retain.map(Into::into),
        cli.binding_state.map(Into::into),
    );

    debug!(
        "parsing {} with retain={:?} binding_state={:?}",
        path.display(),
        options.retain,
        options.binding_state
    );

    let file =
        File::open(&path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut report = parse_report(file, &options)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    info!(
        "{} lease(s) kept from {} line(s), {} block(s) closed, {} discarded",
        report.leases.len(),
        report.lines_read,
        report.blocks_closed,
        report.blocks_discarded
    );

    if let Some(ip) = &cli.ip {
        report.leases.retain(|lease| &lease.ip == ip);
    }

    match cli.format {
        OutputFormat::Text => println!("{}", render_text(&report.leases)),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&JsonReport::new(&report))?)
        }
        OutputFormat::Summary => println!("{}", render_summary(&report.leases)),
    }

    if cli.strict && !report.diagnostics.is_empty() {
        bail!(
            "strict mode failed: {} line(s) rejected\n{}",
            report.diagnostics.len(),
            render_diagnostics(&report.diagnostics)
        );
    }

    Ok(())
}
