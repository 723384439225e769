use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use log::{debug, warn};
use thiserror::Error;

use crate::directive::{AttributeError, Directive};
use crate::lease::LeaseRecord;
use crate::options::{ParseOptions, RetainPolicy};

/// Errors that abort a lease file parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The lease file could not be opened.
    #[error("failed to open lease file {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },
    /// The input stream could not be read, or a line was not valid UTF-8.
    #[error("failed to read lease data: {0}")]
    Io(#[from] std::io::Error),
}

/// A recognised line that could not be applied to the current block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number.
    pub line: usize,
    pub directive: Directive,
    pub error: AttributeError,
}

/// Retained leases plus what the parser saw on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub leases: Vec<LeaseRecord>,
    pub diagnostics: Vec<LineDiagnostic>,
    pub lines_read: usize,
    /// Number of `}` lines seen.
    pub blocks_closed: usize,
    /// Closed blocks the retention policy dropped.
    pub blocks_discarded: usize,
    /// Input ended inside a block; that block was dropped.
    pub dangling: bool,
}

/// Parse lease data from `reader` and return the retained leases.
pub fn parse<R: Read>(reader: R, options: &ParseOptions) -> Result<Vec<LeaseRecord>, ParseError> {
    parse_report(reader, options).map(|report| report.leases)
}

/// Parse a lease file at `path`.
pub fn parse_file(path: &Path, options: &ParseOptions) -> Result<Vec<LeaseRecord>, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.display().to_string(),
        source,
    })?;
    parse(file, options)
}

/// Parse lease data from `reader`, keeping line diagnostics and counters.
///
/// `reader` is consumed and dropped before this returns, on success and on
/// error alike.
pub fn parse_report<R: Read>(reader: R, options: &ParseOptions) -> Result<ParseReport, ParseError> {
    let reader = BufReader::new(reader);
    let mut report = ParseReport::default();
    let mut retained = Retained::new(options.retain);
    let mut current = LeaseRecord::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let number = index + 1;
        report.lines_read = number;

        if is_comment(&line) {
            continue;
        }

        if closes_block(&line) {
            report.blocks_closed += 1;
            let record = std::mem::take(&mut current);
            if !retained.offer(record) {
                report.blocks_discarded += 1;
                debug!("line {number}: block discarded by {:?} policy", options.retain);
            }
            continue;
        }

        let Some(directive) = Directive::classify(&line) else {
            continue;
        };
        if let Err(error) = directive.apply(line.trim(), &mut current, options) {
            warn!("line {number}: {error}");
            report.diagnostics.push(LineDiagnostic {
                line: number,
                directive,
                error,
            });
        }
    }

    // Only a `lease` line opens a block; stray directives after the last `}`
    // leave the accumulator without an address.
    if !current.ip.is_empty() {
        report.dangling = true;
        debug!(
            "input ended inside block for '{}'; block dropped",
            current.ip
        );
    }

    report.leases = retained.into_leases();
    Ok(report)
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

fn closes_block(line: &str) -> bool {
    line.contains('}')
}

/// Output collection that applies a [`RetainPolicy`] as blocks close.
struct Retained {
    policy: RetainPolicy,
    leases: Vec<LeaseRecord>,
    by_ip: HashMap<String, usize>,
}

impl Retained {
    fn new(policy: RetainPolicy) -> Self {
        Self {
            policy,
            leases: Vec::new(),
            by_ip: HashMap::new(),
        }
    }

    /// Returns false when the record was dropped.
    fn offer(&mut self, record: LeaseRecord) -> bool {
        // A `}` with no `lease` line before it closes some other kind of block.
        if record.ip.is_empty() {
            return false;
        }

        match self.policy {
            RetainPolicy::All => {
                self.leases.push(record);
                true
            }
            RetainPolicy::ActiveOnly => {
                if !record.is_active() {
                    return false;
                }
                match self.by_ip.get(&record.ip) {
                    Some(&slot) => self.leases[slot] = record,
                    None => {
                        self.by_ip.insert(record.ip.clone(), self.leases.len());
                        self.leases.push(record);
                    }
                }
                true
            }
        }
    }

    fn into_leases(self) -> Vec<LeaseRecord> {
        self.leases
    }
}
