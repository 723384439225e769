//! Streaming parser for the ISC DHCP server lease database (`dhcpd.leases`).
//!
//! The parser reads the file line by line, accumulates the directives of one
//! `lease <ip> { ... }` block into a [`LeaseRecord`], and hands the record to a
//! retention policy when the closing `}` is seen. Lines it recognises but cannot
//! read are reported as [`LineDiagnostic`]s and never stop the parse; only a
//! failing input stream does.

pub mod directive;
pub mod format;
pub mod lease;
pub mod options;
pub mod parser;

pub use directive::{sanitize, AttributeError, Directive};
pub use format::{format_json, format_summary, format_text};
pub use lease::{format_timestamp, parse_timestamp, LeaseRecord, DATE_FORMAT};
pub use options::{BindingStatePolicy, ParseOptions, RetainPolicy};
pub use parser::{parse, parse_file, parse_report, LineDiagnostic, ParseError, ParseReport};
