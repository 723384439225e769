//! Command-line front end for `dhcpd-leases-core`.
//!
//! The binary opens a lease file, parses it with the options assembled from
//! command-line flags and an optional TOML settings file, and prints the
//! retained leases.
//!
//! - [`settings`] — TOML settings file loading
//! - [`report`] — terminal and JSON rendering of a parse report

pub mod report;
pub mod settings;
