use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dhcpd_leases_core::{BindingStatePolicy, RetainPolicy};

#[derive(Parser, Debug)]
#[command(name = "dhcpd-leases")]
#[command(version, about = "Parse an ISC dhcpd.leases file and print its leases")]
pub struct Cli {
    /// Lease file to parse. Defaults to `leases`.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
    /// Optional TOML settings file (file, retain, binding_state).
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Which closed lease blocks to keep.
    #[arg(long, value_enum)]
    pub retain: Option<Retain>,
    /// Which binding line wins when a block has several.
    #[arg(long, value_enum)]
    pub binding_state: Option<BindingWrite>,
    /// Only print leases for this address.
    #[arg(long)]
    pub ip: Option<String>,
    /// Exit with an error when any line was rejected.
    #[arg(long)]
    pub strict: bool,
    #[arg(long)]
    pub no_color: bool,
    /// Log discarded blocks as well as rejected lines.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Summary,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum Retain {
    ActiveOnly,
    All,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub enum BindingWrite {
    First,
    Last,
}

impl From<Retain> for RetainPolicy {
    fn from(value: Retain) -> Self {
        match value {
            Retain::ActiveOnly => RetainPolicy::ActiveOnly,
            Retain::All => RetainPolicy::All,
        }
    }
}

impl From<BindingWrite> for BindingStatePolicy {
    fn from(value: BindingWrite) -> Self {
        match value {
            BindingWrite::First => BindingStatePolicy::First,
            BindingWrite::Last => BindingStatePolicy::Last,
        }
    }
}
