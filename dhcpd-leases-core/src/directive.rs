use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use thiserror::Error;

use crate::lease::{parse_timestamp, LeaseRecord};
use crate::options::{BindingStatePolicy, ParseOptions};

/// Line-local failure of a recognised directive. Never fatal to a parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// Recognised attribute with a value that makes no sense. No directive
    /// produces this yet.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),
    /// Too few tokens for the directive, or an unreadable timestamp.
    #[error("malformed attribute: {0}")]
    MalformedAttribute(String),
}

/// A lease-block line kind, recognised by keyword containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Directive {
    Lease,
    Starts,
    Ends,
    Tstp,
    Cltt,
    Binding,
    Uid,
    VendorClass,
    Hardware,
    ClientHostname,
}

impl Directive {
    /// Dispatch order. A line is handled by the first entry whose keyword it
    /// contains, so `lease 10.0.0.1 { # binding` is a `Lease` line.
    pub const ALL: [Directive; 10] = [
        Directive::Lease,
        Directive::Starts,
        Directive::Ends,
        Directive::Tstp,
        Directive::Cltt,
        Directive::Binding,
        Directive::Uid,
        Directive::VendorClass,
        Directive::Hardware,
        Directive::ClientHostname,
    ];

    /// Substring that selects this directive.
    pub fn keyword(self) -> &'static str {
        match self {
            Directive::Lease => "lease",
            Directive::Starts => "starts",
            Directive::Ends => "ends",
            Directive::Tstp => "tstp",
            Directive::Cltt => "cltt",
            Directive::Binding => "binding",
            Directive::Uid => "uid",
            Directive::VendorClass => "set vendor-class",
            Directive::Hardware => "hardware",
            Directive::ClientHostname => "client-hostname",
        }
    }

    pub fn matches(self, line: &str) -> bool {
        line.contains(self.keyword())
    }

    /// Find the directive that handles `line`, if any.
    pub fn classify(line: &str) -> Option<Directive> {
        Self::ALL
            .into_iter()
            .find(|directive| directive.matches(line))
    }

    /// Read this directive's value out of `line` into `record`.
    ///
    /// On error `record` is left untouched.
    pub fn apply(
        self,
        line: &str,
        record: &mut LeaseRecord,
        options: &ParseOptions,
    ) -> Result<(), AttributeError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match self {
            Directive::Lease => {
                record.ip = token(&tokens, 1, self)?.to_string();
            }
            Directive::Starts => record.start = Some(timestamp(&tokens, self)?),
            Directive::Ends => record.end = Some(timestamp(&tokens, self)?),
            Directive::Tstp => record.tstp = Some(timestamp(&tokens, self)?),
            Directive::Cltt => record.cltt = Some(timestamp(&tokens, self)?),
            Directive::Binding => {
                // An empty stored state still counts as unset.
                if options.binding_state == BindingStatePolicy::First
                    && record
                        .binding_state
                        .as_deref()
                        .is_some_and(|state| !state.is_empty())
                {
                    return Ok(());
                }
                let last = tokens
                    .last()
                    .ok_or_else(|| malformed(self, "line has no tokens".to_string()))?;
                record.binding_state = Some(sanitize(last));
            }
            Directive::Uid => record.client_uid = Some(sanitize(token(&tokens, 1, self)?)),
            Directive::VendorClass => {
                record.vendor_class_identifier = Some(sanitize(token(&tokens, 3, self)?));
            }
            Directive::Hardware => {
                record.hardware_address = Some(sanitize(token(&tokens, 2, self)?));
            }
            Directive::ClientHostname => {
                record.client_hostname = Some(sanitize(token(&tokens, 1, self)?));
            }
        }

        Ok(())
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Strip the first `;` and at most two `"` from a raw token.
pub fn sanitize(token: &str) -> String {
    token.replacen(';', "", 1).replacen('"', "", 2)
}

fn token<'a>(
    tokens: &[&'a str],
    index: usize,
    directive: Directive,
) -> Result<&'a str, AttributeError> {
    tokens.get(index).copied().ok_or_else(|| {
        malformed(
            directive,
            format!("expected at least {} tokens, found {}", index + 1, tokens.len()),
        )
    })
}

fn timestamp(
    tokens: &[&str],
    directive: Directive,
) -> Result<chrono::NaiveDateTime, AttributeError> {
    let date = token(tokens, 2, directive)?;
    let time = token(tokens, 3, directive)?;
    let raw = sanitize(&format!("{date} {time}"));
    parse_timestamp(&raw)
        .map_err(|err| malformed(directive, format!("unreadable timestamp '{raw}': {err}")))
}

fn malformed(directive: Directive, detail: String) -> AttributeError {
    AttributeError::MalformedAttribute(format!("{directive}: {detail}"))
}
