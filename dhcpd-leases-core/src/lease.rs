use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Timestamp layout used by `starts`, `ends`, `tstp` and `cltt` lines.
pub const DATE_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One `lease <ip> { ... }` block read from a lease file.
///
/// Every field except `ip` is optional: it stays `None` when the block has no
/// matching line or the line could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LeaseRecord {
    /// Address from the `lease` line.
    pub ip: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub start: Option<NaiveDateTime>,
    #[serde(serialize_with = "serialize_timestamp")]
    pub end: Option<NaiveDateTime>,
    /// Time the lease transitions to the failover secondary.
    #[serde(serialize_with = "serialize_timestamp")]
    pub tstp: Option<NaiveDateTime>,
    /// Client last transaction time.
    #[serde(serialize_with = "serialize_timestamp")]
    pub cltt: Option<NaiveDateTime>,
    pub binding_state: Option<String>,
    /// Reserved for `next binding state`. The parser never fills it in;
    /// `next binding state` lines are routed to `binding_state`.
    pub next_binding_state: Option<String>,
    pub hardware_address: Option<String>,
    pub client_uid: Option<String>,
    pub vendor_class_identifier: Option<String>,
    pub client_hostname: Option<String>,
}

impl LeaseRecord {
    /// Returns true when the recorded binding state is exactly `active`.
    pub fn is_active(&self) -> bool {
        self.binding_state.as_deref() == Some("active")
    }

    /// Set fields in display order, timestamps rendered with [`DATE_FORMAT`].
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let timestamps = [
            ("starts", self.start),
            ("ends", self.end),
            ("tstp", self.tstp),
            ("cltt", self.cltt),
        ];
        let strings = [
            ("binding-state", &self.binding_state),
            ("next-binding-state", &self.next_binding_state),
            ("hardware-ethernet", &self.hardware_address),
            ("uid", &self.client_uid),
            ("vendor-class-identifier", &self.vendor_class_identifier),
            ("client-hostname", &self.client_hostname),
        ];

        let mut fields = Vec::new();
        for (name, value) in timestamps {
            if let Some(value) = value {
                fields.push((name, format_timestamp(&value)));
            }
        }
        for (name, value) in strings {
            if let Some(value) = value {
                fields.push((name, value.clone()));
            }
        }
        fields
    }
}

/// Parse a `YYYY/MM/DD HH:MM:SS` timestamp.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT)
}

/// Render a timestamp back into lease-file layout.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(DATE_FORMAT).to_string()
}

fn serialize_timestamp<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => serializer.serialize_str(&format_timestamp(value)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp, parse_timestamp, LeaseRecord};

    #[test]
    fn timestamp_round_trips_through_file_layout() {
        let parsed = parse_timestamp("2024/01/02 10:00:00").expect("timestamp should parse");
        assert_eq!(format_timestamp(&parsed), "2024/01/02 10:00:00");
        assert_eq!(parsed.to_string(), "2024-01-02 10:00:00");
    }

    #[test]
    fn timestamp_rejects_iso_layout() {
        assert!(parse_timestamp("2024-01-02 10:00:00").is_err());
        assert!(parse_timestamp("2024/01/02").is_err());
    }

    #[test]
    fn fields_skip_unset_values() {
        let record = LeaseRecord {
            ip: "10.0.0.1".to_string(),
            end: Some(parse_timestamp("2024/05/06 07:08:09").expect("timestamp")),
            binding_state: Some("free".to_string()),
            ..LeaseRecord::default()
        };

        assert_eq!(
            record.fields(),
            vec![
                ("ends", "2024/05/06 07:08:09".to_string()),
                ("binding-state", "free".to_string()),
            ]
        );
    }

    #[test]
    fn only_exact_active_state_counts_as_active() {
        let mut record = LeaseRecord::default();
        assert!(!record.is_active());
        record.binding_state = Some("inactive".to_string());
        assert!(!record.is_active());
        record.binding_state = Some("active".to_string());
        assert!(record.is_active());
    }
}
