use crate::lease::LeaseRecord;

/// Format leases as a pretty JSON array. Timestamps keep the lease-file layout.
pub fn format_json(leases: &[LeaseRecord]) -> String {
    serde_json::to_string_pretty(leases).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::format_json;
    use crate::lease::{parse_timestamp, LeaseRecord};

    #[test]
    fn json_uses_field_names_and_file_timestamps() {
        let lease = LeaseRecord {
            ip: "10.0.0.1".to_string(),
            start: Some(parse_timestamp("2024/01/02 10:00:00").expect("timestamp")),
            ..LeaseRecord::default()
        };

        let value: serde_json::Value =
            serde_json::from_str(&format_json(&[lease])).expect("valid json");
        assert_eq!(value[0]["ip"], "10.0.0.1");
        assert_eq!(value[0]["start"], "2024/01/02 10:00:00");
        assert!(value[0]["end"].is_null());
        assert!(value[0]["next_binding_state"].is_null());
    }

    #[test]
    fn empty_input_is_empty_array() {
        assert_eq!(format_json(&[]), "[]");
    }
}
