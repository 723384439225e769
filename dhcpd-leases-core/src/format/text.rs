use std::collections::BTreeMap;

use crate::lease::LeaseRecord;

/// Format leases as plain text, one indented block per lease.
pub fn format_text(leases: &[LeaseRecord]) -> String {
    let mut lines = Vec::new();
    for (index, lease) in leases.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("lease {}", lease.ip));
        for (name, value) in lease.fields() {
            lines.push(format!("  {name}: {value}"));
        }
    }
    lines.join("\n")
}

/// Format lease counts per binding state.
pub fn format_summary(leases: &[LeaseRecord]) -> String {
    let mut by_state: BTreeMap<&str, usize> = BTreeMap::new();
    for lease in leases {
        let state = lease.binding_state.as_deref().unwrap_or("unknown");
        *by_state.entry(state).or_default() += 1;
    }

    let mut parts = vec![format!("total={}", leases.len())];
    parts.extend(
        by_state
            .into_iter()
            .map(|(state, count)| format!("{state}={count}")),
    );
    parts.join(" ")
}
