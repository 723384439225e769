use serde::{Deserialize, Serialize};

/// Which closed blocks end up in the parse output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetainPolicy {
    /// Keep blocks whose binding state is `active`, one per IP. A later active
    /// block for the same IP replaces the earlier one in place.
    #[default]
    ActiveOnly,
    /// Keep every block in file order, duplicates and all states included.
    All,
}

/// How repeated binding lines inside one block are resolved.
///
/// Every line containing `binding` competes for the same field, so
/// `next binding state` and `rewind binding state` lines count as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingStatePolicy {
    /// The first binding line of a block wins.
    #[default]
    First,
    /// Every binding line overwrites the previous value.
    Last,
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub retain: RetainPolicy,
    pub binding_state: BindingStatePolicy,
}

#[cfg(test)]
mod tests {
    use super::{BindingStatePolicy, ParseOptions, RetainPolicy};

    #[test]
    fn defaults_keep_active_leases_and_first_binding() {
        let options = ParseOptions::default();
        assert_eq!(options.retain, RetainPolicy::ActiveOnly);
        assert_eq!(options.binding_state, BindingStatePolicy::First);
    }

    #[test]
    fn policies_use_kebab_case_names() {
        let json = serde_json::to_string(&ParseOptions {
            retain: RetainPolicy::ActiveOnly,
            binding_state: BindingStatePolicy::Last,
        })
        .expect("serialize options");
        assert_eq!(json, r#"{"retain":"active-only","binding_state":"last"}"#);

        let parsed: ParseOptions =
            serde_json::from_str(r#"{"retain":"all"}"#).expect("deserialize options");
        assert_eq!(parsed.retain, RetainPolicy::All);
        assert_eq!(parsed.binding_state, BindingStatePolicy::First);
    }
}
