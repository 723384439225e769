use std::fs;
use std::path::{Path, PathBuf};

use dhcpd_leases_core::{BindingStatePolicy, ParseOptions, RetainPolicy};
use serde::Deserialize;
use thiserror::Error;

/// Lease file used when neither a flag nor the settings file names one.
pub const DEFAULT_LEASE_FILE: &str = "leases";

/// Values read from a settings file. Unset keys fall back to flags or defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub file: Option<PathBuf>,
    pub retain: Option<RetainPolicy>,
    pub binding_state: Option<BindingStatePolicy>,
}

/// Errors returned when loading a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsError> {
    toml::from_str(raw).map_err(|source| SettingsError::Parse { path, source })
}

impl Settings {
    /// Resolve the lease file, preferring `flag` over the settings file.
    pub fn lease_file(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.file.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LEASE_FILE))
    }

    /// Build parser options, preferring explicit flag values.
    pub fn parse_options(
        &self,
        retain: Option<RetainPolicy>,
        binding_state: Option<BindingStatePolicy>,
    ) -> ParseOptions {
        ParseOptions {
            retain: retain.or(self.retain).unwrap_or_default(),
            binding_state: binding_state.or(self.binding_state).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use dhcpd_leases_core::{BindingStatePolicy, ParseOptions, RetainPolicy};

    use super::{load_settings, parse_settings, Settings, SettingsError};

    #[test]
    fn loads_valid_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("dhcpd-leases.toml");
        fs::write(
            &path,
            r#"
file = "/var/lib/dhcp/dhcpd.leases"
retain = "all"
binding_state = "last"
"#,
        )
        .expect("write settings");

        let settings = load_settings(&path).expect("settings should parse");
        assert_eq!(
            settings,
            Settings {
                file: Some(PathBuf::from("/var/lib/dhcp/dhcpd.leases")),
                retain: Some(RetainPolicy::All),
                binding_state: Some(BindingStatePolicy::Last),
            }
        );
    }

    #[test]
    fn returns_parse_error_for_unknown_policy() {
        let err = parse_settings(r#"retain = "some""#, "inline".to_string())
            .expect_err("should fail parse");
        match err {
            SettingsError::Parse { .. } => {}
            other => panic!("unexpected error variant: {other}"),
        }
    }

    #[test]
    fn returns_parse_error_for_unknown_key() {
        assert!(parse_settings("color = true", "inline".to_string()).is_err());
    }

    #[test]
    fn returns_io_error_for_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_settings(&dir.path().join("absent.toml")).expect_err("missing file");
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn flags_win_over_settings_and_defaults_fill_gaps() {
        let settings = Settings {
            file: Some(PathBuf::from("from-settings.leases")),
            retain: Some(RetainPolicy::All),
            binding_state: None,
        };

        assert_eq!(
            settings.lease_file(Some(Path::new("flag.leases"))),
            PathBuf::from("flag.leases")
        );
        assert_eq!(
            settings.lease_file(None),
            PathBuf::from("from-settings.leases")
        );
        assert_eq!(Settings::default().lease_file(None), PathBuf::from("leases"));

        assert_eq!(
            settings.parse_options(None, Some(BindingStatePolicy::Last)),
            ParseOptions {
                retain: RetainPolicy::All,
                binding_state: BindingStatePolicy::Last,
            }
        );
        assert_eq!(
            settings.parse_options(Some(RetainPolicy::ActiveOnly), None),
            ParseOptions::default()
        );
    }
}
