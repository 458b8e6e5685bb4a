//! # CLI Configuration
//!
//! Optional YAML configuration for the `sigil` binary. Flags take
//! precedence over the config file; the config file takes precedence
//! over built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Configuration loaded from a `--config` YAML file.
///
/// ```yaml
/// state: /var/lib/sigil/registry.json
/// log_filter: sigil_registry=debug
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Path to the registry state file.
    pub state: Option<PathBuf>,
    /// Tracing filter directive (same syntax as `RUST_LOG`).
    pub log_filter: Option<String>,
}

impl CliConfig {
    /// Load a configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: CliConfig =
            serde_yaml::from_str("state: /tmp/registry.json\nlog_filter: debug\n").unwrap();
        assert_eq!(config.state, Some(PathBuf::from("/tmp/registry.json")));
        assert_eq!(config.log_filter.as_deref(), Some("debug"));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: CliConfig = serde_yaml::from_str("{}").unwrap();
        assert!(config.state.is_none());
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = CliConfig {
            state: Some(PathBuf::from("registry.json")),
            log_filter: Some("sigil_registry=debug".to_string()),
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: CliConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.state, config.state);
        assert_eq!(parsed.log_filter, config.log_filter);
    }
}
