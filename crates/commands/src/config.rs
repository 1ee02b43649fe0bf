//! Names and patterns the generated commands are built from.

use crate::error::{CommandError, Result};
use crate::mode::BenchMode;
use crate::paths::PathMaker;
use crate::validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for [`CommandMaker`](crate::CommandMaker).
///
/// Every field has a default, so a JSON file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    pub build_tool: String,
    /// Terminal multiplexer hosting the benchmark processes
    pub multiplexer: String,
    pub node_binary: String,
    pub idp_binary: String,
    /// Load client used in [`BenchMode::Full`]
    pub client_binary: String,
    /// Load client used in [`BenchMode::WitnessOnly`]
    pub witness_client_binary: String,
    /// Matches the node databases removed by cleanup
    pub db_glob: String,
    /// Matches the key, committee and report files removed by cleanup
    pub result_glob: String,
    pub paths: PathMaker,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            build_tool: "cargo".to_string(),
            multiplexer: "tmux".to_string(),
            node_binary: "witness".to_string(),
            idp_binary: "idp".to_string(),
            client_binary: "idp_client".to_string(),
            witness_client_binary: "witness_client".to_string(),
            db_glob: ".*-db*".to_string(),
            result_glob: ".*.json".to_string(),
            paths: PathMaker::default(),
        }
    }
}

impl CommandConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| CommandError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&data).map_err(|source| CommandError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded command config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("build_tool", &self.build_tool),
            ("multiplexer", &self.multiplexer),
            ("node_binary", &self.node_binary),
            ("idp_binary", &self.idp_binary),
            ("client_binary", &self.client_binary),
            ("witness_client_binary", &self.witness_client_binary),
            ("db_glob", &self.db_glob),
            ("result_glob", &self.result_glob),
            ("paths.binary_dir", &self.paths.binary_dir),
            ("paths.logs_dir", &self.paths.logs_dir),
            ("paths.results_dir", &self.paths.results_dir),
            ("paths.committee_file", &self.paths.committee_file),
        ];
        for (name, value) in fields {
            validate::shell_word(name, value)?;
        }
        Ok(())
    }

    /// Client binary driving the given mode.
    pub fn client_binary_for(&self, mode: BenchMode) -> &str {
        match mode {
            BenchMode::Full => &self.client_binary,
            BenchMode::WitnessOnly => &self.witness_client_binary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        assert!(CommandConfig::default().validate().is_ok());
    }

    #[test]
    fn test_client_binary_for_mode() {
        let config = CommandConfig::default();
        assert_eq!(config.client_binary_for(BenchMode::Full), "idp_client");
        assert_eq!(
            config.client_binary_for(BenchMode::WitnessOnly),
            "witness_client"
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "db_glob": ".*-db-*", "paths": {{ "logs_dir": "bench-logs" }} }}"#)
            .unwrap();

        let config = CommandConfig::load(file.path()).unwrap();
        assert_eq!(config.db_glob, ".*-db-*");
        assert_eq!(config.paths.logs_path(), "bench-logs");
        assert_eq!(config.paths.results_path(), "results");
        assert_eq!(config.multiplexer, "tmux");
    }

    #[test]
    fn test_load_rejects_empty_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "node_binary": "" }}"#).unwrap();

        let err = CommandConfig::load(file.path()).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("node_binary"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CommandConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CommandError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = CommandConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, CommandError::Json { .. }));
    }
}
