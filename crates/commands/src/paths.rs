//! Naming conventions for the files and directories a benchmark run touches.
//!
//! Every path is relative to the working directory of the host running the
//! command, so the same layout holds locally and on remote machines.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Directory layout used by the benchmark harness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathMaker {
    /// Where cargo leaves the release binaries
    pub binary_dir: String,
    pub logs_dir: String,
    pub results_dir: String,
    pub committee_file: String,
}

impl Default for PathMaker {
    fn default() -> Self {
        Self {
            binary_dir: "target/release".to_string(),
            logs_dir: "logs".to_string(),
            results_dir: "results".to_string(),
            committee_file: ".committee.json".to_string(),
        }
    }
}

impl PathMaker {
    pub fn binary_path(&self) -> &str {
        &self.binary_dir
    }

    pub fn committee_file(&self) -> &str {
        &self.committee_file
    }

    /// Keypair file of witness `i`.
    pub fn key_file(&self, i: usize) -> String {
        format!(".node-{}.json", i)
    }

    pub fn secure_store_path(&self, i: usize) -> String {
        format!(".secure-db-{}", i)
    }

    pub fn audit_store_path(&self, i: usize) -> String {
        format!(".audit-db-{}", i)
    }

    /// Sync storage of the IdP.
    pub fn sync_store_path(&self) -> String {
        ".sync-db".to_string()
    }

    pub fn logs_path(&self) -> &str {
        &self.logs_dir
    }

    pub fn node_log_file(&self, i: usize) -> String {
        join(&self.logs_dir, &format!("witness-{}.log", i))
    }

    pub fn client_log_file(&self, i: usize) -> String {
        join(&self.logs_dir, &format!("client-{}.log", i))
    }

    pub fn idp_log_file(&self) -> String {
        join(&self.logs_dir, "idp.log")
    }

    pub fn results_path(&self) -> &str {
        &self.results_dir
    }
}

/// Join two path fragments with the platform separator.
pub(crate) fn join(base: &str, name: &str) -> String {
    Path::new(base).join(name).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let paths = PathMaker::default();
        assert_eq!(paths.binary_path(), "target/release");
        assert_eq!(paths.logs_path(), "logs");
        assert_eq!(paths.results_path(), "results");
        assert_eq!(paths.committee_file(), ".committee.json");
    }

    #[test]
    fn test_per_node_files() {
        let paths = PathMaker::default();
        assert_eq!(paths.key_file(3), ".node-3.json");
        assert_eq!(paths.secure_store_path(0), ".secure-db-0");
        assert_eq!(paths.audit_store_path(1), ".audit-db-1");
        assert_eq!(paths.node_log_file(2), "logs/witness-2.log");
        assert_eq!(paths.client_log_file(0), "logs/client-0.log");
        assert_eq!(paths.idp_log_file(), "logs/idp.log");
    }

    #[test]
    fn test_stores_match_default_cleanup_globs() {
        // `.*-db*` and `.*-db-*` must both catch the witness stores.
        let paths = PathMaker::default();
        for store in [paths.secure_store_path(4), paths.audit_store_path(4)] {
            assert!(store.starts_with('.'));
            assert!(store.contains("-db-"));
        }
    }

    #[test]
    fn test_custom_logs_dir() {
        let paths = PathMaker {
            logs_dir: "/tmp/bench-logs/".to_string(),
            ..PathMaker::default()
        };
        assert_eq!(paths.node_log_file(0), "/tmp/bench-logs/witness-0.log");
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let paths: PathMaker = serde_json::from_str(r#"{ "results_dir": "out" }"#).unwrap();
        assert_eq!(paths.results_path(), "out");
        assert_eq!(paths.logs_path(), "logs");
    }
}
