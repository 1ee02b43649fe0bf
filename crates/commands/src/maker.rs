//! Shell command lines for every step of a benchmark run.
//!
//! The harness runs the steps in order (cleanup, compile, generate keys, run
//! nodes, run clients, kill); this module only spells them out.

use crate::config::CommandConfig;
use crate::error::Result;
use crate::mode::BenchMode;
use crate::params::{ClientParams, IdpParams, NodeParams};
use crate::paths::{join, PathMaker};
use crate::validate::shell_word;

/// Separator between the commands of a compound line.
const SEQ: &str = " ; ";

/// Builds command lines from typed parameters.
///
/// Immutable once created; every method is a pure function of the config
/// and its arguments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandMaker {
    config: CommandConfig,
}

impl CommandMaker {
    /// Validate `config` and wrap it.
    pub fn new(config: CommandConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CommandConfig {
        &self.config
    }

    pub fn paths(&self) -> &PathMaker {
        &self.config.paths
    }

    /// Remove node databases and result files, then recreate the results directory.
    pub fn cleanup(&self) -> String {
        let cmd = [
            format!("rm -r {}", self.config.db_glob),
            format!("rm {}", self.config.result_glob),
            format!("mkdir -p {}", self.paths().results_path()),
        ]
        .join(SEQ);
        trace("cleanup", &cmd);
        cmd
    }

    pub fn clean_logs(&self) -> String {
        let logs = self.paths().logs_path();
        let cmd = format!("rm -r {logs}{SEQ}mkdir -p {logs}");
        trace("clean-logs", &cmd);
        cmd
    }

    /// Release build with the feature of `mode` (`benchmark` when `None`).
    pub fn compile(&self, mode: Option<BenchMode>) -> String {
        let feature = mode.unwrap_or_default().feature();
        let cmd = format!(
            "{} build --quiet --release --features {}",
            self.config.build_tool, feature
        );
        trace("compile", &cmd);
        cmd
    }

    pub fn generate_key(&self, key_file: &str) -> Result<String> {
        shell_word("key_file", key_file)?;
        let cmd = format!(
            "./{} generate --filename {}",
            self.config.node_binary, key_file
        );
        trace("generate-key", &cmd);
        Ok(cmd)
    }

    pub fn run_node(&self, params: &NodeParams) -> Result<String> {
        params.validate()?;
        let cmd = format!(
            "./{} {} run --keypair {} --committee {} --secure_storage {} --audit_storage {}",
            self.config.node_binary,
            params.verbosity(),
            params.keypair,
            params.committee,
            params.secure_storage,
            params.audit_storage,
        );
        trace("run-node", &cmd);
        Ok(cmd)
    }

    pub fn run_client(&self, params: &ClientParams) -> Result<String> {
        params.validate()?;
        let cmd = format!(
            "./{} {} --idp {} --rate {} --committee {} --proof_entries {}",
            self.config.client_binary_for(params.mode),
            params.verbosity(),
            params.idp,
            params.rate,
            params.committee,
            params.proof_entries,
        );
        trace("run-client", &cmd);
        Ok(cmd)
    }

    pub fn run_idp(&self, params: &IdpParams) -> Result<String> {
        params.validate()?;
        let mut cmd = format!(
            "./{} {} --keypair {} --committee {} --secure_storage {} --sync_storage {} --batch_size {}",
            self.config.idp_binary,
            params.verbosity(),
            params.keypair,
            params.committee,
            params.secure_storage,
            params.sync_storage,
            params.batch_size,
        );
        if let Some(delay) = params.max_batch_delay {
            cmd.push_str(&format!(" --max_batch_delay {}", delay));
        }
        trace("run-idp", &cmd);
        Ok(cmd)
    }

    /// Tear down the multiplexer server and every process it hosts.
    pub fn kill(&self) -> String {
        let cmd = format!("{} kill-server", self.config.multiplexer);
        trace("kill", &cmd);
        cmd
    }

    /// Replace the local node and client links with links into `origin`.
    pub fn alias_binaries(&self, origin: &str, mode: Option<BenchMode>) -> Result<String> {
        shell_word("origin", origin)?;
        let node = &self.config.node_binary;
        let client = self.config.client_binary_for(mode.unwrap_or_default());
        let cmd = [
            format!("rm {}", node),
            format!("rm {}", client),
            format!("ln -s {} .", join(origin, node)),
            format!("ln -s {} .", join(origin, client)),
        ]
        .join(SEQ);
        trace("alias", &cmd);
        Ok(cmd)
    }

    pub fn alias_idp(&self, origin: &str) -> Result<String> {
        shell_word("origin", origin)?;
        let idp = &self.config.idp_binary;
        let cmd = format!("rm {idp}{SEQ}ln -s {} .", join(origin, idp));
        trace("alias-idp", &cmd);
        Ok(cmd)
    }
}

fn trace(step: &str, cmd: &str) {
    tracing::debug!(step, command = cmd, "built command");
}
