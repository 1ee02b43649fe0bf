//! Parameters for the process-launching commands.
//!
//! Each struct is built with `new` plus optional fluent setters, then checked
//! with `validate` by [`CommandMaker`](crate::CommandMaker) before any text is
//! produced.

use crate::error::Result;
use crate::mode::{BenchMode, Verbosity};
use crate::validate::shell_word;

/// Arguments of `witness run`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeParams {
    pub keypair: String,
    pub committee: String,
    pub secure_storage: String,
    pub audit_storage: String,
    pub debug: bool,
}

impl NodeParams {
    pub fn new(
        keypair: impl Into<String>,
        committee: impl Into<String>,
        secure_storage: impl Into<String>,
        audit_storage: impl Into<String>,
    ) -> Self {
        Self {
            keypair: keypair.into(),
            committee: committee.into(),
            secure_storage: secure_storage.into(),
            audit_storage: audit_storage.into(),
            debug: false,
        }
    }

    /// Log at debug level instead of info
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_debug(self.debug)
    }

    pub fn validate(&self) -> Result<()> {
        shell_word("keypair", &self.keypair)?;
        shell_word("committee", &self.committee)?;
        shell_word("secure_storage", &self.secure_storage)?;
        shell_word("audit_storage", &self.audit_storage)
    }
}

/// Arguments of the load-generating client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientParams {
    /// Address of the IdP (or of the witness in witness-only runs)
    pub idp: String,
    /// Requests per second
    pub rate: u64,
    pub committee: String,
    pub proof_entries: u64,
    pub mode: BenchMode,
    pub debug: bool,
}

impl ClientParams {
    pub fn new(
        idp: impl Into<String>,
        rate: u64,
        committee: impl Into<String>,
        proof_entries: u64,
    ) -> Self {
        Self {
            idp: idp.into(),
            rate,
            committee: committee.into(),
            proof_entries,
            mode: BenchMode::default(),
            debug: false,
        }
    }

    /// Select the client binary; defaults to [`BenchMode::Full`].
    pub fn mode(mut self, mode: BenchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_debug(self.debug)
    }

    pub fn validate(&self) -> Result<()> {
        shell_word("idp", &self.idp)?;
        shell_word("committee", &self.committee)
    }
}

/// Arguments of the identity provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdpParams {
    pub keypair: String,
    pub committee: String,
    pub secure_storage: String,
    pub sync_storage: String,
    /// Client updates batched into one proof
    pub batch_size: u64,
    /// Milliseconds before a partial batch is sealed; the IdP default applies when unset
    pub max_batch_delay: Option<u64>,
    pub debug: bool,
}

impl IdpParams {
    pub fn new(
        keypair: impl Into<String>,
        committee: impl Into<String>,
        secure_storage: impl Into<String>,
        sync_storage: impl Into<String>,
        batch_size: u64,
    ) -> Self {
        Self {
            keypair: keypair.into(),
            committee: committee.into(),
            secure_storage: secure_storage.into(),
            sync_storage: sync_storage.into(),
            batch_size,
            max_batch_delay: None,
            debug: false,
        }
    }

    pub fn max_batch_delay(mut self, millis: u64) -> Self {
        self.max_batch_delay = Some(millis);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_debug(self.debug)
    }

    pub fn validate(&self) -> Result<()> {
        shell_word("keypair", &self.keypair)?;
        shell_word("committee", &self.committee)?;
        shell_word("secure_storage", &self.secure_storage)?;
        shell_word("sync_storage", &self.sync_storage)
    }
}
