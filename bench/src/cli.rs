use bench_commands::validate::parse_count;
use bench_commands::BenchMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bench")]
#[command(about = "Print the shell commands that drive a witness benchmark")]
pub struct Cli {
    /// JSON file overriding binary names, globs and directory layout
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// IdP, witnesses and the IdP client
    #[default]
    #[value(name = "full")]
    Full,
    /// Witnesses driven by the witness client
    #[value(name = "witness-only")]
    WitnessOnly,
}

impl From<Mode> for BenchMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Full => BenchMode::Full,
            Mode::WitnessOnly => BenchMode::WitnessOnly,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Remove node databases and result files, recreate the results directory.
    Cleanup,

    /// Remove and recreate the logs directory.
    ClearLogs,

    /// Release build with the benchmark feature of the chosen mode.
    Compile {
        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Generate a witness keypair file.
    GenerateKey {
        /// Destination file (default: key file of witness --index)
        #[arg(long)]
        filename: Option<String>,
        #[arg(long, default_value_t = 0)]
        index: usize,
    },

    /// Start a witness. Missing paths follow the layout of witness --index.
    RunNode {
        #[arg(long, default_value_t = 0)]
        index: usize,
        #[arg(long)]
        keypair: Option<String>,
        #[arg(long)]
        committee: Option<String>,
        #[arg(long)]
        secure_storage: Option<String>,
        #[arg(long)]
        audit_storage: Option<String>,
        #[arg(long)]
        debug: bool,
    },

    /// Start a load client.
    RunClient {
        /// Address of the IdP (or witness) the client targets
        #[arg(long)]
        idp: String,
        /// Requests per second
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        rate: u64,
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        proof_entries: u64,
        #[arg(long)]
        committee: Option<String>,
        #[arg(long, value_enum)]
        mode: Option<Mode>,
        #[arg(long)]
        debug: bool,
    },

    /// Start the identity provider.
    RunIdp {
        #[arg(long)]
        keypair: String,
        #[arg(long)]
        secure_storage: String,
        #[arg(long)]
        sync_storage: Option<String>,
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        batch_size: u64,
        /// Milliseconds before a partial batch is sealed
        #[arg(long, value_parser = parse_count, allow_negative_numbers = true)]
        max_batch_delay: Option<u64>,
        #[arg(long)]
        committee: Option<String>,
        #[arg(long)]
        debug: bool,
    },

    /// Kill the multiplexer server and every benchmark process in it.
    Kill,

    /// Link the witness and client binaries into the current directory.
    Alias {
        /// Directory holding the built binaries (default: binary dir of the layout)
        #[arg(long)]
        origin: Option<String>,
        #[arg(long, value_enum)]
        mode: Option<Mode>,
    },

    /// Link the IdP binary into the current directory.
    AliasIdp {
        #[arg(long)]
        origin: Option<String>,
    },
}
