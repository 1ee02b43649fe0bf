//! Command lines for the witness benchmark harness.
//!
//! The harness ships these strings to remote hosts (over SSH or inside a
//! tmux session) and runs them there; nothing in this crate executes a
//! process or touches the network.
//!
//! ```
//! use bench_commands::{BenchMode, ClientParams, CommandMaker};
//!
//! let maker = CommandMaker::default();
//! assert_eq!(
//!     maker.compile(Some(BenchMode::WitnessOnly)),
//!     "cargo build --quiet --release --features witness-only-benchmark"
//! );
//!
//! let client = ClientParams::new("1.2.3.4:9000", 100, "committee.json", 50);
//! assert_eq!(
//!     maker.run_client(&client).unwrap(),
//!     "./idp_client -vv --idp 1.2.3.4:9000 --rate 100 --committee committee.json --proof_entries 50"
//! );
//! ```

pub mod config;
pub mod error;
pub mod maker;
pub mod mode;
pub mod params;
pub mod paths;
pub mod validate;

pub use config::CommandConfig;
pub use error::{CommandError, Result};
pub use maker::CommandMaker;
pub use mode::{BenchMode, Verbosity};
pub use params::{ClientParams, IdpParams, NodeParams};
pub use paths::PathMaker;
