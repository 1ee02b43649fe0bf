//! Benchmark mode and log verbosity selectors.

use crate::error::CommandError;
use std::fmt;
use std::str::FromStr;

/// Which flavour of the system a benchmark exercises.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BenchMode {
    /// IdP, witnesses and the IdP load client.
    #[default]
    Full,
    /// Witnesses only, driven directly by the witness client.
    WitnessOnly,
}

impl BenchMode {
    /// Cargo feature enabling the benchmark instrumentation for this mode.
    pub fn feature(self) -> &'static str {
        match self {
            BenchMode::Full => "benchmark",
            BenchMode::WitnessOnly => "witness-only-benchmark",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BenchMode::Full => "full",
            BenchMode::WitnessOnly => "witness-only",
        }
    }
}

impl fmt::Display for BenchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BenchMode {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" | "benchmark" => Ok(BenchMode::Full),
            "witness-only" | "witness-only-benchmark" => Ok(BenchMode::WitnessOnly),
            _ => Err(CommandError::invalid(
                "mode",
                format!("unknown benchmark mode: {}", s),
            )),
        }
    }
}

/// Log verbosity passed to the node and client binaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Info level
    #[default]
    Normal,
    /// Debug level
    Debug,
}

impl Verbosity {
    pub fn from_debug(debug: bool) -> Self {
        if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// The `-v` flag understood by the binaries' clap parsers.
    pub fn flag(self) -> &'static str {
        match self {
            Verbosity::Normal => "-vv",
            Verbosity::Debug => "-vvv",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_full() {
        assert_eq!(BenchMode::default(), BenchMode::Full);
        assert_eq!(BenchMode::default().feature(), "benchmark");
    }

    #[test]
    fn test_witness_only_feature() {
        assert_eq!(BenchMode::WitnessOnly.feature(), "witness-only-benchmark");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("full".parse::<BenchMode>().unwrap(), BenchMode::Full);
        assert_eq!("benchmark".parse::<BenchMode>().unwrap(), BenchMode::Full);
        assert_eq!(
            "witness-only".parse::<BenchMode>().unwrap(),
            BenchMode::WitnessOnly
        );
        assert!("partial".parse::<BenchMode>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [BenchMode::Full, BenchMode::WitnessOnly] {
            assert_eq!(mode.to_string().parse::<BenchMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(Verbosity::from_debug(false).flag(), "-vv");
        assert_eq!(Verbosity::from_debug(true).flag(), "-vvv");
        assert_eq!(Verbosity::Debug.to_string(), "-vvv");
    }
}
