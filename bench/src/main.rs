use anyhow::Result;
use clap::Parser;

mod app;
mod cli;

fn main() -> Result<()> {
    let cli = crate::cli::Cli::parse();

    // stdout carries the command line, diagnostics go to stderr
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    crate::app::run(cli)
}
