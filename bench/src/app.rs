use anyhow::{Context, Result};
use bench_commands::{ClientParams, CommandConfig, CommandMaker, IdpParams, NodeParams};

use crate::cli::{Cli, Cmd};

pub fn run(cli: Cli) -> Result<()> {
    let line = render(cli)?;
    println!("{}", line);
    Ok(())
}

/// Build the command line selected by `cli`.
pub fn render(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => CommandConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CommandConfig::default(),
    };
    let maker = CommandMaker::new(config).context("Invalid command config")?;
    let paths = maker.paths().clone();

    let line = match cli.cmd {
        Cmd::Cleanup => maker.cleanup(),
        Cmd::ClearLogs => maker.clean_logs(),
        Cmd::Compile { mode } => maker.compile(mode.map(Into::into)),
        Cmd::GenerateKey { filename, index } => {
            let filename = filename.unwrap_or_else(|| paths.key_file(index));
            maker.generate_key(&filename)?
        }
        Cmd::RunNode {
            index,
            keypair,
            committee,
            secure_storage,
            audit_storage,
            debug,
        } => {
            let params = NodeParams::new(
                keypair.unwrap_or_else(|| paths.key_file(index)),
                committee.unwrap_or_else(|| paths.committee_file().to_string()),
                secure_storage.unwrap_or_else(|| paths.secure_store_path(index)),
                audit_storage.unwrap_or_else(|| paths.audit_store_path(index)),
            )
            .debug(debug);
            maker.run_node(&params)?
        }
        Cmd::RunClient {
            idp,
            rate,
            proof_entries,
            committee,
            mode,
            debug,
        } => {
            let committee = committee.unwrap_or_else(|| paths.committee_file().to_string());
            let params = ClientParams::new(idp, rate, committee, proof_entries)
                .mode(mode.unwrap_or_default().into())
                .debug(debug);
            maker.run_client(&params)?
        }
        Cmd::RunIdp {
            keypair,
            secure_storage,
            sync_storage,
            batch_size,
            max_batch_delay,
            committee,
            debug,
        } => {
            let mut params = IdpParams::new(
                keypair,
                committee.unwrap_or_else(|| paths.committee_file().to_string()),
                secure_storage,
                sync_storage.unwrap_or_else(|| paths.sync_store_path()),
                batch_size,
            )
            .debug(debug);
            if let Some(delay) = max_batch_delay {
                params = params.max_batch_delay(delay);
            }
            maker.run_idp(&params)?
        }
        Cmd::Kill => maker.kill(),
        Cmd::Alias { origin, mode } => {
            let origin = origin.unwrap_or_else(|| paths.binary_path().to_string());
            maker.alias_binaries(&origin, mode.map(Into::into))?
        }
        Cmd::AliasIdp { origin } => {
            let origin = origin.unwrap_or_else(|| paths.binary_path().to_string());
            maker.alias_idp(&origin)?
        }
    };

    tracing::info!(command = %line, "generated");
    Ok(line)
}
