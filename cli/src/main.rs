//! `vault-panel`: deposit into and redeem from an ERC-4626 vault from the
//! terminal.
//!
//! Reads `vault-panel.toml` (or `--config PATH`) and the deployments file it
//! points to. The signing key comes from the environment variable named by
//! `private_key_env` (`PRIVATE_KEY` by default); without it the page is
//! read-only. Set `RUST_LOG=info` to see transactions as they are sent.
use eyre::{eyre, WrapErr};
use vault_panel::{extension, panel::VaultPanel};

use crate::command::{Invocation, USAGE};

mod command;
mod page;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    env_logger::init();

    match Invocation::parse(std::env::args().skip(1))? {
        Invocation::Help => println!("{USAGE}"),
        Invocation::Extension { dir } => {
            let written =
                extension::write_args_files(&dir).wrap_err_with(|| {
                    let dir = dir.display();
                    format!("failed to write extension files under {dir}")
                })?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Invocation::Page { config } => {
            let (config, client) = page::connect(&config).await?;
            let unit = config.unit().ok_or_else(|| {
                eyre!("decimals must be at most 77, got {}", config.decimals)
            })?;
            page::run(VaultPanel::new(client, unit)).await?;
        }
    }

    Ok(())
}
