//! The interactive vault page.
use std::path::Path;

use alloy::{
    primitives::TxHash, signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use eyre::{eyre, WrapErr};
use tokio::io::{AsyncBufReadExt, BufReader};
use vault_panel::{
    client::ChainClient,
    config::Config,
    contract::{Collaborators, ContractName, ContractRegistry},
    panel::VaultPanel,
    registry::Deployments,
    view::Page,
};

use crate::command::{Command, Form, PAGE_HELP};

/// Builds the client described by the configuration at `config_path`.
pub(crate) async fn connect(
    config_path: &Path,
) -> eyre::Result<(Config, ChainClient)> {
    let config = Config::load(config_path)?;
    let deployments_path = config.deployments_path(config_path);
    let deployments = Deployments::load(&deployments_path).wrap_err_with(|| {
        format!(
            "deploy the contracts and record them in {}",
            deployments_path.display()
        )
    })?;
    let rpc_url: Url = config
        .rpc_url
        .parse()
        .wrap_err_with(|| format!("invalid rpc url {:?}", config.rpc_url))?;

    let client = match config.private_key() {
        Some(key) => {
            let signer =
                key.parse::<PrivateKeySigner>().wrap_err_with(|| {
                    format!("{} is not a private key", config.private_key_env)
                })?;
            ChainClient::with_signer(rpc_url, signer, deployments)
        }
        None => {
            log::warn!(
                "{} is not set, the page is read-only",
                config.private_key_env
            );
            ChainClient::read_only(rpc_url, deployments)
        }
    };

    check_deployments(&config, &client).await;
    Ok((config, client))
}

/// Warns about deployments that do not match the chain or the config.
async fn check_deployments(config: &Config, client: &ChainClient) {
    match (client.chain_id().await, client.deployments().chain_id) {
        (Ok(actual), Some(expected)) if actual != expected => log::warn!(
            "connected to chain {actual}, deployments are for chain {expected}"
        ),
        (Err(e), _) => log::warn!("failed to query chain id: {e}"),
        _ => {}
    }

    if let Ok(asset) = client.vault_asset().await {
        if client.address_of(ContractName::MockUsdc) != Some(asset) {
            log::warn!("vault asset {asset} is not the deployed MockUSDC");
        }
    }

    if let Ok(decimals) = client.token_decimals().await {
        if decimals != config.decimals {
            log::warn!(
                "MockUSDC has {decimals} decimals, config says {}",
                config.decimals
            );
        }
    }
}

/// Runs the page until `quit` or end of input.
pub(crate) async fn run<C: Collaborators>(
    mut panel: VaultPanel<C>,
) -> eyre::Result<()> {
    panel.refresh().await;
    println!("{}", Page::of(&panel));
    println!("type `help` for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{PAGE_HELP}"),
            command => match execute(&mut panel, command).await {
                Ok(Some(hash)) => {
                    println!("transaction {hash} mined");
                    println!("{}", Page::of(&panel));
                }
                Ok(None) => println!("{}", Page::of(&panel)),
                Err(e) => eprintln!("error: {e:#}"),
            },
        }
    }
    Ok(())
}

/// Applies one command to the panel, returning the hash of the transaction
/// it sent, if any. Pressing a disabled button is an error.
pub(crate) async fn execute<C: Collaborators>(
    panel: &mut VaultPanel<C>,
    command: Command,
) -> eyre::Result<Option<TxHash>> {
    let buttons = panel.buttons();
    let enabled = |enabled: bool, label: &str| {
        if enabled {
            Ok(())
        } else {
            Err(eyre!("\"{label}\" is disabled"))
        }
    };

    let hash = match command {
        Command::Show | Command::Help | Command::Quit => None,
        Command::Refresh => {
            panel.refresh().await;
            None
        }
        Command::Mint => {
            enabled(buttons.mint, "Mint")?;
            Some(panel.mint().await?)
        }
        Command::Approve => {
            enabled(buttons.approve, "Approve Tokens")?;
            Some(panel.approve().await?)
        }
        Command::Type(Form::Deposit, amount) => {
            panel.set_deposit_amount(amount);
            None
        }
        Command::Type(Form::Redeem, amount) => {
            panel.set_redeem_amount(amount);
            None
        }
        Command::Max(Form::Deposit) => {
            enabled(buttons.max_deposit, "Max")?;
            panel.max_deposit();
            None
        }
        Command::Max(Form::Redeem) => {
            enabled(buttons.max_redeem, "Max")?;
            panel.max_redeem();
            None
        }
        Command::Submit(Form::Deposit) => {
            enabled(buttons.deposit, "Deposit")?;
            Some(panel.deposit().await?)
        }
        Command::Submit(Form::Redeem) => {
            enabled(buttons.redeem, "Redeem")?;
            Some(panel.redeem().await?)
        }
    };
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::utils::Unit;

    use super::*;

    fn offline_panel() -> VaultPanel<ChainClient> {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let client = ChainClient::read_only(url, Deployments::default());
        VaultPanel::new(client, Unit::ETHER)
    }

    #[tokio::test]
    async fn typing_fills_inputs() {
        let mut panel = offline_panel();
        execute(&mut panel, Command::Type(Form::Deposit, "2".to_owned()))
            .await
            .unwrap();
        execute(&mut panel, Command::Type(Form::Redeem, "3".to_owned()))
            .await
            .unwrap();

        assert_eq!(panel.deposit_amount(), "2");
        assert_eq!(panel.redeem_amount(), "3");
    }

    #[tokio::test]
    async fn disabled_buttons_are_not_pressed() {
        let mut panel = offline_panel();
        let err = execute(&mut panel, Command::Submit(Form::Deposit))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("\"Deposit\" is disabled"));

        let err = execute(&mut panel, Command::Mint).await.unwrap_err();
        assert!(err.to_string().contains("disabled"));
    }

    #[tokio::test]
    async fn read_only_page_cannot_deposit() {
        let mut panel = offline_panel();
        panel.set_deposit_amount("1");
        let err = execute(&mut panel, Command::Submit(Form::Deposit))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no wallet account is connected"));
        assert_eq!(panel.deposit_amount(), "1");
    }
}
