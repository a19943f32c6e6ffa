//! `alloy` implementation of the panel's collaborators.
use alloy::{
    network::EthereumWallet,
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use async_trait::async_trait;

use crate::{
    contract::{
        ContractName, ContractReader, ContractRegistry, ContractWriter,
        MockUsdc, ReadCall, Vault, WalletConnection, WriteCall,
    },
    registry::Deployments,
    Error,
};

/// JSON-RPC client bound to one account and one set of deployments.
///
/// Built without a signer it is read-only: no account is connected and every
/// write fails with [`Error::NotConnected`].
#[derive(Clone)]
pub struct ChainClient {
    provider: DynProvider,
    account: Option<Address>,
    deployments: Deployments,
}

impl ChainClient {
    /// Connects to `rpc_url` without an account.
    #[must_use]
    pub fn read_only(rpc_url: Url, deployments: Deployments) -> Self {
        let provider = ProviderBuilder::new().connect_http(rpc_url).erased();
        Self { provider, account: None, deployments }
    }

    /// Connects to `rpc_url`, signing transactions with `signer`.
    #[must_use]
    pub fn with_signer(
        rpc_url: Url,
        signer: PrivateKeySigner,
        deployments: Deployments,
    ) -> Self {
        let account = signer.address();
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer))
            .connect_http(rpc_url)
            .erased();
        Self { provider, account: Some(account), deployments }
    }

    /// The deployments this client resolves contracts with.
    #[must_use]
    pub fn deployments(&self) -> &Deployments {
        &self.deployments
    }

    /// Chain id reported by the node.
    ///
    /// # Errors
    ///
    /// * [`Error::Transport`] - If the RPC request fails.
    pub async fn chain_id(&self) -> Result<u64, Error> {
        Ok(self.provider.get_chain_id().await?)
    }

    /// Underlying asset the deployed vault accepts.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownContract`] - If the vault is not deployed.
    /// * [`Error::Contract`] - If the RPC call fails.
    pub async fn vault_asset(&self) -> Result<Address, Error> {
        let vault =
            Vault::new(self.require(ContractName::Vault)?, &self.provider);
        Ok(vault.asset().call().await?)
    }

    /// Decimals reported by the deployed token.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownContract`] - If the token is not deployed.
    /// * [`Error::Contract`] - If the RPC call fails.
    pub async fn token_decimals(&self) -> Result<u8, Error> {
        let address = self.require(ContractName::MockUsdc)?;
        let token = MockUsdc::new(address, &self.provider);
        Ok(token.decimals().call().await?)
    }

    fn require(&self, contract: ContractName) -> Result<Address, Error> {
        self.address_of(contract).ok_or(Error::UnknownContract(contract))
    }
}

impl WalletConnection for ChainClient {
    fn connected_address(&self) -> Option<Address> {
        self.account
    }
}

impl ContractRegistry for ChainClient {
    fn address_of(&self, contract: ContractName) -> Option<Address> {
        self.deployments.address_of(contract)
    }
}

#[async_trait]
impl ContractReader for ChainClient {
    async fn read(
        &self,
        contract: ContractName,
        call: ReadCall,
    ) -> Result<U256, Error> {
        let address = self.require(contract)?;
        log::debug!("reading {contract}.{}", call.function());

        let value = match (contract, call) {
            (ContractName::MockUsdc, ReadCall::BalanceOf(owner)) => {
                MockUsdc::new(address, &self.provider)
                    .balanceOf(owner)
                    .call()
                    .await?
            }
            (
                ContractName::MockUsdc,
                ReadCall::Allowance { owner, spender },
            ) => {
                MockUsdc::new(address, &self.provider)
                    .allowance(owner, spender)
                    .call()
                    .await?
            }
            (ContractName::Vault, ReadCall::BalanceOf(owner)) => {
                Vault::new(address, &self.provider)
                    .balanceOf(owner)
                    .call()
                    .await?
            }
            (contract, call) => {
                return Err(Error::UnsupportedCall {
                    contract,
                    function: call.function(),
                })
            }
        };
        Ok(value)
    }
}

#[async_trait]
impl ContractWriter for ChainClient {
    async fn write(
        &self,
        contract: ContractName,
        call: WriteCall,
    ) -> Result<TxHash, Error> {
        if self.account.is_none() {
            return Err(Error::NotConnected);
        }
        let address = self.require(contract)?;
        let token = MockUsdc::new(address, &self.provider);
        let vault = Vault::new(address, &self.provider);

        let pending = match (contract, call) {
            (ContractName::MockUsdc, WriteCall::Mint { to, amount }) => {
                token.mint(to, amount).send().await?
            }
            (
                ContractName::MockUsdc,
                WriteCall::Approve { spender, amount },
            ) => {
                token.approve(spender, amount).send().await?
            }
            (ContractName::Vault, WriteCall::Deposit { assets, receiver }) => {
                vault.deposit(assets, receiver).send().await?
            }
            (
                ContractName::Vault,
                WriteCall::Redeem { shares, receiver, owner },
            ) => {
                vault.redeem(shares, receiver, owner).send().await?
            }
            (contract, call) => {
                return Err(Error::UnsupportedCall {
                    contract,
                    function: call.function(),
                })
            }
        };
        log::info!(
            "submitted {contract}.{} in {}",
            call.function(),
            pending.tx_hash()
        );

        let receipt = pending.get_receipt().await?;
        let hash = receipt.transaction_hash;
        if !receipt.status() {
            log::warn!("{contract}.{} reverted in {hash}", call.function());
            return Err(Error::Reverted(hash));
        }

        log::info!(
            "{contract}.{} mined in block {:?}",
            call.function(),
            receipt.block_number
        );
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    fn deployments() -> Deployments {
        Deployments::default().with(
            ContractName::MockUsdc,
            address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"),
        )
    }

    fn signing_client() -> ChainClient {
        let signer = PrivateKeySigner::random();
        ChainClient::with_signer(url(), signer, deployments())
    }

    fn url() -> Url {
        "http://127.0.0.1:8545".parse().unwrap()
    }

    #[tokio::test]
    async fn unreachable_node_is_a_transport_error() {
        let url = "http://127.0.0.1:1".parse().unwrap();
        let client = ChainClient::read_only(url, deployments());
        let err = client.chain_id().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)), "unexpected error: {err}");
    }

    #[test]
    fn read_only_client_has_no_account() {
        let client = ChainClient::read_only(url(), deployments());
        assert_eq!(client.connected_address(), None);
    }

    #[test]
    fn signer_client_connects_signer_account() {
        let signer = PrivateKeySigner::random();
        let expected = signer.address();
        let client = ChainClient::with_signer(url(), signer, deployments());
        assert_eq!(client.connected_address(), Some(expected));
    }

    #[tokio::test]
    async fn read_only_client_refuses_writes() {
        let client = ChainClient::read_only(url(), deployments());
        let err = client
            .write(
                ContractName::MockUsdc,
                WriteCall::Mint { to: Address::ZERO, amount: U256::from(1) },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotConnected));
    }

    #[tokio::test]
    async fn unknown_contracts_fail_before_any_request() {
        let client = signing_client();
        let err = client
            .read(ContractName::Vault, ReadCall::BalanceOf(Address::ZERO))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownContract(ContractName::Vault)));
    }

    #[tokio::test]
    async fn mismatched_calls_are_unsupported() {
        let client = signing_client();
        let err = client
            .write(
                ContractName::MockUsdc,
                WriteCall::Deposit {
                    assets: U256::from(1),
                    receiver: Address::ZERO,
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedCall {
                contract: ContractName::MockUsdc,
                function: "deposit"
            }
        ));
    }
}
