use std::str::FromStr;

use alloy::{
    network::{EthereumWallet, TransactionBuilder},
    primitives::{uint, Address, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use once_cell::sync::Lazy;
use tokio::sync::{Mutex, MutexGuard};

use crate::system::{rpc_url, Wallet};

/// First dev account of both `anvil` and the Hardhat node.
const MASTER_PRIVATE_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const DEFAULT_FUNDING_ETH: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Type that corresponds to a test account.
#[derive(Clone)]
pub struct Account {
    /// The account's local private key wrapper.
    pub signer: PrivateKeySigner,
    /// The account's wallet -- an `alloy` provider with a `WalletFiller`.
    pub wallet: Wallet,
    url: Url,
}

impl Account {
    /// Create a new account with a default funding of [`DEFAULT_FUNDING_ETH`].
    ///
    /// # Errors
    ///
    /// May fail if `RPC_URL` is not set or funding the newly created account
    /// fails.
    pub async fn new() -> eyre::Result<Self> {
        AccountFactory::create().await
    }

    /// Retrieve this account's address.
    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The rpc endpoint this account's provider is connected to.
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Get gas token balance.
    ///
    /// # Errors
    ///
    /// If the RPC request fails.
    pub async fn balance(&self) -> eyre::Result<U256> {
        Ok(self.wallet.get_balance(self.address()).await?)
    }
}

/// A unit struct used as a synchronization mechanism in
/// [`SYNC_ACCOUNT_FACTORY`].
struct AccountFactory;

impl AccountFactory {
    /// Get access to the factory in a synchronized manner.
    async fn lock() -> MutexGuard<'static, Self> {
        /// Since after wallet generation accounts get funded from a single
        /// dev account, we must synchronize account creation (otherwise the
        /// nonce will be too low).
        static SYNC_ACCOUNT_FACTORY: Lazy<Mutex<AccountFactory>> =
            Lazy::new(|| Mutex::new(AccountFactory));

        SYNC_ACCOUNT_FACTORY.lock().await
    }

    /// Create new account and fund it from the master dev account.
    async fn create() -> eyre::Result<Account> {
        let _lock = AccountFactory::lock().await;

        let signer = PrivateKeySigner::random();
        let account_address = signer.address();
        let url = rpc_url()?;

        let master = get_master_signer();
        let master_wallet = ProviderBuilder::new()
            .wallet(EthereumWallet::from(master.clone()))
            .connect_http(url.clone());

        let tx = TransactionRequest::default()
            .with_from(master.address())
            .with_to(account_address)
            .with_value(DEFAULT_FUNDING_ETH);

        master_wallet.send_transaction(tx).await?.watch().await?;

        let wallet = ProviderBuilder::new()
            .wallet(EthereumWallet::from(signer.clone()))
            .connect_http(url.clone())
            .erased();

        Ok(Account { signer, wallet, url })
    }
}

/// Get Master signer for the chain.
fn get_master_signer() -> PrivateKeySigner {
    PrivateKeySigner::from_str(MASTER_PRIVATE_KEY)
        .expect("failed to create master signer")
}
