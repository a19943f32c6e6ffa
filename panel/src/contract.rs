//! Collaborators the panel talks to, and the contracts behind them.
//!
//! The panel never reaches the chain itself. It names a contract and a
//! function, and the collaborators traits below decide how that becomes an
//! RPC request. [`crate::client::ChainClient`] is the `alloy` implementation.
use std::fmt;

use alloy::{
    primitives::{Address, TxHash, U256},
    sol,
};
use async_trait::async_trait;

use crate::Error;

sol!(
    /// Mintable ERC-20 token used as the vault's underlying asset.
    #[sol(rpc)]
    #[allow(missing_docs)]
    contract MockUsdc {
        function decimals() external view returns (uint8 decimals);
        function balanceOf(address account) external view returns (uint256 balance);
        function allowance(address owner, address spender) external view returns (uint256 allowance);

        function mint(address to, uint256 amount) external;
        function approve(address spender, uint256 amount) external returns (bool);

        #[derive(Debug, PartialEq)]
        event Transfer(address indexed from, address indexed to, uint256 value);
        #[derive(Debug, PartialEq)]
        event Approval(address indexed owner, address indexed spender, uint256 value);
    }
);

sol!(
    /// ERC-4626 vault issuing shares against deposits of [`MockUsdc`].
    #[sol(rpc)]
    #[allow(missing_docs)]
    contract Vault {
        function asset() external view returns (address asset);
        function totalAssets() external view returns (uint256 totalAssets);
        function balanceOf(address account) external view returns (uint256 balance);

        function deposit(uint256 assets, address receiver) external returns (uint256 shares);
        function redeem(uint256 shares, address receiver, address owner) external returns (uint256 assets);

        #[derive(Debug, PartialEq)]
        event Deposit(address indexed caller, address indexed owner, uint256 assets, uint256 shares);
        #[derive(Debug, PartialEq)]
        event Withdraw(address indexed caller, address indexed receiver, address indexed owner, uint256 assets, uint256 shares);
    }
);

/// Logical name of a deployed contract, as used by the deployments registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractName {
    /// The ERC-4626 vault.
    Vault,
    /// The vault's underlying token.
    MockUsdc,
}

impl ContractName {
    /// All contracts the panel works with.
    pub const ALL: [ContractName; 2] =
        [ContractName::Vault, ContractName::MockUsdc];

    /// Name under which the contract is deployed.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContractName::Vault => "Vault",
            ContractName::MockUsdc => "MockUSDC",
        }
    }

    /// Looks a contract up by its deployment name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|contract| contract.as_str() == name)
    }
}

impl fmt::Display for ContractName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read-only function call returning a single amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadCall {
    /// `balanceOf(owner)`.
    BalanceOf(Address),
    /// `allowance(owner, spender)`.
    Allowance {
        /// Token holder.
        owner: Address,
        /// Account allowed to spend on the holder's behalf.
        spender: Address,
    },
}

impl ReadCall {
    /// Solidity function name of the call.
    #[must_use]
    pub fn function(&self) -> &'static str {
        match self {
            ReadCall::BalanceOf(_) => "balanceOf",
            ReadCall::Allowance { .. } => "allowance",
        }
    }
}

/// A state-changing function call submitted as a transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteCall {
    /// `mint(to, amount)`.
    Mint {
        /// Account receiving the new tokens.
        to: Address,
        /// Base units to mint.
        amount: U256,
    },
    /// `approve(spender, amount)`.
    Approve {
        /// Account allowed to spend.
        spender: Address,
        /// Base units allowed.
        amount: U256,
    },
    /// `deposit(assets, receiver)`.
    Deposit {
        /// Base units of the asset to deposit.
        assets: U256,
        /// Account receiving the minted shares.
        receiver: Address,
    },
    /// `redeem(shares, receiver, owner)`.
    Redeem {
        /// Shares to burn.
        shares: U256,
        /// Account receiving the assets.
        receiver: Address,
        /// Account whose shares are burned.
        owner: Address,
    },
}

impl WriteCall {
    /// Solidity function name of the call.
    #[must_use]
    pub fn function(&self) -> &'static str {
        match self {
            WriteCall::Mint { .. } => "mint",
            WriteCall::Approve { .. } => "approve",
            WriteCall::Deposit { .. } => "deposit",
            WriteCall::Redeem { .. } => "redeem",
        }
    }
}

/// Source of the active wallet account.
pub trait WalletConnection {
    /// Address of the connected account, if any.
    fn connected_address(&self) -> Option<Address>;
}

/// Resolves logical contract names to on-chain addresses.
pub trait ContractRegistry {
    /// Address of the deployed `contract`, if it is known.
    fn address_of(&self, contract: ContractName) -> Option<Address>;
}

/// Reads the latest on-chain value of a view function.
#[async_trait]
pub trait ContractReader {
    /// Calls `call` on `contract` against the latest block.
    ///
    /// # Errors
    ///
    /// * [`Error::UnknownContract`] - If `contract` has no known address.
    /// * [`Error::UnsupportedCall`] - If `contract` has no such function.
    /// * [`Error::Contract`] - If the RPC call fails.
    async fn read(
        &self,
        contract: ContractName,
        call: ReadCall,
    ) -> Result<U256, Error>;
}

/// Submits transactions and waits for them to be mined.
#[async_trait]
pub trait ContractWriter {
    /// Sends `call` to `contract` and returns the hash of the mined
    /// transaction.
    ///
    /// # Errors
    ///
    /// * [`Error::NotConnected`] - If there is no account to sign with.
    /// * [`Error::UnknownContract`] - If `contract` has no known address.
    /// * [`Error::UnsupportedCall`] - If `contract` has no such function.
    /// * [`Error::Contract`] - If the transaction could not be submitted.
    /// * [`Error::PendingTransaction`] - If waiting for the receipt fails.
    /// * [`Error::Reverted`] - If the transaction reverted.
    async fn write(
        &self,
        contract: ContractName,
        call: WriteCall,
    ) -> Result<TxHash, Error>;
}

/// Everything the vault panel needs from the outside world.
pub trait Collaborators:
    WalletConnection
    + ContractRegistry
    + ContractReader
    + ContractWriter
    + Send
    + Sync
{
}

impl<T> Collaborators for T where
    T: WalletConnection
        + ContractRegistry
        + ContractReader
        + ContractWriter
        + Send
        + Sync
{
}
