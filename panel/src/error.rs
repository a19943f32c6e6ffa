//! Error types of the vault panel.
use std::path::PathBuf;

use alloy::primitives::TxHash;
use thiserror::Error;

use crate::contract::ContractName;

/// Errors raised by panel actions and by the contract collaborators.
#[derive(Error, Debug)]
pub enum Error {
    /// No wallet account is connected, so there is nobody to act for.
    #[error("no wallet account is connected")]
    NotConnected,

    /// The registry has no deployed address for the contract.
    #[error("contract {0} is not deployed")]
    UnknownContract(ContractName),

    /// The contract does not expose the requested function.
    #[error("contract {contract} has no function `{function}`")]
    UnsupportedCall {
        /// Contract the call was addressed to.
        contract: ContractName,
        /// Name of the requested function.
        function: &'static str,
    },

    /// The user-entered amount is not a valid decimal number.
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount {
        /// Raw user input.
        input: String,
        /// Why the input was rejected.
        reason: String,
    },

    /// A contract call or transaction submission failed.
    #[error("contract call failed: {0}")]
    Contract(#[from] alloy::contract::Error),

    /// A plain JSON-RPC request to the node failed.
    #[error("rpc request failed: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    /// Waiting for a submitted transaction failed.
    #[error("pending transaction failed: {0}")]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    /// The transaction was mined but reverted.
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
}

impl Error {
    pub(crate) fn invalid_amount(
        input: &str,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::InvalidAmount {
            input: input.to_owned(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised while loading configuration or deployment files.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("failed to access {path}: {source}")]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected shape.
    #[error("failed to parse {path}: {source}")]
    Toml {
        /// File being parsed.
        path: PathBuf,
        /// Underlying parse failure.
        source: toml::de::Error,
    },
}
