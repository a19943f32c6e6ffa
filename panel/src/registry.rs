//! Registry of deployed contract addresses.
//!
//! Deployments are kept in a TOML file written after contracts are deployed:
//!
//! ```toml
//! chain_id = 31337
//!
//! [contracts]
//! Vault = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
//! MockUSDC = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
//! ```
use std::{collections::BTreeMap, fs, path::Path};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::{
    contract::{ContractName, ContractRegistry},
    ConfigError,
};

/// Addresses of the contracts deployed to one chain.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployments {
    /// Chain the contracts live on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,
    /// Deployed address by contract name.
    #[serde(default)]
    pub contracts: BTreeMap<String, Address>,
}

impl Deployments {
    /// Reads deployments from the TOML file at `path`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Io`] - If the file cannot be read.
    /// * [`ConfigError::Toml`] - If the file is not a valid deployments file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| {
            ConfigError::Io { path: path.to_path_buf(), source }
        })?;
        let deployments: Deployments =
            toml::from_str(&contents).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "loaded {} deployed contracts from {}",
            deployments.contracts.len(),
            path.display()
        );
        Ok(deployments)
    }

    /// Records `address` as the deployment of `contract`.
    #[must_use]
    pub fn with(mut self, contract: ContractName, address: Address) -> Self {
        self.contracts.insert(contract.as_str().to_owned(), address);
        self
    }
}

impl ContractRegistry for Deployments {
    fn address_of(&self, contract: ContractName) -> Option<Address> {
        self.contracts.get(contract.as_str()).copied()
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    const DEPLOYMENTS: &str = r#"
        chain_id = 31337

        [contracts]
        Vault = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        MockUSDC = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
    "#;

    #[test]
    fn resolves_deployed_contracts() {
        let deployments: Deployments = toml::from_str(DEPLOYMENTS).unwrap();

        assert_eq!(deployments.chain_id, Some(31337));
        assert_eq!(
            deployments.address_of(ContractName::Vault),
            Some(address!("5FbDB2315678afecb367f032d93F642f64180aa3"))
        );
        assert_eq!(
            deployments.address_of(ContractName::MockUsdc),
            Some(address!("e7f1725E7734CE288F8367e1Bb143E90bb3F0512"))
        );
    }

    #[test]
    fn unknown_contracts_resolve_to_none() {
        let deployments: Deployments = toml::from_str(
            "[contracts]\nMockUSDC = \"0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512\"",
        )
        .unwrap();
        assert_eq!(deployments.address_of(ContractName::Vault), None);
        assert_eq!(
            Deployments::default().address_of(ContractName::MockUsdc),
            None
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Deployments::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_reports_malformed_address() {
        let path =
            std::env::temp_dir().join("vault-panel-bad-deployments.toml");
        fs::write(&path, "[contracts]\nVault = \"0x1234\"\n").unwrap();
        let err = Deployments::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
        fs::remove_file(path).unwrap();
    }
}
