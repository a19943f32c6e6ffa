//! Panel configuration.
//!
//! Read from a TOML file; every field has a default that targets a local
//! development chain, so a missing file is not an error.
use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::primitives::utils::Unit;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable that overrides [`Config::rpc_url`].
pub const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Settings for connecting the panel to a chain.
pub struct Config {
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Path to the deployments file.
    pub deployments: PathBuf,
    /// Fixed-point decimals of the token and the vault shares.
    pub decimals: u8,
    /// Name of the environment variable holding the signer's private key.
    pub private_key_env: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rpc_url: "http://127.0.0.1:8545".to_owned(),
            deployments: PathBuf::from("deployments.toml"),
            decimals: 18,
            private_key_env: "PRIVATE_KEY".to_owned(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist. [`RPC_URL_ENV_VAR_NAME`] takes precedence
    /// over the file's `rpc_url`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Io`] - If the file exists but cannot be read.
    /// * [`ConfigError::Toml`] - If the file is not a valid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            log::info!("loading config from {}", path.display());
            let contents = fs::read_to_string(path).map_err(|source| {
                ConfigError::Io { path: path.to_path_buf(), source }
            })?;
            Self::parse(&contents).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            log::info!("{} not found, using defaults", path.display());
            Config::default()
        };

        if let Ok(rpc_url) = std::env::var(RPC_URL_ENV_VAR_NAME) {
            config.rpc_url = rpc_url;
        }
        Ok(config)
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// If `contents` is not valid TOML or a field has the wrong type.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Fixed-point unit of token amounts, or `None` when `decimals` is out of
    /// range.
    #[must_use]
    pub fn unit(&self) -> Option<Unit> {
        Unit::new(self.decimals)
    }

    /// The signer's private key, if its environment variable is set.
    #[must_use]
    pub fn private_key(&self) -> Option<String> {
        std::env::var(&self.private_key_env).ok().filter(|key| !key.is_empty())
    }

    /// Resolves [`Config::deployments`] relative to the directory containing
    /// the config file.
    #[must_use]
    pub fn deployments_path(&self, config_path: &Path) -> PathBuf {
        match config_path.parent() {
            Some(dir) if self.deployments.is_relative() => {
                dir.join(&self.deployments)
            }
            _ => self.deployments.clone(),
        }
    }
}
