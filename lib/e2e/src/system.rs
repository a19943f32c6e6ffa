use alloy::{providers::DynProvider, transports::http::reqwest::Url};
use eyre::Context;

/// Environment variable holding the dev chain's JSON-RPC endpoint.
pub(crate) const RPC_URL_ENV_VAR_NAME: &str = "RPC_URL";

/// Convenience type alias that represents an Ethereum wallet: an `alloy`
/// provider signing with one local key.
pub type Wallet = DynProvider;

/// Load the `name` environment variable.
pub fn env(name: &str) -> eyre::Result<String> {
    std::env::var(name).wrap_err(format!("failed to load {name}"))
}

/// The dev chain's JSON-RPC endpoint from [`RPC_URL_ENV_VAR_NAME`].
pub(crate) fn rpc_url() -> eyre::Result<Url> {
    env(RPC_URL_ENV_VAR_NAME)?
        .parse()
        .wrap_err("failed to parse RPC_URL string into a URL")
}
