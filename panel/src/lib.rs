/*!
Deposit/redeem panel for an ERC-4626 vault.

The panel shows the connected account's token balance, its allowance to the
vault and its vault share balance, and lets it mint test tokens, approve the
vault, deposit assets and redeem shares. It reaches the chain only through
the collaborator traits in [`contract`]; [`client::ChainClient`] implements
them on top of `alloy`.

```rust,ignore
use vault_panel::{client::ChainClient, panel::VaultPanel, view::Page};

let client = ChainClient::with_signer(rpc_url, signer, deployments);
let mut panel = VaultPanel::new(client, Unit::ETHER);
panel.refresh().await;
panel.set_deposit_amount("1.5");
panel.deposit().await?;
println!("{}", Page::of(&panel));
```

The [`extension`] module holds the menu entry and README text the dapp
generator injects alongside the page.
*/

pub mod client;
pub mod config;
pub mod contract;
mod error;
pub mod extension;
pub mod panel;
pub mod registry;
pub mod units;
pub mod view;

#[cfg(test)]
mod test_utils;

pub use error::{ConfigError, Error};
