/*!
End-to-end test helpers for a local development chain (`anvil` or the
Hardhat node).

Tests declare the accounts they need as arguments of an `#[e2e::test]`
function; each one is a fresh key funded from the chain's first dev account.

```rust,ignore
#[e2e::test]
async fn deposits(alice: Account) -> eyre::Result<()> {
    let balance = alice.balance().await?;
    assert!(balance > U256::ZERO);
    Ok(())
}
```
*/
mod account;
mod error;
mod receipt;
mod system;

pub use account::Account;
pub use e2e_proc::test;
pub use error::RevertExt;
pub use receipt::Ext as ReceiptExt;
pub use system::{env, Wallet};
