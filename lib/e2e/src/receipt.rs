use alloy::rpc::types::TransactionReceipt;
use eyre::bail;

/// Extension trait to check the outcome of a mined transaction.
pub trait Ext {
    /// Returns `Ok` when the transaction executed without reverting.
    ///
    /// # Errors
    ///
    /// If the receipt's status reports a revert.
    fn success(&self) -> eyre::Result<()>;
}

impl Ext for TransactionReceipt {
    fn success(&self) -> eyre::Result<()> {
        if !self.status() {
            bail!("transaction {} reverted", self.transaction_hash);
        }
        Ok(())
    }
}
