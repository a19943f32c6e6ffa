//! The vault interaction panel.
//!
//! Holds the two amount inputs and the latest balances, and turns button
//! presses into contract calls through [`Collaborators`]. Every action
//! refreshes the balances once its transaction is mined.
use alloy::primitives::{utils::Unit, Address, TxHash, U256};

use crate::{
    contract::{Collaborators, ContractName, ReadCall, WriteCall},
    units, Error,
};

/// Whole tokens minted by the "Mint" button.
pub const MINT_TOKENS: u64 = 100;
/// Whole tokens approved for the vault by the "Approve" button.
pub const APPROVE_TOKENS: u64 = 100;

/// Latest read results. `None` means the read failed or there is no
/// connected account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Balances {
    /// Token balance of the connected account.
    pub token: Option<U256>,
    /// Token allowance granted by the connected account to the vault.
    pub allowance: Option<U256>,
    /// Vault share balance of the connected account.
    pub vault_shares: Option<U256>,
}

/// Which buttons can be pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Buttons {
    /// "Mint 100 Tokens".
    pub mint: bool,
    /// "Approve Tokens".
    pub approve: bool,
    /// "Max" next to the deposit input.
    pub max_deposit: bool,
    /// "Deposit".
    pub deposit: bool,
    /// "Max" next to the redeem input.
    pub max_redeem: bool,
    /// "Redeem".
    pub redeem: bool,
}

/// State and actions of the deposit/redeem page.
pub struct VaultPanel<C> {
    client: C,
    unit: Unit,
    deposit_amount: String,
    redeem_amount: String,
    balances: Balances,
}

impl<C: Collaborators> VaultPanel<C> {
    /// Creates a panel with empty inputs and no balances read yet.
    pub fn new(client: C, unit: Unit) -> Self {
        Self {
            client,
            unit,
            deposit_amount: String::new(),
            redeem_amount: String::new(),
            balances: Balances::default(),
        }
    }

    /// The collaborators backing this panel.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Fixed-point unit amounts are entered and shown in.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Latest balances.
    pub fn balances(&self) -> Balances {
        self.balances
    }

    /// Current text of the deposit input.
    pub fn deposit_amount(&self) -> &str {
        &self.deposit_amount
    }

    /// Current text of the redeem input.
    pub fn redeem_amount(&self) -> &str {
        &self.redeem_amount
    }

    /// Replaces the text of the deposit input.
    pub fn set_deposit_amount(&mut self, amount: impl Into<String>) {
        self.deposit_amount = amount.into();
    }

    /// Replaces the text of the redeem input.
    pub fn set_redeem_amount(&mut self, amount: impl Into<String>) {
        self.redeem_amount = amount.into();
    }

    /// Button enablement for the current inputs and balances.
    pub fn buttons(&self) -> Buttons {
        let has_tokens = self.balances.token.is_some();
        Buttons {
            mint: has_tokens,
            approve: has_tokens,
            max_deposit: is_positive(self.balances.token),
            deposit: !self.deposit_amount.is_empty(),
            max_redeem: is_positive(self.balances.vault_shares),
            redeem: !self.redeem_amount.is_empty(),
        }
    }

    /// Reads all balances again. A failed read leaves its balance absent.
    pub async fn refresh(&mut self) {
        let Some(account) = self.client.connected_address() else {
            self.balances = Balances::default();
            return;
        };

        let token = self
            .read(ContractName::MockUsdc, ReadCall::BalanceOf(account))
            .await;
        let allowance = match self.client.address_of(ContractName::Vault) {
            Some(spender) => {
                self.read(
                    ContractName::MockUsdc,
                    ReadCall::Allowance { owner: account, spender },
                )
                .await
            }
            None => None,
        };
        let vault_shares =
            self.read(ContractName::Vault, ReadCall::BalanceOf(account)).await;

        self.balances = Balances { token, allowance, vault_shares };
    }

    /// Copies the whole token balance into the deposit input.
    pub fn max_deposit(&mut self) {
        if let Some(balance) = self.balances.token.filter(|b| !b.is_zero()) {
            self.deposit_amount = units::format_units(balance, self.unit);
        }
    }

    /// Copies the whole share balance into the redeem input.
    pub fn max_redeem(&mut self) {
        if let Some(shares) =
            self.balances.vault_shares.filter(|s| !s.is_zero())
        {
            self.redeem_amount = units::format_units(shares, self.unit);
        }
    }

    /// Mints [`MINT_TOKENS`] to the connected account.
    ///
    /// # Errors
    ///
    /// * [`Error::NotConnected`] - If no account is connected.
    /// * [`Error::InvalidAmount`] - If the amount overflows the token unit.
    /// * Any error of [`crate::contract::ContractWriter::write`].
    pub async fn mint(&mut self) -> Result<TxHash, Error> {
        let to = self.account()?;
        let amount = self.whole_tokens(MINT_TOKENS)?;
        self.submit(ContractName::MockUsdc, WriteCall::Mint { to, amount })
            .await
    }

    /// Approves the vault to spend [`APPROVE_TOKENS`].
    ///
    /// # Errors
    ///
    /// * [`Error::NotConnected`] - If no account is connected.
    /// * [`Error::UnknownContract`] - If the vault address is unknown.
    /// * [`Error::InvalidAmount`] - If the amount overflows the token unit.
    /// * Any error of [`crate::contract::ContractWriter::write`].
    pub async fn approve(&mut self) -> Result<TxHash, Error> {
        self.account()?;
        let spender = self
            .client
            .address_of(ContractName::Vault)
            .ok_or(Error::UnknownContract(ContractName::Vault))?;
        let amount = self.whole_tokens(APPROVE_TOKENS)?;
        self.submit(
            ContractName::MockUsdc,
            WriteCall::Approve { spender, amount },
        )
        .await
    }

    /// Deposits the amount in the deposit input, minting shares to the
    /// connected account, then clears the input.
    ///
    /// # Errors
    ///
    /// * [`Error::NotConnected`] - If no account is connected.
    /// * [`Error::InvalidAmount`] - If the input is not a decimal amount.
    /// * Any error of [`crate::contract::ContractWriter::write`].
    ///
    /// The input is kept when an error is returned.
    pub async fn deposit(&mut self) -> Result<TxHash, Error> {
        let receiver = self.account()?;
        let assets = units::parse_units(&self.deposit_amount, self.unit)?;
        let call = WriteCall::Deposit { assets, receiver };
        let hash = self.submit(ContractName::Vault, call).await?;
        self.deposit_amount.clear();
        Ok(hash)
    }

    /// Redeems the shares in the redeem input, sending the assets to the
    /// connected account, then clears the input.
    ///
    /// # Errors
    ///
    /// * [`Error::NotConnected`] - If no account is connected.
    /// * [`Error::InvalidAmount`] - If the input is not a decimal amount.
    /// * Any error of [`crate::contract::ContractWriter::write`].
    ///
    /// The input is kept when an error is returned.
    pub async fn redeem(&mut self) -> Result<TxHash, Error> {
        let account = self.account()?;
        let shares = units::parse_units(&self.redeem_amount, self.unit)?;
        let hash = self
            .submit(
                ContractName::Vault,
                WriteCall::Redeem { shares, receiver: account, owner: account },
            )
            .await?;
        self.redeem_amount.clear();
        Ok(hash)
    }

    async fn read(
        &self,
        contract: ContractName,
        call: ReadCall,
    ) -> Option<U256> {
        match self.client.read(contract, call).await {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("{contract}.{} unavailable: {e}", call.function());
                None
            }
        }
    }

    async fn submit(
        &mut self,
        contract: ContractName,
        call: WriteCall,
    ) -> Result<TxHash, Error> {
        let hash = self.client.write(contract, call).await?;
        self.refresh().await;
        Ok(hash)
    }

    fn account(&self) -> Result<Address, Error> {
        self.client.connected_address().ok_or(Error::NotConnected)
    }

    fn whole_tokens(&self, tokens: u64) -> Result<U256, Error> {
        U256::from(tokens).checked_mul(self.unit.wei()).ok_or_else(|| {
            Error::invalid_amount(
                &tokens.to_string(),
                format!("overflows {} decimals", self.unit.get()),
            )
        })
    }
}

fn is_positive(value: Option<U256>) -> bool {
    value.is_some_and(|value| !value.is_zero())
}
