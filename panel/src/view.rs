//! Text rendering of the vault page.
use std::fmt::{self, Display};

use alloy::primitives::{utils::Unit, Address};

use crate::{
    contract::Collaborators,
    panel::{Balances, Buttons, VaultPanel, MINT_TOKENS},
    units,
};

/// Link to the ERC-4626 implementation the vault is built on.
pub const ERC4626_IMPLEMENTATION_URL: &str =
    "https://github.com/transmissions11/solmate/blob/main/src/tokens/ERC4626.sol";

const RULE_WIDTH: usize = 60;
const PLACEHOLDER: &str = "0";

/// Snapshot of everything the page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    /// Connected account, if any.
    pub account: Option<Address>,
    /// Latest balances.
    pub balances: Balances,
    /// Button enablement.
    pub buttons: Buttons,
    /// Text of the deposit input.
    pub deposit_amount: String,
    /// Text of the redeem input.
    pub redeem_amount: String,
    /// Unit amounts are shown in.
    pub unit: Unit,
}

impl Page {
    /// Captures the current state of `panel`.
    pub fn of<C: Collaborators>(panel: &VaultPanel<C>) -> Self {
        Self {
            account: panel.client().connected_address(),
            balances: panel.balances(),
            buttons: panel.buttons(),
            deposit_amount: panel.deposit_amount().to_owned(),
            redeem_amount: panel.redeem_amount().to_owned(),
            unit: panel.unit(),
        }
    }

    /// Token balance as displayed.
    #[must_use]
    pub fn token_balance(&self) -> String {
        units::display_or_zero(self.balances.token, self.unit)
    }

    /// Allowance as displayed.
    #[must_use]
    pub fn allowance(&self) -> String {
        units::display_or_zero(self.balances.allowance, self.unit)
    }

    /// Vault share balance as displayed, with two fraction digits.
    #[must_use]
    pub fn vault_balance(&self) -> String {
        units::display_fixed_or_zero(self.balances.vault_shares, self.unit, 2)
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DeFi Vault")?;
        writeln!(f, "{:=>RULE_WIDTH$}", "")?;
        match self.account {
            Some(account) => writeln!(f, "Connected: {account}")?,
            None => writeln!(f, "Connected: no wallet")?,
        }
        writeln!(f)?;

        section(f, "About")?;
        writeln!(
            f,
            "This extension introduces an ERC-4626 vault contract and demonstrates"
        )?;
        writeln!(
            f,
            "how to interact with it, including deposit/redeem tokens."
        )?;
        writeln!(
            f,
            "The ERC-4626 token contract is implemented using the ERC-4626 token"
        )?;
        writeln!(f, "implementation from solmate:")?;
        writeln!(f, "  {ERC4626_IMPLEMENTATION_URL}")?;
        writeln!(f)?;

        section(f, "Your Balances")?;
        let token_balance = format!("{} tokens", self.token_balance());
        row(f, "MockUSDC Balance:", &token_balance)?;
        row(f, "Approved MockUSDC:", &format!("{} tokens", self.allowance()))?;
        writeln!(
            f,
            "{}  {}",
            button(&format!("Mint {MINT_TOKENS} Tokens"), self.buttons.mint),
            button("Approve Tokens", self.buttons.approve),
        )?;
        writeln!(f)?;

        section(f, "Vault Operations")?;
        writeln!(f, "Deposit")?;
        writeln!(
            f,
            "{}  {}",
            input(&self.deposit_amount),
            button("Max", self.buttons.max_deposit)
        )?;
        writeln!(f, "{}", button("Deposit", self.buttons.deposit))?;
        writeln!(f)?;

        writeln!(f, "Redeem")?;
        row(
            f,
            "Your Vault Balance:",
            &format!("{} vault tokens", self.vault_balance()),
        )?;
        writeln!(
            f,
            "{}  {}",
            input(&self.redeem_amount),
            button("Max", self.buttons.max_redeem)
        )?;
        writeln!(f, "{}", button("Redeem", self.buttons.redeem))
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{:->RULE_WIDTH$}", "")
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: &str) -> fmt::Result {
    let width = RULE_WIDTH - label.len();
    writeln!(f, "{label}{value:>width$}")
}

fn button(label: &str, enabled: bool) -> String {
    if enabled {
        format!("[ {label} ]")
    } else {
        format!("( {label} )")
    }
}

fn input(text: &str) -> String {
    let text = if text.is_empty() { PLACEHOLDER } else { text };
    format!("<{text:<24}>")
}
