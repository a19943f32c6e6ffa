//! In-memory collaborators for unit tests.
use std::{collections::HashMap, sync::Mutex};

use alloy::primitives::{Address, TxHash, B256, U256};
use async_trait::async_trait;

use crate::{
    contract::{
        ContractName, ContractReader, ContractRegistry, ContractWriter,
        ReadCall, WalletConnection, WriteCall,
    },
    registry::Deployments,
    Error,
};

pub(crate) const ALICE: Address = Address::repeat_byte(0xA1);
pub(crate) const VAULT: Address = Address::repeat_byte(0x11);
pub(crate) const TOKEN: Address = Address::repeat_byte(0x22);

#[derive(Default)]
struct Ledger {
    tokens: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    shares: HashMap<Address, U256>,
    writes: Vec<(ContractName, WriteCall)>,
    failing_reads: bool,
    reverting_writes: bool,
}

/// Chain emulation with a token and a vault that mints shares 1:1.
pub(crate) struct MockChain {
    account: Option<Address>,
    deployments: Deployments,
    ledger: Mutex<Ledger>,
}

impl MockChain {
    /// Both contracts deployed and [`ALICE`] connected.
    pub(crate) fn new() -> Self {
        Self {
            account: Some(ALICE),
            deployments: Deployments::default()
                .with(ContractName::Vault, VAULT)
                .with(ContractName::MockUsdc, TOKEN),
            ledger: Mutex::new(Ledger::default()),
        }
    }

    pub(crate) fn disconnected() -> Self {
        Self { account: None, ..Self::new() }
    }

    pub(crate) fn without_vault() -> Self {
        Self {
            deployments: Deployments::default()
                .with(ContractName::MockUsdc, TOKEN),
            ..Self::new()
        }
    }

    pub(crate) fn with_tokens(self, owner: Address, amount: U256) -> Self {
        self.ledger().tokens.insert(owner, amount);
        self
    }

    pub(crate) fn with_shares(self, owner: Address, amount: U256) -> Self {
        self.ledger().shares.insert(owner, amount);
        self
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.ledger().failing_reads = fail;
    }

    pub(crate) fn revert_writes(&self, revert: bool) {
        self.ledger().reverting_writes = revert;
    }

    pub(crate) fn writes(&self) -> Vec<(ContractName, WriteCall)> {
        self.ledger().writes.clone()
    }

    fn ledger(&self) -> std::sync::MutexGuard<'_, Ledger> {
        self.ledger.lock().expect("ledger lock should not be poisoned")
    }
}

impl WalletConnection for MockChain {
    fn connected_address(&self) -> Option<Address> {
        self.account
    }
}

impl ContractRegistry for MockChain {
    fn address_of(&self, contract: ContractName) -> Option<Address> {
        self.deployments.address_of(contract)
    }
}

#[async_trait]
impl ContractReader for MockChain {
    async fn read(
        &self,
        contract: ContractName,
        call: ReadCall,
    ) -> Result<U256, Error> {
        let ledger = self.ledger();
        if ledger.failing_reads || self.address_of(contract).is_none() {
            return Err(Error::UnknownContract(contract));
        }

        let value = match (contract, call) {
            (ContractName::MockUsdc, ReadCall::BalanceOf(owner)) => {
                ledger.tokens.get(&owner).copied()
            }
            (
                ContractName::MockUsdc,
                ReadCall::Allowance { owner, spender },
            ) => {
                ledger.allowances.get(&(owner, spender)).copied()
            }
            (ContractName::Vault, ReadCall::BalanceOf(owner)) => {
                ledger.shares.get(&owner).copied()
            }
            (contract, call) => {
                return Err(Error::UnsupportedCall {
                    contract,
                    function: call.function(),
                })
            }
        };
        Ok(value.unwrap_or_default())
    }
}

#[async_trait]
impl ContractWriter for MockChain {
    async fn write(
        &self,
        contract: ContractName,
        call: WriteCall,
    ) -> Result<TxHash, Error> {
        let sender = self.account.ok_or(Error::NotConnected)?;
        let mut ledger = self.ledger();
        ledger.writes.push((contract, call));
        let hash = B256::with_last_byte(
            u8::try_from(ledger.writes.len()).unwrap_or(u8::MAX),
        );
        if ledger.reverting_writes {
            return Err(Error::Reverted(hash));
        }

        match (contract, call) {
            (ContractName::MockUsdc, WriteCall::Mint { to, amount }) => {
                *ledger.tokens.entry(to).or_default() += amount;
            }
            (
                ContractName::MockUsdc,
                WriteCall::Approve { spender, amount },
            ) => {
                ledger.allowances.insert((sender, spender), amount);
            }
            (ContractName::Vault, WriteCall::Deposit { assets, receiver }) => {
                let vault =
                    self.address_of(ContractName::Vault).unwrap_or_default();
                let allowance = ledger
                    .allowances
                    .get(&(sender, vault))
                    .copied()
                    .unwrap_or_default();
                let balance =
                    ledger.tokens.get(&sender).copied().unwrap_or_default();
                if allowance < assets || balance < assets {
                    return Err(Error::Reverted(hash));
                }
                ledger.allowances.insert((sender, vault), allowance - assets);
                ledger.tokens.insert(sender, balance - assets);
                *ledger.shares.entry(receiver).or_default() += assets;
            }
            (
                ContractName::Vault,
                WriteCall::Redeem { shares, receiver, owner },
            ) => {
                let balance = ledger.shares.entry(owner).or_default();
                if *balance < shares {
                    return Err(Error::Reverted(hash));
                }
                *balance -= shares;
                *ledger.tokens.entry(receiver).or_default() += shares;
            }
            (contract, call) => {
                return Err(Error::UnsupportedCall {
                    contract,
                    function: call.function(),
                })
            }
        }
        Ok(hash)
    }
}
