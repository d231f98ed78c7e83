use crate::display::write_details;
use crate::ids::AccountId;
use crate::input::Operation;
use crate::models::{Account, Withdrawal};
use crate::transfer::{transfer_funds, TransferError};
use crate::Result;

use std::collections::HashMap;
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BankError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountId),
}

/// In-memory registry mapping account IDs to accounts
#[derive(Debug, Default)]
pub struct Bank {
    accounts: HashMap<AccountId, Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, account: Account) -> Result {
        if self.accounts.contains_key(account.id()) {
            Err(BankError::DuplicateAccount(account.id().clone()))?
        }

        self.accounts.insert(account.id().clone(), account);

        return Ok(());
    }

    pub fn find(&self, id: &AccountId) -> Option<&Account> {
        return self.accounts.get(id);
    }

    pub fn find_mut(&mut self, id: &AccountId) -> Option<&mut Account> {
        return self.accounts.get_mut(id);
    }

    pub fn len(&self) -> usize {
        return self.accounts.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.accounts.is_empty();
    }

    /// Applies a single operation, writing anything it displays to `sink`
    pub fn apply<W: io::Write>(&mut self, operation: Operation, sink: &mut W) -> Result {
        log::debug!("Applying operation: {operation:?}");

        match operation {
            Operation::OpenAccount {
                id,
                holder,
                balance,
            } => self.open(Account::new(id, holder, balance))?,

            Operation::OpenSavings {
                id,
                holder,
                balance,
                interest_rate,
            } => self.open(Account::savings(id, holder, balance, interest_rate))?,

            Operation::OpenCurrent {
                id,
                holder,
                balance,
                overdraft_limit,
            } => self.open(Account::current(id, holder, balance, overdraft_limit))?,

            Operation::Deposit { id, amount } => self.find_existing(&id)?.deposit(amount)?,

            Operation::Withdraw { id, amount } => {
                let outcome = self.find_existing(&id)?.withdraw(amount)?;
                log::debug!("Withdrawal from {id}: {outcome:?}");

                if let Withdrawal::Recapitalized { .. } = outcome {
                    writeln!(sink, "Insufficient balance. Adding overdraft fee.")?;
                }
            }

            Operation::Transfer { current, savings } => self.transfer(&current, &savings)?,

            Operation::Show { id } => {
                let account = self
                    .find(&id)
                    .ok_or_else(|| BankError::AccountNotFound(id.clone()))?;
                write_details(sink, account)?;
            }

            Operation::Heading { text } => writeln!(sink, "{text}")?,
        }

        return Ok(());
    }

    fn find_existing(&mut self, id: &AccountId) -> Result<&mut Account> {
        let account = self
            .find_mut(id)
            .ok_or_else(|| BankError::AccountNotFound(id.clone()))?;

        return Ok(account);
    }

    fn transfer(&mut self, current_id: &AccountId, savings_id: &AccountId) -> Result {
        if current_id == savings_id {
            Err(TransferError::SameAccount(current_id.clone()))?
        }

        if !self.accounts.contains_key(current_id) {
            Err(BankError::AccountNotFound(current_id.clone()))?
        }

        // Taken out of the map so both sides can be borrowed mutably; put back on every path
        let mut savings = self
            .accounts
            .remove(savings_id)
            .ok_or_else(|| BankError::AccountNotFound(savings_id.clone()))?;

        let res = match self.accounts.get_mut(current_id) {
            Some(current) => transfer_funds(current, &mut savings),
            None => Err(BankError::AccountNotFound(current_id.clone()).into()),
        };

        self.accounts.insert(savings_id.clone(), savings);

        let transfer = res?;
        log::debug!("Transfer from {savings_id} to {current_id}: {transfer:?}");

        return Ok(());
    }
}
