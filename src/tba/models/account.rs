use super::Withdrawal;

use crate::ids::AccountId;
use crate::{Money, Rate, Result};

/// A savings withdrawal must leave at least this much behind
pub const MINIMUM_SAVINGS_BALANCE: Money = Money::whole(1000);

/// Headroom a current account gets on top of its overdraft limit, also used to cap transfers
pub const CURRENT_ACCOUNT_BUFFER: Money = Money::whole(1000);

/// Variant-specific account data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Base,
    Savings { interest_rate: Rate },
    Current { overdraft_limit: Money },
}

/// Shared account record, with the variant carried in `kind`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: AccountId,
    holder: String,
    balance: Money,
    kind: AccountKind,
}

impl Account {
    pub fn new(id: AccountId, holder: impl Into<String>, balance: Money) -> Self {
        return Self::with_kind(id, holder, balance, AccountKind::Base);
    }

    pub fn savings(
        id: AccountId,
        holder: impl Into<String>,
        balance: Money,
        interest_rate: Rate,
    ) -> Self {
        return Self::with_kind(id, holder, balance, AccountKind::Savings { interest_rate });
    }

    pub fn current(
        id: AccountId,
        holder: impl Into<String>,
        balance: Money,
        overdraft_limit: Money,
    ) -> Self {
        return Self::with_kind(id, holder, balance, AccountKind::Current { overdraft_limit });
    }

    fn with_kind(id: AccountId, holder: impl Into<String>, balance: Money, kind: AccountKind) -> Self {
        return Self {
            id,
            holder: holder.into(),
            balance,
            kind,
        };
    }

    pub fn id(&self) -> &AccountId {
        return &self.id;
    }

    pub fn holder(&self) -> &str {
        return &self.holder;
    }

    pub fn balance(&self) -> Money {
        return self.balance;
    }

    pub fn kind(&self) -> AccountKind {
        return self.kind;
    }

    pub fn type_label(&self) -> &'static str {
        match self.kind {
            AccountKind::Base => "Account",
            AccountKind::Savings { .. } => "Savings Account",
            AccountKind::Current { .. } => "Current Account",
        }
    }

    pub fn interest_rate(&self) -> Option<Rate> {
        match self.kind {
            AccountKind::Savings { interest_rate } => Some(interest_rate),
            _ => None,
        }
    }

    pub fn overdraft_limit(&self) -> Option<Money> {
        match self.kind {
            AccountKind::Current { overdraft_limit } => Some(overdraft_limit),
            _ => None,
        }
    }

    /// Adds `amount` unconditionally. Negative amounts reduce the balance.
    pub fn deposit(&mut self, amount: Money) -> Result {
        self.balance.add(&amount)?;
        return Ok(());
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<Withdrawal> {
        let outcome = match self.kind {
            AccountKind::Base => self.withdraw_base(amount)?,
            AccountKind::Savings { .. } => self.withdraw_savings(amount)?,
            AccountKind::Current { overdraft_limit } => {
                self.withdraw_current(amount, overdraft_limit)?
            }
        };

        if outcome.is_declined() {
            log::info!(
                "Withdrawal of {amount} from {} declined, balance stays {}",
                self.id,
                self.balance
            );
        }

        return Ok(outcome);
    }

    fn withdraw_base(&mut self, amount: Money) -> Result<Withdrawal> {
        if amount <= self.balance {
            self.balance.sub(&amount)?;
            return Ok(Withdrawal::Debited);
        }

        let mut shortfall = amount;
        shortfall.sub(&self.balance)?;

        log::debug!("Recapitalizing {shortfall} shortfall on {}", self.id);

        self.balance = Money::ZERO;
        self.deposit(shortfall)?;

        return Ok(Withdrawal::Recapitalized { shortfall });
    }

    fn withdraw_savings(&mut self, amount: Money) -> Result<Withdrawal> {
        let mut remaining = self.balance;
        remaining.sub(&amount)?;

        if remaining < MINIMUM_SAVINGS_BALANCE {
            return Ok(Withdrawal::Declined);
        }

        self.balance = remaining;

        return Ok(Withdrawal::Debited);
    }

    fn withdraw_current(&mut self, amount: Money, overdraft_limit: Money) -> Result<Withdrawal> {
        let mut available = self.balance;
        available.add(&overdraft_limit)?;

        let mut threshold = amount;
        threshold.sub(&CURRENT_ACCOUNT_BUFFER)?;

        if available < threshold {
            return Ok(Withdrawal::Declined);
        }

        self.balance.sub(&amount)?;

        return Ok(Withdrawal::Debited);
    }
}
