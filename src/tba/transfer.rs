use crate::ids::AccountId;
use crate::models::{Account, AccountKind, Withdrawal, CURRENT_ACCOUNT_BUFFER};
use crate::{Money, Result};

use std::cmp;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Transfer destination must be a current account: {0}")]
    NotCurrent(AccountId),

    #[error("Transfer source must be a savings account: {0}")]
    NotSavings(AccountId),

    #[error("Cannot transfer between account {0} and itself")]
    SameAccount(AccountId),
}

/// Record of a transfer that went ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub principal: Money,
    pub interest: Money,
    /// `principal + interest`, credited to the current account
    pub amount: Money,
    /// Savings is debited under its own withdraw rule, which may decline
    pub savings_debit: Withdrawal,
}

/// Moves funds from `savings` into `current`, adding interest at the savings rate.
///
/// The amount is capped by the savings balance, by what the current account could cover with its
/// overdraft, and by the overdraft headroom left above `CURRENT_ACCOUNT_BUFFER`. Returns `None`
/// when the cap leaves nothing to move.
///
/// The current account is always credited in full, while the savings account is debited through
/// its regular withdraw rule. When that rule declines, only the current account changes.
pub fn transfer_funds(current: &mut Account, savings: &mut Account) -> Result<Option<Transfer>> {
    if current.id() == savings.id() {
        Err(TransferError::SameAccount(current.id().clone()))?
    }

    let overdraft_limit = match current.kind() {
        AccountKind::Current { overdraft_limit } => overdraft_limit,
        _ => Err(TransferError::NotCurrent(current.id().clone()))?,
    };

    let interest_rate = match savings.kind() {
        AccountKind::Savings { interest_rate } => interest_rate,
        _ => Err(TransferError::NotSavings(savings.id().clone()))?,
    };

    let mut coverable = current.balance();
    coverable.add(&overdraft_limit)?;

    let mut headroom = current.balance();
    headroom.sub(&CURRENT_ACCOUNT_BUFFER)?;
    let mut remaining_limit = overdraft_limit;
    remaining_limit.sub(&headroom)?;

    let principal = cmp::min(cmp::min(savings.balance(), coverable), remaining_limit);

    log::debug!(
        "Transfer cap from {} to {}: principal = {principal}",
        savings.id(),
        current.id()
    );

    if !principal.is_positive() {
        return Ok(None);
    }

    let interest = interest_rate.apply(&principal)?;

    let mut amount = principal;
    amount.add(&interest)?;

    let mut credited = current.clone();
    let mut debited = savings.clone();

    credited.deposit(amount)?;
    let savings_debit = debited.withdraw(amount)?;

    // Only apply if both sides were successful
    *current = credited;
    *savings = debited;

    if savings_debit.is_declined() {
        log::info!(
            "Credited {amount} to {} but savings {} was not debited",
            current.id(),
            savings.id()
        );
    }

    return Ok(Some(Transfer {
        principal,
        interest,
        amount,
        savings_debit,
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::Rate;

    const SOME_RATE: Rate = Rate(2_000_000);
    const SOME_LIMIT: Money = Money::whole(500);

    fn build_savings(balance: i64) -> Account {
        Account::savings(
            AccountId::new("S123"),
            "John Doe",
            Money::whole(balance),
            SOME_RATE,
        )
    }

    fn build_current(balance: i64) -> Account {
        Account::current(
            AccountId::new("C456"),
            "Jane Doe",
            Money::whole(balance),
            SOME_LIMIT,
        )
    }

    #[test]
    fn credits_current_but_savings_declines() {
        let mut savings = build_savings(1000);
        let mut current = build_current(2000);

        current.withdraw(Money::whole(1000)).unwrap();

        let transfer = transfer_funds(&mut current, &mut savings).unwrap();

        assert_eq!(
            transfer,
            Some(Transfer {
                principal: Money::whole(500),
                interest: Money::whole(10),
                amount: Money::whole(510),
                savings_debit: Withdrawal::Declined,
            })
        );
        assert_eq!(current.balance(), Money::whole(1510));
        assert_eq!(savings.balance(), Money::whole(1000));
    }

    #[test]
    fn debits_savings_when_minimum_holds() {
        let mut savings = build_savings(5000);
        let mut current = build_current(1000);

        let transfer = transfer_funds(&mut current, &mut savings).unwrap().unwrap();

        assert_eq!(transfer.amount, Money::whole(510));
        assert_eq!(transfer.savings_debit, Withdrawal::Debited);
        assert_eq!(current.balance(), Money::whole(1510));
        assert_eq!(savings.balance(), Money::whole(4490));
    }

    #[test]
    fn capped_by_savings_balance() {
        let mut savings = build_savings(100);
        let mut current = build_current(0);

        let transfer = transfer_funds(&mut current, &mut savings).unwrap().unwrap();

        // min(100, 0 + 500) = 100, min(100, 500 - (0 - 1000)) = 100
        assert_eq!(transfer.principal, Money::whole(100));
        assert_eq!(transfer.interest, Money::whole(2));
        assert_eq!(current.balance(), Money::whole(102));
        assert_eq!(savings.balance(), Money::whole(100));
    }

    #[test]
    fn fine_interest_rate() {
        let mut savings = Account::savings(
            AccountId::new("S123"),
            "John Doe",
            Money::whole(1000),
            Rate::parse("0.00125").unwrap(),
        );
        let mut current = build_current(1000);

        let transfer = transfer_funds(&mut current, &mut savings).unwrap().unwrap();

        assert_eq!(transfer.interest, Money(6_250));
        assert_eq!(transfer.amount, Money(5_006_250));
        assert_eq!(current.balance(), Money(15_006_250));
        assert_eq!(savings.balance(), Money::whole(1000));
    }

    #[test]
    fn overflow_leaves_both_accounts_unchanged() {
        // the negative interest makes the credited amount hugely negative, so debiting it from
        // a savings balance at the top of the range overflows
        let mut savings = Account::savings(
            AccountId::new("S123"),
            "John Doe",
            Money::MAX,
            Rate(-1_000_000_000_000),
        );
        let mut current = build_current(1000);

        let res = transfer_funds(&mut current, &mut savings);

        assert!(res.is_err());
        assert_eq!(current.balance(), Money::whole(1000));
        assert_eq!(savings.balance(), Money::MAX);
    }

    #[test]
    fn nothing_to_move() {
        let mut savings = build_savings(1000);
        let mut current = build_current(1500);

        // 500 - (1500 - 1000) = 0
        let transfer = transfer_funds(&mut current, &mut savings).unwrap();

        assert_eq!(transfer, None);
        assert_eq!(current.balance(), Money::whole(1500));
        assert_eq!(savings.balance(), Money::whole(1000));
    }

    #[test]
    fn rejects_wrong_kinds() {
        let mut savings = build_savings(1000);
        let mut current = build_current(1000);

        let res = transfer_funds(&mut savings, &mut current);
        assert!(res.is_err());

        let mut base = Account::new(AccountId::new("B1"), "Nobody", Money::whole(1000));
        let res = transfer_funds(&mut current, &mut base);
        assert!(res.is_err());

        assert_eq!(current.balance(), Money::whole(1000));
        assert_eq!(base.balance(), Money::whole(1000));
    }

    #[test]
    fn rejects_same_id() {
        let mut current = build_current(1000);
        let mut twin = current.clone();

        let err = transfer_funds(&mut current, &mut twin).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TransferError>(),
            Some(TransferError::SameAccount(_))
        ));
    }
}
