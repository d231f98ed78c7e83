mod account;
mod withdrawal;

pub use account::{
    Account,
    AccountKind,
    CURRENT_ACCOUNT_BUFFER,
    MINIMUM_SAVINGS_BALANCE,
};
pub use withdrawal::Withdrawal;
