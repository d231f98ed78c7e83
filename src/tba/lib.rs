mod bank;
pub mod display;
pub mod ids;
pub mod input;
pub mod models;
mod money;
mod rate;
mod result;
mod transfer;

pub use bank::{Bank, BankError};
pub use display::{format_details, write_details};
pub use models::{Account, AccountKind, Withdrawal};
pub use money::{Money, MoneyError};
pub use rate::Rate;
pub use result::Result;
pub use transfer::{transfer_funds, Transfer, TransferError};
