use crate::models::{Account, AccountKind};
use crate::Result;

use std::io;

/// Renders the full details of an account, starting with a blank line
pub fn format_details(account: &Account) -> String {
    let mut details = format!(
        "\nAccount Details for {} (ID: {}):\n   Holder: {}\n   Balance: ${}\n",
        account.type_label(),
        account.id(),
        account.holder(),
        account.balance(),
    );

    match account.kind() {
        AccountKind::Base => {}
        AccountKind::Savings { interest_rate } => {
            details.push_str(&format!("   Interest Rate: {interest_rate}%\n"));
        }
        AccountKind::Current { overdraft_limit } => {
            details.push_str(&format!("   Overdraft Limit: ${overdraft_limit}\n"));
        }
    }

    return details;
}

pub fn write_details<W: io::Write>(sink: &mut W, account: &Account) -> Result {
    sink.write_all(format_details(account).as_bytes())?;
    return Ok(());
}
