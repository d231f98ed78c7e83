use tba::ids::AccountId;
use tba::{transfer_funds, write_details, Account, Money, Rate, Result};

use std::io::Write;

/// The built-in walkthrough: open a savings and a current account, move money around, transfer
/// between them, and print the accounts after every step.
pub fn run<W: Write>(sink: &mut W) -> Result {
    let mut savings = Account::savings(
        AccountId::new("S123"),
        "John Doe",
        Money::whole(1000),
        Rate::parse("0.02")?,
    );
    let mut current = Account::current(
        AccountId::new("C456"),
        "Jane Doe",
        Money::whole(2000),
        Money::whole(500),
    );

    write_details(sink, &savings)?;
    write_details(sink, &current)?;

    savings.deposit(Money::whole(500))?;
    current.withdraw(Money::whole(1000))?;

    writeln!(sink, "Account Details after deposit and withdrawal:")?;
    write_details(sink, &savings)?;
    write_details(sink, &current)?;

    let transfer = transfer_funds(&mut current, &mut savings)?;
    log::debug!("Demo transfer: {transfer:?}");

    writeln!(sink, "Account Details after transfer:")?;
    write_details(sink, &savings)?;
    write_details(sink, &current)?;

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = include_str!("../resources/test-examples/expected/demo.txt");

    #[test]
    fn demo_transcript() {
        let mut sink: Vec<u8> = vec![];

        run(&mut sink).unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), EXPECTED);
    }
}
