use crate::money::{parse_fixed, write_two_decimals};
use crate::{Money, MoneyError, Result};

use std::fmt;

/// Decimal places kept by `Rate`
const PLACES: usize = 8;

/// Number of stored units per whole (a rate of 1.0)
const SCALE: i128 = 100_000_000;

/// Fixed-point fraction stored in units of 1e-8, so `0.02` is `Rate(2_000_000)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rate(pub i64);

impl Rate {
    /// Parses a fraction such as `0.01375`. Rates finer than the stored precision are rejected
    /// rather than truncated.
    pub fn parse(string: &str) -> Result<Self> {
        let fraction_digits = string.split('.').nth(1).map(str::len).unwrap_or(0);

        if fraction_digits > PLACES {
            Err(MoneyError::Parse("Rate has too many decimal places", string.to_string()))?
        }

        let units = parse_fixed(string, PLACES)?;
        return Ok(Rate(units));
    }

    /// Computes `amount * rate`, truncating toward zero
    pub fn apply(&self, amount: &Money) -> Result<Money> {
        let product = amount.0 as i128 * self.0 as i128 / SCALE;

        let units = i64::try_from(product)
            .map_err(|_| MoneyError::Overflow("rate", *amount, Money(self.0)))?;

        return Ok(Money(units));
    }
}

/// Renders as a percentage with two decimals, e.g. `2.00`
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // 1e-4 of a fraction is a hundredth of a percent
        return write_two_decimals(f, self.0 as i128, SCALE / 10_000);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_fraction() {
        assert_eq!(Rate::parse("0.02").unwrap(), Rate(2_000_000));
        assert_eq!(Rate::parse("0.125").unwrap(), Rate(12_500_000));
    }

    #[test]
    fn parse_keeps_fine_rates() {
        assert_eq!(Rate::parse("0.00125").unwrap(), Rate(125_000));
        assert_eq!(Rate::parse("0.01375").unwrap(), Rate(1_375_000));
        assert_eq!(Rate::parse("0.00000001").unwrap(), Rate(1));
    }

    #[test]
    fn parse_rejects_excess_precision() {
        let err = Rate::parse("0.000000001").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MoneyError>(),
            Some(MoneyError::Parse(_, _))
        ));
    }

    #[test]
    fn apply_to_amount() {
        let rate = Rate(2_000_000);
        assert_eq!(rate.apply(&Money::whole(500)).unwrap(), Money::whole(10));
        assert_eq!(rate.apply(&Money(1)).unwrap(), Money(0));
        assert_eq!(rate.apply(&Money::whole(-500)).unwrap(), Money::whole(-10));
    }

    #[test]
    fn apply_fine_rate() {
        let rate = Rate::parse("0.00125").unwrap();
        assert_eq!(rate.apply(&Money::whole(500)).unwrap(), Money(6_250));
    }

    #[test]
    fn apply_overflow() {
        assert!(Rate(200_000_000).apply(&Money::MAX).is_err());
    }

    #[test]
    fn display_as_percentage() {
        assert_eq!(Rate(2_000_000).to_string(), "2.00");
        assert_eq!(Rate(12_500_000).to_string(), "12.50");
        assert_eq!(Rate(50_000).to_string(), "0.05");
        assert_eq!(Rate(-1_500_000).to_string(), "-1.50");
    }

    #[test]
    fn display_rounds_ties_to_even() {
        assert_eq!(Rate::parse("0.01375").unwrap().to_string(), "1.38");
        assert_eq!(Rate::parse("0.00125").unwrap().to_string(), "0.12");
        assert_eq!(Rate::parse("0.0012501").unwrap().to_string(), "0.13");
    }
}
