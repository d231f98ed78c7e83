use crate::Result;

use std::fmt;

use thiserror::Error;

/// Decimal places kept by `Money`
const PLACES: usize = 4;

/// Number of stored units per whole currency unit
const SCALE: i64 = 10_000;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1:?} and {2:?}")]
    Overflow(&'static str, Money, Money),

    #[error("Underflow error while applying {0} operation on {1:?} and {2:?}")]
    Underflow(&'static str, Money, Money),

    #[error("Money parse error: {0}, {1}")]
    Parse(&'static str, String),
}

/// Fixed-point signed amount, stored in ten-thousandths
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(pub i64);

impl Money {
    pub const MAX: Self = Self(i64::MAX);
    pub const MIN: Self = Self(i64::MIN);
    pub const ZERO: Self = Self(0);

    pub const fn whole(amount: i64) -> Self {
        return Self(amount * SCALE);
    }

    pub fn parse(string: &str) -> Result<Self> {
        let units = parse_fixed(string, PLACES)?;
        return Ok(Money(units));
    }

    pub fn add(&mut self, other: &Self) -> Result {
        let a = self.0;
        let b = other.0;

        if b > 0 && Money::MAX.0 - b < a {
            Err(MoneyError::Overflow("add", Money(a), *other))?
        }

        if b < 0 && Money::MIN.0 - b > a {
            Err(MoneyError::Underflow("add", Money(a), *other))?
        }

        self.0 += b;

        return Ok(());
    }

    pub fn sub(&mut self, other: &Self) -> Result {
        let negated = other
            .0
            .checked_neg()
            .ok_or_else(|| MoneyError::Overflow("sub", *self, *other))?;

        return self.add(&Self(negated));
    }

    pub fn is_positive(&self) -> bool {
        return self.0 > 0;
    }
}

/// Renders with exactly two decimals, rounding half to even
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write_two_decimals(f, self.0 as i128, 100);
    }
}

/// Writes `units / per_hundredth` as a two-decimal number, rounding ties to the even hundredth
pub(crate) fn write_two_decimals(
    f: &mut fmt::Formatter,
    units: i128,
    per_hundredth: i128,
) -> fmt::Result {
    let abs = units.abs();
    let mut hundredths = abs / per_hundredth;
    let remainder = abs % per_hundredth;

    if remainder * 2 > per_hundredth || (remainder * 2 == per_hundredth && hundredths % 2 == 1) {
        hundredths += 1;
    }

    let sign = if units < 0 && hundredths > 0 { "-" } else { "" };

    return write!(f, "{sign}{}.{:02}", hundredths / 100, hundredths % 100);
}

/// Parses `[-+]digits[.digits]` into units of `10^-places`, truncating extra fractional digits
pub(crate) fn parse_fixed(string: &str, places: usize) -> Result<i64> {
    let (negative, unsigned) = match string.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, string.strip_prefix('+').unwrap_or(string)),
    };

    let mut parts = unsigned.split('.');

    if parts.clone().count() > 2 {
        Err(MoneyError::Parse("Too many decimal points", string.to_string()))?
    }

    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next().unwrap_or_default();

    if whole.is_empty() && fraction.is_empty() {
        Err(MoneyError::Parse("No digits", string.to_string()))?
    }

    let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(fraction) {
        Err(MoneyError::Parse("Unexpected character", string.to_string()))?
    }

    let whole: i64 = if whole.is_empty() { 0 } else { whole.parse()? };
    let fraction: i64 = format!("{:0<places$}", fraction)[..places].parse()?;

    let scale = 10_i64
        .checked_pow(places as u32)
        .ok_or_else(|| MoneyError::Parse("Too many decimal places", string.to_string()))?;

    let units = whole
        .checked_mul(scale)
        .and_then(|units| units.checked_add(fraction))
        .ok_or_else(|| MoneyError::Parse("Out of range", string.to_string()))?;

    if negative {
        return Ok(-units);
    }

    return Ok(units);
}
