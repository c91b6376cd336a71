use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

use crate::common::rate::Rate;

pub(crate) const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A signed monetary amount stored in ten-thousandths of a currency unit.
///
/// Movements, balances and summary totals all use `Money`. Keeping the value
/// as an integer avoids floating-point drift when interest is computed from
/// fractional rates; parsing goes through `BigDecimal` so that text like
/// `"1.2"` lands exactly on `12000`.
///
/// # Examples
/// ```
/// use bankist::common::money::Money;
///
/// let amount = Money::from_major(1300);
/// assert_eq!(amount.as_i64(), 13_000_000);
/// assert_eq!(amount.to_string_2dp(), "1300.00");
/// assert_eq!((-amount).to_string_2dp(), "-1300.00");
/// ```
pub struct Money(i64);

impl Money {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Whole currency units, as used by the seed data.
    pub const fn from_major(units: i64) -> Self {
        Money(units * SCALE)
    }

    pub fn zero() -> Self {
        Money(0)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn abs(self) -> Money {
        Money(self.0.saturating_abs())
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    pub fn checked_abs(self) -> Option<Money> {
        self.0.checked_abs().map(Money)
    }

    /// Sums exactly and clamps to the representable range.
    pub fn saturating_sum<'a>(values: impl IntoIterator<Item = &'a Money>) -> Money {
        let total: i128 = values.into_iter().map(|m| i128::from(m.0)).sum();
        Money(i64::try_from(total).unwrap_or(if total < 0 { i64::MIN } else { i64::MAX }))
    }

    /// `self * rate / 100`, rounded to the nearest minor unit.
    ///
    /// Returns `None` if the result does not fit the representation.
    pub fn percent(self, rate: Rate) -> Option<Money> {
        let raw = BigDecimal::from(self.0) * BigDecimal::from(rate.as_i64())
            / BigDecimal::from(SCALE * 100);
        raw.round(0).to_i64().map(Money)
    }

    /// Whether the unrounded `self * rate / 100` is at least `floor`.
    pub fn percent_reaches(self, rate: Rate, floor: Money) -> bool {
        i128::from(self.0) * i128::from(rate.as_i64())
            >= i128::from(floor.0) * i128::from(SCALE) * 100
    }

    /// Whether `self` is at least a tenth of `other`, compared exactly.
    pub fn covers_tenth_of(self, other: Money) -> bool {
        i128::from(self.0) * 10 >= i128::from(other.0)
    }

    /// Formats with exactly two decimals, rounding half away from zero.
    pub fn to_string_2dp(&self) -> String {
        let step = SCALE / 100;
        let mut cents = self.0 / step;
        let rem = self.0 % step;
        if rem.abs() * 2 >= step {
            cents += rem.signum();
        }
        let sign = if cents < 0 { "-" } else { "" };
        let cents = cents.unsigned_abs();
        format!("{sign}{}.{:02}", cents / 100, cents % 100)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        // Scale to 4 decimal places
        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value: i64 = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_2dp())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Neg for Money {
    type Output = Money;
    fn neg(self) -> Money {
        Money(self.0.saturating_neg())
    }
}
