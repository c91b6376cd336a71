use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;

use crate::common::money::SCALE;

/// An interest rate in percent, stored with the same fixed-point scale as
/// [`Money`](crate::common::money::Money). `Rate::from_str("1.2")` is 1.2%.
///
/// Parsed rates lie in `0..=100`, so an interest term never exceeds its
/// deposit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rate(i64);

impl Rate {
    /// Rate given in hundredths of a percent: `from_hundredths(120)` is 1.2%.
    pub fn from_hundredths(value: i64) -> Self {
        Self(value * (SCALE / 100))
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::str::FromStr for Rate {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty rate".into()));
        }
        let bd: BigDecimal = t.parse()?;
        if bd < BigDecimal::from(0) {
            return Err(ParseBigDecimalError::Other("negative rate".into()));
        }
        if bd > BigDecimal::from(100) {
            return Err(ParseBigDecimalError::Other("rate above 100%".into()));
        }
        (bd * BigDecimal::from(SCALE))
            .round(0)
            .to_i64()
            .map(Rate)
            .ok_or_else(|| ParseBigDecimalError::Other("rate overflow".into()))
    }
}
