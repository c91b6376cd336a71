//! Figures derived from an account's movements. Nothing here is stored; every
//! render recomputes them from the current movement list.
//!
//! Accounts keep their [`turnover`] representable, so the sums below never
//! reach the clamp in [`Money::saturating_sum`].

use crate::common::{money::Money, rate::Rate};

/// Minimum interest a single deposit must earn to be counted.
pub const MIN_INTEREST: Money = Money::from_major(1);

pub fn balance(movements: &[Money]) -> Money {
    Money::saturating_sum(movements)
}

pub fn total_deposits(movements: &[Money]) -> Money {
    Money::saturating_sum(movements.iter().filter(|m| m.is_positive()))
}

/// Magnitude of all withdrawals together.
pub fn total_withdrawals(movements: &[Money]) -> Money {
    Money::saturating_sum(movements.iter().filter(|m| m.is_negative())).abs()
}

/// Sum of every movement's magnitude, or `None` once it leaves the range.
pub fn turnover(movements: &[Money]) -> Option<Money> {
    movements
        .iter()
        .try_fold(Money::zero(), |acc, m| acc.checked_add(m.checked_abs()?))
}

/// Interest earned per deposit at `rate` percent, keeping only the deposits
/// that earn at least [`MIN_INTEREST`]. The threshold is checked before the
/// term is rounded.
pub fn qualifying_interest(movements: &[Money], rate: Rate) -> Money {
    let terms: Vec<Money> = movements
        .iter()
        .filter(|m| m.is_positive())
        .filter(|m| m.percent_reaches(rate, MIN_INTEREST))
        .filter_map(|m| m.percent(rate))
        .collect();
    Money::saturating_sum(&terms)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn money(values: &[i64]) -> Vec<Money> {
        values.iter().copied().map(Money::from_major).collect()
    }

    const ACCOUNT1: [i64; 8] = [200, 450, -400, 3000, -650, -130, 70, 1300];

    #[test]
    fn empty_movements_yield_zero() {
        assert_eq!(balance(&[]), Money::zero());
        assert_eq!(total_deposits(&[]), Money::zero());
        assert_eq!(total_withdrawals(&[]), Money::zero());
        assert_eq!(qualifying_interest(&[], Rate::from_hundredths(120)), Money::zero());
    }

    #[test]
    fn figures_for_first_seed_account() {
        let movements = money(&ACCOUNT1);
        assert_eq!(balance(&movements), Money::from_major(3840));
        assert_eq!(total_deposits(&movements), Money::from_major(5020));
        assert_eq!(total_withdrawals(&movements), Money::from_major(1180));
    }

    #[test]
    fn balance_is_deposits_minus_withdrawals() {
        let cases: [&[i64]; 5] = [
            &ACCOUNT1,
            &[5000, 3400, -150, -790, -3210, -1000, 8500, -30],
            &[-10, -20],
            &[0, 0, 5],
            &[],
        ];
        for case in cases {
            let movements = money(case);
            assert_eq!(
                balance(&movements),
                total_deposits(&movements).checked_sub(total_withdrawals(&movements)).unwrap(),
                "movements {case:?}"
            );
        }
    }

    #[test]
    fn interest_drops_terms_below_one_unit() {
        // 1.2% of 70 is 0.84 and must not be counted.
        let movements = money(&ACCOUNT1);
        let interest = qualifying_interest(&movements, Rate::from_hundredths(120));
        // 2.4 + 5.4 + 36 + 15.6
        assert_eq!(interest, Money::new(594_000));
    }

    #[test]
    fn interest_keeps_term_of_exactly_one_unit() {
        let movements = money(&[100, 99]);
        let interest = qualifying_interest(&movements, Rate::from_hundredths(100));
        assert_eq!(interest, Money::from_major(1));
    }

    #[test]
    fn interest_threshold_uses_unrounded_term() {
        // 1.5% of 66.6664 is 0.999996, which would round up to exactly 1
        let rate = Rate::from_hundredths(150);
        let below = [Money::from_str("66.6664").unwrap()];
        assert_eq!(qualifying_interest(&below, rate), Money::zero());

        let above = [Money::from_str("66.6667").unwrap()];
        assert_eq!(qualifying_interest(&above, rate), Money::from_major(1));
    }

    #[test]
    fn turnover_counts_magnitudes_and_detects_overflow() {
        assert_eq!(turnover(&money(&ACCOUNT1)), Some(Money::from_major(6200)));
        assert_eq!(turnover(&[]), Some(Money::zero()));
        assert_eq!(turnover(&[Money::new(i64::MAX), Money::new(-1)]), None);
        assert_eq!(turnover(&[Money::new(i64::MIN)]), None);
    }

    #[test]
    fn figures_stay_exact_near_the_range_limit() {
        let movements = [Money::new(i64::MAX - 10), Money::new(-5), Money::new(5)];
        assert_eq!(balance(&movements), Money::new(i64::MAX - 10));
        assert_eq!(total_deposits(&movements), Money::new(i64::MAX - 5));
        assert_eq!(total_withdrawals(&movements), Money::new(5));
        // a full-rate interest term never exceeds its deposit
        let rate = Rate::from_hundredths(10_000);
        assert_eq!(qualifying_interest(&movements[..1], rate), Money::new(i64::MAX - 10));
    }

    #[test]
    fn interest_ignores_withdrawals() {
        let movements = money(&[-5000, -100]);
        assert_eq!(qualifying_interest(&movements, Rate::from_hundredths(150)), Money::zero());
    }
}
