//! Shared arithmetic for the planning calculators.
//!
//! Rounding, safe ratios and compound growth used by more than one module.
//!
//! Form values are unbounded, so arithmetic on them goes through the
//! `checked_*` helpers here and surfaces [`Overflow`] instead of panicking.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Hundred, for percentage conversions.
pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Longest multi-year series any calculator will produce.
pub const MAX_PROJECTION_YEARS: u32 = 50;

/// A result fell outside the range a [`Decimal`] can hold.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("calculation exceeds the supported numeric range")]
pub struct Overflow;

pub fn checked_add(
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, Overflow> {
    a.checked_add(b).ok_or(Overflow)
}

pub fn checked_sub(
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, Overflow> {
    a.checked_sub(b).ok_or(Overflow)
}

pub fn checked_mul(
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, Overflow> {
    a.checked_mul(b).ok_or(Overflow)
}

/// Divides `a` by `b`. Callers rule out a zero divisor first.
pub fn checked_div(
    a: Decimal,
    b: Decimal,
) -> Result<Decimal, Overflow> {
    a.checked_div(b).ok_or(Overflow)
}

/// Adds up a series of values.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::common::{Overflow, checked_sum};
///
/// assert_eq!(checked_sum([dec!(1.5), dec!(2.5)]), Ok(dec!(4.0)));
/// assert_eq!(checked_sum([Decimal::MAX, Decimal::ONE]), Err(Overflow));
/// ```
pub fn checked_sum<I>(values: I) -> Result<Decimal, Overflow>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, checked_add)
}

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole number, midpoint away from zero.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::common::round_whole;
///
/// assert_eq!(round_whole(dec!(3306.25)), dec!(3306));
/// assert_eq!(round_whole(dec!(2.5)), dec!(3));
/// ```
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Expresses `part` as a percentage of `whole`.
///
/// Returns zero when `whole` is zero rather than dividing by it.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(25), dec!(200)), Ok(dec!(12.5)));
/// assert_eq!(percent_of(dec!(25), dec!(0)), Ok(dec!(0)));
/// ```
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Result<Decimal, Overflow> {
    if whole.is_zero() {
        return Ok(Decimal::ZERO);
    }
    checked_mul(checked_div(part, whole)?, HUNDRED)
}

/// Applies `rate` compound growth to `base` over `periods` periods.
///
/// `rate` is a fraction (0.15 for 15%). Zero periods returns `base` unchanged.
///
/// ```
/// use rust_decimal_macros::dec;
/// use plantain_core::calculations::common::compound;
///
/// assert_eq!(compound(dec!(1000), dec!(0.10), 2), Ok(dec!(1210.00)));
/// assert_eq!(compound(dec!(1000), dec!(0.10), 0), Ok(dec!(1000)));
/// ```
pub fn compound(
    base: Decimal,
    rate: Decimal,
    periods: u32,
) -> Result<Decimal, Overflow> {
    let factor = checked_add(Decimal::ONE, rate)?;
    (0..periods).try_fold(base, |acc, _| checked_mul(acc, factor))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        let result = round_half_up(dec!(-123.455));

        assert_eq!(result, dec!(-123.46));
    }

    #[test]
    fn round_half_up_handles_large_values() {
        let result = round_half_up(dec!(999999.999));

        assert_eq!(result, dec!(1000000.00));
    }

    // =========================================================================
    // round_whole tests
    // =========================================================================

    #[test]
    fn round_whole_rounds_midpoint_away_from_zero() {
        assert_eq!(round_whole(dec!(4372.5)), dec!(4373));
        assert_eq!(round_whole(dec!(-4372.5)), dec!(-4373));
    }

    #[test]
    fn round_whole_rounds_down_below_midpoint() {
        assert_eq!(round_whole(dec!(2257.49)), dec!(2257));
    }

    // =========================================================================
    // max / min tests
    // =========================================================================

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
        assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
    }

    #[test]
    fn max_handles_negative_and_positive() {
        assert_eq!(max(dec!(-50.00), dec!(50.00)), dec!(50.00));
    }

    #[test]
    fn min_returns_smaller_value() {
        assert_eq!(min(dec!(100.00), dec!(200.00)), dec!(100.00));
        assert_eq!(min(dec!(-1), dec!(0)), dec!(-1));
    }

    // =========================================================================
    // percent_of tests
    // =========================================================================

    #[test]
    fn percent_of_computes_ratio_times_hundred() {
        assert_eq!(percent_of(dec!(1), dec!(4)), Ok(dec!(25)));
    }

    #[test]
    fn percent_of_zero_whole_is_zero() {
        assert_eq!(percent_of(dec!(1000), Decimal::ZERO), Ok(Decimal::ZERO));
    }

    #[test]
    fn percent_of_tiny_whole_overflows() {
        let result = percent_of(Decimal::MAX, dec!(0.0001));

        assert_eq!(result, Err(Overflow));
    }

    // =========================================================================
    // compound tests
    // =========================================================================

    #[test]
    fn compound_matches_repeated_growth() {
        let result = compound(dec!(2500), dec!(0.15), 2);

        assert_eq!(result, Ok(dec!(3306.2500)));
    }

    #[test]
    fn compound_with_zero_rate_is_identity() {
        assert_eq!(compound(dec!(42), Decimal::ZERO, 5), Ok(dec!(42)));
    }

    #[test]
    fn compound_reports_overflow_instead_of_panicking() {
        let result = compound(dec!(150000000), dec!(0.15), 1000);

        assert_eq!(result, Err(Overflow));
    }

    // =========================================================================
    // checked arithmetic tests
    // =========================================================================

    #[test]
    fn checked_mul_overflows_past_decimal_max() {
        assert_eq!(checked_mul(Decimal::MAX, dec!(2)), Err(Overflow));
        assert_eq!(checked_mul(dec!(1.5), dec!(2)), Ok(dec!(3)));
    }

    #[test]
    fn checked_sum_of_empty_series_is_zero() {
        assert_eq!(checked_sum(Vec::new()), Ok(Decimal::ZERO));
    }
}
