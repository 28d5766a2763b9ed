//! Integer division with a selectable rounding mode

use crate::*;


/// Divide two integers, rounding any fractional part of the exact
/// quotient according to `mode`
///
/// Panics with the same message as `BigInt`'s own division if `divisor`
/// is zero; see [`checked_divide`] for a non-panicking version.
///
/// ```
/// use bigint_ext::{divide, RoundingMode};
/// use bigint_ext::num_bigint::BigInt;
///
/// let n = BigInt::from(25);
/// let d = BigInt::from(10);
/// assert_eq!(divide(&n, &d, RoundingMode::MidpointToEven), BigInt::from(2));
/// assert_eq!(divide(&n, &d, RoundingMode::MidpointAwayFromZero), BigInt::from(3));
/// ```
pub fn divide(dividend: &BigInt, divisor: &BigInt, mode: RoundingMode) -> BigInt {
    if mode == RoundingMode::ToZero {
        return dividend / divisor;
    }

    let (quotient, remainder) = dividend.div_rem(divisor);
    if remainder.is_zero() {
        return quotient;
    }

    // remainder is nonzero, so neither operand is zero
    let sign = dividend.sign() * divisor.sign();

    let away = mode.rounds_away_from_zero(sign, quotient.is_odd(), || {
        let twice_remainder: BigUint = remainder.magnitude() << 1;
        twice_remainder.cmp(divisor.magnitude())
    });

    match (away, sign) {
        (false, _) => quotient,
        (true, Sign::Minus) => quotient - 1u8,
        (true, _) => quotient + 1u8,
    }
}

/// Divide two integers with rounding, returning an error instead of
/// panicking when `divisor` is zero
pub fn checked_divide(dividend: &BigInt, divisor: &BigInt, mode: RoundingMode) -> Result<BigInt, Error> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(divide(dividend, divisor, mode))
}
