//! Counting decimal digits and trailing zeros

use crate::*;
use crate::limbs::{optimizations_enabled, Limbs};
use crate::pow_cache::pow10;


/// Return number of decimal digits in integer; zero has one digit
///
/// The sign is not counted.
///
/// ```
/// use bigint_ext::count_digits;
/// use bigint_ext::num_bigint::BigInt;
///
/// assert_eq!(count_digits(&BigInt::from(0)), 1);
/// assert_eq!(count_digits(&BigInt::from(-12345)), 5);
/// ```
pub fn count_digits(value: &BigInt) -> u64 {
    let magnitude = value.magnitude();
    if is_single_digit(magnitude) {
        return 1;
    }
    count_decimal_digits_uint(magnitude)
}

/// Return number of decimal digits and number of trailing zeros
///
/// Zero has one digit and no trailing zeros. The sign is not counted.
///
/// ```
/// use bigint_ext::count_digits_and_trailing_zeros;
/// use bigint_ext::num_bigint::BigInt;
///
/// assert_eq!(count_digits_and_trailing_zeros(&BigInt::from(0)), (1, 0));
/// assert_eq!(count_digits_and_trailing_zeros(&BigInt::from(-120500)), (6, 2));
/// ```
pub fn count_digits_and_trailing_zeros(value: &BigInt) -> (u64, u64) {
    let magnitude = value.magnitude();
    if is_single_digit(magnitude) {
        return (1, 0);
    }

    // odd numbers cannot end in zero
    if magnitude.is_odd() {
        return (count_decimal_digits_uint(magnitude), 0);
    }

    if let Some(small) = magnitude.to_u64() {
        return count_native(small);
    }

    if let Some(counts) = count_medium(magnitude) {
        return counts;
    }

    if optimizations_enabled() {
        Limbs::from(value).count_digits_and_trailing_zeros()
    } else {
        count_by_formatting(value)
    }
}


fn is_single_digit(magnitude: &BigUint) -> bool {
    magnitude.to_u8().map_or(false, |n| n < 10)
}

/// Digits of a nonzero magnitude from its bit length, corrected with one
/// comparison against a cached power of ten
fn count_decimal_digits_uint(magnitude: &BigUint) -> u64 {
    debug_assert!(!magnitude.is_zero());

    // floor(bits·log10(2)) is either the exact exponent of the leading
    // digit or one more than it
    let estimate = (magnitude.bits() as f64 / LOG2_10) as u64;
    let reference = pow10().get(estimate as usize);

    if magnitude >= reference.magnitude() {
        estimate + 1
    } else {
        estimate
    }
}

/// Digits and trailing zeros of a nonzero native integer
pub(crate) fn count_native<T>(mut mantissa: T) -> (u64, u64)
where
    T: num_traits::PrimInt + num_integer::Integer + From<u8>,
{
    debug_assert!(!mantissa.is_zero());

    let ten = <T as From<u8>>::from(10u8);
    let mut digits = 1;
    let mut trailing_zeros = 0;

    loop {
        let (quotient, remainder) = mantissa.div_rem(&ten);
        mantissa = quotient;
        if !remainder.is_zero() {
            break;
        }
        trailing_zeros += 1;
        digits += 1;
    }

    while !mantissa.is_zero() {
        mantissa = mantissa / ten;
        digits += 1;
    }

    (digits, trailing_zeros)
}

#[cfg(has_u128)]
fn count_medium(magnitude: &BigUint) -> Option<(u64, u64)> {
    magnitude.to_u128().map(count_native)
}

#[cfg(not(has_u128))]
fn count_medium(_: &BigUint) -> Option<(u64, u64)> {
    None
}

/// Digits and trailing zeros read from the decimal string of a nonzero value
pub(crate) fn count_by_formatting(value: &BigInt) -> (u64, u64) {
    let formatted = value.to_string();
    let trailing_zeros = formatted.bytes().rev().take_while(|&b| b == b'0').count();

    let digits = match value.sign() {
        Sign::Minus => formatted.len() - 1,
        _ => formatted.len(),
    };

    (digits as u64, trailing_zeros as u64)
}
