//! Extension methods on `BigInt`

use crate::*;


/// The crate's operations as methods on `BigInt`
///
/// ```
/// use bigint_ext::{BigIntExt, RoundingMode};
/// use bigint_ext::num_bigint::BigInt;
///
/// let n = BigInt::from(-35);
/// assert_eq!(n.count_digits(), 2);
/// assert_eq!(n.div_rounded(&BigInt::from(10), RoundingMode::MidpointToEven), BigInt::from(-4));
/// ```
pub trait BigIntExt: Sized {
    /// See [`count_digits`](crate::count_digits)
    fn count_digits(&self) -> u64;

    /// See [`count_digits_and_trailing_zeros`](crate::count_digits_and_trailing_zeros)
    fn count_digits_and_trailing_zeros(&self) -> (u64, u64);

    /// See [`divide`](crate::divide)
    fn div_rounded(&self, divisor: &Self, mode: RoundingMode) -> Self;

    /// See [`checked_divide`](crate::checked_divide)
    fn checked_div_rounded(&self, divisor: &Self, mode: RoundingMode) -> Result<Self, Error>;
}

impl BigIntExt for BigInt {
    #[inline]
    fn count_digits(&self) -> u64 {
        digits::count_digits(self)
    }

    #[inline]
    fn count_digits_and_trailing_zeros(&self) -> (u64, u64) {
        digits::count_digits_and_trailing_zeros(self)
    }

    #[inline]
    fn div_rounded(&self, divisor: &BigInt, mode: RoundingMode) -> BigInt {
        division::divide(self, divisor, mode)
    }

    #[inline]
    fn checked_div_rounded(&self, divisor: &BigInt, mode: RoundingMode) -> Result<BigInt, Error> {
        division::checked_divide(self, divisor, mode)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn methods_forward() {
        let n: BigInt = "-1500000000000000000000000000".parse().unwrap();
        assert_eq!(n.count_digits(), 28);
        assert_eq!(n.count_digits_and_trailing_zeros(), (28, 26));

        let d = BigInt::from(10).pow(27u32);
        assert_eq!(n.div_rounded(&d, RoundingMode::MidpointToEven), BigInt::from(-2));
        assert_eq!(n.div_rounded(&d, RoundingMode::MidpointToZero), BigInt::from(-1));
        assert_eq!(n.checked_div_rounded(&BigInt::zero(), RoundingMode::ToZero), Err(Error::DivisionByZero));
    }
}
