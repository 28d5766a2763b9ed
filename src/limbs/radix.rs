//! Radix definitions
//!
//! Empty structs used to make the limb conversion generic over the kind
//! of radix
//!
#![allow(non_camel_case_types)]

use crate::stdlib::fmt;


/// All the information needed to specify a radix, and methods operating on its digits
pub(crate) trait RadixType : Copy + Clone + Default + fmt::Debug {
    /// the inner type of values
    type Base
        : 'static
        + Copy
        + num_integer::Integer
        + num_traits::PrimInt;

    /// double wide unsigned type (capable of storing product of two digits)
    type BaseDouble
        : 'static
        + Copy
        + num_integer::Integer
        + num_traits::PrimInt
        + num_traits::AsPrimitive<Self::Base>
        + From<Self::Base>;

    /// Value of the RADIX
    const RADIX: Self::BaseDouble;

    /// Check contents of iterable contains values less than the radix
    fn validate_digits<'a, I: IntoIterator<Item=&'a Self::Base>>(i: I) -> bool {
        i.into_iter().all(|&d| Self::BaseDouble::from(d) < Self::RADIX)
    }

    /// Split a double wide value into (high, low) digits
    fn split_wide_digit(n: Self::BaseDouble) -> (Self::Base, Self::Base) {
        use num_traits::AsPrimitive;

        let (hi, lo) = num_integer::div_rem(n, Self::RADIX);
        (hi.as_(), lo.as_())
    }
}

/// Radix=*1,000,000,000* storage=*u32*
#[derive(Copy,Clone,Debug,Default)]
pub(crate) struct RADIX_10p9_u32;

/// Radix = 2<sup>32</sup>
#[derive(Copy,Clone,Debug,Default)]
pub(crate) struct RADIX_u32;


/// Radix which is a power of ten, so each digit holds a fixed number of decimal digits
pub(crate) trait RadixPowerOfTen : RadixType {
    const DIGITS: usize;
}

impl RadixPowerOfTen for RADIX_10p9_u32 {
    const DIGITS: usize = 9;
}


impl RadixType for RADIX_u32 {
    type Base = u32;
    type BaseDouble = u64;

    const RADIX: Self::BaseDouble = 1u64 << 32;

    // all u32 are valid in this radix
    fn validate_digits<'a, I: IntoIterator<Item=&'a Self::Base>>(_: I) -> bool {
        true
    }

    fn split_wide_digit(n: u64) -> (u32, u32) {
        ((n >> 32) as u32, n as u32)
    }
}

impl RadixType for RADIX_10p9_u32 {
    type Base = u32;
    type BaseDouble = u64;

    const RADIX: Self::BaseDouble = 1_000_000_000;
}


/// Convert little-endian digits of radix `S` into little-endian digits of radix `D`
///
/// Source digits are consumed most significant first; each one multiplies
/// the destination by `S::RADIX` and adds itself, with overflow peeled off
/// into new destination digits. The result has no leading zero digits.
///
/// Both radixes must fit in 32 bits so that `digit * S::RADIX + carry`
/// fits in a u64.
///
pub(crate) fn convert_digits<S, D>(src: &[u32]) -> Vec<u32>
where
    S: RadixType<Base=u32, BaseDouble=u64>,
    D: RadixType<Base=u32, BaseDouble=u64>,
{
    // 32 bits hold ~1.07 groups of nine decimal digits
    let mut dst: Vec<u32> = Vec::with_capacity(src.len() + src.len() / 8 + 2);

    for &digit in src.iter().rev() {
        debug_assert!(S::validate_digits([digit].iter()));

        // carry < S::RADIX throughout
        let mut carry = digit;
        for d in dst.iter_mut() {
            let wide = u64::from(*d) * S::RADIX + u64::from(carry);
            let (hi, lo) = D::split_wide_digit(wide);
            *d = lo;
            carry = hi;
        }

        while carry != 0 {
            let (hi, lo) = D::split_wide_digit(u64::from(carry));
            dst.push(lo);
            carry = hi;
        }
    }

    dst
}


#[cfg(test)]
mod test_validate {
    use super::*;

    macro_rules! impl_case {
        (valid $name:ident : $radix:ident ~ $values:expr) => {
            #[test]
            fn $name() {
                assert!($radix::validate_digits($values.iter()));
            }
        };
        (invalid $name:ident : $radix:ident ~ $values:expr) => {
            #[test]
            fn $name() {
                assert!(!$radix::validate_digits($values.iter()));
            }
        };
    }

    impl_case!(valid case_p9_valid: RADIX_10p9_u32 ~ [1u32, 2, 3, 999999999]);
    impl_case!(invalid case_p9_toobig: RADIX_10p9_u32 ~ [3330199352u32]);
    impl_case!(valid case_u32_max: RADIX_u32 ~ [u32::MAX]);
}


#[cfg(test)]
mod test_convert {
    use super::*;

    #[test]
    fn split_wide_digit_10e9() {
        let (hi, lo) = RADIX_10p9_u32::split_wide_digit(4294967295999999999);
        assert_eq!(hi, 4294967295);
        assert_eq!(lo, 999999999);
    }

    #[test]
    fn split_wide_digit_u32() {
        let (hi, lo) = RADIX_u32::split_wide_digit(0x0000_0005_0000_0007);
        assert_eq!(hi, 5);
        assert_eq!(lo, 7);
    }

    #[test]
    fn empty() {
        assert!(convert_digits::<RADIX_u32, RADIX_10p9_u32>(&[]).is_empty());
    }

    #[test]
    fn single_limb() {
        // 4294967295
        let d = convert_digits::<RADIX_u32, RADIX_10p9_u32>(&[u32::MAX]);
        assert_eq!(d, vec![294967295, 4]);
    }

    #[test]
    fn u64_max() {
        // 18446744073709551615
        let d = convert_digits::<RADIX_u32, RADIX_10p9_u32>(&[u32::MAX, u32::MAX]);
        assert_eq!(d, vec![709551615, 446744073, 18]);
    }

    #[test]
    fn power_of_ten() {
        // 10^18 = 0x0DE0B6B3_A7640000
        let d = convert_digits::<RADIX_u32, RADIX_10p9_u32>(&[0xA7640000, 0x0DE0B6B3]);
        assert_eq!(d, vec![0, 0, 1]);
    }

    #[test]
    fn back_to_binary() {
        let src = [0x89ABCDEF, 0x01234567, 0xFFFFFFFF, 0x00000001];
        let dec = convert_digits::<RADIX_u32, RADIX_10p9_u32>(&src);
        let bin = convert_digits::<RADIX_10p9_u32, RADIX_u32>(&dec);
        assert_eq!(bin, src.to_vec());
    }
}
