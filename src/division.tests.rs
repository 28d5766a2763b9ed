// Test cases for divide, included by division.rs

macro_rules! impl_case {
    ( $mode:ident : $($n:literal / $d:literal => $expected:literal),* $(,)* ) => {
        paste! {
            #[test]
            fn [< case_ $mode >]() {
                let mode = RoundingMode::$mode;
                $(
                    let n = BigInt::from($n);
                    let d = BigInt::from($d);
                    let expected = BigInt::from($expected);
                    assert_eq!(divide(&n, &d, mode), expected, "{} / {} ({})", $n, $d, mode);
                )*
            }
        }
    };
}

mod zero_dividend {
    use super::*;

    #[test]
    fn all_modes() {
        let zero = BigInt::zero();
        for mode in RoundingMode::ALL.iter() {
            for d in [1, -1, 3, -3, 10, -10, 1_000_000_007] {
                assert_eq!(divide(&zero, &BigInt::from(d), *mode), zero, "0 / {} ({})", d, mode);
            }
        }
    }
}

mod exact_quotient {
    use super::*;

    #[test]
    fn all_modes() {
        for mode in RoundingMode::ALL.iter() {
            assert_eq!(divide(&BigInt::from(20), &BigInt::from(10), *mode), BigInt::from(2));
            assert_eq!(divide(&BigInt::from(-30), &BigInt::from(10), *mode), BigInt::from(-3));
            assert_eq!(divide(&BigInt::from(30), &BigInt::from(-10), *mode), BigInt::from(-3));
        }
    }
}

mod midpoint_to_even {
    use super::*;

    impl_case!(MidpointToEven:
        2 / 3 => 1,
        -2 / 3 => -1,
        2 / 2 => 1,
        -2 / 2 => -1,
        15 / 10 => 2,
        25 / 10 => 2,
        35 / 10 => 4,
        -15 / 10 => -2,
        -25 / 10 => -2,
        -35 / 10 => -4,
        25 / -10 => -2,
        -35 / -10 => 4,
    );
}

mod midpoint_away_from_zero {
    use super::*;

    impl_case!(MidpointAwayFromZero:
        2 / 3 => 1,
        -2 / 3 => -1,
        15 / 10 => 2,
        25 / 10 => 3,
        35 / 10 => 4,
        -15 / 10 => -2,
        -25 / 10 => -3,
        -35 / 10 => -4,
    );
}

mod directed {
    use super::*;

    impl_case!(ToZero:
        29 / 10 => 2,
        -29 / 10 => -2,
        20 / 10 => 2,
        -30 / 10 => -3,
    );

    impl_case!(ToNegativeInfinity:
        29 / 10 => 2,
        -21 / 10 => -3,
        21 / -10 => -3,
        20 / 10 => 2,
        -30 / 10 => -3,
    );

    impl_case!(ToPositiveInfinity:
        21 / 10 => 3,
        -29 / 10 => -2,
        -21 / -10 => 3,
        20 / 10 => 2,
        -30 / 10 => -3,
    );

    impl_case!(AwayFromZero:
        21 / 10 => 3,
        -21 / 10 => -3,
        20 / 10 => 2,
        -30 / 10 => -3,
    );
}

mod midpoint_to_zero {
    use super::*;

    impl_case!(MidpointToZero:
        20 / 10 => 2,
        -30 / 10 => -3,
        29 / 10 => 3,
        22 / 10 => 2,
        -21 / 10 => -2,
        -27 / 10 => -3,
        25 / 10 => 2,
        -25 / 10 => -2,
    );
}

mod midpoint_to_negative_infinity {
    use super::*;

    impl_case!(MidpointToNegativeInfinity:
        20 / 10 => 2,
        -30 / 10 => -3,
        29 / 10 => 3,
        22 / 10 => 2,
        -21 / 10 => -2,
        -27 / 10 => -3,
        25 / 10 => 2,
        -25 / 10 => -3,
    );
}

mod midpoint_to_positive_infinity {
    use super::*;

    impl_case!(MidpointToPositiveInfinity:
        29 / 10 => 3,
        22 / 10 => 2,
        -21 / 10 => -2,
        -27 / 10 => -3,
        25 / 10 => 3,
        -25 / 10 => -2,
    );
}

mod large_operands {
    use super::*;

    #[test]
    fn midpoint_of_huge_values() {
        // (10^60 + 5) / 10 is an exact midpoint with an even truncated quotient
        let ten_pow_60 = num_traits::pow(BigInt::from(10), 60);
        let n = &ten_pow_60 + 5;
        let d = BigInt::from(10);
        let truncated = num_traits::pow(BigInt::from(10), 59);

        assert_eq!(divide(&n, &d, RoundingMode::MidpointToEven), truncated);
        assert_eq!(divide(&n, &d, RoundingMode::MidpointAwayFromZero), &truncated + BigInt::one());
        assert_eq!(divide(&-&n, &d, RoundingMode::MidpointToNegativeInfinity), -(&truncated + BigInt::one()));
        assert_eq!(divide(&-&n, &d, RoundingMode::MidpointToPositiveInfinity), -&truncated);
    }

    #[test]
    fn odd_divisor_never_ties() {
        let n: BigInt = "123456789012345678901234567890123456789".parse().unwrap();
        let d: BigInt = "987654321987654321".parse().unwrap();
        let floor = n.div_floor(&d);

        for mode in RoundingMode::ALL.iter() {
            let q = divide(&n, &d, *mode);
            assert!(q == floor || q == &floor + 1, "{} gave {}", mode, q);
        }
    }
}

mod checked {
    use super::*;

    #[test]
    fn zero_divisor() {
        let r = checked_divide(&BigInt::from(5), &BigInt::zero(), RoundingMode::MidpointToEven);
        assert_eq!(r, Err(Error::DivisionByZero));
    }

    #[test]
    fn nonzero_divisor() {
        let r = checked_divide(&BigInt::from(35), &BigInt::from(10), RoundingMode::MidpointToEven);
        assert_eq!(r, Ok(BigInt::from(4)));
    }

    #[test]
    #[should_panic]
    fn unchecked_zero_divisor_panics() {
        divide(&BigInt::from(5), &BigInt::zero(), RoundingMode::MidpointToEven);
    }
}

#[cfg(not(target_os = "emscripten"))]
mod proptests {
    use super::*;
    use crate::stdlib::cmp::Ordering;
    use proptest::prelude::*;

    // same rounding rules, evaluated on native i128
    fn reference(n: i128, d: i128, mode: RoundingMode) -> i128 {
        let q = n / d;
        let r = n % d;
        if r == 0 {
            return q;
        }
        let positive = (n < 0) == (d < 0);
        let (lo, hi) = if positive { (q, q + 1) } else { (q - 1, q) };
        let twice = 2 * r.abs();
        let half_cmp = twice.cmp(&d.abs());
        let toward_zero = q;
        let away = if positive { hi } else { lo };

        match mode {
            RoundingMode::ToZero => toward_zero,
            RoundingMode::AwayFromZero => away,
            RoundingMode::ToNegativeInfinity => lo,
            RoundingMode::ToPositiveInfinity => hi,
            _ => match half_cmp {
                Ordering::Less => toward_zero,
                Ordering::Greater => away,
                Ordering::Equal => match mode {
                    RoundingMode::MidpointToEven => if lo % 2 == 0 { lo } else { hi },
                    RoundingMode::MidpointAwayFromZero => away,
                    RoundingMode::MidpointToZero => toward_zero,
                    RoundingMode::MidpointToNegativeInfinity => lo,
                    _ => hi,
                },
            },
        }
    }

    proptest! {
        #[test]
        fn matches_i128_reference(n in any::<i64>(), d in any::<i64>().prop_filter("nonzero", |d| *d != 0), ordinal in 0u8..9) {
            let mode = RoundingMode::try_from(ordinal).unwrap();
            let expected = reference(n as i128, d as i128, mode);
            let result = divide(&BigInt::from(n), &BigInt::from(d), mode);
            prop_assert_eq!(result, BigInt::from(expected));
        }

        #[test]
        fn within_one_of_truncation(n in any::<i128>(), d in any::<i64>().prop_filter("nonzero", |d| *d != 0), ordinal in 0u8..9) {
            let mode = RoundingMode::try_from(ordinal).unwrap();
            let n = BigInt::from(n);
            let d = BigInt::from(d);
            let truncated = &n / &d;
            let diff = divide(&n, &d, mode) - truncated;
            prop_assert!(diff.abs() <= BigInt::one());
        }
    }
}
