// Test cases for digit counting, included by digits.rs

mod count_digits {
    use super::*;

    macro_rules! impl_case {
        ($name:ident : $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let n: BigInt = $input.parse().unwrap();
                assert_eq!(count_digits(&n), $expected);
                assert_eq!(count_digits(&-&n), $expected);
            }
        };
    }

    impl_case!(case_0: "0" => 1);
    impl_case!(case_1: "1" => 1);
    impl_case!(case_9: "9" => 1);
    impl_case!(case_10: "10" => 2);
    impl_case!(case_99: "99" => 2);
    impl_case!(case_100: "100" => 3);
    impl_case!(case_99999999: "99999999" => 8);
    impl_case!(case_100000000: "100000000" => 9);
    impl_case!(case_100000001: "100000001" => 9);
    impl_case!(case_u64_max: "18446744073709551615" => 20);
    impl_case!(case_u64_max_p1: "18446744073709551616" => 20);
    impl_case!(case_1e20: "100000000000000000000" => 21);
    impl_case!(case_1e20_m1: "99999999999999999999" => 20);

    #[test]
    fn powers_of_ten_and_neighbors() {
        let mut n = BigInt::from(10);
        for k in 1..1500u64 {
            assert_eq!(count_digits(&n), k + 1, "10^{}", k);
            assert_eq!(count_digits(&(&n - 1)), k, "10^{}-1", k);
            assert_eq!(count_digits(&(&n + 1)), k + 1, "10^{}+1", k);
            n *= 10u8;
        }
    }

    #[test]
    fn powers_of_two() {
        let mut n = BigInt::one();
        for k in 0..3000 {
            assert_eq!(count_digits(&n), n.to_string().len() as u64, "2^{}", k);
            n <<= 1;
        }
    }

    #[test]
    fn one_hundred_thousand_digits() {
        let nines: BigInt = "9".repeat(100_000).parse().unwrap();
        assert_eq!(count_digits(&nines), 100_000);

        let power = &nines + 1;
        assert_eq!(count_digits(&power), 100_001);
    }
}

mod count_digits_and_trailing_zeros {
    use super::*;

    macro_rules! impl_case {
        ($name:ident : $input:literal => ($digits:literal, $zeros:literal)) => {
            paste! {
                #[test]
                fn $name() {
                    let n: BigInt = $input.parse().unwrap();
                    assert_eq!(count_digits_and_trailing_zeros(&n), ($digits, $zeros));
                }

                #[test]
                fn [< $name _neg >]() {
                    let n: BigInt = $input.parse().unwrap();
                    assert_eq!(count_digits_and_trailing_zeros(&-n), ($digits, $zeros));
                }
            }
        };
    }

    impl_case!(case_0: "0" => (1, 0));
    impl_case!(case_7: "7" => (1, 0));
    impl_case!(case_10: "10" => (2, 1));
    impl_case!(case_15: "15" => (2, 0));
    impl_case!(case_120500: "120500" => (6, 2));
    impl_case!(case_1e19: "10000000000000000000" => (20, 19));
    impl_case!(case_2e19: "20000000000000000000" => (20, 19));
    impl_case!(case_1e38: "100000000000000000000000000000000000000" => (39, 38));
    impl_case!(case_4e38: "400000000000000000000000000000000000000" => (39, 38));
    impl_case!(case_102e50: "10200000000000000000000000000000000000000000000000000" => (53, 50));
    impl_case!(case_large_odd: "1234567890123456789012345678901234567890123456789" => (49, 0));
    impl_case!(case_large_even: "12345678901234567890123456789012345678901234567892" => (50, 0));

    #[test]
    fn powers_of_ten() {
        let mut n = BigInt::one();
        for k in 0..1200u64 {
            assert_eq!(count_digits_and_trailing_zeros(&n), (k + 1, k), "10^{}", k);
            assert_eq!(count_digits_and_trailing_zeros(&-&n), (k + 1, k), "-10^{}", k);
            n *= 10u8;
        }
    }

    #[test]
    fn digits_agree_with_count_digits() {
        let mut n = BigInt::from(6);
        for _ in 0..400 {
            let (digits, _) = count_digits_and_trailing_zeros(&n);
            assert_eq!(digits, count_digits(&n), "{}", n);
            n = n * 14 + 2;
        }
    }
}

mod tiers {
    use super::*;

    fn check_all_tiers(n: &BigInt) {
        let expected = count_by_formatting(n);
        assert_eq!(count_digits_and_trailing_zeros(n), expected, "{}", n);
        assert_eq!(Limbs::from(n).count_digits_and_trailing_zeros(), expected, "{}", n);
        if let Some(small) = n.magnitude().to_u64() {
            assert_eq!(count_native(small), expected, "{}", n);
        }
        if let Some(medium) = n.magnitude().to_u128() {
            assert_eq!(count_native(medium), expected, "{}", n);
        }
    }

    #[test]
    fn tier_boundaries() {
        let u64_max = BigInt::from(u64::MAX);
        let u128_max = BigInt::from(u128::MAX);

        for n in [&u64_max - 5u8, &u64_max + 1u8, u64_max.clone() * 10u8, &u128_max - 5u8,
                  &u128_max + 1u8, u128_max.clone() * 10u8, u128_max.clone() * 1000u16] {
            check_all_tiers(&n);
            check_all_tiers(&-n);
        }
    }

    #[test]
    fn formatting_counts_sign_out() {
        assert_eq!(count_by_formatting(&BigInt::from(-1200)), (4, 2));
        assert_eq!(count_by_formatting(&BigInt::from(1200)), (4, 2));
    }

    #[test]
    fn native_small_values() {
        assert_eq!(count_native(1u32), (1, 0));
        assert_eq!(count_native(100u32), (3, 2));
        assert_eq!(count_native(120u64), (3, 1));
        assert_eq!(count_native(u64::MAX), (20, 0));
        assert_eq!(count_native(10_000_000_000_000_000_000u64), (20, 19));
        assert_eq!(count_native(u128::MAX), (39, 0));
    }

    #[test]
    fn large_values_share_results() {
        let mut rng = oorandom::Rand64::new(0x5eed);
        for _ in 0..200 {
            let limbs: Vec<u32> = (0..(rng.rand_range(4..40))).map(|_| rng.rand_u64() as u32).collect();
            let shift = rng.rand_range(0..120) as usize;
            let n = BigInt::from_slice(Sign::Plus, &limbs) * num_traits::pow(BigInt::from(10), shift);
            if n.is_zero() {
                continue;
            }
            check_all_tiers(&n);
            check_all_tiers(&-n);
        }
    }
}

#[cfg(not(target_os = "emscripten"))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_decimal_string(digits in "[1-9][0-9]{0,120}", zeros in 0usize..60, negative in any::<bool>()) {
            let s = format!("{}{}{}", if negative { "-" } else { "" }, digits, "0".repeat(zeros));
            let n: BigInt = s.parse().unwrap();

            let magnitude = n.magnitude().to_string();
            let expected_zeros = magnitude.len() - magnitude.trim_end_matches('0').len();

            prop_assert_eq!(count_digits(&n), magnitude.len() as u64);
            prop_assert_eq!(
                count_digits_and_trailing_zeros(&n),
                (magnitude.len() as u64, expected_zeros as u64)
            );
        }

        #[test]
        fn sign_does_not_matter(n in any::<i128>()) {
            let n = BigInt::from(n);
            prop_assert_eq!(count_digits(&n), count_digits(&-&n));
            prop_assert_eq!(count_digits_and_trailing_zeros(&n), count_digits_and_trailing_zeros(&-&n));
        }

        #[test]
        fn idempotent(n in any::<u128>()) {
            let n = BigInt::from(n) << 70;
            prop_assert_eq!(count_digits_and_trailing_zeros(&n), count_digits_and_trailing_zeros(&n));
        }
    }
}
