//! Rounding structures and subroutines

use crate::stdlib::cmp::Ordering;
use crate::stdlib::convert::TryFrom;
use crate::stdlib::fmt;
use crate::stdlib::str::FromStr;
use crate::Error;
use crate::Sign;

/// Determines how the fractional part of an exact quotient is discarded
///
/// The first five values match the legacy [`MidpointRounding`] modes,
/// ordinal for ordinal. Default rounding mode is MidpointToEven.
///
/// Examples below show the rounded result of the exact quotient on the left.
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, if equidistant round towards the even neighbor
    ///
    /// * 3.5 → 4
    /// * 2.5 → 2
    /// * 1.6 → 2
    /// * 1.1 → 1
    /// * -1.1 → -1
    /// * -1.6 → -2
    /// * -2.5 → -2
    /// * -3.5 → -4
    MidpointToEven = 0,

    /// Round to nearest, if equidistant round away from zero
    ///
    /// * 3.5 → 4
    /// * 2.5 → 3
    /// * 1.6 → 2
    /// * 1.1 → 1
    /// * -1.1 → -1
    /// * -1.6 → -2
    /// * -2.5 → -3
    /// * -3.5 → -4
    MidpointAwayFromZero = 1,

    /// Always round towards zero (truncate)
    ///
    /// * 2.9 → 2
    /// * 2.5 → 2
    /// * 2.1 → 2
    /// * -2.1 → -2
    /// * -2.5 → -2
    /// * -2.9 → -2
    ToZero = 2,

    /// Towards -∞
    ///
    /// * 2.9 → 2
    /// * 2.1 → 2
    /// * -2.1 → -3
    /// * -2.9 → -3
    ToNegativeInfinity = 3,

    /// Towards +∞
    ///
    /// * 2.9 → 3
    /// * 2.1 → 3
    /// * -2.1 → -2
    /// * -2.9 → -2
    ToPositiveInfinity = 4,

    /// Always round away from zero
    ///
    /// * 2.9 → 3
    /// * 2.1 → 3
    /// * -2.1 → -3
    /// * -2.9 → -3
    AwayFromZero = 5,

    /// Round to nearest, if equidistant round towards zero
    ///
    /// * 2.9 → 3
    /// * 2.5 → 2
    /// * 2.2 → 2
    /// * -2.2 → -2
    /// * -2.5 → -2
    /// * -2.9 → -3
    MidpointToZero = 6,

    /// Round to nearest, if equidistant round towards -∞
    ///
    /// * 2.9 → 3
    /// * 2.5 → 2
    /// * 2.2 → 2
    /// * -2.2 → -2
    /// * -2.5 → -3
    /// * -2.9 → -3
    MidpointToNegativeInfinity = 7,

    /// Round to nearest, if equidistant round towards +∞
    ///
    /// * 2.9 → 3
    /// * 2.5 → 3
    /// * 2.2 → 2
    /// * -2.2 → -2
    /// * -2.5 → -2
    /// * -2.9 → -3
    MidpointToPositiveInfinity = 8,
}

impl RoundingMode {
    /// Every mode, in ordinal order
    pub const ALL: [RoundingMode; 9] = [
        RoundingMode::MidpointToEven,
        RoundingMode::MidpointAwayFromZero,
        RoundingMode::ToZero,
        RoundingMode::ToNegativeInfinity,
        RoundingMode::ToPositiveInfinity,
        RoundingMode::AwayFromZero,
        RoundingMode::MidpointToZero,
        RoundingMode::MidpointToNegativeInfinity,
        RoundingMode::MidpointToPositiveInfinity,
    ];

    /// Name of the variant, as accepted by `FromStr`
    pub fn name(&self) -> &'static str {
        use self::RoundingMode::*;

        match *self {
            MidpointToEven => "MidpointToEven",
            MidpointAwayFromZero => "MidpointAwayFromZero",
            ToZero => "ToZero",
            ToNegativeInfinity => "ToNegativeInfinity",
            ToPositiveInfinity => "ToPositiveInfinity",
            AwayFromZero => "AwayFromZero",
            MidpointToZero => "MidpointToZero",
            MidpointToNegativeInfinity => "MidpointToNegativeInfinity",
            MidpointToPositiveInfinity => "MidpointToPositiveInfinity",
        }
    }

    /// True for the round-to-nearest family, which looks at the size
    /// of the discarded fraction
    pub fn is_midpoint(&self) -> bool {
        use self::RoundingMode::*;

        matches!(
            *self,
            MidpointToEven
            | MidpointAwayFromZero
            | MidpointToZero
            | MidpointToNegativeInfinity
            | MidpointToPositiveInfinity
        )
    }

    /// Decide whether a truncated quotient must move one step away from zero
    ///
    /// Parameters
    /// ----------
    /// * sign (Sign) - Sign of the exact quotient; must not be NoSign,
    ///     a zero remainder never needs rounding
    /// * odd_quotient (bool) - True if the truncated quotient is odd
    /// * fraction_vs_half (FnOnce -> Ordering) - How the discarded fraction
    ///     compares to one half. Only evaluated by midpoint modes.
    ///
    /// Examples
    /// --------
    /// - 25 / 10 truncates to 2 with fraction exactly one half:
    ///   `Plus, false, || Equal` → MidpointToEven keeps 2, MidpointAwayFromZero moves to 3
    /// - -21 / 10 truncates to -2 with fraction 0.1:
    ///   `Minus, false, || Less` → ToNegativeInfinity moves to -3, MidpointToZero keeps -2
    ///
    pub fn rounds_away_from_zero<F>(&self, sign: Sign, odd_quotient: bool, fraction_vs_half: F) -> bool
    where
        F: FnOnce() -> Ordering,
    {
        use self::RoundingMode::*;
        use crate::stdlib::cmp::Ordering::*;

        debug_assert_ne!(sign, Sign::NoSign);

        match *self {
            ToZero => false,
            AwayFromZero => true,
            ToNegativeInfinity => sign == Sign::Minus,
            ToPositiveInfinity => sign == Sign::Plus,
            midpoint_mode => match (midpoint_mode, fraction_vs_half()) {
                (_, Less) => false,
                (_, Greater) => true,
                (MidpointAwayFromZero, Equal) => true,
                (MidpointToEven, Equal) => odd_quotient,
                (MidpointToNegativeInfinity, Equal) => sign == Sign::Minus,
                (MidpointToPositiveInfinity, Equal) => sign == Sign::Plus,
                (_, Equal) => false,
            },
        }
    }
}

impl Default for RoundingMode {
    fn default() -> RoundingMode {
        RoundingMode::MidpointToEven
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Error> {
        RoundingMode::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(Error::UnsupportedRoundingMode { ordinal })
    }
}

impl From<RoundingMode> for u8 {
    fn from(mode: RoundingMode) -> u8 {
        mode as u8
    }
}

impl FromStr for RoundingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        RoundingMode::ALL
            .iter()
            .find(|mode| mode.name() == s)
            .copied()
            .ok_or_else(|| Error::UnsupportedRoundingModeName { name: s.into() })
    }
}


/// The older five-valued set of midpoint rounding modes
///
/// Kept so callers written against it can convert; each value maps to
/// the [`RoundingMode`] of the same name and ordinal.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[repr(u8)]
pub enum MidpointRounding {
    /// see [`RoundingMode::MidpointToEven`]
    ToEven = 0,
    /// see [`RoundingMode::MidpointAwayFromZero`]
    AwayFromZero = 1,
    /// see [`RoundingMode::ToZero`]
    ToZero = 2,
    /// see [`RoundingMode::ToNegativeInfinity`]
    ToNegativeInfinity = 3,
    /// see [`RoundingMode::ToPositiveInfinity`]
    ToPositiveInfinity = 4,
}

impl From<MidpointRounding> for RoundingMode {
    fn from(mode: MidpointRounding) -> RoundingMode {
        match mode {
            MidpointRounding::ToEven => RoundingMode::MidpointToEven,
            MidpointRounding::AwayFromZero => RoundingMode::MidpointAwayFromZero,
            MidpointRounding::ToZero => RoundingMode::ToZero,
            MidpointRounding::ToNegativeInfinity => RoundingMode::ToNegativeInfinity,
            MidpointRounding::ToPositiveInfinity => RoundingMode::ToPositiveInfinity,
        }
    }
}

impl TryFrom<u8> for MidpointRounding {
    type Error = Error;

    fn try_from(ordinal: u8) -> Result<Self, Error> {
        match ordinal {
            0 => Ok(MidpointRounding::ToEven),
            1 => Ok(MidpointRounding::AwayFromZero),
            2 => Ok(MidpointRounding::ToZero),
            3 => Ok(MidpointRounding::ToNegativeInfinity),
            4 => Ok(MidpointRounding::ToPositiveInfinity),
            _ => Err(Error::UnsupportedRoundingMode { ordinal }),
        }
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test_rounds_away_from_zero {
    use paste::paste;
    use super::*;

    macro_rules! impl_test {
        ( $($mode:ident),+ => $expected:literal) => {
            $(
                paste! {
                    #[test]
                    fn [< mode_ $mode >]() {
                        let (sign, odd, fraction) = test_input();
                        let mode = self::RoundingMode::$mode;
                        let result = mode.rounds_away_from_zero(sign, odd, || fraction);
                        assert_eq!(result, $expected);
                    }
                }
            )*
        }
    }

    macro_rules! define_test_input {
        ( - $($t:tt)* ) => {
            define_test_input!(sign=Sign::Minus, $($t)*);
        };
        ( + $($t:tt)* ) => {
            define_test_input!(sign=Sign::Plus, $($t)*);
        };
        ( sign=$sign:expr, odd $fraction:ident ) => {
            fn test_input() -> (Sign, bool, Ordering) { ($sign, true, Ordering::$fraction) }
        };
        ( sign=$sign:expr, even $fraction:ident ) => {
            fn test_input() -> (Sign, bool, Ordering) { ($sign, false, Ordering::$fraction) }
        };
    }

    // 2.1
    mod case_pos_even_below_half {
        use super::*;

        define_test_input!(+ even Less);

        impl_test!(AwayFromZero, ToPositiveInfinity => true);
        impl_test!(ToZero, ToNegativeInfinity, MidpointToEven, MidpointAwayFromZero,
                   MidpointToZero, MidpointToNegativeInfinity, MidpointToPositiveInfinity => false);
    }

    // -2.1
    mod case_neg_even_below_half {
        use super::*;

        define_test_input!(- even Less);

        impl_test!(AwayFromZero, ToNegativeInfinity => true);
        impl_test!(ToZero, ToPositiveInfinity, MidpointToEven, MidpointAwayFromZero,
                   MidpointToZero, MidpointToNegativeInfinity, MidpointToPositiveInfinity => false);
    }

    // 2.5
    mod case_pos_even_half {
        use super::*;

        define_test_input!(+ even Equal);

        impl_test!(AwayFromZero, ToPositiveInfinity, MidpointAwayFromZero, MidpointToPositiveInfinity => true);
        impl_test!(ToZero, ToNegativeInfinity, MidpointToEven, MidpointToZero, MidpointToNegativeInfinity => false);
    }

    // 3.5
    mod case_pos_odd_half {
        use super::*;

        define_test_input!(+ odd Equal);

        impl_test!(AwayFromZero, ToPositiveInfinity, MidpointToEven,
                   MidpointAwayFromZero, MidpointToPositiveInfinity => true);
        impl_test!(ToZero, ToNegativeInfinity, MidpointToZero, MidpointToNegativeInfinity => false);
    }

    // -2.5
    mod case_neg_even_half {
        use super::*;

        define_test_input!(- even Equal);

        impl_test!(AwayFromZero, ToNegativeInfinity, MidpointAwayFromZero, MidpointToNegativeInfinity => true);
        impl_test!(ToZero, ToPositiveInfinity, MidpointToEven, MidpointToZero, MidpointToPositiveInfinity => false);
    }

    // -3.5
    mod case_neg_odd_half {
        use super::*;

        define_test_input!(- odd Equal);

        impl_test!(AwayFromZero, ToNegativeInfinity, MidpointToEven,
                   MidpointAwayFromZero, MidpointToNegativeInfinity => true);
        impl_test!(ToZero, ToPositiveInfinity, MidpointToZero, MidpointToPositiveInfinity => false);
    }

    // 2.9
    mod case_pos_even_above_half {
        use super::*;

        define_test_input!(+ even Greater);

        impl_test!(AwayFromZero, ToPositiveInfinity, MidpointToEven, MidpointAwayFromZero,
                   MidpointToZero, MidpointToNegativeInfinity, MidpointToPositiveInfinity => true);
        impl_test!(ToZero, ToNegativeInfinity => false);
    }

    // -2.9
    mod case_neg_even_above_half {
        use super::*;

        define_test_input!(- even Greater);

        impl_test!(AwayFromZero, ToNegativeInfinity, MidpointToEven, MidpointAwayFromZero,
                   MidpointToZero, MidpointToNegativeInfinity, MidpointToPositiveInfinity => true);
        impl_test!(ToZero, ToPositiveInfinity => false);
    }

    #[test]
    fn directed_modes_skip_fraction() {
        for mode in [RoundingMode::ToZero, RoundingMode::AwayFromZero,
                     RoundingMode::ToNegativeInfinity, RoundingMode::ToPositiveInfinity] {
            mode.rounds_away_from_zero(Sign::Plus, false, || panic!("{} compared fraction", mode));
        }
    }
}


#[cfg(test)]
mod test_conversions {
    use super::*;

    #[test]
    fn ordinals_round_trip() {
        for (i, mode) in RoundingMode::ALL.iter().enumerate() {
            assert_eq!(u8::from(*mode) as usize, i);
            assert_eq!(RoundingMode::try_from(i as u8), Ok(*mode));
        }
    }

    #[test]
    fn ordinal_out_of_range() {
        assert_eq!(RoundingMode::try_from(9), Err(Error::UnsupportedRoundingMode { ordinal: 9 }));
        assert_eq!(RoundingMode::try_from(255), Err(Error::UnsupportedRoundingMode { ordinal: 255 }));
    }

    #[test]
    fn names_round_trip() {
        for mode in RoundingMode::ALL.iter() {
            let name = mode.to_string();
            assert_eq!(name.parse::<RoundingMode>(), Ok(*mode));
        }
    }

    #[test]
    fn unknown_name() {
        let err = "HalfEven".parse::<RoundingMode>().unwrap_err();
        assert_eq!(err, Error::UnsupportedRoundingModeName { name: "HalfEven".into() });
    }

    #[test]
    fn default_is_midpoint_to_even() {
        assert_eq!(RoundingMode::default(), RoundingMode::MidpointToEven);
    }

    #[test]
    fn midpoint_family() {
        let midpoint: Vec<_> = RoundingMode::ALL.iter().filter(|m| m.is_midpoint()).collect();
        assert_eq!(midpoint.len(), 5);
        assert!(!RoundingMode::ToZero.is_midpoint());
        assert!(!RoundingMode::AwayFromZero.is_midpoint());
    }

    #[test]
    fn legacy_modes_map_by_ordinal() {
        for ordinal in 0..5u8 {
            let legacy = MidpointRounding::try_from(ordinal).unwrap();
            assert_eq!(u8::from(RoundingMode::from(legacy)), ordinal);
        }
        assert_eq!(RoundingMode::from(MidpointRounding::ToEven), RoundingMode::MidpointToEven);
        assert_eq!(RoundingMode::from(MidpointRounding::ToZero), RoundingMode::ToZero);
    }

    #[test]
    fn legacy_ordinal_out_of_range() {
        assert_eq!(MidpointRounding::try_from(5), Err(Error::UnsupportedRoundingMode { ordinal: 5 }));
    }
}
