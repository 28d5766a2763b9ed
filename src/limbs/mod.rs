//! Explicit limb representation of integers
//!
//! `Limbs` is a sign plus little-endian 32-bit magnitude limbs, built from a
//! `BigInt` through its public digit accessors. The fast trailing-zero
//! counter converts these limbs to base 10<sup>9</sup> and reads nine decimal
//! digits at a time.
//!
//! Whether that path is used is decided once per process by
//! [`optimizations_enabled`], which checks the limb layout against a
//! known value before trusting it.

use crate::*;
use crate::digits::count_native;

pub(crate) mod radix;

use self::radix::{convert_digits, RadixPowerOfTen, RADIX_10p9_u32, RADIX_u32};


/// Sign and magnitude of an integer, as 32-bit limbs, least significant first
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Limbs {
    sign: Sign,
    digits: Vec<u32>,
}

impl Limbs {
    /// Sign of the value (NoSign for zero)
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Magnitude limbs, least significant first, no leading zero limbs
    pub fn digits(&self) -> &[u32] {
        &self.digits
    }

    /// Magnitude in base 10<sup>9</sup>, least significant first
    pub fn to_decimal_chunks(&self) -> Vec<u32> {
        convert_digits::<RADIX_u32, RADIX_10p9_u32>(&self.digits)
    }

    /// Count decimal digits and trailing zeros of the magnitude
    ///
    /// Zero has one digit and no trailing zeros.
    pub fn count_digits_and_trailing_zeros(&self) -> (u64, u64) {
        let chunks = self.to_decimal_chunks();
        count_chunk_digits_and_trailing_zeros(&chunks)
    }
}

impl<'a> From<&'a BigInt> for Limbs {
    fn from(n: &'a BigInt) -> Self {
        let (sign, digits) = n.to_u32_digits();
        Limbs { sign, digits }
    }
}

impl From<Limbs> for BigInt {
    fn from(limbs: Limbs) -> Self {
        BigInt::from_slice(limbs.sign, &limbs.digits)
    }
}


/// Digits and trailing zeros of a little-endian base 10<sup>9</sup> number
/// with no leading zero chunks
fn count_chunk_digits_and_trailing_zeros(chunks: &[u32]) -> (u64, u64) {
    const DIGITS_PER_CHUNK: u64 = RADIX_10p9_u32::DIGITS as u64;

    let (&top, lower) = match chunks.split_last() {
        Some(split) => split,
        None => return (1, 0),
    };
    debug_assert_ne!(top, 0);

    let (top_digits, top_zeros) = count_native(top);
    let digits = lower.len() as u64 * DIGITS_PER_CHUNK + top_digits;

    let mut trailing_zeros = 0;
    for &chunk in lower {
        if chunk != 0 {
            let (_, zeros) = count_native(chunk);
            return (digits, trailing_zeros + zeros);
        }
        trailing_zeros += DIGITS_PER_CHUNK;
    }

    (digits, trailing_zeros + top_zeros)
}


lazy_static! {
    static ref OPTIMIZATIONS_ENABLED: bool = detect_optimizations();
}

/// True if digit counting may use the limb-radix fast path
///
/// Decided once per process: the crate must be built with the
/// `limb-radix` feature, and the limbs of a known negative value
/// must come out as expected. Results never depend on the answer.
pub fn optimizations_enabled() -> bool {
    *OPTIMIZATIONS_ENABLED
}

#[cfg(feature = "limb-radix")]
fn detect_optimizations() -> bool {
    match self_check() {
        Ok(()) => {
            log::debug!("limb-radix digit counting enabled");
            true
        }
        Err(reason) => {
            log::warn!("limb-radix digit counting disabled: {}", reason);
            false
        }
    }
}

#[cfg(not(feature = "limb-radix"))]
fn detect_optimizations() -> bool {
    log::debug!("limb-radix digit counting disabled: crate built without the 'limb-radix' feature");
    false
}

/// Verify limb layout and decimal conversion against known values
#[cfg_attr(not(feature = "limb-radix"), allow(dead_code))]
fn self_check() -> Result<(), &'static str> {
    // -(1·2^64 + 2·2^32 + 3)
    let probe: BigInt = -((BigInt::one() << 64usize) + (BigInt::from(2u8) << 32usize) + BigInt::from(3u8));

    let limbs = Limbs::from(&probe);
    if limbs.sign() != Sign::Minus || limbs.digits() != [3, 2, 1] {
        return Err("unexpected limb layout");
    }

    let chunks = limbs.to_decimal_chunks();
    let mut formatted = String::new();
    for (i, chunk) in chunks.iter().rev().enumerate() {
        if i == 0 {
            formatted.push_str(&chunk.to_string());
        } else {
            formatted.push_str(&format!("{:09}", chunk));
        }
    }
    if formatted != probe.magnitude().to_string() {
        return Err("base 10^9 conversion does not match decimal formatting");
    }

    Ok(())
}
