// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Extensions for arbitrary precision integers
//!
//! Operations on [`num_bigint::BigInt`] that the integer type itself does
//! not provide:
//!
//!  - counting decimal digits, and trailing decimal zeros, without
//!    formatting the number as a string
//!  - integer division with a choice of nine [`RoundingMode`]s
//!  - process-wide caches of the powers of small bases ([`pow_cache`])
//!
//! Digit counting uses the bit length of the value and a cached power of
//! ten. Trailing zeros are counted natively for values fitting in 64 or
//! 128 bits; larger values are converted to base 10<sup>9</sup> limbs,
//! if the limb layout passed a self-check at startup (see
//! [`optimizations_enabled`]), or formatted otherwise.
//!
//! # Example
//!
//! ```
//! use bigint_ext::{BigIntExt, RoundingMode};
//! use bigint_ext::num_bigint::BigInt;
//!
//! let n: BigInt = "-2500000000000000000000".parse().unwrap();
//! assert_eq!(n.count_digits_and_trailing_zeros(), (22, 21));
//!
//! let d: BigInt = "1000000000000000000000".parse().unwrap();
//! assert_eq!(n.div_rounded(&d, RoundingMode::MidpointToEven), BigInt::from(-2));
//! assert_eq!(n.div_rounded(&d, RoundingMode::MidpointToPositiveInfinity), BigInt::from(-2));
//! assert_eq!(n.div_rounded(&d, RoundingMode::ToNegativeInfinity), BigInt::from(-3));
//! ```
#![allow(clippy::style)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::needless_return)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[macro_use]
extern crate lazy_static;

#[cfg(feature = "serde")]
extern crate serde_crate;

include!("./with_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::f64::consts::LOG2_10;

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer as IntegerTrait;
pub use num_traits::{One, Signed, ToPrimitive, Zero};

#[cfg(test)]
extern crate paste;

mod error;
pub use error::Error;

pub mod rounding;
pub use rounding::{MidpointRounding, RoundingMode};

// divide, checked_divide
mod division;
pub use division::{checked_divide, divide};

// count_digits, count_digits_and_trailing_zeros
mod digits;
pub use digits::{count_digits, count_digits_and_trailing_zeros};

pub mod pow_cache;
pub use pow_cache::{PowCache, PowCacheRegistry};

pub mod limbs;
pub use limbs::{optimizations_enabled, Limbs};

mod ext;
pub use ext::BigIntExt;

#[cfg(feature = "serde")]
mod impl_serde;
