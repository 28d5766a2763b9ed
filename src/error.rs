//! Error type shared by all operations

use crate::stdlib::string::String;

/// Reasons an operation refused its arguments
///
/// Every variant is a caller error detected before any arithmetic is
/// performed; no partial results are ever returned alongside one.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Power caches exist only for bases 3 through 10 (use shifts for powers of two)
    #[error("basis {basis} out of range, expected a value between 3 and 10")]
    BasisOutOfRange {
        /// the rejected basis
        basis: u32,
    },

    /// Ordinal does not name a rounding mode
    #[error("unsupported rounding mode '{ordinal}'")]
    UnsupportedRoundingMode {
        /// the rejected ordinal
        ordinal: u8,
    },

    /// String does not name a rounding mode
    #[error("unsupported rounding mode '{name}'")]
    UnsupportedRoundingModeName {
        /// the rejected name
        name: String,
    },

    /// Divisor was zero
    #[error("division by zero")]
    DivisionByZero,
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_basis_out_of_range() {
        let err = Error::BasisOutOfRange { basis: 2 };
        assert_eq!(err.to_string(), "basis 2 out of range, expected a value between 3 and 10");
    }

    #[test]
    fn display_unsupported_mode() {
        let err = Error::UnsupportedRoundingMode { ordinal: 9 };
        assert_eq!(err.to_string(), "unsupported rounding mode '9'");

        let err = Error::UnsupportedRoundingModeName { name: "HalfUp".into() };
        assert_eq!(err.to_string(), "unsupported rounding mode 'HalfUp'");
    }
}
