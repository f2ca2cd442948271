//! The single error taxonomy shared by the encoder, decoder, and textual
//! parser/formatter. Four kinds, one type, so callers match on one thing.

use thiserror::Error as ThisError;

/// Everything that can go wrong constructing, decoding, or bridging a
/// [`crate::Decimal128`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The textual input could not be parsed as a NaN/infinity token or a
    /// signed decimal with optional fraction and exponent.
    #[error("invalid decimal128 string {input:?}: {reason}")]
    ParseError {
        input: String,
        reason: &'static str,
    },

    /// The exponent or the unscaled magnitude fell outside the representable
    /// domain (exponent in `[-6176, 6111]`, magnitude fitting in 113 bits).
    #[error("decimal128 {which} out of range: {value}")]
    OutOfRange { which: &'static str, value: String },

    /// A numeric extraction was attempted on NaN or an infinity.
    #[error("value is not finite")]
    NotFinite,

    /// A numeric extraction was attempted on a signed zero; the
    /// arbitrary-precision bridge cannot express the sign of zero.
    #[error("value is a signed zero, which has no arbitrary-precision representation")]
    NegativeZero,
}
