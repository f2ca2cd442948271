//! Rust has no built-in arbitrary-precision decimal, so this is the crate's
//! stand-in for "the platform's big-decimal facility" referenced throughout
//! the encoder, decoder, and textual form: a sign-aware unscaled magnitude
//! plus an exponent. It performs no arithmetic of its own — parsing and
//! emitting base-10 digits is all a 113-bit significand ever needs.

use crate::decoder;
use crate::encoder;
use crate::error::Error;
use crate::Decimal128;

/// `unscaled * 10^exponent`, with `is_negative` authoritative over the sign
/// of zero (which `unscaled == 0` alone cannot express).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BigDecimal128 {
    pub is_negative: bool,
    pub unscaled: u128,
    pub exponent: i32,
}

impl BigDecimal128 {
    pub fn new(is_negative: bool, unscaled: u128, exponent: i32) -> Self {
        BigDecimal128 {
            is_negative,
            unscaled,
            exponent,
        }
    }

    /// Encode this value as a [`Decimal128`], per the IEEE 754-2008 BID
    /// encoding rules.
    pub fn to_decimal128(&self) -> Result<Decimal128, Error> {
        encoder::encode(self.is_negative, self.unscaled, self.exponent)
    }
}

impl Decimal128 {
    /// Project this value onto the arbitrary-precision bridge. Fails
    /// `NotFinite` for NaN/Infinity and `NegativeZero` for a signed zero,
    /// which `BigDecimal128` cannot express.
    pub fn to_big_decimal(&self) -> Result<BigDecimal128, Error> {
        let (is_negative, unscaled, exponent) = decoder::decode(self)?;
        if is_negative && unscaled == 0 {
            return Err(Error::NegativeZero);
        }
        Ok(BigDecimal128::new(is_negative, unscaled, exponent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let bd = BigDecimal128::new(true, 12345, -3);
        let v = bd.to_decimal128().unwrap();
        assert_eq!(v.to_big_decimal().unwrap(), bd);
    }

    #[test]
    fn rejects_negative_zero() {
        let bd = BigDecimal128::new(true, 0, 0);
        let v = bd.to_decimal128().unwrap();
        assert_eq!(v.to_big_decimal(), Err(Error::NegativeZero));
    }

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Decimal128::NAN.to_big_decimal(), Err(Error::NotFinite));
        assert_eq!(
            Decimal128::POSITIVE_INFINITY.to_big_decimal(),
            Err(Error::NotFinite)
        );
    }
}
