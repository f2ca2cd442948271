//! Given a sign, an unscaled magnitude, and an exponent, produce the
//! 128-bit Form-A encoding. Never emits Form B.

use crate::error::Error;
use crate::exponent::{self, MAX_EXPONENT, MIN_EXPONENT};
use crate::significand::{self, MAX_BIT_LENGTH};
use crate::Decimal128;

/// Encode `magnitude * 10^exponent`, with `is_negative` taken as
/// authoritative for the sign (so `-0` can be represented even though
/// `magnitude` is zero).
pub(crate) fn encode(is_negative: bool, magnitude: u128, exponent: i32) -> Result<Decimal128, Error> {
    if !(MIN_EXPONENT..=MAX_EXPONENT).contains(&exponent) {
        log::warn!(
            "decimal128 encode rejected: exponent {} out of range [{}, {}]",
            exponent,
            MIN_EXPONENT,
            MAX_EXPONENT
        );
        return Err(Error::OutOfRange {
            which: "exponent",
            value: exponent.to_string(),
        });
    }

    if !significand::fits(magnitude) {
        log::warn!(
            "decimal128 encode rejected: magnitude {} exceeds {} bits",
            magnitude,
            MAX_BIT_LENGTH
        );
        return Err(Error::OutOfRange {
            which: "magnitude",
            value: magnitude.to_string(),
        });
    }

    let (sig_high, low) = significand::encode_form_a(magnitude);
    let mut high = sig_high | exponent::encode_form_a(exponent);
    if is_negative {
        high |= crate::SIGN_BIT_MASK;
    }

    Ok(Decimal128::new(high, low))
}
