//! Given a Value, recover `(is_negative, magnitude, exponent)`, or identify
//! that it was NaN/Infinity and so has no numeric reading.

use crate::error::Error;
use crate::exponent;
use crate::significand;
use crate::Decimal128;

/// Extract `(is_negative, magnitude, exponent)` from a finite Value.
/// Fails `NotFinite` for NaN/Infinity. Does *not* reject signed zero — the
/// textual formatter needs to render `-0`; callers who need the
/// arbitrary-precision bridge's stricter contract apply that check
/// themselves (see [`crate::Decimal128::to_big_decimal`]).
pub(crate) fn decode(v: &Decimal128) -> Result<(bool, u128, i32), Error> {
    if !v.is_finite() {
        return Err(Error::NotFinite);
    }

    let high = v.high();
    let low = v.low();
    let exp = exponent::decode(high);

    let magnitude = if exponent::is_form_b(high) {
        log::trace!(
            "decimal128 decode: non-canonical Form-B encoding (high={:#018x}, low={:#018x}); treating significand as zero",
            high,
            low
        );
        0
    } else {
        significand::decode_form_a(high, low)
    };

    Ok((v.is_negative(), magnitude, exp))
}
