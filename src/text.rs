//! Parse a canonical/liberal decimal string into a [`Decimal128`]; render a
//! [`Decimal128`] into its canonical string.

use crate::decoder;
use crate::encoder;
use crate::error::Error;
use crate::significand;
use crate::Decimal128;

const NAN_TOKENS: &[&str] = &["nan"];
const POSITIVE_INFINITY_TOKENS: &[&str] = &["inf", "+inf", "infinity", "+infinity"];
const NEGATIVE_INFINITY_TOKENS: &[&str] = &["-inf", "-infinity"];

/// Parse `input` as a decimal128 string: NaN/infinity tokens first, then a
/// signed decimal with optional fraction and `E`-exponent, per the IEEE
/// 754-2008 decimal character sequence grammar.
pub(crate) fn parse(input: &str) -> Result<Decimal128, Error> {
    if input.is_empty() {
        return Err(Error::ParseError {
            input: input.to_string(),
            reason: "empty string",
        });
    }

    let folded = input.to_ascii_lowercase();
    if NAN_TOKENS.contains(&folded.as_str()) {
        return Ok(Decimal128::NAN);
    }
    if POSITIVE_INFINITY_TOKENS.contains(&folded.as_str()) {
        return Ok(Decimal128::POSITIVE_INFINITY);
    }
    if NEGATIVE_INFINITY_TOKENS.contains(&folded.as_str()) {
        return Ok(Decimal128::NEGATIVE_INFINITY);
    }

    let (is_negative, magnitude, exponent) = parse_numeric(input)?;
    encoder::encode(is_negative, magnitude, exponent)
}

/// Parse the `(is_negative, magnitude, exponent)` triple out of a signed
/// decimal literal. `input`'s leading character is the sole source of
/// `is_negative`, so `-0` is preserved even though the magnitude is zero.
fn parse_numeric(input: &str) -> Result<(bool, u128, i32), Error> {
    let parse_error = |reason: &'static str| Error::ParseError {
        input: input.to_string(),
        reason,
    };

    let is_negative = input.starts_with('-');
    let body = if is_negative || input.starts_with('+') {
        &input[1..]
    } else {
        input
    };
    if body.is_empty() {
        return Err(parse_error("missing digits after sign"));
    }

    let (mantissa, exp_part) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };

    let exp_from_e: i32 = match exp_part {
        Some(e) if !e.is_empty() => e
            .parse::<i32>()
            .map_err(|_| parse_error("malformed exponent"))?,
        Some(_) => return Err(parse_error("missing digits after exponent marker")),
        None => 0,
    };

    let mut dot_parts = mantissa.splitn(2, '.');
    let int_part = dot_parts.next().unwrap_or("");
    let frac_part = dot_parts.next();
    if mantissa.matches('.').count() > 1 {
        return Err(parse_error("more than one decimal point"));
    }

    let frac_part = frac_part.unwrap_or("");
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(parse_error("no digits in mantissa"));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(parse_error("non-digit character in mantissa"));
    }

    let digits: String = format!("{int_part}{frac_part}");
    let magnitude: u128 = digits.parse().map_err(|_| Error::OutOfRange {
        which: "magnitude",
        value: digits.clone(),
    })?;

    let exponent = exp_from_e
        .checked_sub(frac_part.len() as i32)
        .ok_or_else(|| parse_error("exponent overflow"))?;

    Ok((is_negative, magnitude, exponent))
}

/// Render `v` in its canonical decimal128 string form, per the IEEE
/// 754-2008 `to-scientific-string` conversion rules.
pub(crate) fn format(v: &Decimal128) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v.is_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }

    // Finite: decode without the negative-zero gate, since `-0` is a valid
    // formatting target even though it can't cross the arbitrary-precision
    // bridge.
    let (is_negative, magnitude, exponent) =
        decoder::decode(v).expect("already ruled out NaN/Infinity above");

    let digits = significand::digits(magnitude);
    let len = digits.len() as i32;
    let adjusted = exponent + len - 1;

    let mut out = String::new();
    if is_negative {
        out.push('-');
    }

    if exponent <= 0 && adjusted >= -6 {
        if exponent == 0 {
            out.push_str(&digits);
        } else {
            let pad = -exponent - len;
            if pad >= 0 {
                out.push_str("0.");
                for _ in 0..pad {
                    out.push('0');
                }
                out.push_str(&digits);
            } else {
                let split_at = (len + exponent) as usize;
                out.push_str(&digits[..split_at]);
                out.push('.');
                out.push_str(&digits[split_at..]);
            }
        }
    } else {
        let mut chars = digits.chars();
        out.push(chars.next().expect("digits is never empty"));
        let rest: String = chars.collect();
        if !rest.is_empty() {
            out.push('.');
            out.push_str(&rest);
        }
        out.push('E');
        if adjusted > 0 {
            out.push('+');
        }
        out.push_str(&adjusted.to_string());
    }

    out
}
