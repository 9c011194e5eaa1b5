//! Floating-point renderer: fixed, exponential, and general forms.
//!
//! Digit generation is hand-rolled (no host formatting library): the
//! value is split into integer and scaled-fraction parts, rounded
//! half-away-from-zero at the requested precision. Decimal count is
//! capped at 15 digits; IEEE754 specials render as `inf`/`nan` (case per
//! conversion letter). Fixed-form magnitudes at or beyond 2^63 fall back
//! to exponential form so the integer split stays exact in u64.

use crate::descriptor::FloatForm;
use crate::error::PrintError;
use crate::render::pad;
use crate::sink::Out;

/// Fixed-form cutover: past this the integer part no longer fits u64.
const FIXED_LIMIT: f64 = 9.223_372_036_854_776e18;

/// Render a float according to the descriptor's form/precision/flags.
pub fn float(out: &mut Out<'_>, value: f64) -> Result<(), PrintError> {
    if value.is_nan() {
        let name: &[u8] = if out.desc.uppercase { b"NAN" } else { b"nan" };
        return signed_field(out, name);
    }
    out.desc.negative = value.is_sign_negative();
    let abs = value.abs();
    if abs.is_infinite() {
        let name: &[u8] = if out.desc.uppercase { b"INF" } else { b"inf" };
        return signed_field(out, name);
    }

    let prec = out.desc.float_decimals() as usize;
    let mut body = Vec::with_capacity(32);
    match out.desc.form {
        FloatForm::Fixed if abs < FIXED_LIMIT => {
            fixed_body(&mut body, abs, prec, out.desc.group, out.desc.alt_form);
        }
        FloatForm::Fixed | FloatForm::Exponential => {
            exp_body(&mut body, abs, prec, out.desc.uppercase);
        }
        FloatForm::General | FloatForm::Complex => {
            general_body(&mut body, abs, prec, out.desc.uppercase, out.desc.alt_form);
        }
    }
    signed_field(out, &body)
}

/// Emit `body` with sign, zero/space padding, and field width. The sign
/// lands before any zero padding.
fn signed_field(out: &mut Out<'_>, body: &[u8]) -> Result<(), PrintError> {
    let sign: &[u8] = if out.desc.negative {
        b"-"
    } else if out.desc.plus {
        b"+"
    } else {
        b""
    };
    let content = sign.len() + body.len();
    let width = out.desc.min_width as usize;
    let fill = width.saturating_sub(content);
    // Specials (inf/nan) never zero-pad.
    let zero_fill = out.desc.zero_pad
        && !out.desc.left_just
        && !matches!(body.first(), Some(b'i') | Some(b'I') | Some(b'n') | Some(b'N'));

    if !out.desc.left_just && !zero_fill {
        pad(out, b' ', fill)?;
    }
    out.puts(sign)?;
    if zero_fill {
        pad(out, b'0', fill)?;
    }
    out.puts(body)?;
    if out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    Ok(())
}

fn push_u64(buf: &mut Vec<u8>, value: u64, group: bool) {
    let mut digits = [0u8; 20];
    let mut n = 0;
    let mut v = value;
    loop {
        digits[n] = b'0' + (v % 10) as u8;
        n += 1;
        v /= 10;
        if v == 0 {
            break;
        }
    }
    for i in (0..n).rev() {
        buf.push(digits[i]);
        if group && i > 0 && i % 3 == 0 {
            buf.push(b',');
        }
    }
}

fn pow10(n: usize) -> u64 {
    10u64.pow(n as u32)
}

/// `f`/`F`: integer part, `.`, `prec` fraction digits.
fn fixed_body(buf: &mut Vec<u8>, abs: f64, prec: usize, group: bool, alt_form: bool) {
    let scale = pow10(prec);
    let int_part = abs.trunc();
    let mut ip = int_part as u64;
    let mut frac = ((abs - int_part) * scale as f64).round() as u64;
    if frac >= scale {
        ip += 1;
        frac -= scale;
    }
    push_u64(buf, ip, group);
    if prec > 0 {
        buf.push(b'.');
        let mut div = scale / 10;
        while div > 0 {
            buf.push(b'0' + ((frac / div) % 10) as u8);
            div /= 10;
        }
    } else if alt_form {
        buf.push(b'.');
    }
}

/// `e`/`E`: normalized mantissa, `prec` fraction digits, signed 2-digit
/// exponent.
fn exp_body(buf: &mut Vec<u8>, abs: f64, prec: usize, uppercase: bool) {
    let mut exp = 0i32;
    let mut m = abs;
    if m > 0.0 {
        while m >= 10.0 {
            m /= 10.0;
            exp += 1;
        }
        while m < 1.0 {
            m *= 10.0;
            exp -= 1;
        }
    }
    let scale = pow10(prec);
    let mut mant = (m * scale as f64).round() as u64;
    if mant >= 10 * scale {
        // Rounding carried into a new leading digit (9.99... -> 10.0).
        mant /= 10;
        exp += 1;
    }
    buf.push(b'0' + (mant / scale) as u8);
    if prec > 0 {
        buf.push(b'.');
        let mut div = scale / 10;
        while div > 0 {
            buf.push(b'0' + ((mant / div) % 10) as u8);
            div /= 10;
        }
    }
    buf.push(if uppercase { b'E' } else { b'e' });
    buf.push(if exp < 0 { b'-' } else { b'+' });
    let e = exp.unsigned_abs();
    if e < 10 {
        buf.push(b'0');
        buf.push(b'0' + e as u8);
    } else {
        push_u64(buf, e as u64, false);
    }
}

/// `g`/`G`: fixed or exponential, whichever is shorter by the standard
/// exponent rule, with trailing zeros stripped unless `#` is set.
fn general_body(buf: &mut Vec<u8>, abs: f64, prec: usize, uppercase: bool, alt_form: bool) {
    let p = prec.max(1);
    let mut exp = 0i32;
    let mut m = abs;
    if m > 0.0 {
        while m >= 10.0 {
            m /= 10.0;
            exp += 1;
        }
        while m < 1.0 {
            m *= 10.0;
            exp -= 1;
        }
    }

    if exp < -4 || exp >= p as i32 {
        let mut inner = Vec::with_capacity(24);
        exp_body(&mut inner, abs, p - 1, uppercase);
        if !alt_form {
            // Strip trailing zeros from the mantissa, before the exponent.
            let epos = inner
                .iter()
                .position(|&b| b == b'e' || b == b'E')
                .unwrap_or(inner.len());
            let (mantissa, exponent) = inner.split_at(epos);
            let mut mantissa = mantissa.to_vec();
            strip_zeros(&mut mantissa);
            buf.extend_from_slice(&mantissa);
            buf.extend_from_slice(exponent);
        } else {
            buf.extend_from_slice(&inner);
        }
    } else {
        let frac = (p as i32 - 1 - exp).max(0) as usize;
        fixed_body(buf, abs, frac, false, false);
        if !alt_form {
            strip_zeros(buf);
        }
    }
}

fn strip_zeros(buf: &mut Vec<u8>) {
    if buf.contains(&b'.') {
        while buf.last() == Some(&b'0') {
            buf.pop();
        }
        if buf.last() == Some(&b'.') {
            buf.pop();
        }
    }
}
