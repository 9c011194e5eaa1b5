//! Integer, binary-string, and pointer renderers.
//!
//! Digits are generated right-aligned into a fixed stack buffer, then
//! emitted with grouping, sign, prefix, and padding applied. Bases
//! 2/8/10/16, 32- and 64-bit widths, forced sign, zero/space pad,
//! upper/lower hex digits.

use crate::descriptor::Radix;
use crate::error::PrintError;
use crate::render::{hex_digit, pad};
use crate::sink::Out;

/// Scratch large enough for 64 binary digits.
const DIGIT_BUF: usize = 64;

/// Group size and separator per base: thousands for decimal, nibble
/// groups for the power-of-two bases.
fn grouping(base: Radix) -> (usize, u8) {
    match base {
        Radix::Dec => (3, b','),
        _ => (4, b'_'),
    }
}

/// Right-align `value` in `base` into `buf`; returns the digit count.
fn render_digits(mut value: u64, base: u64, uppercase: bool, buf: &mut [u8; DIGIT_BUF]) -> usize {
    if value == 0 {
        buf[DIGIT_BUF - 1] = b'0';
        return 1;
    }
    let mut pos = DIGIT_BUF;
    while value > 0 {
        pos -= 1;
        buf[pos] = hex_digit((value % base) as u8, uppercase);
        value /= base;
    }
    DIGIT_BUF - pos
}

/// Render an integer magnitude according to the descriptor.
///
/// The dispatcher extracts the argument, records signedness in
/// `desc.negative`, and passes the magnitude; this keeps `i64::MIN`
/// exact (its magnitude fits in u64).
pub fn integer(out: &mut Out<'_>, magnitude: u64) -> Result<(), PrintError> {
    let base = out.desc.base;
    let mut digits = [0u8; DIGIT_BUF];
    let ndigits = render_digits(magnitude, base.value(), out.desc.uppercase, &mut digits);
    let digit_slice = &digits[DIGIT_BUF - ndigits..];

    // Precision acts as a minimum digit count; explicit 0 with value 0
    // suppresses all digits.
    let min_digits = if out.desc.precision_set {
        out.desc.precision as usize
    } else {
        1
    };
    let suppress = magnitude == 0 && out.desc.precision_set && out.desc.precision == 0;
    let zero_prefix = min_digits.saturating_sub(ndigits);

    let sign: &[u8] = if out.desc.negative {
        b"-"
    } else if out.desc.plus && out.desc.signed_val {
        b"+"
    } else {
        b""
    };
    let prefix: &[u8] = if out.desc.alt_form && magnitude != 0 {
        match (base, out.desc.uppercase) {
            (Radix::Hex, false) => b"0x",
            (Radix::Hex, true) => b"0X",
            (Radix::Oct, _) => b"0",
            (Radix::Bin, _) => b"0b",
            _ => b"",
        }
    } else {
        b""
    };

    let (group_n, group_sep) = grouping(base);
    let separators = if out.desc.group && !suppress {
        (zero_prefix + ndigits - 1) / group_n
    } else {
        0
    };

    let content = if suppress {
        sign.len() + prefix.len()
    } else {
        sign.len() + prefix.len() + zero_prefix + ndigits + separators
    };
    let width = out.desc.min_width as usize;
    let fill = width.saturating_sub(content);

    let zero_fill = out.desc.zero_pad && !out.desc.left_just;
    if !out.desc.left_just && !zero_fill {
        pad(out, b' ', fill)?;
    }
    out.puts(sign)?;
    out.puts(prefix)?;
    if zero_fill {
        pad(out, b'0', fill)?;
    }
    if !suppress {
        // Precision zeros participate in grouping along with the digits.
        let total_digits = zero_prefix + ndigits;
        for i in 0..total_digits {
            let remaining = total_digits - i;
            if out.desc.group && i > 0 && remaining % group_n == 0 {
                out.putc(group_sep)?;
            }
            if i < zero_prefix {
                out.putc(b'0')?;
            } else {
                out.putc(digit_slice[i - zero_prefix])?;
            }
        }
    }
    if out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    Ok(())
}

/// Render a fixed-width binary string: 32 or 64 bits by size class, with
/// the grouping flag inserting `-` between nibbles, `|` between bytes,
/// and a space between half-words:
/// `1010-1010|1010-1010 1010-1010|1010-1010`.
pub fn binary(out: &mut Out<'_>, value: u64) -> Result<(), PrintError> {
    let bits = out.desc.size.bytes() * 8;

    // One separator before every nibble boundary except the first.
    let separators = if out.desc.group { bits / 4 - 1 } else { 0 };
    let content = bits + separators;
    let width = out.desc.min_width as usize;
    let fill = width.saturating_sub(content);

    if !out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    for i in 0..bits {
        if out.desc.group && i > 0 {
            if i % 16 == 0 {
                out.putc(b' ')?;
            } else if i % 8 == 0 {
                out.putc(b'|')?;
            } else if i % 4 == 0 {
                out.putc(b'-')?;
            }
        }
        let bit = (value >> (bits - 1 - i)) & 1;
        out.putc(b'0' + bit as u8)?;
    }
    if out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    Ok(())
}

/// Render an address as `0x` plus zero-padded native-width hex digits.
pub fn pointer(out: &mut Out<'_>, addr: usize) -> Result<(), PrintError> {
    let ndigits = (usize::BITS / 4) as usize;
    let content = 2 + ndigits;
    let width = out.desc.min_width as usize;
    let fill = width.saturating_sub(content);

    if !out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    out.puts(b"0x")?;
    for i in (0..ndigits).rev() {
        out.putc(hex_digit((addr >> (i * 4)) as u8, out.desc.uppercase))?;
    }
    if out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::SizeClass;
    use crate::sink::{GrowBuf, Out, SinkKind};

    fn capture(f: impl FnOnce(&mut Out<'_>)) -> String {
        let mut gb = GrowBuf::new();
        {
            let mut out = Out::new(SinkKind::Buffer(&mut gb), 0);
            f(&mut out);
        }
        String::from_utf8(gb.into_bytes()).unwrap()
    }

    #[test]
    fn test_plain_decimal() {
        assert_eq!(capture(|o| integer(o, 42).unwrap()), "42");
        assert_eq!(capture(|o| integer(o, 0).unwrap()), "0");
    }

    #[test]
    fn test_width_and_zero_pad() {
        let s = capture(|o| {
            o.desc.min_width = 5;
            integer(o, 42).unwrap();
        });
        assert_eq!(s, "   42");
        let s = capture(|o| {
            o.desc.min_width = 5;
            o.desc.zero_pad = true;
            integer(o, 42).unwrap();
        });
        assert_eq!(s, "00042");
    }

    #[test]
    fn test_left_justify_wins_over_zero_pad() {
        let s = capture(|o| {
            o.desc.min_width = 5;
            o.desc.zero_pad = true;
            o.desc.left_just = true;
            integer(o, 42).unwrap();
        });
        assert_eq!(s, "42   ");
    }

    #[test]
    fn test_negative_sign_before_zeros() {
        let s = capture(|o| {
            o.desc.min_width = 6;
            o.desc.zero_pad = true;
            o.desc.negative = true;
            o.desc.signed_val = true;
            integer(o, 42).unwrap();
        });
        assert_eq!(s, "-00042");
    }

    #[test]
    fn test_forced_sign() {
        let s = capture(|o| {
            o.desc.plus = true;
            o.desc.signed_val = true;
            integer(o, 42).unwrap();
        });
        assert_eq!(s, "+42");
    }

    #[test]
    fn test_decimal_grouping() {
        let s = capture(|o| {
            o.desc.group = true;
            integer(o, 1_234_567).unwrap();
        });
        assert_eq!(s, "1,234,567");
        let s = capture(|o| {
            o.desc.group = true;
            integer(o, 123).unwrap();
        });
        assert_eq!(s, "123");
    }

    #[test]
    fn test_hex_grouping_and_case() {
        let s = capture(|o| {
            o.desc.base = Radix::Hex;
            o.desc.group = true;
            integer(o, 0xDEAD_BEEF).unwrap();
        });
        assert_eq!(s, "dead_beef");
        let s = capture(|o| {
            o.desc.base = Radix::Hex;
            o.desc.uppercase = true;
            integer(o, 0xFF).unwrap();
        });
        assert_eq!(s, "FF");
    }

    #[test]
    fn test_alt_form_prefixes() {
        let s = capture(|o| {
            o.desc.base = Radix::Hex;
            o.desc.alt_form = true;
            integer(o, 255).unwrap();
        });
        assert_eq!(s, "0xff");
        let s = capture(|o| {
            o.desc.base = Radix::Oct;
            o.desc.alt_form = true;
            integer(o, 8).unwrap();
        });
        assert_eq!(s, "010");
        // No prefix for zero.
        let s = capture(|o| {
            o.desc.base = Radix::Hex;
            o.desc.alt_form = true;
            integer(o, 0).unwrap();
        });
        assert_eq!(s, "0");
    }

    #[test]
    fn test_precision_min_digits() {
        let s = capture(|o| {
            o.desc.precision = 5;
            o.desc.precision_set = true;
            integer(o, 42).unwrap();
        });
        assert_eq!(s, "00042");
        // Explicit zero precision with zero value: nothing.
        let s = capture(|o| {
            o.desc.precision = 0;
            o.desc.precision_set = true;
            integer(o, 0).unwrap();
        });
        assert_eq!(s, "");
    }

    #[test]
    fn test_round_trip_all_bases() {
        for &value in &[0u64, 1, 7, 42, 255, 65_535, 123_456_789, u64::MAX] {
            for base in [Radix::Bin, Radix::Oct, Radix::Dec, Radix::Hex] {
                let s = capture(|o| {
                    o.desc.base = base;
                    integer(o, value).unwrap();
                });
                let parsed = u64::from_str_radix(&s, base.value() as u32).unwrap();
                assert_eq!(parsed, value, "base {base:?}");
            }
        }
    }

    #[test]
    fn test_binary_grouped_pattern() {
        let s = capture(|o| {
            o.desc.group = true;
            binary(o, 0xAAAA_AAAA).unwrap();
        });
        assert_eq!(s, "1010-1010|1010-1010 1010-1010|1010-1010");
    }

    #[test]
    fn test_binary_plain_64() {
        let s = capture(|o| {
            o.desc.size = SizeClass::DWord;
            binary(o, 1).unwrap();
        });
        assert_eq!(s.len(), 64);
        assert!(s.starts_with("000"));
        assert!(s.ends_with('1'));
    }

    #[test]
    fn test_pointer_fixed_width() {
        let s = capture(|o| pointer(o, 0xDEAD).unwrap());
        let width = (usize::BITS / 4) as usize;
        assert_eq!(s, format!("0x{:0width$x}", 0xDEADusize));
        let s = capture(|o| {
            o.desc.uppercase = true;
            pointer(o, 0xDEAD).unwrap();
        });
        assert!(s.contains("DEAD"));
    }
}
