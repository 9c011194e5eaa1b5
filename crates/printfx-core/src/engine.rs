//! Format parser / dispatcher.
//!
//! Single left-to-right scan over the format string. A `%` begins a
//! conversion: modifier characters fill the Descriptor, `*` width and
//! precision are resolved from the argument cursor (width first), the
//! value argument is extracted, and the matching renderer emits through
//! the sink. Returns the logical character total; parse and sink errors
//! abort the call without rolling back prior output.

use crate::args::{Arg, ArgCursor};
use crate::descriptor::{FloatForm, Radix, SizeClass};
use crate::error::PrintError;
use crate::render::{datetime, float, hexdump, net, number, text};
use crate::sink::Out;

/// Render `fmt` with `args` into `out`. The engine's single entry point;
/// every public wrapper is a different `Out` construction feeding this.
pub fn format_into(out: &mut Out<'_>, fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    let bytes = fmt.as_bytes();
    let mut cursor = ArgCursor::new(args);
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] != b'%' {
            out.putc(bytes[pos])?;
            pos += 1;
            continue;
        }
        let directive_start = pos;
        pos += 1;
        if pos >= bytes.len() {
            return Err(PrintError::Parse {
                pos: directive_start,
                byte: b'%',
            });
        }
        if bytes[pos] == b'%' {
            out.putc(b'%')?;
            pos += 1;
            continue;
        }

        out.desc.reset_conversion();
        pos = parse_flags(out, bytes, pos)?;
        pos = parse_width(out, bytes, pos);
        pos = parse_precision(out, bytes, pos);
        while bytes.get(pos) == Some(&b'l') {
            out.desc.long_long = true;
            out.desc.size = SizeClass::DWord;
            pos += 1;
        }

        let Some(&term) = bytes.get(pos) else {
            return Err(PrintError::Parse {
                pos: directive_start,
                byte: b'%',
            });
        };
        pos += 1;

        resolve_star(out, &mut cursor)?;
        dispatch(out, term, pos - 1, &mut cursor)?;
    }
    Ok(out.total())
}

/// Flag characters and `[...]` groups, in any order before the width.
fn parse_flags(out: &mut Out<'_>, bytes: &[u8], mut pos: usize) -> Result<usize, PrintError> {
    loop {
        match bytes.get(pos) {
            Some(b'\'') => out.desc.group = true,
            Some(b'#') => out.desc.alt_form = true,
            Some(b'-') => out.desc.left_just = true,
            Some(b'0') => out.desc.zero_pad = true,
            Some(b'+') => out.desc.plus = true,
            Some(b'!') => out.desc.rel_mode = true,
            Some(b'[') => {
                pos = parse_bracket(out, bytes, pos + 1)?;
                continue;
            }
            _ => break,
        }
        pos += 1;
    }
    // Left justification discards zero padding (standard convention).
    if out.desc.left_just {
        out.desc.zero_pad = false;
    }
    Ok(pos)
}

/// `[...]` family flag group. Width, precision, and `*` are forbidden
/// inside the bracket: with the C va_list they silently desynchronized
/// the argument sequence, so they are a hard parse error here.
fn parse_bracket(out: &mut Out<'_>, bytes: &[u8], mut pos: usize) -> Result<usize, PrintError> {
    loop {
        match bytes.get(pos) {
            None => {
                return Err(PrintError::Parse {
                    pos,
                    byte: b'[',
                });
            }
            Some(b']') => return Ok(pos + 1),
            Some(b'\'') => out.desc.group = true,
            Some(b'#') => out.desc.alt_form = true,
            Some(b'-') => out.desc.left_just = true,
            Some(b'0') => out.desc.zero_pad = true,
            Some(b'+') => out.desc.plus = true,
            Some(b'!') => out.desc.rel_mode = true,
            Some(b'l') => out.desc.long_long = true,
            Some(&other) => return Err(PrintError::Parse { pos, byte: other }),
        }
        pos += 1;
    }
}

fn parse_width(out: &mut Out<'_>, bytes: &[u8], mut pos: usize) -> usize {
    if bytes.get(pos) == Some(&b'*') {
        out.desc.arg_width = true;
        return pos + 1;
    }
    while let Some(c) = bytes.get(pos) {
        if !c.is_ascii_digit() {
            break;
        }
        out.desc.min_width = out
            .desc
            .min_width
            .saturating_mul(10)
            .saturating_add((c - b'0') as u16);
        pos += 1;
    }
    pos
}

fn parse_precision(out: &mut Out<'_>, bytes: &[u8], mut pos: usize) -> usize {
    if bytes.get(pos) != Some(&b'.') {
        return pos;
    }
    pos += 1;
    if bytes.get(pos) == Some(&b'*') {
        out.desc.arg_precision = true;
        return pos + 1;
    }
    out.desc.precision_set = true;
    while let Some(c) = bytes.get(pos) {
        if !c.is_ascii_digit() {
            break;
        }
        out.desc.precision = out
            .desc
            .precision
            .saturating_mul(10)
            .saturating_add((c - b'0') as u16);
        pos += 1;
    }
    pos
}

/// Consume `*` width then `*` precision, in that order, before the value
/// argument. A negative width argument means left-justify; a negative
/// precision argument means "no precision".
fn resolve_star(out: &mut Out<'_>, cursor: &mut ArgCursor<'_, '_>) -> Result<(), PrintError> {
    if out.desc.arg_width {
        let w = cursor.next_width()?;
        if w < 0 {
            out.desc.left_just = true;
            out.desc.zero_pad = false;
        }
        out.desc.min_width = w.unsigned_abs().min(u16::MAX as u32) as u16;
    }
    if out.desc.arg_precision {
        let p = cursor.next_width()?;
        if p >= 0 {
            out.desc.precision = p.min(u16::MAX as i32) as u16;
            out.desc.precision_set = true;
        }
    }
    Ok(())
}

fn dispatch(
    out: &mut Out<'_>,
    term: u8,
    term_pos: usize,
    cursor: &mut ArgCursor<'_, '_>,
) -> Result<(), PrintError> {
    match term {
        b'd' | b'i' => {
            out.desc.signed_val = true;
            out.desc.radix_found = true;
            let v = cursor.next_i64()?;
            out.desc.negative = v < 0;
            number::integer(out, v.unsigned_abs())
        }
        b'u' => {
            out.desc.radix_found = true;
            let v = cursor.next_u64()?;
            number::integer(out, v)
        }
        b'z' => {
            out.desc.size = SizeClass::DWord;
            out.desc.radix_found = true;
            let v = cursor.next_u64()?;
            number::integer(out, v)
        }
        b'x' | b'X' => {
            out.desc.base = Radix::Hex;
            out.desc.radix_found = true;
            out.desc.uppercase = term == b'X';
            let v = cursor.next_u64()?;
            number::integer(out, v)
        }
        b'o' => {
            out.desc.base = Radix::Oct;
            out.desc.radix_found = true;
            let v = cursor.next_u64()?;
            number::integer(out, v)
        }
        b'b' | b'B' => {
            out.desc.base = Radix::Bin;
            out.desc.radix_found = true;
            out.desc.uppercase = term == b'B';
            if !out.desc.long_long {
                out.desc.size = SizeClass::Word;
            }
            let v = cursor.next_u64()?;
            number::binary(out, v)
        }
        b'f' | b'F' | b'e' | b'E' | b'g' | b'G' => {
            out.desc.signed_val = true;
            out.desc.uppercase = term.is_ascii_uppercase();
            out.desc.form = match term.to_ascii_lowercase() {
                b'f' => FloatForm::Fixed,
                b'e' => FloatForm::Exponential,
                _ => FloatForm::General,
            };
            let v = cursor.next_f64()?;
            float::float(out, v)
        }
        b'c' => {
            let c = cursor.next_char()?;
            text::chr(out, c)
        }
        b's' => {
            let s = cursor.next_str()?;
            text::string(out, s)
        }
        b'U' => {
            let s = cursor.next_str()?;
            text::url(out, s)
        }
        b'D' | b'T' | b'Z' => {
            match term {
                b'D' => {
                    out.desc.year_ok = true;
                    out.desc.mon_ok = true;
                    out.desc.mday_ok = true;
                    out.desc.dow_ok = out.desc.alt_form;
                    out.desc.no_zone = true;
                }
                b'T' => {
                    out.desc.hour_ok = true;
                    out.desc.min_ok = true;
                    out.desc.sec_ok = true;
                    out.desc.no_zone = true;
                }
                _ => {
                    out.desc.year_ok = true;
                    out.desc.mon_ok = true;
                    out.desc.mday_ok = true;
                    out.desc.dow_ok = out.desc.alt_form;
                    out.desc.hour_ok = true;
                    out.desc.min_ok = true;
                    out.desc.sec_ok = true;
                }
            }
            if out.desc.rel_mode {
                let micros = cursor.next_u64()?;
                datetime::elapsed(out, micros)
            } else {
                let t = cursor.next_time()?;
                datetime::datetime(out, t)
            }
        }
        b'I' => {
            let octets = cursor.next_bytes_exact(4)?;
            net::ip(out, octets)
        }
        b'M' | b'm' => {
            out.desc.uppercase = term == b'M';
            let mac = cursor.next_bytes_exact(6)?;
            net::mac(out, mac)
        }
        b'p' | b'P' => {
            out.desc.uppercase = term == b'P';
            let addr = cursor.next_ptr()?;
            number::pointer(out, addr)
        }
        b'h' | b'H' => {
            out.desc.uppercase = term == b'H';
            out.desc.size = if out.desc.long_long {
                SizeClass::Half
            } else {
                SizeClass::Byte
            };
            let data = cursor.next_bytes()?;
            hexdump::dump(out, data)
        }
        b'w' | b'W' => {
            out.desc.uppercase = term == b'W';
            out.desc.size = if out.desc.long_long {
                SizeClass::DWord
            } else {
                SizeClass::Word
            };
            let data = cursor.next_bytes()?;
            hexdump::dump(out, data)
        }
        b'C' => {
            let packed = cursor.next_u32()?;
            text::sgr(out, packed)
        }
        other => Err(PrintError::Parse {
            pos: term_pos,
            byte: other,
        }),
    }
}
