//! String, character, URL-encode, and SGR renderers.

use crate::error::PrintError;
use crate::render::field;
use crate::sink::Out;

/// `s`: precision truncates, width pads.
pub fn string(out: &mut Out<'_>, s: &str) -> Result<(), PrintError> {
    let bytes = s.as_bytes();
    let cap = if out.desc.precision_set {
        bytes.len().min(out.desc.precision as usize)
    } else {
        bytes.len()
    };
    field(out, &bytes[..cap])
}

/// `c`: a single character inside the field.
pub fn chr(out: &mut Out<'_>, c: u8) -> Result<(), PrintError> {
    field(out, &[c])
}

/// `U`: percent-encode every non-alphanumeric byte as `%XX`.
pub fn url(out: &mut Out<'_>, s: &str) -> Result<(), PrintError> {
    let mut body = Vec::with_capacity(s.len() * 3);
    for &b in s.as_bytes() {
        if b.is_ascii_alphanumeric() {
            body.push(b);
        } else {
            body.push(b'%');
            body.push(crate::render::hex_digit(b >> 4, true));
            body.push(crate::render::hex_digit(b, true));
        }
    }
    field(out, &body)
}

/// `C`: ANSI SGR sequence from four 8-bit sub-codes packed into a u32
/// (high byte first). Zero sub-codes are omitted; all zero renders the
/// reset sequence.
pub fn sgr(out: &mut Out<'_>, packed: u32) -> Result<(), PrintError> {
    let codes = [
        (packed >> 24) as u8,
        (packed >> 16) as u8,
        (packed >> 8) as u8,
        packed as u8,
    ];
    let mut body = Vec::with_capacity(19);
    body.extend_from_slice(b"\x1b[");
    let mut any = false;
    for &c in &codes {
        if c == 0 {
            continue;
        }
        if any {
            body.push(b';');
        }
        for b in c.to_string().bytes() {
            body.push(b);
        }
        any = true;
    }
    if !any {
        body.push(b'0');
    }
    body.push(b'm');
    out.puts(&body)
}
