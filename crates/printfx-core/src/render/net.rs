//! Network-address renderers: IPv4 dotted quad and MAC.

use crate::error::PrintError;
use crate::render::{field, hex_digit};
use crate::sink::Out;

/// Render four dot-separated octets. Alternate form reverses byte order
/// (the `ntohl` view of a host-order word); zero padding widens each
/// octet to three digits.
pub fn ip(out: &mut Out<'_>, octets: &[u8]) -> Result<(), PrintError> {
    debug_assert_eq!(octets.len(), 4);
    let mut body = Vec::with_capacity(15);
    for i in 0..4 {
        if i > 0 {
            body.push(b'.');
        }
        let octet = if out.desc.alt_form {
            octets[3 - i]
        } else {
            octets[i]
        };
        if out.desc.zero_pad {
            body.push(b'0' + octet / 100);
            body.push(b'0' + (octet / 10) % 10);
            body.push(b'0' + octet % 10);
        } else {
            for b in octet.to_string().bytes() {
                body.push(b);
            }
        }
    }
    field(out, &body)
}

/// Render six hex byte pairs; the grouping flag inserts `:` separators,
/// case follows the conversion letter.
pub fn mac(out: &mut Out<'_>, bytes: &[u8]) -> Result<(), PrintError> {
    debug_assert_eq!(bytes.len(), 6);
    let mut body = Vec::with_capacity(17);
    for (i, &b) in bytes.iter().enumerate() {
        if i > 0 && out.desc.group {
            body.push(b':');
        }
        body.push(hex_digit(b >> 4, out.desc.uppercase));
        body.push(hex_digit(b, out.desc.uppercase));
    }
    field(out, &body)
}
