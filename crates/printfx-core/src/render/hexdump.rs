//! Memory hexdump renderer.
//!
//! Rows of up to 32 bytes, grouped into units of the descriptor's size
//! class. Per row: an address column (absolute pointer, or `!` relative
//! offset; `-` suppresses the column), the hex units, and with `+` an
//! ASCII sidebar (printable bytes verbatim, others as `.`). Never reads
//! past the caller's slice; a zero-length region emits framing only.

use crate::error::PrintError;
use crate::render::{HEXDUMP_WIDTH, hex_digit, pad};
use crate::sink::Out;

/// Address column: `0x`, native pointer width in hex, `: `.
fn put_addr(out: &mut Out<'_>, addr: usize) -> Result<(), PrintError> {
    out.puts(b"0x")?;
    let ndigits = (usize::BITS / 4) as usize;
    for i in (0..ndigits).rev() {
        out.putc(hex_digit((addr >> (i * 4)) as u8, out.desc.uppercase))?;
    }
    out.puts(b": ")
}

/// Separator preceding unit `i` of a row: space, or with grouping `-`
/// inside a 4-unit cluster and `|` between clusters.
fn unit_sep(group: bool, i: usize) -> u8 {
    if !group {
        b' '
    } else if i % 4 == 0 {
        b'|'
    } else {
        b'-'
    }
}

/// Render `data` as a hexdump.
pub fn dump(out: &mut Out<'_>, data: &[u8]) -> Result<(), PrintError> {
    let unit = out.desc.size.bytes();
    let base = data.as_ptr() as usize;
    let show_addr = !out.desc.left_just;
    let sidebar = out.desc.plus;
    let units_per_row = HEXDUMP_WIDTH / unit;
    let full_hex = units_per_row * unit * 2 + (units_per_row - 1);
    let multi_row = data.len() > HEXDUMP_WIDTH;

    if data.is_empty() {
        if show_addr {
            let addr = if out.desc.rel_mode { 0 } else { base };
            put_addr(out, addr)?;
        }
        return Ok(());
    }

    for (row_idx, row) in data.chunks(HEXDUMP_WIDTH).enumerate() {
        if row_idx > 0 {
            out.putc(b'\n')?;
        }
        let offset = row_idx * HEXDUMP_WIDTH;
        if show_addr {
            let addr = if out.desc.rel_mode { offset } else { base + offset };
            put_addr(out, addr)?;
        }
        let mut hex_emitted = 0usize;
        for (i, chunk) in row.chunks(unit).enumerate() {
            if i > 0 {
                out.putc(unit_sep(out.desc.group, i))?;
                hex_emitted += 1;
            }
            for &b in chunk {
                out.putc(hex_digit(b >> 4, out.desc.uppercase))?;
                out.putc(hex_digit(b, out.desc.uppercase))?;
                hex_emitted += 2;
            }
        }
        if sidebar {
            // Align the sidebar of a short final row with the rows above.
            if multi_row {
                pad(out, b' ', full_hex.saturating_sub(hex_emitted))?;
            }
            out.puts(b"  ")?;
            for &b in row {
                out.putc(if (0x20..=0x7E).contains(&b) { b } else { b'.' })?;
            }
        }
    }
    Ok(())
}
