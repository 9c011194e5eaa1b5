//! Renderer library.
//!
//! Independent value-to-character converters. Each receives the filled
//! Descriptor (inside [`Out`]) plus the already-extracted argument and
//! emits through the single `putc` primitive, so every renderer works
//! against every sink.

pub mod datetime;
pub mod float;
pub mod hexdump;
pub mod net;
pub mod number;
pub mod text;

use crate::error::PrintError;
use crate::sink::Out;

/// Hard cap on float decimal digits.
pub const MAX_DECIMALS: u16 = 15;
/// Default float decimal digits when no precision is given.
pub const DEFAULT_DECIMALS: u16 = 6;

/// Hexdump row width in bytes.
pub const HEXDUMP_WIDTH: usize = 32;

pub(crate) fn pad(out: &mut Out<'_>, byte: u8, count: usize) -> Result<(), PrintError> {
    for _ in 0..count {
        out.putc(byte)?;
    }
    Ok(())
}

pub(crate) fn hex_digit(nibble: u8, uppercase: bool) -> u8 {
    let n = nibble & 0xF;
    if n < 10 {
        b'0' + n
    } else if uppercase {
        b'A' + n - 10
    } else {
        b'a' + n - 10
    }
}

/// Emit `content` inside the descriptor's field: space padding to
/// `min_width`, side chosen by the left-justify flag. Zero padding is a
/// numeric-renderer concern and is ignored here (and when a caller
/// requests both, left-justify wins — standard printf convention).
pub(crate) fn field(out: &mut Out<'_>, content: &[u8]) -> Result<(), PrintError> {
    let width = out.desc.min_width as usize;
    let fill = width.saturating_sub(content.len());
    if !out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    out.puts(content)?;
    if out.desc.left_just {
        pad(out, b' ', fill)?;
    }
    Ok(())
}
