//! Typed argument list and ordered cursor.
//!
//! Replaces the C va_list: callers collect arguments up front and the
//! dispatcher consumes them strictly left to right (width before
//! precision before value). Extraction order is therefore enforced by
//! the cursor, not by incidental call order, which removes the original
//! source's documented hazard of `*` width/precision desynchronizing
//! multi-argument directives.

use crate::error::PrintError;
use crate::time::CalendarTime;

/// One formatting argument.
///
/// Integer variants are reinterpreted, not range-checked, when a
/// conversion asks for the other signedness — matching what the C
/// engine reads out of the va_list (`%x` of a negative `int` renders
/// the two's-complement bits).
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F64(f64),
    Char(u8),
    Str(&'a str),
    /// Raw byte region: hexdump data, IP octets, MAC bytes.
    Bytes(&'a [u8]),
    /// Broken-down calendar time for `D`/`T`/`Z`.
    Time(&'a CalendarTime),
    /// Address for `p`/`P`.
    Ptr(usize),
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::I32(v)
    }
}
impl From<i64> for Arg<'_> {
    fn from(v: i64) -> Self {
        Arg::I64(v)
    }
}
impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::U32(v)
    }
}
impl From<u64> for Arg<'_> {
    fn from(v: u64) -> Self {
        Arg::U64(v)
    }
}
impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Arg::F64(v)
    }
}
impl From<u8> for Arg<'_> {
    fn from(v: u8) -> Self {
        Arg::Char(v)
    }
}
impl<'a> From<&'a str> for Arg<'a> {
    fn from(v: &'a str) -> Self {
        Arg::Str(v)
    }
}
impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(v: &'a [u8]) -> Self {
        Arg::Bytes(v)
    }
}
impl<'a> From<&'a CalendarTime> for Arg<'a> {
    fn from(v: &'a CalendarTime) -> Self {
        Arg::Time(v)
    }
}

/// Ordered cursor over the argument list.
#[derive(Debug)]
pub struct ArgCursor<'a, 'b> {
    args: &'b [Arg<'a>],
    index: usize,
}

impl<'a, 'b> ArgCursor<'a, 'b> {
    pub fn new(args: &'b [Arg<'a>]) -> Self {
        ArgCursor { args, index: 0 }
    }

    /// Index of the next argument to be consumed.
    pub fn position(&self) -> usize {
        self.index
    }

    fn next(&mut self) -> Result<Arg<'a>, PrintError> {
        let arg = self
            .args
            .get(self.index)
            .copied()
            .ok_or(PrintError::MissingArg { index: self.index })?;
        self.index += 1;
        Ok(arg)
    }

    fn mismatch(&self, expected: &'static str) -> PrintError {
        PrintError::ArgMismatch {
            index: self.index - 1,
            expected,
        }
    }

    /// Signed value for `d`/`i`.
    pub fn next_i64(&mut self) -> Result<i64, PrintError> {
        match self.next()? {
            Arg::I32(v) => Ok(v as i64),
            Arg::I64(v) => Ok(v),
            _ => Err(self.mismatch("signed integer")),
        }
    }

    /// Unsigned value for `u`/`z`/`x`/`o`/`b`; signed inputs are
    /// reinterpreted bit-for-bit.
    pub fn next_u64(&mut self) -> Result<u64, PrintError> {
        match self.next()? {
            Arg::U32(v) => Ok(v as u64),
            Arg::U64(v) => Ok(v),
            Arg::I32(v) => Ok(v as u32 as u64),
            Arg::I64(v) => Ok(v as u64),
            Arg::Char(v) => Ok(v as u64),
            _ => Err(self.mismatch("unsigned integer")),
        }
    }

    /// 32-bit value for the SGR directive.
    pub fn next_u32(&mut self) -> Result<u32, PrintError> {
        match self.next()? {
            Arg::U32(v) => Ok(v),
            Arg::I32(v) => Ok(v as u32),
            _ => Err(self.mismatch("u32")),
        }
    }

    pub fn next_f64(&mut self) -> Result<f64, PrintError> {
        match self.next()? {
            Arg::F64(v) => Ok(v),
            _ => Err(self.mismatch("float")),
        }
    }

    pub fn next_char(&mut self) -> Result<u8, PrintError> {
        match self.next()? {
            Arg::Char(v) => Ok(v),
            Arg::I32(v) if (0..=255).contains(&v) => Ok(v as u8),
            _ => Err(self.mismatch("char")),
        }
    }

    pub fn next_str(&mut self) -> Result<&'a str, PrintError> {
        match self.next()? {
            Arg::Str(v) => Ok(v),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn next_bytes(&mut self) -> Result<&'a [u8], PrintError> {
        match self.next()? {
            Arg::Bytes(v) => Ok(v),
            _ => Err(self.mismatch("byte slice")),
        }
    }

    /// Byte slice of an exact length (IP = 4, MAC = 6).
    pub fn next_bytes_exact(&mut self, len: usize) -> Result<&'a [u8], PrintError> {
        let bytes = self.next_bytes()?;
        if bytes.len() != len {
            return Err(PrintError::ArgMismatch {
                index: self.index - 1,
                expected: if len == 4 {
                    "4 address octets"
                } else {
                    "6 MAC bytes"
                },
            });
        }
        Ok(bytes)
    }

    pub fn next_time(&mut self) -> Result<&'a CalendarTime, PrintError> {
        match self.next()? {
            Arg::Time(v) => Ok(v),
            _ => Err(self.mismatch("calendar time")),
        }
    }

    pub fn next_ptr(&mut self) -> Result<usize, PrintError> {
        match self.next()? {
            Arg::Ptr(v) => Ok(v),
            _ => Err(self.mismatch("pointer")),
        }
    }

    /// `*` width/precision argument: a plain int, possibly negative.
    pub fn next_width(&mut self) -> Result<i32, PrintError> {
        match self.next()? {
            Arg::I32(v) => Ok(v),
            Arg::U32(v) if v <= i32::MAX as u32 => Ok(v as i32),
            _ => Err(self.mismatch("width int")),
        }
    }
}
