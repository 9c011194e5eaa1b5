//! # printfx
//!
//! Public entry points for the extended formatted-output engine: one
//! thin wrapper per destination kind, all driving the same interpreter
//! in `printfx-core`. Every wrapper returns the logical output length,
//! which for bounded sinks can exceed the number of bytes written.
//!
//! This crate is the only place raw descriptors are touched; everything
//! below it is `#![deny(unsafe_code)]`.

use std::io::{self, Write};
use std::os::fd::RawFd;

use printfx_core::{Out, SinkKind, console_lock, format_into};

pub use printfx_core::{
    Arg, ArgCursor, CalendarTime, Descriptor, FloatForm, GrowBuf, PrintError, Radix, SinkError,
    SizeClass, SocketTx,
};

/// Format into a new `String`.
///
/// The engine emits bytes, not characters: a `%c` directive with a
/// non-ASCII byte can yield invalid UTF-8, and those sequences come back
/// as U+FFFD here. Callers that need the raw bytes unchanged should
/// format through [`uprintfx`] instead.
pub fn sprintfx(fmt: &str, args: &[Arg<'_>]) -> Result<String, PrintError> {
    let mut buf = GrowBuf::new();
    uprintfx(&mut buf, fmt, args)?;
    Ok(String::from_utf8_lossy(buf.as_bytes()).into_owned())
}

/// Format into a fixed buffer, truncating at its capacity. Returns the
/// logical (untruncated) length, snprintf-style.
pub fn snprintfx(buf: &mut [u8], fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    let mut out = Out::new(SinkKind::Str { buf, pos: 0 }, 0);
    format_into(&mut out, fmt, args)
}

/// Format into a growable buffer object, appending.
pub fn uprintfx(buf: &mut GrowBuf, fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    let mut out = Out::new(SinkKind::Buffer(buf), 0);
    format_into(&mut out, fmt, args)
}

/// Format to any stream.
pub fn fprintfx<W: io::Write>(
    writer: &mut W,
    fmt: &str,
    args: &[Arg<'_>],
) -> Result<usize, PrintError> {
    let mut out = Out::new(SinkKind::Stream(writer), 0);
    format_into(&mut out, fmt, args)
}

/// Format to a raw file descriptor.
pub fn dprintfx(fd: RawFd, fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    let mut writer = FdWriter { fd };
    fprintfx(&mut writer, fmt, args)
}

/// Format through a device put-character callback.
pub fn devprintfx(
    putc: &mut dyn FnMut(u8) -> Result<(), SinkError>,
    fmt: &str,
    args: &[Arg<'_>],
) -> Result<usize, PrintError> {
    let mut out = Out::new(SinkKind::Device(putc), 0);
    format_into(&mut out, fmt, args)
}

/// Format to a socket context.
pub fn socprintfx(
    sock: &mut dyn SocketTx,
    fmt: &str,
    args: &[Arg<'_>],
) -> Result<usize, PrintError> {
    let mut out = Out::new(SinkKind::Socket(sock), 0);
    format_into(&mut out, fmt, args)
}

/// Format to the console, serialized by the process-wide lock.
pub fn printfx(fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    console_emit(0, fmt, args)
}

/// Console output with an emission cap; characters past `max_len` are
/// counted but not written.
pub fn nprintfx(max_len: u16, fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    console_emit(max_len, fmt, args)
}

/// Direct console output. Same lock and same path as [`printfx`]; kept
/// as a distinct name for call sites that must state they bypass any
/// application-level output layering.
pub fn cprintfx(fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    console_emit(0, fmt, args)
}

fn console_emit(max_len: u16, fmt: &str, args: &[Arg<'_>]) -> Result<usize, PrintError> {
    let _guard = console_lock();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let total = {
        let mut out = Out::new(SinkKind::Stream(&mut handle), max_len);
        format_into(&mut out, fmt, args)?
    };
    handle.flush().map_err(|e| PrintError::Sink {
        written: total,
        source: SinkError::Io(e),
    })?;
    Ok(total)
}

/// Minimal `io::Write` over a raw descriptor.
struct FdWriter {
    fd: RawFd,
}

impl io::Write for FdWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        // SAFETY: the buffer is a valid borrowed slice; the descriptor's
        // validity is the caller's contract, as with write(2) itself.
        let n = unsafe { libc::write(self.fd, buf.as_ptr().cast(), buf.len()) };
        if n < 0 {
            Err(io::Error::last_os_error())
        } else {
            Ok(n as usize)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
