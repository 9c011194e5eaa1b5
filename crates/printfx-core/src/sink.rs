//! Sink multiplexer: one emit primitive, N destinations.
//!
//! Every renderer emits through [`Out::putc`]; the destination behind it
//! is a tagged variant per sink kind, replacing the C source's
//! union-of-raw-pointers context (`xpc_t`) with borrowed references.
//! Truncation accounting lives here: once the `max_len` cap or a fixed
//! buffer's capacity is reached, characters are counted but not written,
//! and the call still reports the logical (untruncated) total.

use std::io;

use parking_lot::{Mutex, MutexGuard};

use crate::descriptor::Descriptor;
use crate::error::{PrintError, SinkError};

/// Socket boundary: accept one byte, report bytes-written-or-error.
///
/// The concrete socket stack is an external collaborator; this is the
/// whole contract the engine needs from it.
pub trait SocketTx {
    fn send(&mut self, byte: u8) -> Result<usize, SinkError>;
}

/// Growable buffer object sink.
///
/// Growth policy is internal to the buffer (amortized doubling); the
/// formatter only ever appends one byte at a time.
#[derive(Debug, Default)]
pub struct GrowBuf {
    data: Vec<u8>,
}

impl GrowBuf {
    pub fn new() -> Self {
        GrowBuf::default()
    }

    /// Pre-sized buffer; `capacity` is a hint, not a cap.
    pub fn with_capacity(capacity: usize) -> Self {
        GrowBuf {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, byte: u8) {
        self.data.push(byte);
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

/// Destination variants. One case per sink kind, each holding only the
/// borrowed state that kind needs.
pub enum SinkKind<'a> {
    /// Fixed caller buffer with a write cursor; overflow counts without
    /// writing (snprintf truncation semantics).
    Str { buf: &'a mut [u8], pos: usize },
    /// Growable buffer object.
    Buffer(&'a mut GrowBuf),
    /// Any stream; bytes are forwarded one at a time.
    Stream(&'a mut dyn io::Write),
    /// Device put-character callback.
    Device(&'a mut dyn FnMut(u8) -> Result<(), SinkError>),
    /// Socket context.
    Socket(&'a mut dyn SocketTx),
    /// Counts only; renders nowhere.
    Count,
}

impl std::fmt::Debug for SinkKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SinkKind::Str { .. } => "Str",
            SinkKind::Buffer(_) => "Buffer",
            SinkKind::Stream(_) => "Stream",
            SinkKind::Device(_) => "Device",
            SinkKind::Socket(_) => "Socket",
            SinkKind::Count => "Count",
        };
        f.write_str(name)
    }
}

/// Sink context for one formatting call: destination, the call's
/// Descriptor, and the logical length counter. Created at call entry,
/// discarded at return.
#[derive(Debug)]
pub struct Out<'a> {
    sink: SinkKind<'a>,
    pub desc: Descriptor,
    total: usize,
}

impl<'a> Out<'a> {
    /// `max_len` caps emitted characters for the whole call; 0 = unlimited.
    pub fn new(sink: SinkKind<'a>, max_len: u16) -> Self {
        Out {
            sink,
            desc: Descriptor::new(max_len),
            total: 0,
        }
    }

    /// Logical characters produced so far (includes truncated ones).
    pub fn total(&self) -> usize {
        self.total
    }

    /// For the fixed-buffer sink: bytes actually written.
    pub fn written(&self) -> usize {
        match self.sink {
            SinkKind::Str { pos, .. } => pos,
            _ => self.desc.cur_len as usize,
        }
    }

    /// Accept one character for this call's sink.
    ///
    /// Always advances the logical total. Physically emits only while the
    /// `max_len` cap (and, for the fixed-buffer sink, capacity) allows;
    /// a destination rejection aborts the call.
    pub fn putc(&mut self, byte: u8) -> Result<(), PrintError> {
        if self.desc.max_len > 0 && self.desc.cur_len >= self.desc.max_len {
            self.total += 1;
            return Ok(());
        }
        let result: Result<bool, SinkError> = match &mut self.sink {
            SinkKind::Str { buf, pos } => {
                if *pos < buf.len() {
                    buf[*pos] = byte;
                    *pos += 1;
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            SinkKind::Buffer(gb) => {
                gb.push(byte);
                Ok(true)
            }
            SinkKind::Stream(w) => match w.write(&[byte]) {
                Ok(0) => Err(SinkError::ZeroWrite),
                Ok(_) => Ok(true),
                Err(e) => Err(SinkError::Io(e)),
            },
            SinkKind::Device(putc) => putc(byte).map(|()| true),
            SinkKind::Socket(sock) => match sock.send(byte) {
                Ok(0) => Err(SinkError::ZeroWrite),
                Ok(_) => Ok(true),
                Err(e) => Err(e),
            },
            SinkKind::Count => Ok(true),
        };
        match result {
            Ok(emitted) => {
                if emitted {
                    self.desc.cur_len = self.desc.cur_len.saturating_add(1);
                }
                self.total += 1;
                Ok(())
            }
            Err(source) => Err(PrintError::Sink {
                written: self.total,
                source,
            }),
        }
    }

    /// Emit a byte slice through the single-character primitive.
    pub fn puts(&mut self, bytes: &[u8]) -> Result<(), PrintError> {
        for &b in bytes {
            self.putc(b)?;
        }
        Ok(())
    }
}

/// Process-wide console serialization lock.
///
/// Held around the entire emission of a console call so interleaved
/// calls from different threads cannot interleave their characters.
/// Scoped acquisition: the guard releases on every exit path.
static CONSOLE_LOCK: Mutex<()> = Mutex::new(());

pub fn console_lock() -> MutexGuard<'static, ()> {
    CONSOLE_LOCK.lock()
}
