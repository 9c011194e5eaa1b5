//! # printfx-core
//!
//! Clean-room safe-Rust implementation of the printfx extended
//! formatted-output engine: one format-string interpreter shared by every
//! destination sink (string, growable buffer, stream, descriptor, device
//! callback, socket, locked console).
//!
//! The engine is split the way the original C library is split:
//! a per-conversion [`descriptor::Descriptor`], a renderer library under
//! [`render`], the format scanner in [`engine`], and the sink multiplexer
//! in [`sink`]. Arguments are supplied as a pre-collected typed list
//! ([`args::Arg`]) consumed in strict left-to-right order, which replaces
//! the C va_list and its documented desynchronization hazards.
//!
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod args;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod render;
pub mod sink;
pub mod time;

pub use args::{Arg, ArgCursor};
pub use descriptor::{Descriptor, FloatForm, Radix, SizeClass};
pub use engine::format_into;
pub use error::{PrintError, SinkError};
pub use sink::{GrowBuf, Out, SinkKind, SocketTx, console_lock};
pub use time::CalendarTime;
