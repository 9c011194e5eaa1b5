//! Error taxonomy for the formatting engine.
//!
//! Three of the four failure categories of the original contract survive
//! as typed errors; the fourth (truncation) is not an error at all —
//! truncated calls still report the untruncated logical length.
//!
//! Argument/format mismatch was "caller responsibility, undefined" in the
//! C source. The typed argument cursor makes it detectable, so it is
//! reported instead of misparsing the remaining arguments.

use thiserror::Error;

/// Failure of a single-byte write into a destination sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The underlying stream returned an I/O error.
    #[error("stream write failed: {0}")]
    Io(#[from] std::io::Error),
    /// A device putc callback refused the character.
    #[error("device refused character")]
    Device,
    /// A socket send reported zero bytes written.
    #[error("socket wrote zero bytes")]
    ZeroWrite,
}

/// Error returned by every formatting entry point.
#[derive(Debug, Error)]
pub enum PrintError {
    /// Unrecognized conversion letter or malformed modifier sequence,
    /// including `*`/`.`/digits inside a `[...]` flag group.
    #[error("malformed directive at byte {pos} (0x{byte:02x})")]
    Parse { pos: usize, byte: u8 },

    /// The destination rejected a write. `written` is the number of
    /// characters logically produced before the failure; prior output is
    /// not rolled back.
    #[error("sink rejected output after {written} chars")]
    Sink {
        written: usize,
        #[source]
        source: SinkError,
    },

    /// The format string consumed more arguments than were supplied.
    #[error("missing argument {index}")]
    MissingArg { index: usize },

    /// An argument does not have the type its directive requires.
    #[error("argument {index} has the wrong type (expected {expected})")]
    ArgMismatch {
        index: usize,
        expected: &'static str,
    },
}

impl PrintError {
    pub fn is_parse(&self) -> bool {
        matches!(self, PrintError::Parse { .. })
    }

    pub fn is_sink(&self) -> bool {
        matches!(self, PrintError::Sink { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = PrintError::Parse { pos: 3, byte: b'q' };
        assert_eq!(e.to_string(), "malformed directive at byte 3 (0x71)");
        assert!(e.is_parse());
        assert!(!e.is_sink());
    }

    #[test]
    fn test_sink_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let e = PrintError::Sink {
            written: 7,
            source: SinkError::Io(io),
        };
        assert!(e.is_sink());
        assert!(std::error::Error::source(&e).is_some());
    }
}
