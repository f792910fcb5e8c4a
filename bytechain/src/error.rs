use embedded_io::ErrorKind;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Error types for chain operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    /// Requested range does not fit inside the logical content
    #[error("range out of bounds: offset {offset} with length {length} exceeds count {count}")]
    OutOfBounds {
        /// Start of the requested range
        offset: usize,
        /// Length of the requested range
        length: usize,
        /// Logical length of the chain at the time of the call
        count: usize,
    },
    /// Mutation was attempted on a permanently immutable chain
    #[error("chain is fixed: mutation rejected at count {count}")]
    Fixed {
        /// Logical length of the chain at the time of the call
        count: usize,
    },
    /// A reader was asked for a byte past its end
    #[error("no readable byte: cursor {cursor} reached end {end}")]
    EndOfStream {
        /// Cursor position of the reader
        cursor: usize,
        /// Exclusive end of the readable range
        end: usize,
    },
    /// An attached stream or sink failed
    #[error("i/o failure: {kind:?}")]
    Io {
        /// Error kind reported by the stream or sink
        kind: ErrorKind,
    },
}
