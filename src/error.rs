//! Error types for MAR parsing and fixture loading.
//!
//! This module provides the [`MarError`] type which covers every way a buffer
//! can fail to be a MAR archive, plus the I/O failures of the fixture loader.
//!
//! ## Error Categories
//!
//! | Category | Errors | Description |
//! |----------|--------|-------------|
//! | Header | [`TooSmall`], [`BadMagic`] | Buffer is not a MAR archive at all |
//! | Index | [`IndexOutOfRange`], [`IndexOverflow`] | Index region lies outside the buffer |
//! | Entry | [`EntryHeaderOverflow`], [`EntryOutOfRange`], [`UnterminatedName`] | An index entry is malformed |
//! | I/O | [`Io`] | Fixture file could not be read |
//!
//! ## Example
//!
//! ```rust
//! use mar_stream::{parse, ErrorKind, MarError};
//!
//! match parse(b"not a mar") {
//!     Ok(payloads) => println!("Found {} payloads", payloads.len()),
//!     Err(MarError::BadMagic(magic)) => eprintln!("Not a MAR file: {:08x}", magic),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//!
//! assert_eq!(parse(&[]).unwrap_err().kind(), ErrorKind::TooSmall);
//! ```
//!
//! [`TooSmall`]: MarError::TooSmall
//! [`BadMagic`]: MarError::BadMagic
//! [`IndexOutOfRange`]: MarError::IndexOutOfRange
//! [`IndexOverflow`]: MarError::IndexOverflow
//! [`EntryHeaderOverflow`]: MarError::EntryHeaderOverflow
//! [`EntryOutOfRange`]: MarError::EntryOutOfRange
//! [`UnterminatedName`]: MarError::UnterminatedName
//! [`Io`]: MarError::Io

use std::io;

/// Error type for MAR operations.
///
/// Every parse variant is terminal: the input is a fixed buffer, so retrying
/// without modifying it cannot succeed. Offsets are reported as they were read
/// from the buffer, before any arithmetic.
#[derive(Debug, thiserror::Error)]
pub enum MarError {
    /// The buffer is shorter than the 8-byte archive header.
    #[error("Buffer too small: need 8 bytes, have {have}")]
    TooSmall {
        /// Number of bytes available.
        have: usize,
    },

    /// The first four bytes are not `MAR1` (`0x4D415231`).
    #[error("Invalid MAR signature: 0x{0:08x}")]
    BadMagic(u32),

    /// The `index_size` field at `index_offset` does not fit in the buffer.
    #[error("Index offset {index_offset} out of range (buffer length: {len})")]
    IndexOutOfRange { index_offset: u32, len: usize },

    /// `index_offset + 4 + index_size` overflows or runs past the buffer.
    #[error("Index of {index_size} bytes at offset {index_offset} overflows buffer of {len} bytes")]
    IndexOverflow {
        index_offset: u32,
        index_size: u32,
        len: usize,
    },

    /// Not enough room left in the index for an entry's fixed header plus one
    /// name byte.
    #[error("Entry header at {position} overflows index ending at {index_end}")]
    EntryHeaderOverflow { position: u32, index_end: u32 },

    /// An entry's `offset + length` overflows or runs past the buffer.
    #[error("Entry range {offset}+{length} out of range (buffer length: {len})")]
    EntryOutOfRange { offset: u32, length: u32, len: usize },

    /// An entry name starting at `position` has no terminating zero byte
    /// before the end of the index.
    #[error("Entry name at {position} is not null-terminated")]
    UnterminatedName { position: u32 },

    /// An I/O error occurred while loading a fixture.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Fieldless discriminant of [`MarError`].
///
/// Useful in assertions that only care about which condition tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    TooSmall,
    BadMagic,
    IndexOutOfRange,
    IndexOverflow,
    EntryHeaderOverflow,
    EntryOutOfRange,
    UnterminatedName,
    Io,
}

impl MarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooSmall { .. } => ErrorKind::TooSmall,
            Self::BadMagic(_) => ErrorKind::BadMagic,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            Self::IndexOverflow { .. } => ErrorKind::IndexOverflow,
            Self::EntryHeaderOverflow { .. } => ErrorKind::EntryHeaderOverflow,
            Self::EntryOutOfRange { .. } => ErrorKind::EntryOutOfRange,
            Self::UnterminatedName { .. } => ErrorKind::UnterminatedName,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns true for errors caused by the buffer's content rather than by
    /// the environment.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, MarError>;
