//! MAR header parsing modules.
//!
//! A MAR archive is laid out as:
//! - an 8-byte archive header (magic, index offset)
//! - payload bytes, anywhere in the buffer
//! - an index region: a 4-byte size followed by back-to-back entry headers
//!
//! All integers are big-endian `u32`. Offset arithmetic is done in `u32` with
//! `checked_add`, so a wrapped sum can never pass as an in-bounds position.

pub mod archive_header;
pub mod entry_header;
pub mod index_header;

pub use archive_header::{ArchiveHeader, ArchiveHeaderParser, MAR_MAGIC, MAR_SIGNATURE};
pub use entry_header::{EntryHeader, EntryHeaderParser, IndexEntries};
pub use index_header::{IndexHeaderParser, IndexRegion};

/// Read a big-endian `u32` at `pos`.
///
/// Callers must have checked that `pos + 4 <= buffer.len()`.
#[inline]
pub(crate) fn read_u32_be(buffer: &[u8], pos: u32) -> u32 {
    let pos = pos as usize;
    u32::from_be_bytes([
        buffer[pos],
        buffer[pos + 1],
        buffer[pos + 2],
        buffer[pos + 3],
    ])
}

/// Whether the exclusive end position `end` lies within `buffer`.
#[inline]
pub(crate) fn fits(buffer: &[u8], end: u32) -> bool {
    end as usize <= buffer.len()
}
