//! Index header parser.
//!
//! The index region starts at the offset named by the archive header with a
//! big-endian `u32` byte count, followed by that many bytes of entry headers.

use super::{fits, read_u32_be};
use crate::error::{MarError, Result};

/// Byte span of the entry list, `start..end`, within the archive buffer.
///
/// Only [`IndexHeaderParser::parse`] builds one, so `end` always fits the
/// buffer it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRegion {
    pub(crate) index_offset: u32,
    pub(crate) index_size: u32,
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl IndexRegion {
    pub fn index_offset(&self) -> u32 {
        self.index_offset
    }

    pub fn index_size(&self) -> u32 {
        self.index_size
    }

    /// First byte after the size field.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Exclusive end of the entry list.
    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn len(&self) -> u32 {
        self.index_size
    }

    pub fn is_empty(&self) -> bool {
        self.index_size == 0
    }
}

pub struct IndexHeaderParser;

impl IndexHeaderParser {
    /// Size of the `index_size` field.
    pub const HEADER_SIZE: u32 = 4;

    pub fn parse(buffer: &[u8], index_offset: u32) -> Result<IndexRegion> {
        let start = match index_offset.checked_add(Self::HEADER_SIZE) {
            Some(start) if fits(buffer, start) => start,
            _ => {
                tracing::debug!(index_offset, len = buffer.len(), "MAR index offset out of range");
                return Err(MarError::IndexOutOfRange {
                    index_offset,
                    len: buffer.len(),
                });
            }
        };

        let index_size = read_u32_be(buffer, index_offset);
        let end = match start.checked_add(index_size) {
            Some(end) if fits(buffer, end) => end,
            _ => {
                tracing::debug!(
                    index_offset,
                    index_size,
                    len = buffer.len(),
                    "MAR index overflows buffer"
                );
                return Err(MarError::IndexOverflow {
                    index_offset,
                    index_size,
                    len: buffer.len(),
                });
            }
        };

        Ok(IndexRegion {
            index_offset,
            index_size,
            start,
            end,
        })
    }
}
