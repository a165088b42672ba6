//! Archive header parser.
//!
//! The archive header is the first 8 bytes of a MAR file:
//! 0x4D 0x41 0x52 0x31 ("MAR1") followed by the big-endian index offset.

use super::read_u32_be;
use crate::error::{MarError, Result};

/// MAR magic signature.
pub const MAR_SIGNATURE: [u8; 4] = *b"MAR1";

/// [`MAR_SIGNATURE`] read as a big-endian `u32`.
pub const MAR_MAGIC: u32 = 0x4D415231;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    pub magic: u32,
    /// Byte offset of the index region's size field.
    pub index_offset: u32,
}

pub struct ArchiveHeaderParser;

impl ArchiveHeaderParser {
    pub const HEADER_SIZE: usize = 8;

    pub fn parse(buffer: &[u8]) -> Result<ArchiveHeader> {
        if buffer.len() < Self::HEADER_SIZE {
            tracing::debug!(len = buffer.len(), "MAR buffer shorter than header");
            return Err(MarError::TooSmall { have: buffer.len() });
        }

        let magic = read_u32_be(buffer, 0);
        if magic != MAR_MAGIC {
            tracing::debug!(magic, "bad MAR magic");
            return Err(MarError::BadMagic(magic));
        }

        let index_offset = read_u32_be(buffer, 4);

        Ok(ArchiveHeader {
            magic,
            index_offset,
        })
    }
}
