//! Entry header parser.
//!
//! Each entry in the index region is:
//! - `offset` (u32 BE): payload position in the whole buffer
//! - `length` (u32 BE): payload length
//! - `reserved` (u32 BE): opaque, carried through untouched
//! - `name`: null-terminated bytes
//!
//! Entries are packed back-to-back until the index region is exhausted.

use super::{fits, read_u32_be, IndexRegion};
use crate::error::{MarError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHeader<'a> {
    /// Position of this header within the buffer.
    pub position: u32,
    pub offset: u32,
    pub length: u32,
    pub reserved: u32,
    /// Name without its terminating zero byte.
    pub name: &'a [u8],
}

impl<'a> EntryHeader<'a> {
    /// The payload this entry points at, or `None` if `buffer` is too short
    /// to hold it (e.g. it is not the buffer the header was parsed from).
    pub fn payload(&self, buffer: &'a [u8]) -> Option<&'a [u8]> {
        let start = self.offset as usize;
        buffer.get(start..start.checked_add(self.length as usize)?)
    }
}

pub struct EntryHeaderParser;

impl EntryHeaderParser {
    /// Fixed part: offset, length, reserved.
    pub const HEADER_SIZE: u32 = 12;

    /// Fixed part plus at least one name byte.
    pub const MIN_ENTRY_SIZE: u32 = Self::HEADER_SIZE + 1;

    /// Parse the entry starting at `cursor`.
    ///
    /// Returns the header and the position just past its name terminator.
    /// A `region` that does not fit `buffer` is rejected with `IndexOverflow`.
    pub fn parse<'a>(
        buffer: &'a [u8],
        cursor: u32,
        region: &IndexRegion,
    ) -> Result<(EntryHeader<'a>, u32)> {
        if !fits(buffer, region.end) {
            tracing::debug!(
                index_end = region.end,
                len = buffer.len(),
                "MAR index region outside buffer"
            );
            return Err(MarError::IndexOverflow {
                index_offset: region.index_offset,
                index_size: region.index_size,
                len: buffer.len(),
            });
        }

        match cursor.checked_add(Self::MIN_ENTRY_SIZE) {
            Some(min_end) if min_end <= region.end => {}
            _ => {
                tracing::debug!(cursor, index_end = region.end, "MAR entry header overflows index");
                return Err(MarError::EntryHeaderOverflow {
                    position: cursor,
                    index_end: region.end,
                });
            }
        }

        let offset = read_u32_be(buffer, cursor);
        let length = read_u32_be(buffer, cursor + 4);
        if !offset.checked_add(length).is_some_and(|end| fits(buffer, end)) {
            tracing::debug!(offset, length, len = buffer.len(), "MAR entry out of range");
            return Err(MarError::EntryOutOfRange {
                offset,
                length,
                len: buffer.len(),
            });
        }
        let reserved = read_u32_be(buffer, cursor + 8);

        let name_start = cursor + Self::HEADER_SIZE;
        let name_area = &buffer[name_start as usize..region.end as usize];
        let name_len = match name_area.iter().position(|&b| b == 0) {
            Some(n) => n,
            None => {
                tracing::debug!(position = name_start, "MAR entry name not terminated");
                return Err(MarError::UnterminatedName {
                    position: name_start,
                });
            }
        };

        let header = EntryHeader {
            position: cursor,
            offset,
            length,
            reserved,
            name: &name_area[..name_len],
        };
        // name_len < region.end - name_start, so this cannot overflow.
        let next = name_start + name_len as u32 + 1;

        Ok((header, next))
    }
}

/// Iterator over the entry headers of an index region.
///
/// Yields at most one error, after which it is exhausted.
pub struct IndexEntries<'a> {
    buffer: &'a [u8],
    region: IndexRegion,
    cursor: u32,
    failed: bool,
}

impl<'a> IndexEntries<'a> {
    pub fn new(buffer: &'a [u8], region: IndexRegion) -> Self {
        Self {
            buffer,
            region,
            cursor: region.start,
            failed: false,
        }
    }

    /// Current read position within the buffer.
    pub fn position(&self) -> u32 {
        self.cursor
    }
}

impl<'a> Iterator for IndexEntries<'a> {
    type Item = Result<EntryHeader<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor >= self.region.end {
            return None;
        }

        match EntryHeaderParser::parse(self.buffer, self.cursor, &self.region) {
            Ok((header, next)) => {
                self.cursor = next;
                Some(Ok(header))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl std::iter::FusedIterator for IndexEntries<'_> {}
