//! MarArchive - parsed view of a MAR buffer.
//!
//! Parsing validates the whole index before returning. Payloads are copied out
//! of the input, so the result does not borrow from it.

use crate::error::{MarError, Result};
use crate::parsing::{ArchiveHeaderParser, IndexEntries, IndexHeaderParser};
use std::borrow::Cow;


/// Filter options for parsing.
///
/// These only decide which entries are kept. Every entry in the index is
/// still validated, so a buffer rejected by [`MarArchive::parse`] is also
/// rejected by [`MarArchive::parse_with`].
#[derive(Default)]
pub struct ParseOptions {
    /// Filter function: return true to keep an entry. Receives the raw name
    /// and the entry's position in the index.
    pub filter: Option<Box<dyn Fn(&[u8], usize) -> bool + Send + Sync>>,
    /// Maximum number of entries to keep.
    pub max_entries: Option<usize>,
}

impl ParseOptions {
    fn keeps(&self, name: &[u8], index: usize, kept: usize) -> bool {
        if self.max_entries.is_some_and(|max| kept >= max) {
            return false;
        }
        match &self.filter {
            Some(f) => f(name, index),
            None => true,
        }
    }
}

impl std::fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .field("max_entries", &self.max_entries)
            .finish()
    }
}

/// A single archive entry with its payload copied out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarEntry {
    name: Vec<u8>,
    offset: u32,
    length: u32,
    reserved: u32,
    data: Vec<u8>,
}

impl MarEntry {
    /// Raw entry name, without the terminating zero byte.
    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn name_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.name)
    }

    /// Payload offset within the original buffer.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// The opaque field between the length and the name.
    pub fn reserved(&self) -> u32 {
        self.reserved
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Parsed MAR archive: entries in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarArchive {
    entries: Vec<MarEntry>,
}

impl MarArchive {
    /// Parse every entry of `buffer`.
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        Self::parse_with(buffer, &ParseOptions::default())
    }

    /// Parse `buffer`, keeping only the entries selected by `opts`.
    pub fn parse_with(buffer: &[u8], opts: &ParseOptions) -> Result<Self> {
        let header = ArchiveHeaderParser::parse(buffer)?;
        let region = IndexHeaderParser::parse(buffer, header.index_offset)?;

        // Validate first so nothing is copied out of a rejected buffer.
        let headers = IndexEntries::new(buffer, region).collect::<Result<Vec<_>>>()?;

        let mut entries = Vec::new();
        for (index, entry) in headers.iter().enumerate() {
            if !opts.keeps(entry.name, index, entries.len()) {
                continue;
            }
            let data = entry.payload(buffer).ok_or(MarError::EntryOutOfRange {
                offset: entry.offset,
                length: entry.length,
                len: buffer.len(),
            })?;
            tracing::trace!(
                index,
                name = %String::from_utf8_lossy(entry.name),
                offset = entry.offset,
                length = entry.length,
                "MAR entry"
            );
            entries.push(MarEntry {
                name: entry.name.to_vec(),
                offset: entry.offset,
                length: entry.length,
                reserved: entry.reserved,
                data: data.to_vec(),
            });
        }

        tracing::debug!(
            total = headers.len(),
            kept = entries.len(),
            index_size = region.index_size(),
            "parsed MAR archive"
        );

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MarEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MarEntry> {
        self.entries.iter()
    }

    /// First entry whose name is exactly `name`.
    pub fn get(&self, name: impl AsRef<[u8]>) -> Option<&MarEntry> {
        let name = name.as_ref();
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries.iter().map(|e| e.name())
    }

    pub fn payloads(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries.iter().map(|e| e.data())
    }

    /// Drop names and metadata, keeping payloads in index order.
    pub fn into_payloads(self) -> Vec<Vec<u8>> {
        self.entries.into_iter().map(MarEntry::into_data).collect()
    }
}

impl IntoIterator for MarArchive {
    type Item = MarEntry;
    type IntoIter = std::vec::IntoIter<MarEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a MarArchive {
    type Item = &'a MarEntry;
    type IntoIter = std::slice::Iter<'a, MarEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Parse `buffer` into its payloads, in index order.
///
/// Names are validated but discarded; use [`MarArchive::parse`] to keep them.
pub fn parse(buffer: &[u8]) -> Result<Vec<Vec<u8>>> {
    MarArchive::parse(buffer).map(MarArchive::into_payloads)
}
