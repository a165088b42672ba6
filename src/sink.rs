//! In-memory sink for capturing streamed encoder output.

use std::io;

/// Collects every byte written to it.
///
/// Writes never fail and are never short, so an encoder driving this sink
/// always sees all of its output accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSink {
    buffer: Vec<u8>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Append `bytes`, returning how many were written (always all of them).
    pub fn write_bytes(&mut self, bytes: &[u8]) -> usize {
        self.buffer.extend_from_slice(bytes);
        bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl io::Write for CaptureSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.write_bytes(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl AsRef<[u8]> for CaptureSink {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}
