//! MAR archive reader.
//!
//! Reads `MAR1` archives: a single buffer holding named payloads and an index
//! that locates them. Every offset and length is bounds-checked with
//! overflow-checked arithmetic, and every malformed input is reported as a
//! [`MarError`] instead of a panic.
//!
//! Also ships the small helpers codec test suites use alongside MAR fixtures:
//! fixture loading, an output-capturing sink, and embedded byte vectors.
//!
//! ## Features
//! - Core library depends only on `thiserror` and `tracing`
//! - `async` - Async fixture loading with tokio
//!
//! ## Example
//!
//! ```rust
//! use mar_stream::{parse, MarArchive};
//!
//! let mut buffer = b"MAR1\x00\x00\x00\x0c".to_vec();
//! buffer.extend_from_slice(b"data");
//! buffer.extend_from_slice(&[0, 0, 0, 14]); // index size
//! buffer.extend_from_slice(&[0, 0, 0, 8, 0, 0, 0, 4, 0, 0, 0, 0]);
//! buffer.extend_from_slice(b"a\0");
//!
//! assert_eq!(parse(&buffer).unwrap(), vec![b"data".to_vec()]);
//! let archive = MarArchive::parse(&buffer).unwrap();
//! assert_eq!(archive.get("a").unwrap().data(), b"data");
//! ```

pub mod archive;
pub mod error;
mod file_media;
pub mod fixtures;
pub mod parsing;
pub mod sink;
pub mod test_vectors;

pub use archive::{parse, MarArchive, MarEntry, ParseOptions};
pub use error::{ErrorKind, MarError};
pub use file_media::LocalFileMedia;
pub use fixtures::{read_test_archive, read_test_data, test_data_path, FixtureDir};
pub use sink::CaptureSink;

#[cfg(feature = "async")]
pub use file_media::FileMedia;
#[cfg(feature = "async")]
pub use fixtures::read_test_data_async;
