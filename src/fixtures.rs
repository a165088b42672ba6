//! Test-data loading.
//!
//! Fixtures are resolved against a root directory: `MAR_TEST_DATA_PATH` when
//! set, otherwise `tests/testdata` under the crate manifest.

use crate::archive::MarArchive;
use crate::error::Result;
use crate::file_media::LocalFileMedia;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the fixture root.
pub const TEST_DATA_ENV: &str = "MAR_TEST_DATA_PATH";

const DEFAULT_TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/testdata");

/// A directory of fixture files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureDir {
    root: PathBuf,
}

impl FixtureDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var_os(TEST_DATA_ENV))
    }

    /// Root from a `MAR_TEST_DATA_PATH` value; unset or empty means the default.
    fn from_env_value(value: Option<OsString>) -> Self {
        match value {
            Some(root) if !root.is_empty() => Self::new(root),
            _ => Self::new(DEFAULT_TEST_DATA_DIR),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    pub fn read(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.path(filename);
        tracing::debug!(path = %path.display(), "loading fixture");
        LocalFileMedia::new(&path)?.read_all_sync()
    }

    pub fn read_archive(&self, filename: &str) -> Result<MarArchive> {
        MarArchive::parse(&self.read(filename)?)
    }

    #[cfg(feature = "async")]
    #[cfg_attr(docsrs, doc(cfg(feature = "async")))]
    pub async fn read_async(&self, filename: &str) -> Result<Vec<u8>> {
        use crate::file_media::FileMedia;
        let path = self.path(filename);
        tracing::debug!(path = %path.display(), "loading fixture");
        LocalFileMedia::new(&path)?.read_all().await
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Full path of a fixture under the configured root.
pub fn test_data_path(filename: &str) -> PathBuf {
    FixtureDir::from_env().path(filename)
}

/// Load a fixture into memory.
pub fn read_test_data(filename: &str) -> Result<Vec<u8>> {
    FixtureDir::from_env().read(filename)
}

/// Load and parse a MAR fixture.
pub fn read_test_archive(filename: &str) -> Result<MarArchive> {
    FixtureDir::from_env().read_archive(filename)
}

#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub async fn read_test_data_async(filename: &str) -> Result<Vec<u8>> {
    FixtureDir::from_env().read_async(filename).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::test_vectors;

    fn vectors_dir() -> FixtureDir {
        FixtureDir::new(DEFAULT_TEST_DATA_DIR)
    }

    #[test]
    fn test_path_joins_root() {
        let dir = FixtureDir::new("/data");
        assert_eq!(dir.path("a.mar"), PathBuf::from("/data/a.mar"));
        assert_eq!(dir.root(), Path::new("/data"));
    }

    #[test]
    fn test_read_vectors_archive() {
        let archive = vectors_dir().read_archive("vectors.mar").unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(
            archive.get("small.br").unwrap().data(),
            test_vectors::SMALL_BRUNSLI_FILE
        );
        assert_eq!(
            archive.get("fallback.br").unwrap().data(),
            test_vectors::FALLBACK_BRUNSLI_FILE
        );
    }

    #[test]
    fn test_env_value_selects_root() {
        assert_eq!(FixtureDir::from_env_value(None), vectors_dir());
        assert_eq!(FixtureDir::from_env_value(Some(OsString::new())), vectors_dir());
        assert_eq!(
            FixtureDir::from_env_value(Some(OsString::from("/srv/fixtures"))).root(),
            Path::new("/srv/fixtures")
        );
    }

    #[test]
    fn test_default_root_entry_points() {
        // Assumes MAR_TEST_DATA_PATH is unset or points at a copy of tests/testdata.
        let root = FixtureDir::from_env();
        assert_eq!(test_data_path("vectors.mar"), root.path("vectors.mar"));
        if std::env::var_os(TEST_DATA_ENV).is_none_or(|v| v.is_empty()) {
            assert_eq!(
                test_data_path("vectors.mar"),
                Path::new(DEFAULT_TEST_DATA_DIR).join("vectors.mar")
            );
        }

        let bytes = read_test_data("vectors.mar").unwrap();
        assert_eq!(&bytes[..4], b"MAR1");
        let archive = read_test_archive("vectors.mar").unwrap();
        assert_eq!(archive, MarArchive::parse(&bytes).unwrap());
        assert_eq!(
            archive.get("fallback.br").unwrap().data(),
            test_vectors::FALLBACK_BRUNSLI_FILE
        );
    }

    #[test]
    fn test_missing_default_fixture() {
        assert_eq!(
            read_test_data("no-such-fixture.mar").unwrap_err().kind(),
            ErrorKind::Io
        );
    }

    #[test]
    fn test_read_from_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("blob.bin"), [1, 2, 3]).unwrap();
        let fixtures = FixtureDir::new(dir.path());
        assert_eq!(fixtures.read("blob.bin").unwrap(), vec![1, 2, 3]);
        assert_eq!(
            fixtures.read_archive("blob.bin").unwrap_err().kind(),
            ErrorKind::TooSmall
        );
    }

    #[test]
    fn test_missing_fixture_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FixtureDir::new(dir.path()).read("missing.mar").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_read_async() {
        let bytes = vectors_dir().read_async("vectors.mar").await.unwrap();
        assert_eq!(bytes, vectors_dir().read("vectors.mar").unwrap());
        assert_eq!(read_test_data_async("vectors.mar").await.unwrap(), bytes);
    }
}
