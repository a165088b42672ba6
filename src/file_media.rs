//! FileMedia - byte source for loading archives and fixtures.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// Local file implementation.
#[derive(Debug, Clone)]
pub struct LocalFileMedia {
    path: PathBuf,
    name: String,
    length: u64,
}

impl LocalFileMedia {
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            length: metadata.len(),
        })
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sync read of the whole file.
    pub fn read_all_sync(&self) -> Result<Vec<u8>> {
        let data = std::fs::read(&self.path)?;
        tracing::trace!(path = %self.path.display(), bytes = data.len(), "read file");
        Ok(data)
    }
}

// Async FileMedia trait (requires 'async' feature)
#[cfg(feature = "async")]
use std::future::Future;
#[cfg(feature = "async")]
use std::pin::Pin;

/// Abstract file source that can provide its bytes asynchronously.
///
/// Implement this trait for custom byte sources (e.g., fixtures served over
/// HTTP). The library provides [`LocalFileMedia`] for local files.
#[cfg(feature = "async")]
#[cfg_attr(docsrs, doc(cfg(feature = "async")))]
pub trait FileMedia: Send + Sync {
    fn length(&self) -> u64;
    fn name(&self) -> &str;
    fn read_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + '_>>;
}

#[cfg(feature = "async")]
impl FileMedia for LocalFileMedia {
    fn length(&self) -> u64 {
        self.length
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn read_all(&self) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + '_>> {
        let path = self.path.clone();
        Box::pin(async move {
            use tokio::io::AsyncReadExt;
            let mut file = tokio::fs::File::open(&path).await?;
            let mut buffer = Vec::new();
            file.read_to_end(&mut buffer).await?;
            Ok(buffer)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_all_sync() {
        let file = temp_file(b"MAR1 payload");
        let media = LocalFileMedia::new(file.path()).unwrap();
        assert_eq!(media.length(), 12);
        assert_eq!(media.path(), file.path());
        assert!(!media.name().is_empty());
        assert_eq!(media.read_all_sync().unwrap(), b"MAR1 payload");
    }

    #[test]
    fn test_missing_file() {
        assert!(LocalFileMedia::new("/definitely/not/here.mar").is_err());
    }

    #[cfg(feature = "async")]
    #[tokio::test]
    async fn test_read_all_async() {
        let file = temp_file(b"async bytes");
        let media = LocalFileMedia::new(file.path()).unwrap();
        let media: &dyn FileMedia = &media;
        assert_eq!(media.read_all().await.unwrap(), b"async bytes");
    }
}
