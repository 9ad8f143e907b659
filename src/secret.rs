//! Byte source behind `GET /secret`.
//!
//! The blob is looked up on every request. Nothing is cached: a file created
//! or removed while the server runs is picked up by the next request.

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;

#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn exists(&self) -> bool;
    async fn read_all(&self) -> io::Result<Bytes>;
}

/// A secret stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileSecret {
    path: PathBuf,
}

impl FileSecret {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SecretStore for FileSecret {
    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    async fn read_all(&self) -> io::Result<Bytes> {
        tokio::fs::read(&self.path).await.map(Bytes::from)
    }
}

/// An in-process secret, or none at all.
#[derive(Debug, Clone, Default)]
pub struct MemorySecret(Option<Bytes>);

impl MemorySecret {
    pub fn new(blob: impl Into<Bytes>) -> Self {
        Self(Some(blob.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

#[async_trait]
impl SecretStore for MemorySecret {
    async fn exists(&self) -> bool {
        self.0.is_some()
    }

    async fn read_all(&self) -> io::Result<Bytes> {
        self.0
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no secret configured"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[tokio::test]
    async fn file_secret_reads_exact_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x00key\xffbytes\n").unwrap();

        let secret = FileSecret::new(file.path());
        assert!(secret.exists().await);
        assert_eq!(secret.read_all().await.unwrap().as_ref(), b"\x00key\xffbytes\n");
    }

    #[tokio::test]
    async fn file_secret_follows_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.key");
        let secret = FileSecret::new(&path);

        assert!(!secret.exists().await);
        assert_eq!(secret.read_all().await.unwrap_err().kind(), io::ErrorKind::NotFound);

        std::fs::write(&path, b"late").unwrap();
        assert!(secret.exists().await);
        assert_eq!(secret.read_all().await.unwrap().as_ref(), b"late");

        std::fs::remove_file(&path).unwrap();
        assert!(!secret.exists().await);
    }

    #[tokio::test]
    async fn memory_secret() {
        assert!(!MemorySecret::absent().exists().await);
        let secret = MemorySecret::new("s3cr3t");
        assert!(secret.exists().await);
        assert_eq!(secret.read_all().await.unwrap().as_ref(), b"s3cr3t");
    }
}
