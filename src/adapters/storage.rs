use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Filesystem-backed storage. Relative paths are resolved against
/// `base_path`; absolute paths are used as-is (`Path::join` semantics).
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = fs::read(full_path)?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorSeverity, FinderError};

    #[tokio::test]
    async fn write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().to_string());

        storage
            .write_file("out/report.json", b"{\"total\":0}")
            .await
            .unwrap();
        let data = storage.read_file("out/report.json").await.unwrap();
        assert_eq!(data, b"{\"total\":0}");
    }

    #[tokio::test]
    async fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().to_string());

        storage
            .write_file("a/b/c/clients.csv", b"id\n")
            .await
            .unwrap();
        assert!(dir.path().join("a/b/c/clients.csv").exists());
    }

    #[tokio::test]
    async fn missing_file_surfaces_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path().to_string_lossy().to_string());

        let err = storage.read_file("no-such-store.json").await.unwrap_err();
        assert!(matches!(err, FinderError::IoError(_)));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[tokio::test]
    async fn absolute_paths_ignore_the_base() {
        let base = tempfile::tempdir().unwrap();
        let elsewhere = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(base.path().to_string_lossy().to_string());

        let target = elsewhere.path().join("report.json");
        storage
            .write_file(&target.to_string_lossy(), b"[]")
            .await
            .unwrap();
        assert!(target.exists());
        assert!(!base.path().join("report.json").exists());
    }
}
