use crate::core::Storage;
use crate::utils::error::{EtlError, Result};

/// Filesystem storage. Paths are used as given, relative to the working
/// directory.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        tokio::fs::read(path)
            .await
            .map_err(|source| EtlError::InputReadError {
                path: path.to_string(),
                source,
            })
    }

    // Plain overwrite; parent directories must already exist.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tokio::fs::write(path, data)
            .await
            .map_err(|source| EtlError::OutputWriteError {
                path: path.to_string(),
                source,
            })
    }
}
