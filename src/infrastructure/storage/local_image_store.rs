use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{ImageStore, ImageStoreError};

/// Writes uploaded images under a local base directory.
pub struct LocalImageStore {
    base_path: PathBuf,
}

impl LocalImageStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ImageStoreError> {
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<(), ImageStoreError> {
        let path = self.base_path.join(filename);
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| ImageStoreError::StoreFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Stored image");
        Ok(())
    }
}
