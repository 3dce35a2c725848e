use async_trait::async_trait;

/// Destination for uploaded profile images.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, filename: &str, data: &[u8]) -> Result<(), ImageStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("store failed: {0}")]
    StoreFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
