use async_trait::async_trait;

/// External optical character recognition engine. Receives the raw uploaded
/// image bytes and returns whatever text the engine read out of them.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, image_data: &[u8]) -> Result<String, OcrEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrEngineError {
    #[error("engine unavailable: {0}")]
    Unavailable(String),
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}
