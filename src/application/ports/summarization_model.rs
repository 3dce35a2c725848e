use async_trait::async_trait;

/// External text-to-text model producing a shorter text within length bounds.
///
/// `max_length` and `min_length` are model-side output bounds derived from the
/// chunk length by the summarization pipeline.
#[async_trait]
pub trait SummarizationModel: Send + Sync {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, SummarizationModelError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationModelError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
