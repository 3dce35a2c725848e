use async_trait::async_trait;

use crate::application::ports::{SummarizationModel, SummarizationModelError};

/// Echoes a fixed summary for every chunk, for tests and scaffolding.
pub struct MockSummarizationModel {
    summary: String,
}

impl MockSummarizationModel {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
        }
    }
}

#[async_trait]
impl SummarizationModel for MockSummarizationModel {
    async fn summarize(
        &self,
        _text: &str,
        _max_length: usize,
        _min_length: usize,
    ) -> Result<String, SummarizationModelError> {
        Ok(self.summary.clone())
    }
}
