use std::sync::Arc;

use crate::application::ports::{SummarizationModel, SummarizationModelError, TextChunker};
use crate::domain::{SummaryResult, SummaryStyle};

/// Chunked summarization pipeline: splits the input, runs each substantial
/// chunk through the model, rejoins the results in chunk order and applies the
/// requested presentation style.
pub struct SummarizationService<M, C>
where
    M: SummarizationModel,
    C: TextChunker,
{
    model: Arc<M>,
    chunker: Arc<C>,
    min_summarizable_chars: usize,
}

impl<M, C> SummarizationService<M, C>
where
    M: SummarizationModel,
    C: TextChunker,
{
    pub fn new(model: Arc<M>, chunker: Arc<C>, min_summarizable_chars: usize) -> Self {
        Self {
            model,
            chunker,
            min_summarizable_chars,
        }
    }

    /// Chunks whose trimmed length is at or below the configured minimum are
    /// skipped and contribute nothing to the output, so short inputs may yield
    /// an empty summary. A failure on any chunk aborts the whole request.
    #[tracing::instrument(skip(self, text), fields(input_chars = text.chars().count()))]
    pub async fn summarize(
        &self,
        text: &str,
        length_percent: u32,
        style: SummaryStyle,
    ) -> Result<SummaryResult, SummarizationError> {
        if text.is_empty() {
            return Err(SummarizationError::EmptyInput);
        }

        let chunks = self.chunker.chunk(text);
        let mut summaries = Vec::with_capacity(chunks.len());
        let mut skipped = 0usize;

        for chunk in &chunks {
            if chunk.text.trim().chars().count() <= self.min_summarizable_chars {
                skipped += 1;
                continue;
            }

            let chunk_chars = chunk.text.chars().count();
            let max_length = chunk_chars * length_percent as usize / 100;
            let min_length = (max_length * 3 / 10).max(30);

            let summary = self
                .model
                .summarize(&chunk.text, max_length, min_length)
                .await
                .map_err(SummarizationError::ModelFailed)?;

            tracing::debug!(
                chunk_index = chunk.index,
                chunk_chars,
                max_length,
                min_length,
                "Chunk summarized"
            );
            summaries.push(summary);
        }

        let joined = summaries.join(" ");

        tracing::info!(
            chunks_total = chunks.len(),
            chunks_skipped = skipped,
            summary_chars = joined.chars().count(),
            "Summarization completed"
        );

        Ok(SummaryResult {
            text: style.apply(&joined),
            chunks_total: chunks.len(),
            chunks_skipped: skipped,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("no text provided")]
    EmptyInput,
    #[error("summarization failed: {0}")]
    ModelFailed(SummarizationModelError),
}
