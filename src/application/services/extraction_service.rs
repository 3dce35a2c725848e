use std::sync::Arc;

use crate::application::ports::{OcrEngine, OcrEngineError, TextChunker};
use crate::application::ports::SummarizationModel;
use crate::application::services::{SummarizationError, SummarizationService};
use crate::domain::SummaryStyle;

/// Image-to-summary flow: validate the upload decodes as an image, hand the
/// raw bytes to the OCR engine, then summarize whatever text came back.
pub struct ExtractionService<O, M, C>
where
    O: OcrEngine,
    M: SummarizationModel,
    C: TextChunker,
{
    ocr_engine: Arc<O>,
    summarization: Arc<SummarizationService<M, C>>,
    default_length_percent: u32,
}

#[derive(Debug, Clone)]
pub struct ExtractionOutcome {
    pub text: String,
    pub summary: String,
}

impl<O, M, C> ExtractionService<O, M, C>
where
    O: OcrEngine,
    M: SummarizationModel,
    C: TextChunker,
{
    pub fn new(
        ocr_engine: Arc<O>,
        summarization: Arc<SummarizationService<M, C>>,
        default_length_percent: u32,
    ) -> Self {
        Self {
            ocr_engine,
            summarization,
            default_length_percent,
        }
    }

    #[tracing::instrument(skip(self, image_data), fields(bytes = image_data.len()))]
    pub async fn extract_and_summarize(
        &self,
        image_data: &[u8],
    ) -> Result<ExtractionOutcome, ExtractionError> {
        // The engine gets the original bytes; decoding here only rejects
        // uploads that are not images at all.
        image::load_from_memory(image_data)
            .map_err(|e| ExtractionError::ImageDecode(e.to_string()))?;

        let text = self.ocr_engine.recognize(image_data).await?;

        tracing::debug!(extracted_chars = text.chars().count(), "OCR completed");

        let summary = if text.trim().is_empty() {
            String::new()
        } else {
            self.summarization
                .summarize(&text, self.default_length_percent, SummaryStyle::Concise)
                .await
                .map_err(ExtractionError::Summarization)?
                .text
        };

        Ok(ExtractionOutcome { text, summary })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("image decode failed: {0}")]
    ImageDecode(String),
    #[error("ocr: {0}")]
    Ocr(#[from] OcrEngineError),
    #[error("summarization: {0}")]
    Summarization(SummarizationError),
}
