mod extraction_service;
mod summarization_service;

pub use extraction_service::{ExtractionError, ExtractionOutcome, ExtractionService};
pub use summarization_service::{SummarizationError, SummarizationService};
