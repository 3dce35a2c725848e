use std::sync::Arc;

use crate::application::ports::{
    ImageStore, MedicineStore, OcrEngine, SummarizationModel, TextChunker, UserRepository,
};
use crate::application::services::{ExtractionService, SummarizationService};

/// Process-scoped collaborators, constructed once at startup and shared by
/// every request handler. Everything here is read-only or internally
/// synchronized.
pub struct AppState<O, M, C>
where
    O: OcrEngine,
    M: SummarizationModel,
    C: TextChunker,
{
    pub extraction_service: Arc<ExtractionService<O, M, C>>,
    pub summarization_service: Arc<SummarizationService<M, C>>,
    /// JSON-backed catalog serving the `/api/medicine` routes.
    pub medicine_store: Arc<dyn MedicineStore>,
    /// CSV-backed catalog serving `/medicine/{name}`. Kept separate from the
    /// JSON catalog to preserve the original dual-dataset behavior.
    pub medicine_dataset: Arc<dyn MedicineStore>,
    pub user_repository: Arc<dyn UserRepository>,
    pub image_store: Arc<dyn ImageStore>,
}

impl<O, M, C> Clone for AppState<O, M, C>
where
    O: OcrEngine,
    M: SummarizationModel,
    C: TextChunker,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            summarization_service: Arc::clone(&self.summarization_service),
            medicine_store: Arc::clone(&self.medicine_store),
            medicine_dataset: Arc::clone(&self.medicine_dataset),
            user_repository: Arc::clone(&self.user_repository),
            image_store: Arc::clone(&self.image_store),
        }
    }
}
