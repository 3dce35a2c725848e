mod image_store;
mod medicine_store;
mod ocr_engine;
mod summarization_model;
mod text_chunker;
mod user_repository;

pub use image_store::{ImageStore, ImageStoreError};
pub use medicine_store::{DatasetError, MedicineStore};
pub use ocr_engine::{OcrEngine, OcrEngineError};
pub use summarization_model::{SummarizationModel, SummarizationModelError};
pub use text_chunker::TextChunker;
pub use user_repository::{RepositoryError, UserRepository};
