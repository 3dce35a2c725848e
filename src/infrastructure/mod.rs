pub mod dataset;
pub mod observability;
pub mod ocr;
pub mod persistence;
pub mod storage;
pub mod summarization;
pub mod text_processing;
