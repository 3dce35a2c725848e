use async_trait::async_trait;

use crate::application::ports::{OcrEngine, OcrEngineError};

/// Returns a canned text regardless of the image, for tests and scaffolding.
pub struct MockOcrEngine {
    text: String,
}

impl MockOcrEngine {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[async_trait]
impl OcrEngine for MockOcrEngine {
    async fn recognize(&self, _image_data: &[u8]) -> Result<String, OcrEngineError> {
        Ok(self.text.clone())
    }
}
