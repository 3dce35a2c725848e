use async_trait::async_trait;
use tokio::process::Command;
use uuid::Uuid;

use crate::application::ports::{OcrEngine, OcrEngineError};

/// OCR engine backed by a local `tesseract` binary. The engine only speaks
/// files, so the image is staged through the system temp directory.
pub struct TesseractOcrEngine {
    binary: String,
    language: String,
}

impl TesseractOcrEngine {
    pub fn new(binary: &str, language: &str) -> Self {
        Self {
            binary: binary.to_string(),
            language: language.to_string(),
        }
    }
}

#[async_trait]
impl OcrEngine for TesseractOcrEngine {
    async fn recognize(&self, image_data: &[u8]) -> Result<String, OcrEngineError> {
        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", Uuid::new_v4()));
        // Tesseract appends ".txt" to the output base name itself.
        let output_base = temp_dir.join(format!("ocr_output_{}", Uuid::new_v4()));

        tokio::fs::write(&input_path, image_data)
            .await
            .map_err(|e| OcrEngineError::RecognitionFailed(format!("write temp file: {}", e)))?;

        tracing::debug!(binary = %self.binary, language = %self.language, "Running tesseract");

        let output = Command::new(&self.binary)
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(&self.language)
            .output()
            .await;

        let _ = tokio::fs::remove_file(&input_path).await;

        let output_file = format!("{}.txt", output_base.display());

        let output = output.map_err(|e| OcrEngineError::Unavailable(e.to_string()))?;

        if !output.status.success() {
            // The binary may have written a partial output before failing.
            let _ = tokio::fs::remove_file(&output_file).await;
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrEngineError::RecognitionFailed(format!(
                "tesseract exited with {}: {}",
                output.status, stderr
            )));
        }

        let text = match tokio::fs::read_to_string(&output_file).await {
            Ok(text) => text,
            Err(e) => {
                let _ = tokio::fs::remove_file(&output_file).await;
                return Err(OcrEngineError::RecognitionFailed(format!(
                    "read output: {}",
                    e
                )));
            }
        };
        let _ = tokio::fs::remove_file(&output_file).await;

        tracing::info!(chars = text.len(), "Tesseract recognition completed");

        Ok(text)
    }
}
