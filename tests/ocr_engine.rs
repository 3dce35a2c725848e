#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use medscan::application::ports::{OcrEngine, OcrEngineError};
use medscan::infrastructure::ocr::TesseractOcrEngine;

/// Drops an executable shell script standing in for the tesseract binary.
/// Scripts receive the input path as `$1` and the output base as `$2`, and
/// record the output file path so tests can check it was cleaned up.
fn install_fake_engine(dir: &Path, body: &str) -> String {
    let path = dir.join("fake_tesseract");
    fs::write(&path, body).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn given_working_binary_when_recognize_then_returns_text_and_removes_output() {
    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join("output_path");
    let script = format!(
        "#!/bin/sh\nprintf 'hello from ocr' > \"$2.txt\"\nprintf '%s' \"$2.txt\" > {}\n",
        record.display()
    );
    let binary = install_fake_engine(dir.path(), &script);
    let engine = TesseractOcrEngine::new(&binary, "eng");

    let text = engine.recognize(b"fake image bytes").await.unwrap();

    assert_eq!(text, "hello from ocr");
    let output_file = fs::read_to_string(&record).unwrap();
    assert!(!Path::new(output_file.trim()).exists());
}

#[tokio::test]
async fn given_failing_binary_when_recognize_then_errors_and_removes_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let record = dir.path().join("output_path");
    let script = format!(
        "#!/bin/sh\nprintf 'partial' > \"$2.txt\"\nprintf '%s' \"$2.txt\" > {}\nexit 1\n",
        record.display()
    );
    let binary = install_fake_engine(dir.path(), &script);
    let engine = TesseractOcrEngine::new(&binary, "eng");

    let result = engine.recognize(b"fake image bytes").await;

    assert!(matches!(result, Err(OcrEngineError::RecognitionFailed(_))));
    let output_file = fs::read_to_string(&record).unwrap();
    assert!(!Path::new(output_file.trim()).exists());
}

#[tokio::test]
async fn given_binary_writing_no_output_when_recognize_then_recognition_fails() {
    let dir = tempfile::tempdir().unwrap();
    let binary = install_fake_engine(dir.path(), "#!/bin/sh\nexit 0\n");
    let engine = TesseractOcrEngine::new(&binary, "eng");

    let result = engine.recognize(b"fake image bytes").await;

    assert!(matches!(result, Err(OcrEngineError::RecognitionFailed(_))));
}

#[tokio::test]
async fn given_missing_binary_when_recognize_then_signals_unavailable() {
    let engine = TesseractOcrEngine::new("/nonexistent/tesseract", "eng");

    let result = engine.recognize(b"fake image bytes").await;

    assert!(matches!(result, Err(OcrEngineError::Unavailable(_))));
}
