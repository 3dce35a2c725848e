use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;

use medscan::application::ports::{
    SummarizationModel, SummarizationModelError, TextChunker,
};
use medscan::application::services::{SummarizationError, SummarizationService};
use medscan::domain::SummaryStyle;
use medscan::infrastructure::text_processing::FixedSizeChunker;

const MAX_CHUNK_LENGTH: usize = 1024;
const MIN_SUMMARIZABLE_CHARS: usize = 100;
const DEFAULT_PERCENT: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ModelCall {
    prefix: String,
    max_length: usize,
    min_length: usize,
}

/// Records every invocation and answers with a marker derived from the chunk,
/// so order and call arguments can be asserted.
#[derive(Default)]
struct RecordingModel {
    calls: Mutex<Vec<ModelCall>>,
}

impl RecordingModel {
    fn calls(&self) -> Vec<ModelCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummarizationModel for RecordingModel {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, SummarizationModelError> {
        let prefix: String = text.chars().take(8).collect();
        self.calls.lock().unwrap().push(ModelCall {
            prefix: prefix.clone(),
            max_length,
            min_length,
        });
        Ok(format!("<{}>", prefix))
    }
}

/// Fails after a configured number of successful calls.
struct FailingModel {
    succeed_first: usize,
    calls: Mutex<usize>,
}

#[async_trait]
impl SummarizationModel for FailingModel {
    async fn summarize(
        &self,
        _text: &str,
        _max_length: usize,
        _min_length: usize,
    ) -> Result<String, SummarizationModelError> {
        let mut calls = self.calls.lock().unwrap();
        *calls += 1;
        if *calls > self.succeed_first {
            Err(SummarizationModelError::ApiRequestFailed(
                "model exploded".to_string(),
            ))
        } else {
            Ok("partial".to_string())
        }
    }
}

fn service_with<M: SummarizationModel>(model: Arc<M>) -> SummarizationService<M, FixedSizeChunker> {
    SummarizationService::new(
        model,
        Arc::new(FixedSizeChunker::new(MAX_CHUNK_LENGTH)),
        MIN_SUMMARIZABLE_CHARS,
    )
}

#[tokio::test]
async fn given_empty_input_when_summarize_then_rejects_with_empty_input() {
    let service = service_with(Arc::new(RecordingModel::default()));

    let result = service
        .summarize("", DEFAULT_PERCENT, SummaryStyle::Concise)
        .await;

    assert!(matches!(result, Err(SummarizationError::EmptyInput)));
}

#[tokio::test]
async fn given_short_input_when_summarize_then_chunk_is_skipped_and_summary_is_empty() {
    let model = Arc::new(RecordingModel::default());
    let service = service_with(Arc::clone(&model));

    let result = service
        .summarize("short text", DEFAULT_PERCENT, SummaryStyle::Concise)
        .await
        .unwrap();

    assert_eq!(result.text, "");
    assert_eq!(result.chunks_total, 1);
    assert_eq!(result.chunks_skipped, 1);
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn given_multi_chunk_input_when_summarize_then_summaries_join_in_chunk_order() {
    let model = Arc::new(RecordingModel::default());
    let service = service_with(Arc::clone(&model));
    // Three chunks: AAAA... (1024), BBBB... (1024), CCCC... (452).
    let text: String = "A".repeat(1024) + &"B".repeat(1024) + &"C".repeat(452);

    let result = service
        .summarize(&text, DEFAULT_PERCENT, SummaryStyle::Concise)
        .await
        .unwrap();

    assert_eq!(result.text, "<AAAAAAAA> <BBBBBBBB> <CCCCCCCC>");
    assert_eq!(result.chunks_total, 3);
    assert_eq!(result.chunks_skipped, 0);
}

#[tokio::test]
async fn given_length_percent_when_summarize_then_model_bounds_follow_the_contract() {
    let model = Arc::new(RecordingModel::default());
    let service = service_with(Arc::clone(&model));
    let text = "x".repeat(1000);

    service
        .summarize(&text, 50, SummaryStyle::Concise)
        .await
        .unwrap();

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    // max = floor(1000 * 50 / 100), min = max(floor(max * 0.3), 30)
    assert_eq!(calls[0].max_length, 500);
    assert_eq!(calls[0].min_length, 150);
}

#[tokio::test]
async fn given_tiny_length_percent_when_summarize_then_min_length_floors_at_thirty() {
    let model = Arc::new(RecordingModel::default());
    let service = service_with(Arc::clone(&model));
    let text = "x".repeat(1000);

    service
        .summarize(&text, 4, SummaryStyle::Concise)
        .await
        .unwrap();

    let calls = model.calls();
    assert_eq!(calls[0].max_length, 40);
    assert_eq!(calls[0].min_length, 30);
}

#[tokio::test]
async fn given_model_failure_when_summarize_then_whole_request_aborts() {
    let model = Arc::new(FailingModel {
        succeed_first: 1,
        calls: Mutex::new(0),
    });
    let service = service_with(model);
    let text = "y".repeat(2048);

    let result = service
        .summarize(&text, DEFAULT_PERCENT, SummaryStyle::Concise)
        .await;

    assert!(matches!(result, Err(SummarizationError::ModelFailed(_))));
}

#[tokio::test]
async fn given_whitespace_only_chunk_when_summarize_then_it_contributes_nothing() {
    let model = Arc::new(RecordingModel::default());
    let service = service_with(Arc::clone(&model));
    let text = " ".repeat(300);

    let result = service
        .summarize(&text, DEFAULT_PERCENT, SummaryStyle::Concise)
        .await
        .unwrap();

    assert_eq!(result.text, "");
    assert!(model.calls().is_empty());
}

#[tokio::test]
async fn given_bullet_style_when_summarize_then_each_sentence_gets_a_bullet() {
    let model = Arc::new(MultiSentenceModel);
    let service = service_with(model);
    let text = "z".repeat(200);

    let result = service
        .summarize(&text, DEFAULT_PERCENT, SummaryStyle::Bullet)
        .await
        .unwrap();

    assert_eq!(
        result.text,
        "• First sentence\n• Second sentence\n• Third sentence."
    );
}

#[tokio::test]
async fn given_detailed_style_when_summarize_then_sentences_get_paragraph_breaks() {
    let model = Arc::new(MultiSentenceModel);
    let service = service_with(model);
    let text = "z".repeat(200);

    let result = service
        .summarize(&text, DEFAULT_PERCENT, SummaryStyle::Detailed)
        .await
        .unwrap();

    assert_eq!(
        result.text,
        "First sentence.\n\nSecond sentence.\n\nThird sentence."
    );
}

#[tokio::test]
async fn given_concise_style_when_summarize_then_text_is_byte_identical_to_joined_summaries() {
    let model = Arc::new(MultiSentenceModel);
    let service = service_with(model);
    let text = "z".repeat(200);

    let result = service
        .summarize(&text, DEFAULT_PERCENT, SummaryStyle::Concise)
        .await
        .unwrap();

    assert_eq!(result.text, "First sentence. Second sentence. Third sentence.");
}

struct MultiSentenceModel;

#[async_trait]
impl SummarizationModel for MultiSentenceModel {
    async fn summarize(
        &self,
        _text: &str,
        _max_length: usize,
        _min_length: usize,
    ) -> Result<String, SummarizationModelError> {
        Ok("First sentence. Second sentence. Third sentence.".to_string())
    }
}

#[tokio::test]
async fn given_custom_chunker_when_summarize_then_every_substantial_chunk_is_processed() {
    struct LineChunker;
    impl TextChunker for LineChunker {
        fn chunk(&self, text: &str) -> Vec<medscan::domain::TextChunk> {
            text.split('\n')
                .enumerate()
                .map(|(i, line)| medscan::domain::TextChunk::new(i, line.to_string()))
                .collect()
        }
    }

    let model = Arc::new(RecordingModel::default());
    let service = SummarizationService::new(Arc::clone(&model), Arc::new(LineChunker), 10);
    let text = "a long enough first line\nno\nanother long enough line";

    let result = service
        .summarize(text, DEFAULT_PERCENT, SummaryStyle::Concise)
        .await
        .unwrap();

    assert_eq!(result.chunks_total, 3);
    assert_eq!(result.chunks_skipped, 1);
    assert_eq!(model.calls().len(), 2);
    assert_eq!(result.text, "<a long e> <another >");
}
