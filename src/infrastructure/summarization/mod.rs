mod hf_inference_client;
mod mock_summarization_model;

pub use hf_inference_client::HfInferenceClient;
pub use mock_summarization_model::MockSummarizationModel;
