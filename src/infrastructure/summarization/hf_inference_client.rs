use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{SummarizationModel, SummarizationModelError};

/// Client for a Hugging Face style inference endpoint hosting a summarization
/// model (e.g. `facebook/bart-large-cnn`).
pub struct HfInferenceClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HfInferenceClient {
    pub fn new(base_url: &str, model: &str, api_key: &str) -> Self {
        let endpoint = format!("{}/models/{}", base_url.trim_end_matches('/'), model);
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key: api_key.to_string(),
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Serialize)]
struct InferenceParameters {
    max_length: usize,
    min_length: usize,
    do_sample: bool,
}

#[derive(Deserialize)]
struct InferenceResponse {
    summary_text: String,
}

#[async_trait]
impl SummarizationModel for HfInferenceClient {
    async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> Result<String, SummarizationModelError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: InferenceParameters {
                max_length,
                min_length,
                do_sample: false,
            },
        };

        tracing::debug!(endpoint = %self.endpoint, max_length, min_length, "Requesting summary");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SummarizationModelError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SummarizationModelError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let results: Vec<InferenceResponse> = response.json().await.map_err(|e| {
            SummarizationModelError::InvalidResponse(format!("parse response: {}", e))
        })?;

        results
            .into_iter()
            .next()
            .map(|r| r.summary_text)
            .ok_or_else(|| SummarizationModelError::InvalidResponse("empty result set".into()))
    }
}
