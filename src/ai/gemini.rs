use crate::error::{PerfRecapError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Gemini generateContent API client
pub struct GeminiClient {
    api_key: String,
    client: Client,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini API client
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            api_key,
            client,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Set the model to use
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Generate a single text completion from a prompt.
    ///
    /// One request, one response; no streaming. An empty completion is
    /// treated as an API error.
    pub async fn generate(&self, prompt: String) -> Result<String> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let url = format!("{}/{}:generateContent", GEMINI_API_BASE, self.model);

        tracing::debug!(model = %self.model, "requesting Gemini completion");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PerfRecapError::gemini_api(format!(
                "request failed with status {}: {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await?;
        extract_text(gemini_response)
    }
}

/// Pull the text out of the first candidate, concatenating its parts
fn extract_text(response: GeminiResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| PerfRecapError::gemini_api("no candidates in response"))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .map(|part| part.text)
        .collect();

    if text.is_empty() {
        return Err(PerfRecapError::gemini_api("empty completion in response"));
    }

    Ok(text)
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}
