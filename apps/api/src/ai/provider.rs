//! Text-generation provider boundary.
//!
//! ARCHITECTURAL RULE: no other module may talk to the generative-text API
//! directly. Everything goes through `TextGenerator`, so the fallback policy
//! in `ai::AiClient` is the only place that decides which key and model a
//! request uses — and tests can swap the whole network layer for a stub.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("provider returned empty content")]
    EmptyContent,

    #[error("request failed: {0}")]
    Request(String),
}

/// The single generation primitive: prompt in, plain text out, addressed by
/// model identifier and credential.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, ProviderError>;
}

// ── Gemini HTTP implementation ──────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
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
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    fn text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .find_map(|p| p.text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Production `TextGenerator` backed by the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiProvider {
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }
}

impl Default for GeminiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{GEMINI_API_BASE}/{model}:generateContent?key={api_key}");
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiError>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(classify_failure(status.as_u16(), &message));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        parsed.text().ok_or(ProviderError::EmptyContent)
    }
}

/// Maps an HTTP failure onto the taxonomy the fallback policy drives on.
/// Credential markers are checked first: a 400/403 or a key-flavored message
/// must abort the model-trial loop, not advance it.
pub fn classify_failure(status: u16, message: &str) -> ProviderError {
    let lower = message.to_lowercase();
    if status == 400
        || status == 401
        || status == 403
        || lower.contains("api key")
        || lower.contains("api_key_invalid")
        || lower.contains("permission denied")
    {
        ProviderError::InvalidCredential(format!("status {status}: {message}"))
    } else if status == 404 || lower.contains("not found") || lower.contains("is not supported") {
        ProviderError::ModelUnavailable(format!("status {status}: {message}"))
    } else {
        ProviderError::Request(format!("status {status}: {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_credential_failures() {
        assert!(matches!(
            classify_failure(400, "API key not valid"),
            ProviderError::InvalidCredential(_)
        ));
        assert!(matches!(
            classify_failure(403, "forbidden"),
            ProviderError::InvalidCredential(_)
        ));
        assert!(matches!(
            classify_failure(500, "API_KEY_INVALID"),
            ProviderError::InvalidCredential(_)
        ));
    }

    #[test]
    fn test_classify_model_failures() {
        assert!(matches!(
            classify_failure(404, "model not found"),
            ProviderError::ModelUnavailable(_)
        ));
        assert!(matches!(
            classify_failure(501, "generateContent is not supported for this model"),
            ProviderError::ModelUnavailable(_)
        ));
    }

    #[test]
    fn test_classify_other_failures() {
        assert!(matches!(
            classify_failure(429, "rate limited"),
            ProviderError::Request(_)
        ));
        assert!(matches!(
            classify_failure(503, "overloaded"),
            ProviderError::Request(_)
        ));
    }
}
