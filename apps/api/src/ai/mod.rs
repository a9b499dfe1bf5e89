//! AI assist — summaries, bullet rewriting, and sample-content generation.
//!
//! All operations run through one policy:
//! 1. Resolve the credential: user override → environment default → bundled
//!    fallback key.
//! 2. Try the model candidates in order; non-credential failures advance the
//!    loop, a credential rejection aborts it immediately.
//! 3. If the rejected key was not already the bundled fallback, run the whole
//!    model loop once more with the fallback key. Callers never observe the
//!    intermediate failure — only the final success or the final error.

pub mod handlers;
pub mod prompts;
pub mod provider;

use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::ai::provider::{ProviderError, TextGenerator};
use crate::models::field::ResumeField;

/// Deployment-bundled default key, used when nothing else is configured and
/// as the transparent retry credential when a configured key is rejected.
pub const FALLBACK_API_KEY: &str = "AIzaSyD8mR2kUvq1wBundledFallback00000000";

/// Model identifiers tried in order until one answers.
pub const MODEL_CANDIDATES: [&str; 3] = ["gemini-2.5-flash", "gemini-1.5-flash", "gemini-pro"];

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI credential rejected: {0}")]
    Credential(String),

    #[error("no AI model available: {0}")]
    ModelUnavailable(String),

    #[error("AI response did not match the expected shape: {0}")]
    MalformedResponse(String),

    #[error("AI request failed: {0}")]
    Other(String),
}

impl From<ProviderError> for AiError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::InvalidCredential(m) => AiError::Credential(m),
            ProviderError::ModelUnavailable(m) => AiError::ModelUnavailable(m),
            ProviderError::EmptyContent => AiError::Other("provider returned empty content".into()),
            ProviderError::Request(m) => AiError::Other(m),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Override,
    Environment,
    Fallback,
}

/// Credential resolution as a pure function of the three tiers.
pub fn resolve_api_key(override_key: Option<&str>, env_key: Option<&str>) -> (String, KeySource) {
    if let Some(key) = override_key {
        let key = key.trim();
        if !key.is_empty() {
            return (key.to_string(), KeySource::Override);
        }
    }
    if let Some(key) = env_key {
        let key = key.trim();
        if !key.is_empty() {
            return (key.to_string(), KeySource::Environment);
        }
    }
    (FALLBACK_API_KEY.to_string(), KeySource::Fallback)
}

/// Structured bundle returned by `generate_from_field`. Deserialization is
/// strict on field presence: a response that does not carry the exact shape
/// fails the whole operation — partial data is never handed back.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResume {
    pub personal_info: SamplePersonalInfo,
    pub experience: Vec<SampleExperience>,
    pub education: Vec<SampleEducation>,
    pub projects: Vec<SampleProject>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePersonalInfo {
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleExperience {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleEducation {
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleProject {
    pub name: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
}

/// The AI assist client shared by all handlers. Holds the environment-level
/// default key; per-request user overrides come in as arguments.
#[derive(Clone)]
pub struct AiClient {
    provider: Arc<dyn TextGenerator>,
    env_key: Option<String>,
}

impl AiClient {
    pub fn new(provider: Arc<dyn TextGenerator>, env_key: Option<String>) -> Self {
        Self { provider, env_key }
    }

    /// Cheap reachability probe used by the settings surface.
    pub async fn test_connection(&self, override_key: Option<&str>) -> Result<(), AiError> {
        self.generate(override_key, "Test connection").await.map(|_| ())
    }

    /// Bounded professional summary (~50 words), plain text.
    pub async fn generate_summary(
        &self,
        override_key: Option<&str>,
        job_title: &str,
        skills: &[String],
        experience: &str,
        field: ResumeField,
    ) -> Result<String, AiError> {
        let prompt = prompts::summary_prompt(job_title, skills, experience, field);
        let text = self.generate(override_key, &prompt).await?;
        Ok(text.trim().to_string())
    }

    /// Rewrites one free-text block into more impactful bullet phrasing.
    /// The caller re-splits the result into lines for rendering.
    pub async fn improve_bullets(
        &self,
        override_key: Option<&str>,
        text: &str,
        role: &str,
        field: ResumeField,
    ) -> Result<String, AiError> {
        let prompt = prompts::improve_prompt(text, role, field);
        let improved = self.generate(override_key, &prompt).await?;
        Ok(improved.trim().to_string())
    }

    /// Sample content for a whole resume, tailored to the career field.
    pub async fn generate_from_field(
        &self,
        override_key: Option<&str>,
        field: ResumeField,
    ) -> Result<SampleResume, AiError> {
        let prompt = prompts::sample_resume_prompt(field);
        let raw = self.generate(override_key, &prompt).await?;
        let cleaned = strip_json_fences(&raw);
        serde_json::from_str(cleaned).map_err(|e| AiError::MalformedResponse(e.to_string()))
    }

    /// One generation under the full key/model fallback policy.
    async fn generate(&self, override_key: Option<&str>, prompt: &str) -> Result<String, AiError> {
        let (key, source) = resolve_api_key(override_key, self.env_key.as_deref());
        match self.try_models(&key, prompt).await {
            Err(AiError::Credential(reason)) if source != KeySource::Fallback => {
                warn!("AI key ({source:?}) rejected: {reason}; retrying with the bundled fallback key");
                self.try_models(FALLBACK_API_KEY, prompt).await
            }
            result => result,
        }
    }

    /// Tries each model candidate in order with one key. A credential
    /// rejection aborts immediately; anything else moves to the next model.
    async fn try_models(&self, api_key: &str, prompt: &str) -> Result<String, AiError> {
        let mut last_error: Option<ProviderError> = None;
        for model in MODEL_CANDIDATES {
            match self.provider.generate(api_key, model, prompt).await {
                Ok(text) => return Ok(text),
                Err(ProviderError::InvalidCredential(reason)) => {
                    return Err(AiError::Credential(reason));
                }
                Err(err) => {
                    warn!("Model {model} failed, trying next: {err}");
                    last_error = Some(err);
                }
            }
        }
        Err(last_error
            .map(AiError::from)
            .unwrap_or_else(|| AiError::Other("no model candidates configured".into())))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_resolve_api_key_priority_order() {
        let (key, source) = resolve_api_key(Some("user-key"), Some("env-key"));
        assert_eq!((key.as_str(), source), ("user-key", KeySource::Override));

        let (key, source) = resolve_api_key(Some("  "), Some("env-key"));
        assert_eq!((key.as_str(), source), ("env-key", KeySource::Environment));

        let (key, source) = resolve_api_key(None, None);
        assert_eq!((key.as_str(), source), (FALLBACK_API_KEY, KeySource::Fallback));

        let (_, source) = resolve_api_key(Some(""), Some(" "));
        assert_eq!(source, KeySource::Fallback);
    }

    /// Scriptable provider stub: records every (key, model) attempt and
    /// answers according to the configured behavior.
    struct StubProvider {
        calls: Mutex<Vec<(String, String)>>,
        behavior: Behavior,
    }

    enum Behavior {
        /// Reject every key except this one with InvalidCredential.
        AcceptOnlyKey(&'static str, &'static str),
        /// First N models are unavailable, then succeed.
        UnavailableFirst(usize, &'static str),
        /// Reject everything as a credential failure.
        RejectAll,
        /// Always succeed with this text.
        Always(&'static str),
    }

    impl StubProvider {
        fn new(behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                behavior,
            })
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for StubProvider {
        async fn generate(
            &self,
            api_key: &str,
            model: &str,
            _prompt: &str,
        ) -> Result<String, ProviderError> {
            let call_count = {
                let mut calls = self.calls.lock().unwrap();
                calls.push((api_key.to_string(), model.to_string()));
                calls.len()
            };
            match &self.behavior {
                Behavior::AcceptOnlyKey(key, reply) => {
                    if api_key == *key {
                        Ok(reply.to_string())
                    } else {
                        Err(ProviderError::InvalidCredential("API key not valid".into()))
                    }
                }
                Behavior::UnavailableFirst(n, reply) => {
                    if call_count <= *n {
                        Err(ProviderError::ModelUnavailable("model not found".into()))
                    } else {
                        Ok(reply.to_string())
                    }
                }
                Behavior::RejectAll => {
                    Err(ProviderError::InvalidCredential("API key not valid".into()))
                }
                Behavior::Always(reply) => Ok(reply.to_string()),
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_override_falls_back_transparently() {
        let stub = StubProvider::new(Behavior::AcceptOnlyKey(FALLBACK_API_KEY, "A summary."));
        let client = AiClient::new(stub.clone(), None);

        let result = client
            .generate_summary(
                Some("bad-user-key"),
                "Engineer",
                &["Rust".to_string()],
                "Built services",
                ResumeField::SoftwareEngineer,
            )
            .await;

        // Caller observes plain success — the retry is invisible.
        assert_eq!(result.unwrap(), "A summary.");

        let calls = stub.calls();
        // One aborted attempt with the override, then the fallback succeeds.
        assert_eq!(calls[0].0, "bad-user-key");
        assert_eq!(calls[1].0, FALLBACK_API_KEY);
        assert_eq!(calls.len(), 2);
    }

    #[tokio::test]
    async fn test_credential_failure_aborts_model_loop() {
        let stub = StubProvider::new(Behavior::RejectAll);
        let client = AiClient::new(stub.clone(), Some("env-key".to_string()));

        let result = client.test_connection(None).await;
        assert!(matches!(result, Err(AiError::Credential(_))));

        // One attempt per loop (no model cycling on credential errors):
        // env key once, fallback key once.
        let calls = stub.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], ("env-key".to_string(), MODEL_CANDIDATES[0].to_string()));
        assert_eq!(calls[1].0, FALLBACK_API_KEY);
    }

    #[tokio::test]
    async fn test_rejected_fallback_key_is_not_retried() {
        let stub = StubProvider::new(Behavior::RejectAll);
        let client = AiClient::new(stub.clone(), None);

        // No override, no env key — the fallback is already in use, so a
        // rejection is final.
        let result = client.test_connection(None).await;
        assert!(matches!(result, Err(AiError::Credential(_))));
        assert_eq!(stub.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_models_advance_the_loop() {
        let stub = StubProvider::new(Behavior::UnavailableFirst(2, "hello"));
        let client = AiClient::new(stub.clone(), Some("env-key".to_string()));

        let result = client.test_connection(None).await;
        assert!(result.is_ok());

        let models: Vec<String> = stub.calls().into_iter().map(|(_, m)| m).collect();
        assert_eq!(
            models,
            vec![
                MODEL_CANDIDATES[0].to_string(),
                MODEL_CANDIDATES[1].to_string(),
                MODEL_CANDIDATES[2].to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_generate_from_field_parses_fenced_json() {
        let stub = StubProvider::new(Behavior::Always(
            "```json\n{\"personalInfo\":{\"summary\":\"S\"},\
\"experience\":[{\"company\":\"C\",\"position\":\"P\",\"startDate\":\"2020-01\",\
\"endDate\":\"2021-01\",\"current\":false,\"description\":\"• Did\"}],\
\"education\":[],\"projects\":[],\"skills\":[\"A\"]}\n```",
        ));
        let client = AiClient::new(stub, None);

        let sample = client
            .generate_from_field(None, ResumeField::Teacher)
            .await
            .unwrap();
        assert_eq!(sample.personal_info.summary, "S");
        assert_eq!(sample.experience.len(), 1);
        assert_eq!(sample.skills, vec!["A"]);
    }

    #[tokio::test]
    async fn test_generate_from_field_rejects_malformed_shape() {
        let stub = StubProvider::new(Behavior::Always("{\"summary\": \"missing the rest\"}"));
        let client = AiClient::new(stub, None);

        let result = client.generate_from_field(None, ResumeField::Doctor).await;
        assert!(matches!(result, Err(AiError::MalformedResponse(_))));
    }
}
