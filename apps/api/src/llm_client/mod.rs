//! Generation Client: the single point of entry for all text-generation calls in Sideline.
//!
//! ARCHITECTURAL RULE: No other module may call the generation provider directly.
//! All model interactions MUST go through this module.
//!
//! One outbound request per model attempt. There is no retry, sleep or back-off here:
//! the only loop walks the configured fallback models, and it only advances when the
//! provider reports the current model as unavailable.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_FALLBACK_MODELS: &[&str] = &["gemini-1.5-flash", "gemini-1.5-pro"];
const API_KEY_HEADER: &str = "x-goog-api-key";

// ────────────────────────────────────────────────────────────────────────────
// Credential
// ────────────────────────────────────────────────────────────────────────────

/// Provider API key. `Debug` is redacted so the key never reaches logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank input so an empty form field never counts as a key.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into().trim().to_string();
        if key.is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request / result types
// ────────────────────────────────────────────────────────────────────────────

/// A fully rendered prompt plus sampling parameters. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    prompt_text: String,
    temperature: f32,
    top_p: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    /// Probabilities are clamped into `[0, 1]`; a zero token cap is treated as no cap.
    pub fn new(
        prompt_text: String,
        temperature: f32,
        top_p: Option<f32>,
        max_output_tokens: Option<u32>,
    ) -> Self {
        Self {
            prompt_text,
            temperature: temperature.clamp(0.0, 1.0),
            top_p: top_p.map(|p| p.clamp(0.0, 1.0)),
            max_output_tokens: max_output_tokens.filter(|&n| n > 0),
        }
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn top_p(&self) -> Option<f32> {
        self.top_p
    }

    pub fn max_output_tokens(&self) -> Option<u32> {
        self.max_output_tokens
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutput {
    pub text: String,
    /// Model that actually produced the text, after any fallback.
    pub model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    InvalidCredential,
    ProviderUnavailable,
    Unknown,
}

/// A failed generation attempt. `message` is the provider's text, shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl GenerationFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Anything that can turn a `GenerationRequest` into text.
/// `GeminiClient` is the production implementation; tests script their own.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, GenerationFailure>;

    /// Same generator, authenticating with `credential` instead of the configured one.
    fn with_credential(&self, credential: Credential) -> Box<dyn TextGenerator>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire format (generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    fn text(&self) -> Option<String> {
        let text: String = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.is_empty()).then_some(text)
    }

    fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return format!("Prompt was blocked by the provider ({reason})");
        }
        match self.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            Some(reason) => format!("Provider returned no text (finish reason: {reason})"),
            None => "Provider returned no text".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
    status: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Failure classification
// ────────────────────────────────────────────────────────────────────────────

/// Maps a provider error response onto the three-way failure taxonomy.
///
/// `http_status` is the HTTP code, `provider_status` the RPC status string from the
/// error body (e.g. `"UNAUTHENTICATED"`), `message` the provider's human text.
pub fn classify_provider_error(
    http_status: u16,
    provider_status: Option<&str>,
    message: &str,
) -> FailureKind {
    let message_lower = message.to_lowercase();

    if matches!(http_status, 401 | 403)
        || matches!(provider_status, Some("UNAUTHENTICATED" | "PERMISSION_DENIED"))
        || message_lower.contains("api key")
        || message_lower.contains("api_key_invalid")
    {
        return FailureKind::InvalidCredential;
    }

    if matches!(http_status, 404 | 429 | 500..=599)
        || matches!(
            provider_status,
            Some("NOT_FOUND" | "UNAVAILABLE" | "RESOURCE_EXHAUSTED" | "DEADLINE_EXCEEDED")
        )
    {
        return FailureKind::ProviderUnavailable;
    }

    FailureKind::Unknown
}

/// Transport failures: unreachable or timed-out provider is transient, anything else is unknown.
fn classify_transport_error(err: &reqwest::Error) -> FailureKind {
    if err.is_connect() || err.is_timeout() {
        FailureKind::ProviderUnavailable
    } else {
        FailureKind::Unknown
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// Generation client for the Gemini `generateContent` API.
///
/// Holds no per-call state: every call is configured entirely by the client's
/// credential and model list plus the request it is given.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    credential: Option<Credential>,
    /// Primary model first, then fallbacks in the order they are tried.
    models: Vec<String>,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("credential", &self.credential)
            .field("models", &self.models)
            .finish()
    }
}

impl GeminiClient {
    pub fn new(
        base_url: impl Into<String>,
        credential: Option<Credential>,
        model: impl Into<String>,
        fallback_models: Vec<String>,
    ) -> Result<Self, reqwest::Error> {
        let model = model.into();
        let mut models = vec![model.clone()];
        models.extend(fallback_models.into_iter().filter(|m| *m != model));

        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credential,
            models,
        })
    }

    pub fn primary_model(&self) -> &str {
        &self.models[0]
    }

    pub fn has_credential(&self) -> bool {
        self.credential.is_some()
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }

    /// Exactly one HTTP request against one model.
    async fn call_model(
        &self,
        model: &str,
        credential: &Credential,
        request: &GenerationRequest,
    ) -> Result<String, GenerationFailure> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: request.prompt_text(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: request.temperature(),
                top_p: request.top_p(),
                max_output_tokens: request.max_output_tokens(),
            },
        };

        let response = self
            .client
            .post(self.endpoint(model))
            .header(API_KEY_HEADER, credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationFailure::new(classify_transport_error(&e), e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let (provider_status, message) = match serde_json::from_str::<ProviderError>(&raw) {
                Ok(parsed) => (parsed.error.status, parsed.error.message),
                Err(_) if raw.trim().is_empty() => (None, format!("Provider returned {status}")),
                Err(_) => (None, raw),
            };
            let kind = classify_provider_error(status.as_u16(), provider_status.as_deref(), &message);
            return Err(GenerationFailure::new(kind, message));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationFailure::new(FailureKind::Unknown, e.to_string()))?;

        parsed
            .text()
            .ok_or_else(|| GenerationFailure::new(FailureKind::Unknown, parsed.empty_reason()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Tries the primary model, then each fallback, moving on only when the current
    /// model is classified `ProviderUnavailable`. Any other failure is returned at once.
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutput, GenerationFailure> {
        let Some(credential) = self.credential.as_ref() else {
            return Err(GenerationFailure::new(
                FailureKind::InvalidCredential,
                "No API key configured. Provide an API key to generate a plan.",
            ));
        };

        let mut last_failure = None;

        for model in &self.models {
            debug!(model = %model, "Calling generation provider");

            match self.call_model(model, credential, request).await {
                Ok(text) => {
                    debug!(model = %model, chars = text.len(), "Generation succeeded");
                    return Ok(GenerationOutput {
                        text,
                        model: model.clone(),
                    });
                }
                Err(failure) if failure.kind == FailureKind::ProviderUnavailable => {
                    warn!(model = %model, "Model unavailable: {}", failure.message);
                    last_failure = Some(failure);
                }
                Err(failure) => return Err(failure),
            }
        }

        Err(last_failure.unwrap_or_else(|| {
            GenerationFailure::new(FailureKind::ProviderUnavailable, "No models configured")
        }))
    }

    fn with_credential(&self, credential: Credential) -> Box<dyn TextGenerator> {
        Box::new(Self {
            credential: Some(credential),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> GenerationRequest {
        GenerationRequest::new("Plan my week".to_string(), 0.7, Some(0.9), Some(1024))
    }

    fn client(server: &MockServer, fallbacks: &[&str]) -> GeminiClient {
        GeminiClient::new(
            server.uri(),
            Credential::new("test-key"),
            "primary-model",
            fallbacks.iter().map(|m| m.to_string()).collect(),
        )
        .unwrap()
    }

    fn success_body(text: &str) -> serde_json::Value {
        json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    fn error_body(code: u16, status: &str, message: &str) -> serde_json::Value {
        json!({"error": {"code": code, "message": message, "status": status}})
    }

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("super-secret").unwrap();
        assert_eq!(format!("{credential:?}"), "Credential(***)");
    }

    #[test]
    fn test_blank_credential_is_none() {
        assert!(Credential::new("   ").is_none());
        assert!(Credential::new("").is_none());
    }

    #[test]
    fn test_request_clamps_probabilities() {
        let request = GenerationRequest::new("x".to_string(), 1.7, Some(-0.2), Some(0));
        assert_eq!(request.temperature(), 1.0);
        assert_eq!(request.top_p(), Some(0.0));
        assert_eq!(request.max_output_tokens(), None);
    }

    #[test]
    fn test_classify_credential_errors() {
        assert_eq!(
            classify_provider_error(400, Some("INVALID_ARGUMENT"), "API key not valid. Please pass a valid API key."),
            FailureKind::InvalidCredential
        );
        assert_eq!(
            classify_provider_error(403, Some("PERMISSION_DENIED"), "Permission denied"),
            FailureKind::InvalidCredential
        );
        assert_eq!(
            classify_provider_error(401, None, "Unauthorized"),
            FailureKind::InvalidCredential
        );
    }

    #[test]
    fn test_classify_unavailable_errors() {
        assert_eq!(
            classify_provider_error(404, Some("NOT_FOUND"), "models/foo is not found"),
            FailureKind::ProviderUnavailable
        );
        assert_eq!(
            classify_provider_error(503, Some("UNAVAILABLE"), "The model is overloaded"),
            FailureKind::ProviderUnavailable
        );
        assert_eq!(
            classify_provider_error(429, Some("RESOURCE_EXHAUSTED"), "Quota exceeded"),
            FailureKind::ProviderUnavailable
        );
    }

    #[test]
    fn test_classify_other_errors_unknown() {
        assert_eq!(
            classify_provider_error(400, Some("INVALID_ARGUMENT"), "Invalid JSON payload"),
            FailureKind::Unknown
        );
    }

    #[tokio::test]
    async fn test_generate_success_sends_prompt_and_sampling() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/primary-model:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_partial_json(json!({
                "contents": [{"role": "user", "parts": [{"text": "Plan my week"}]}],
                "generationConfig": {"maxOutputTokens": 1024}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("1. Weekly Schedule\nRun")))
            .expect(1)
            .mount(&server)
            .await;

        let output = client(&server, &[]).generate(&request()).await.unwrap();
        assert_eq!(output.text, "1. Weekly Schedule\nRun");
        assert_eq!(output.model, "primary-model");
    }

    #[tokio::test]
    async fn test_generate_falls_back_on_model_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/primary-model:generateContent"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(error_body(404, "NOT_FOUND", "model not found")),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/backup-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let output = client(&server, &["backup-model"])
            .generate(&request())
            .await
            .unwrap();
        assert_eq!(output.model, "backup-model");
        assert_eq!(output.text, "ok");
    }

    #[tokio::test]
    async fn test_generate_does_not_fall_back_on_bad_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/primary-model:generateContent"))
            .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
                400,
                "INVALID_ARGUMENT",
                "API key not valid. Please pass a valid API key.",
            )))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/backup-model:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .expect(0)
            .mount(&server)
            .await;

        let failure = client(&server, &["backup-model"])
            .generate(&request())
            .await
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::InvalidCredential);
        assert_eq!(failure.message, "API key not valid. Please pass a valid API key.");
    }

    #[tokio::test]
    async fn test_generate_returns_last_unavailable_when_all_models_fail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(503).set_body_json(error_body(503, "UNAVAILABLE", "overloaded")),
            )
            .expect(2)
            .mount(&server)
            .await;

        let failure = client(&server, &["backup-model"])
            .generate(&request())
            .await
            .unwrap_err();
        assert_eq!(failure.kind, FailureKind::ProviderUnavailable);
        assert_eq!(failure.message, "overloaded");
    }

    #[tokio::test]
    async fn test_generate_unknown_on_unparseable_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let failure = client(&server, &[]).generate(&request()).await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Unknown);
        assert_eq!(failure.message, "bad request");
    }

    #[tokio::test]
    async fn test_generate_blocked_prompt_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"promptFeedback": {"blockReason": "SAFETY"}})),
            )
            .mount(&server)
            .await;

        let failure = client(&server, &[]).generate(&request()).await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::Unknown);
        assert!(failure.message.contains("SAFETY"));
    }

    #[tokio::test]
    async fn test_generate_without_credential_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .expect(0)
            .mount(&server)
            .await;

        let keyless = GeminiClient::new(server.uri(), None, "primary-model", vec![]).unwrap();
        let failure = keyless.generate(&request()).await.unwrap_err();
        assert_eq!(failure.kind, FailureKind::InvalidCredential);
    }

    #[tokio::test]
    async fn test_with_credential_authenticates_with_new_key() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-goog-api-key", "form-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(success_body("ok")))
            .expect(1)
            .mount(&server)
            .await;

        let keyless = GeminiClient::new(server.uri(), None, "primary-model", vec![]).unwrap();
        let keyed = keyless.with_credential(Credential::new("form-key").unwrap());

        let output = keyed.generate(&request()).await.unwrap();
        assert_eq!(output.text, "ok");
        assert!(!keyless.has_credential());
    }

    #[test]
    fn test_fallback_list_dedupes_primary() {
        let client = GeminiClient::new(
            DEFAULT_BASE_URL,
            None,
            "gemini-1.5-flash",
            DEFAULT_FALLBACK_MODELS.iter().map(|m| m.to_string()).collect(),
        )
        .unwrap();
        assert_eq!(client.models, vec!["gemini-1.5-flash", "gemini-1.5-pro"]);
        assert_eq!(client.primary_model(), "gemini-1.5-flash");
    }
}
