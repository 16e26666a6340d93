//! Google Gemini provider.
//!
//! Authentication is by API key only (config, `MRQUACK_API_KEY`,
//! `GEMINI_API_KEY` or `GOOGLE_API_KEY`). The key travels in the
//! `x-goog-api-key` header so it never shows up in request URLs or in
//! transport error messages.

use crate::llm::{
    build_provider_client, build_provider_client_with_timeout, sanitize_api_error,
    scrub_secret_patterns, traits::Provider,
};
use reqwest::Client;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

mod types;
use types::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const API_KEY_ENV_VARS: [&str; 3] = ["MRQUACK_API_KEY", "GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Matches the timeout of `build_provider_client`.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Extra room the HTTP client gets past the per-turn bound, so the caller's
/// own timer fires first and reports a timeout instead of a transport error.
const REQUEST_TIMEOUT_MARGIN: Duration = Duration::from_secs(5);

pub struct GeminiProvider {
    api_key: Option<String>,
    base_url: String,
    request_timeout: Duration,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// Key priority: the explicit key, then the first non-empty variable of
    /// `MRQUACK_API_KEY`, `GEMINI_API_KEY`, `GOOGLE_API_KEY`.
    pub fn new(api_key: Option<&str>) -> Self {
        let resolved_key = api_key
            .filter(|key| !key.is_empty())
            .map(String::from)
            .or_else(|| {
                API_KEY_ENV_VARS
                    .iter()
                    .filter_map(|var| std::env::var(var).ok())
                    .find(|key| !key.is_empty())
            });

        Self {
            api_key: resolved_key,
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            client: build_provider_client(),
        }
    }

    /// Size the HTTP client for chat turns bounded by `call_timeout`.
    #[must_use]
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.request_timeout = call_timeout + REQUEST_TIMEOUT_MARGIN;
        self.client = build_provider_client_with_timeout(self.request_timeout.as_secs());
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> anyhow::Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Gemini API key not found. Options:\n\
                 1. Set GEMINI_API_KEY (or GOOGLE_API_KEY) env var\n\
                 2. Set api_key in ~/.mrquack/config.toml\n\
                 3. Get an API key from https://aistudio.google.com/app/apikey"
            )
        })
    }

    fn model_name(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{model}")
        }
    }

    fn build_request(
        system_prompt: Option<&str>,
        message: &str,
        temperature: f64,
    ) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: message.to_string(),
                }],
            }],
            system_instruction: system_prompt.map(|sys| Content {
                role: None,
                parts: vec![Part {
                    text: sys.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                temperature,
                max_output_tokens: 8192,
            },
        }
    }

    fn extract_text(result: &GenerateContentResponse) -> anyhow::Result<String> {
        let text = result
            .candidates
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = result
                .candidates
                .as_ref()
                .and_then(|c| c.first())
                .and_then(|candidate| candidate.finish_reason.as_deref())
                .unwrap_or("no candidates");
            anyhow::bail!("No response from Gemini ({reason})");
        }

        Ok(text)
    }

    async fn call_api(
        &self,
        request: &GenerateContentRequest,
        model: &str,
    ) -> anyhow::Result<GenerateContentResponse> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/{}:generateContent",
            self.base_url,
            Self::model_name(model)
        );

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                anyhow::anyhow!(
                    "Gemini request failed: {}",
                    scrub_secret_patterns(&e.to_string())
                )
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Gemini API error ({status}): {}",
                sanitize_api_error(&error_text)
            );
        }

        let result: GenerateContentResponse = response.json().await?;
        if let Some(err) = result.error.as_ref() {
            anyhow::bail!("Gemini API error: {}", sanitize_api_error(&err.message));
        }

        if let Some(usage) = result.usage_metadata.as_ref() {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                reply_tokens = usage.candidates_token_count,
                "Gemini usage"
            );
        }

        Ok(result)
    }
}

impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn chat_with_system<'a>(
        &'a self,
        system_prompt: Option<&'a str>,
        message: &'a str,
        model: &'a str,
        temperature: f64,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<String>> + Send + 'a>> {
        Box::pin(async move {
            let request = Self::build_request(system_prompt, message, temperature);
            let result = self.call_api(&request, model).await?;
            Self::extract_text(&result)
        })
    }
}
