use super::transcript::Transcript;
use crate::config::Config;
use crate::error::ChatError;
use crate::llm::{GeminiProvider, Provider};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Sends one user turn at a time to the completion service, in character.
pub struct ChatOrchestrator {
    provider: Box<dyn Provider>,
    model: String,
    temperature: f64,
    timeout: Duration,
}

impl ChatOrchestrator {
    pub fn new(
        provider: Box<dyn Provider>,
        model: impl Into<String>,
        temperature: f64,
        timeout: Duration,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            timeout,
        }
    }

    /// Gemini-backed orchestrator using the configured key, model and timeout.
    pub fn from_config(config: &Config) -> Self {
        let timeout = Duration::from_secs(config.chat.timeout_secs);
        let provider = GeminiProvider::new(config.api_key.as_deref())
            .with_base_url(&config.chat.api_base)
            .with_timeout(timeout);
        if !provider.has_api_key() {
            tracing::warn!("No Gemini API key configured; chat turns will fail");
        }
        Self::new(
            Box::new(provider),
            config.model.clone(),
            config.temperature,
            timeout,
        )
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn build_prompt(persona: &str, user_message: &str) -> String {
        format!(
            "You are Mr. Quack 🦆, a chatbot with this persona:\n\
             {persona}\n\
             \n\
             Always stay in character as Mr. Quack when replying.\n\
             User: {user_message}"
        )
    }

    /// Ask Mr. Quack for a reply to `user_message`.
    ///
    /// The exchange is recorded in `transcript` only once a reply arrives. A
    /// provider failure, a timeout or cancellation through `cancel` leaves the
    /// transcript untouched.
    pub async fn send(
        &self,
        transcript: &mut Transcript,
        persona: &str,
        user_message: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ChatError> {
        if user_message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let prompt = Self::build_prompt(persona, user_message);
        let provider = self.provider.name().to_string();
        tracing::debug!(
            provider = provider.as_str(),
            model = self.model.as_str(),
            prompt_chars = prompt.chars().count(),
            "Sending chat turn"
        );

        let call = self.provider.chat(&prompt, &self.model, self.temperature);
        let outcome = tokio::select! {
            biased;
            () = cancel.cancelled() => None,
            result = tokio::time::timeout(self.timeout, call) => Some(result),
        };

        let reply = match outcome {
            None => {
                tracing::info!(provider = provider.as_str(), "Chat turn cancelled");
                return Err(ChatError::Cancelled);
            }
            Some(Err(_elapsed)) => {
                tracing::warn!(
                    provider = provider.as_str(),
                    timeout_secs = self.timeout.as_secs(),
                    "Chat turn timed out"
                );
                return Err(ChatError::Timeout {
                    provider,
                    secs: self.timeout.as_secs(),
                });
            }
            Some(Ok(Err(e))) => {
                tracing::warn!(provider = provider.as_str(), "Chat turn failed: {e:#}");
                return Err(ChatError::Provider {
                    provider,
                    message: format!("{e:#}"),
                });
            }
            Some(Ok(Ok(reply))) => reply,
        };

        transcript.push_exchange(user_message, reply.clone());
        Ok(reply)
    }
}
