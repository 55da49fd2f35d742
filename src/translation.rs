use crate::config::Config;
use crate::i18n::{Locale, TranslationMetrics, TranslationValidator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a welcome note could not be translated.
///
/// The preview controller collapses every variant into a single
/// "translation failed" flag; the variants exist for logging.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("Failed to reach translation service: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Translation response contained no text")]
    EmptyResponse,
}

/// Anything that can turn English text into another locale.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: Locale) -> Result<String, TranslationError>;
}

/// OpenAI Chat Completion request for translation
#[derive(Debug, Serialize)]
struct TranslationRequest {
    model: String,
    messages: Vec<Message>,
    max_completion_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning_effort: Option<String>,
}

/// Check if a model is a reasoning model that doesn't support temperature
fn is_reasoning_model(model: &str) -> bool {
    model.starts_with("gpt-5")
        || model.starts_with("o1")
        || model.starts_with("o3")
        || model.starts_with("o4")
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

/// Build the system prompt for translation
fn build_translation_system_prompt(target_language: &str) -> String {
    format!(
        r#"You are a professional HR translator. Translate the following welcome note for a new employee from English to {}.

## Translation Rules

### DO NOT translate:
- Names of people, teams, companies, and products
- URLs, e-mail addresses, and links
- Placeholders in curly braces (e.g., {{first_name}}, {{start_date}})

### DO translate:
- Greetings, sentences, and descriptive text
- Job titles when a common local equivalent exists

### Formatting:
- Preserve line breaks and paragraph structure
- Preserve all emojis
- Return only the translated note, without commentary or quotation marks

### Tone:
- Keep the same warm, welcoming tone
- Use the form of address customary for workplace communication in {}"#,
        target_language, target_language
    )
}

/// Build the user prompt for translation
fn build_translation_user_prompt(note: &str, target_language: &str) -> String {
    format!(
        "Please translate the following welcome note to {}:\n\n{}",
        target_language, note
    )
}

/// Translator backed by an OpenAI-compatible chat completions endpoint.
///
/// Each call is a single attempt; a failure is reported to the caller, which
/// shows the English note until the author edits the note or reselects the
/// locale.
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiTranslator {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            api_url: config.openai_api_url.clone(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            max_tokens: config.translation_max_tokens,
        }
    }

    /// Build a translator with its own HTTP client using the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, TranslationError> {
        let client = reqwest::Client::builder()
            .timeout(config.translation_timeout())
            .build()?;
        Ok(Self::new(client, config))
    }

    fn build_request(&self, text: &str, target: Locale) -> TranslationRequest {
        // Reasoning models need higher token limits and don't support temperature
        let is_reasoning = is_reasoning_model(&self.model);
        let max_completion_tokens = if is_reasoning {
            16000
        } else {
            self.max_tokens
        };

        TranslationRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: build_translation_system_prompt(target.name()),
                },
                Message {
                    role: "user".to_string(),
                    content: build_translation_user_prompt(text, target.name()),
                },
            ],
            max_completion_tokens,
            temperature: if is_reasoning { None } else { Some(0.3) },
            reasoning_effort: if is_reasoning {
                Some("low".to_string())
            } else {
                None
            },
        }
    }

    async fn send(&self, request: &TranslationRequest) -> Result<String, TranslationError> {
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            return Err(TranslationError::Api { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(TranslationError::EmptyResponse)
    }
}

#[async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(&self, text: &str, target: Locale) -> Result<String, TranslationError> {
        // If target is English (canonical), no translation needed
        if target.is_canonical() {
            return Ok(text.to_string());
        }

        let metrics = TranslationMetrics::global();
        metrics.record_api_call();
        debug!("Requesting {} translation of welcome note", target.code());

        let translated = match self.send(&self.build_request(text, target)).await {
            Ok(translated) => translated,
            Err(e) => {
                metrics.record_api_failure();
                warn!("Translation to {} failed: {}", target.name(), e);
                return Err(e);
            }
        };

        let validation = TranslationValidator::validate(text, &translated);
        if validation.has_warnings() {
            warn!(
                "Translation validation warnings for {} ({}): {:?}",
                target.name(),
                target.code(),
                validation.warnings
            );
        }
        if validation.has_errors() {
            warn!(
                "Translation validation errors for {} ({}): {:?}",
                target.name(),
                target.code(),
                validation.errors
            );
        }

        Ok(translated)
    }
}
