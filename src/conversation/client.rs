//! Transporte hacia el modelo de lenguaje externo
//!
//! El trait permite probar la conversación sin red; el cliente HTTP solo se
//! compila con la feature `ai`.

use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::Result;

/// Rol de un mensaje en el historial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Convierte una lista de mensajes en la respuesta cruda del modelo
pub trait ChatBackend {
    fn complete(&self, messages: &[ChatMessage], settings: &Settings) -> Result<String>;
}

#[cfg(feature = "ai")]
pub use openai::OpenAiBackend;

#[cfg(feature = "ai")]
mod openai {
    use std::time::Duration;

    use reqwest::blocking::Client;
    use serde::{Deserialize, Serialize};

    use super::{ChatBackend, ChatMessage};
    use crate::config::Settings;
    use crate::error::{Error, Result};

    #[derive(Serialize)]
    struct CompletionRequest<'a> {
        model: &'a str,
        messages: &'a [ChatMessage],
        temperature: f32,
        max_tokens: u32,
    }

    #[derive(Deserialize)]
    struct CompletionResponse {
        choices: Vec<Choice>,
    }

    #[derive(Deserialize)]
    struct Choice {
        message: ReplyMessage,
    }

    #[derive(Deserialize)]
    struct ReplyMessage {
        content: Option<String>,
    }

    /// Cliente de chat completions compatible con OpenAI
    pub struct OpenAiBackend {
        client: Client,
        api_key: String,
        endpoint: String,
    }

    impl OpenAiBackend {
        pub fn new(settings: &Settings) -> Result<Self> {
            let api_key = settings
                .openai_api_key
                .clone()
                .ok_or_else(|| Error::InvalidSetting {
                    key: "OPENAI_API_KEY".to_string(),
                    value: String::new(),
                })?;

            let client = Client::builder()
                .timeout(Duration::from_secs(settings.request_timeout_secs))
                .build()
                .map_err(|e| Error::Backend(e.to_string()))?;

            Ok(Self {
                client,
                api_key,
                endpoint: format!(
                    "{}/chat/completions",
                    settings.openai_base_url.trim_end_matches('/')
                ),
            })
        }
    }

    impl ChatBackend for OpenAiBackend {
        fn complete(&self, messages: &[ChatMessage], settings: &Settings) -> Result<String> {
            let request = CompletionRequest {
                model: &settings.openai_model,
                messages,
                temperature: settings.openai_temperature,
                max_tokens: settings.openai_max_tokens,
            };

            tracing::debug!(
                "OpenAiBackend::complete: enviando {} mensajes a model={}",
                messages.len(),
                settings.openai_model
            );

            let response = self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request)
                .send()
                .map_err(|e| Error::Backend(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(Error::Backend(format!("HTTP {}", status)));
            }

            let parsed: CompletionResponse = response
                .json()
                .map_err(|e| Error::InvalidResponse(e.to_string()))?;

            let choice = parsed
                .choices
                .into_iter()
                .next()
                .ok_or_else(|| Error::InvalidResponse("respuesta sin opciones".to_string()))?;

            Ok(choice.message.content.unwrap_or_default())
        }
    }
}
