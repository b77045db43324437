//! Compañero de conversación con IA
//!
//! Paso directo hacia un modelo de lenguaje externo. El historial vive en una
//! `ConversationSession` que pertenece al llamador; el compañero no guarda
//! estado entre llamadas.

pub mod client;
pub mod prompt;
pub mod scenarios;

pub use client::{ChatBackend, ChatMessage, Role};
pub use prompt::{build_system_prompt, parse_response, ConversationResponse};
pub use scenarios::{scenario, Scenario};

use crate::config::Settings;
use crate::french::models::{CefrLevel, Formality};

/// Mensajes del historial que se reenvían al modelo en cada turno
pub const HISTORY_WINDOW: usize = 5;

/// Mensajes que conserva una sesión; los más antiguos se descartan
pub const HISTORY_LIMIT: usize = 50;

/// Sesión de conversación: nivel, registro e historial
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub level: CefrLevel,
    pub formality: Formality,
    history: Vec<ChatMessage>,
}

impl ConversationSession {
    pub fn new(level: CefrLevel) -> Self {
        Self {
            level,
            formality: Formality::default(),
            history: Vec::new(),
        }
    }

    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = formality;
        self
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Los últimos `HISTORY_WINDOW` mensajes
    pub fn recent(&self) -> &[ChatMessage] {
        let start = self.history.len().saturating_sub(HISTORY_WINDOW);
        &self.history[start..]
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Añade un mensaje manteniendo como máximo `HISTORY_LIMIT`
    fn push(&mut self, message: ChatMessage) {
        if self.history.len() >= HISTORY_LIMIT {
            let excess = self.history.len() + 1 - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
        self.history.push(message);
    }
}

/// Compañero de conversación
pub struct ConversationPartner {
    backend: Option<Box<dyn ChatBackend>>,
    settings: Settings,
}

impl ConversationPartner {
    pub fn new(backend: Option<Box<dyn ChatBackend>>, settings: Settings) -> Self {
        Self { backend, settings }
    }

    /// Crea el compañero con el backend HTTP si hay clave de API
    ///
    /// Sin la feature `ai` o sin clave, el compañero responde que el servicio
    /// no está disponible.
    pub fn from_settings(settings: Settings) -> Self {
        #[cfg(feature = "ai")]
        let backend: Option<Box<dyn ChatBackend>> = match client::OpenAiBackend::new(&settings) {
            Ok(backend) => Some(Box::new(backend)),
            Err(e) => {
                tracing::warn!("No se pudo inicializar el cliente de IA: {}", e);
                None
            }
        };

        #[cfg(not(feature = "ai"))]
        let backend: Option<Box<dyn ChatBackend>> = None;

        Self::new(backend, settings)
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_some()
    }

    /// Envía un turno del alumno y registra ambos mensajes en la sesión
    pub fn chat(&self, session: &mut ConversationSession, user_input: &str) -> ConversationResponse {
        session.push(ChatMessage::new(Role::User, user_input));

        let response = self.generate_response(session);

        session.push(ChatMessage::new(Role::Assistant, response.french.clone()));

        response
    }

    fn generate_response(&self, session: &ConversationSession) -> ConversationResponse {
        let Some(backend) = self.backend.as_ref() else {
            return ConversationResponse::plain(
                "Désolé, le service n'est pas disponible.",
                "Sorry, the service is not available.",
            );
        };

        let mut messages = Vec::with_capacity(HISTORY_WINDOW + 1);
        messages.push(ChatMessage::new(
            Role::System,
            build_system_prompt(session.level, session.formality),
        ));
        messages.extend_from_slice(session.recent());

        match backend.complete(&messages, &self.settings) {
            Ok(content) => parse_response(&content),
            Err(e) => {
                tracing::warn!("Error generando respuesta: {}", e);
                ConversationResponse::plain(
                    "Pardon, je n'ai pas compris. Pouvez-vous répéter ?",
                    "Sorry, I didn't understand. Can you repeat?",
                )
            }
        }
    }
}
