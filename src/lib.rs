//! Earlyfrench - Motor de contenidos para aprender francés
//!
//! Reglas de género con sus excepciones, lecciones de pronunciación,
//! conjugación verbal (incluido el passé composé) y un compañero de
//! conversación opcional sobre un modelo de lenguaje externo.

pub mod config;
pub mod conversation;
pub mod error;
pub mod french;
pub mod logging;
pub mod tutor;

pub use config::{Command, Config, Settings};
pub use conversation::{ConversationPartner, ConversationResponse, ConversationSession};
pub use error::{Error, Result};
pub use french::{GenderTeacher, PronunciationCoach, VerbConjugator};
pub use tutor::Tutor;
