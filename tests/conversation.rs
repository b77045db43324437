//! Tests de integración del compañero de conversación.
//!
//! El backend se sustituye por un guion en memoria: no hay red.
//!
//! Ejecutar solo estos tests:  cargo test --test conversation

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use earlyfrench::conversation::{ChatBackend, ChatMessage, Role, HISTORY_WINDOW};
use earlyfrench::french::models::{CefrLevel, Formality};
use earlyfrench::{ConversationPartner, ConversationSession, Error, Result, Settings};

/// Devuelve las respuestas del guion en orden y registra lo que recibe
struct ScriptedBackend {
    replies: RefCell<VecDeque<Result<String>>>,
    received: Rc<RefCell<Vec<Vec<ChatMessage>>>>,
}

impl ScriptedBackend {
    fn new(replies: Vec<Result<String>>) -> (Self, Rc<RefCell<Vec<Vec<ChatMessage>>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let backend = Self {
            replies: RefCell::new(replies.into()),
            received: Rc::clone(&received),
        };
        (backend, received)
    }
}

impl ChatBackend for ScriptedBackend {
    fn complete(&self, messages: &[ChatMessage], _settings: &Settings) -> Result<String> {
        self.received.borrow_mut().push(messages.to_vec());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok("Encore ?".to_string()))
    }
}

fn partner_with(replies: Vec<Result<String>>) -> (ConversationPartner, Rc<RefCell<Vec<Vec<ChatMessage>>>>) {
    let (backend, received) = ScriptedBackend::new(replies);
    (
        ConversationPartner::new(Some(Box::new(backend)), Settings::default()),
        received,
    )
}

#[test]
fn test_no_backend_reports_unavailable() {
    let partner = ConversationPartner::new(None, Settings::default());
    let mut session = ConversationSession::new(CefrLevel::A1);

    let response = partner.chat(&mut session, "Bonjour");
    assert_eq!(response.french, "Désolé, le service n'est pas disponible.");
    assert_eq!(response.english, "Sorry, the service is not available.");
    assert!(!partner.is_available());

    // Ambos turnos quedan en el historial
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[0].role, Role::User);
    assert_eq!(session.history()[1].content, response.french);
}

#[test]
fn test_json_reply_is_parsed() {
    let reply = r#"{"french": "Très bien, merci !", "english": "Very well, thanks!", "corrections": ["Ça va bien"], "follow_up": "Et vous ?"}"#;
    let (partner, _) = partner_with(vec![Ok(reply.to_string())]);
    let mut session = ConversationSession::new(CefrLevel::A2);

    let response = partner.chat(&mut session, "Ça va ?");
    assert_eq!(response.french, "Très bien, merci !");
    assert_eq!(response.corrections, vec!["Ça va bien".to_string()]);
    assert_eq!(response.follow_up, "Et vous ?");
    assert!(response.grammar_notes.is_empty());
    assert_eq!(session.history()[1].role, Role::Assistant);
    assert_eq!(session.history()[1].content, "Très bien, merci !");
}

#[test]
fn test_plain_reply_becomes_french_text() {
    let (partner, _) = partner_with(vec![Ok("Bonjour à vous.".to_string())]);
    let mut session = ConversationSession::new(CefrLevel::A1);

    let response = partner.chat(&mut session, "Bonjour");
    assert_eq!(response.french, "Bonjour à vous.");
    assert_eq!(response.english, "");
}

#[test]
fn test_backend_error_falls_back_to_apology() {
    let (partner, _) = partner_with(vec![Err(Error::Backend("HTTP 500".to_string()))]);
    let mut session = ConversationSession::new(CefrLevel::B1);

    let response = partner.chat(&mut session, "Bonjour");
    assert_eq!(response.french, "Pardon, je n'ai pas compris. Pouvez-vous répéter ?");
    assert_eq!(response.english, "Sorry, I didn't understand. Can you repeat?");
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_system_prompt_and_history_window() {
    let (partner, received) = partner_with(Vec::new());
    let mut session = ConversationSession::new(CefrLevel::C1).with_formality(Formality::Informal);

    for turn in 0..4 {
        partner.chat(&mut session, &format!("tour {}", turn));
    }

    let calls = received.borrow();
    assert_eq!(calls.len(), 4);

    // Primera llamada: prompt de sistema + el mensaje del alumno
    assert_eq!(calls[0].len(), 2);
    assert_eq!(calls[0][0].role, Role::System);
    assert!(calls[0][0].content.contains("Use tu (informal) form"));
    assert!(calls[0][0].content.contains("Be appropriate for C1 level"));

    // Última llamada: 7 mensajes en el historial, solo se envían los 5 últimos
    let last = &calls[3];
    assert_eq!(last.len(), HISTORY_WINDOW + 1);
    assert_eq!(last[0].role, Role::System);
    assert_eq!(last[HISTORY_WINDOW].content, "tour 3");
    assert_eq!(last[1].content, "tour 1");
    assert_eq!(last[2].content, "Encore ?");
}

#[test]
fn test_sessions_are_independent() {
    let (partner, _) = partner_with(Vec::new());
    let mut first = ConversationSession::new(CefrLevel::A1);
    let mut second = ConversationSession::new(CefrLevel::A1);

    partner.chat(&mut first, "un");
    partner.chat(&mut first, "deux");
    partner.chat(&mut second, "trois");

    assert_eq!(first.history().len(), 4);
    assert_eq!(second.history().len(), 2);

    first.clear();
    assert!(first.history().is_empty());
}

#[test]
fn test_default_partner_without_key_is_unavailable() {
    let settings = Settings::from_lookup(|_| None).unwrap();
    let partner = ConversationPartner::from_settings(settings);
    assert!(!partner.is_available());
}
