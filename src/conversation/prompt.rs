//! Prompt de sistema y análisis de la respuesta del modelo
//!
//! Se pide al modelo un objeto JSON; lo que no se pueda interpretar se
//! devuelve tal cual como respuesta en francés.

use serde::{Deserialize, Serialize};

use crate::french::models::{CefrLevel, Formality};

/// Respuesta estructurada del compañero de conversación
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationResponse {
    pub french: String,
    pub english: String,
    pub grammar_notes: Vec<String>,
    pub vocabulary: Vec<String>,
    pub cultural_tips: Vec<String>,
    pub corrections: Vec<String>,
    pub pronunciation_tips: Vec<String>,
    pub follow_up: String,
}

impl ConversationResponse {
    /// Respuesta con solo el texto en francés e inglés
    pub fn plain(french: impl Into<String>, english: impl Into<String>) -> Self {
        Self {
            french: french.into(),
            english: english.into(),
            ..Self::default()
        }
    }
}

fn level_description(level: CefrLevel) -> &'static str {
    match level {
        CefrLevel::A1 => "absolute beginner - use very simple vocabulary, present tense, basic phrases",
        CefrLevel::A2 => "elementary - use basic vocabulary, present/passé composé, simple sentences",
        CefrLevel::B1 => "intermediate - use everyday vocabulary, various tenses, longer sentences",
        CefrLevel::B2 => "upper intermediate - use complex sentences, subjunctive, idiomatic expressions",
        CefrLevel::C1 => "advanced - use sophisticated vocabulary, all tenses, nuanced expressions",
        CefrLevel::C2 => "proficiency - use native-like expressions, cultural references, wordplay",
    }
}

fn formality_instruction(formality: Formality) -> &'static str {
    match formality {
        Formality::Formal => "Use vous (formal) form",
        Formality::Informal => "Use tu (informal) form",
    }
}

/// Construye el prompt de sistema para un nivel y un registro
pub fn build_system_prompt(level: CefrLevel, formality: Formality) -> String {
    format!(
        r#"You are a friendly French conversation partner for a {description} student.

Your responses should:
1. Be appropriate for {level} level
2. Use natural, conversational French
3. {formality}
4. Gradually introduce new vocabulary
5. Correct errors gently
6. Be encouraging and supportive
7. Include cultural context when relevant
8. Pay attention to gender agreement and verb conjugations

Format your response as JSON:
{{
    "french": "Your response in French",
    "english": "English translation",
    "grammar_notes": ["grammar points used"],
    "vocabulary": ["new words with gender if nouns"],
    "cultural_tips": ["cultural context if relevant"],
    "corrections": ["gentle corrections if needed"],
    "pronunciation_tips": ["any pronunciation advice"],
    "follow_up": "A follow-up question to continue conversation"
}}

Keep responses natural and conversational. Use appropriate French expressions."#,
        description = level_description(level),
        level = level,
        formality = formality_instruction(formality),
    )
}

/// Interpreta la respuesta; si no es JSON, pasa a ser el texto en francés
pub fn parse_response(content: &str) -> ConversationResponse {
    // Solo metadatos: no registrar el texto del alumno
    tracing::debug!("parse_response: content_len={}", content.len());

    if let Some(json) = extract_json_object(content) {
        match serde_json::from_str::<ConversationResponse>(json) {
            Ok(parsed) => return parsed,
            Err(e) => tracing::debug!("parse_response: JSON no válido, se devuelve tal cual: {}", e),
        }
    }

    ConversationResponse::plain(content, "")
}

/// Extrae un objeto JSON, admitiendo un bloque de código markdown alrededor
fn extract_json_object(content: &str) -> Option<&str> {
    let trimmed = content.trim();

    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .map(str::trim)
        .unwrap_or(trimmed);

    if unfenced.starts_with('{') && unfenced.ends_with('}') {
        Some(unfenced)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_level_and_register() {
        let prompt = build_system_prompt(CefrLevel::B2, Formality::Informal);
        assert!(prompt.contains("upper intermediate"));
        assert!(prompt.contains("Be appropriate for B2 level"));
        assert!(prompt.contains("Use tu (informal) form"));
        assert!(prompt.contains("\"follow_up\""));
    }

    #[test]
    fn test_parse_full_json() {
        let reply = r#"{"french": "Bonjour !", "english": "Hello!", "vocabulary": ["le café (m)"], "follow_up": "Ça va ?"}"#;
        let parsed = parse_response(reply);
        assert_eq!(parsed.french, "Bonjour !");
        assert_eq!(parsed.english, "Hello!");
        assert_eq!(parsed.vocabulary, vec!["le café (m)".to_string()]);
        assert!(parsed.grammar_notes.is_empty());
        assert_eq!(parsed.follow_up, "Ça va ?");
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = "```json\n{\"french\": \"Salut\"}\n```";
        assert_eq!(parse_response(reply).french, "Salut");
    }

    #[test]
    fn test_plain_text_passes_through() {
        let parsed = parse_response("Je ne sais pas.");
        assert_eq!(parsed.french, "Je ne sais pas.");
        assert_eq!(parsed.english, "");
    }

    #[test]
    fn test_broken_json_passes_through() {
        let parsed = parse_response("{\"french\": ");
        assert_eq!(parsed.french, "{\"french\": ");
    }
}
