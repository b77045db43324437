//! Fachada de la aplicación
//!
//! Agrupa los tres motores de contenidos y traduce cada `Command` en texto
//! para la consola o en JSON.

use std::fmt::Write as FmtWrite;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::{Command, Config};
use crate::conversation::scenarios::{scenario, scenario_kinds};
use crate::error::Result;
use crate::french::conjugation::{Conjugation, PasseCompose, ReflexiveConjugation, SubjunctivePractice};
use crate::french::gender::{AgreementLesson, ContractionLesson, GenderAnalysis, LikelyGender, PartitiveLesson};
use crate::french::models::{FormTable, Tense};
use crate::french::pronunciation::{LiaisonPractice, MinimalPairGroup, NasalVowelLesson};
use crate::french::{GenderTeacher, PronunciationCoach, PronunciationFeedback, VerbConjugator};

/// Motor principal: un profesor de género, un entrenador de pronunciación y
/// un conjugador
#[derive(Debug, Clone, Default)]
pub struct Tutor {
    gender: GenderTeacher,
    pronunciation: PronunciationCoach,
    conjugator: VerbConjugator,
}

impl Tutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gender(&self) -> &GenderTeacher {
        &self.gender
    }

    pub fn pronunciation(&self) -> &PronunciationCoach {
        &self.pronunciation
    }

    pub fn conjugator(&self) -> &VerbConjugator {
        &self.conjugator
    }

    /// Ejecuta un comando no interactivo y devuelve la salida
    ///
    /// `chat` solo devuelve la cabecera; el bucle interactivo vive en el
    /// binario.
    pub fn execute(&self, config: &Config) -> Result<String> {
        let mut output = Output::new(config.json);

        match &config.command {
            Command::Gender {
                word,
                partitive,
                contractions,
                agreement,
            } => {
                let analysis = self.gender.identify_pattern(word);
                output.section("analysis", &analysis, render_gender(&analysis))?;

                if *partitive {
                    let lesson = self.gender.partitive_practice();
                    output.section("partitive", lesson, render_partitive(lesson))?;
                }
                if *contractions {
                    let lesson = self.gender.get_contractions();
                    output.section("contractions", lesson, render_contractions(lesson))?;
                }
                if *agreement {
                    let lesson = self.gender.practice_agreement();
                    output.section("agreement", lesson, render_agreement(lesson))?;
                }
            }
            Command::Pronunciation {
                text,
                nasal,
                liaison,
                minimal_pairs,
            } => {
                let nothing_selected = text.is_none() && liaison.is_none() && !*minimal_pairs;

                if let Some(text) = text {
                    let feedback = self.pronunciation.analyze_pronunciation(text);
                    output.section("feedback", &feedback, render_feedback(&feedback))?;
                }
                if *nasal || nothing_selected {
                    let lesson = self.pronunciation.teach_nasal_vowels();
                    output.section("nasal_vowels", lesson, render_nasal(lesson))?;
                }
                if let Some(phrase) = liaison {
                    let practice = self.pronunciation.practice_liaison(phrase);
                    output.section("liaison", &practice, render_liaison(&practice))?;
                }
                if *minimal_pairs {
                    let groups = self.pronunciation.get_minimal_pairs();
                    output.section("minimal_pairs", &groups, render_minimal_pairs(&groups))?;
                }
            }
            Command::Conjugate {
                verb,
                tense,
                subject,
                reflexive,
                subjunctive,
                passe_compose,
            } => {
                if *subjunctive {
                    let practice = self.conjugator.subjunctive_practice(verb);
                    output.section("subjunctive", &practice, render_subjunctive(&practice))?;
                } else if *reflexive {
                    let reflexive = self.conjugator.reflexive_verb(verb);
                    output.section("reflexive", &reflexive, render_reflexive(&reflexive))?;
                } else if let Some(subject) = passe_compose {
                    let pc = self.conjugator.form_passe_compose(verb, subject);
                    output.section("passe_compose", &pc, render_passe_compose(&pc))?;
                } else {
                    let tense = Tense::parse_or_present(tense);
                    let conjugation = self.conjugator.conjugate(verb, tense, subject.as_deref());
                    output.section("conjugation", &conjugation, render_conjugation(&conjugation))?;
                }
            }
            Command::Scenario { kind } => {
                let scenario = scenario(kind);
                let mut text = String::new();
                if scenario.kind != kind.as_str() {
                    let available = scenario_kinds().collect::<Vec<_>>().join(", ");
                    warn!("Escenario desconocido '{}', se usa '{}'", kind, scenario.kind);
                    writeln!(text, "Escenario '{}' desconocido. Disponibles: {}", kind, available).ok();
                }
                writeln!(text, "{}", scenario.setting).ok();
                writeln!(text, "  « {} »", scenario.starter).ok();
                writeln!(text, "  ({})", scenario.english).ok();
                writeln!(text, "Vocabulario:").ok();
                for (fr, en) in scenario.vocabulary {
                    writeln!(text, "  {} - {}", fr, en).ok();
                }
                writeln!(text, "Frases útiles:").ok();
                for phrase in scenario.useful_phrases {
                    writeln!(text, "  {}", phrase).ok();
                }
                for tip in scenario.cultural_tips {
                    writeln!(text, "  * {}", tip).ok();
                }
                output.section("scenario", scenario, text)?;
            }
            // Con --json el bucle emite una línea JSON por turno y no lleva cabecera
            Command::Chat { level, formality } if !config.json => {
                let banner = format!(
                    "Conversación en francés (nivel {}, registro {}). Escriba 'exit' para salir.\n",
                    level,
                    formality.as_str()
                );
                output.text.push_str(&banner);
            }
            Command::Chat { .. } => {}
            Command::Version => {
                let version = env!("CARGO_PKG_VERSION");
                output.section("version", &version, format!("francais {}\n", version))?;
            }
            Command::Help => {
                output.text.push_str(Config::help_text());
                output.text.push('\n');
            }
        }

        output.finish()
    }
}

/// Acumula las secciones en texto o en un objeto JSON
struct Output {
    json: bool,
    text: String,
    /// Conserva el orden de inserción (`preserve_order`)
    sections: Map<String, Value>,
}

impl Output {
    fn new(json: bool) -> Self {
        Self {
            json,
            text: String::new(),
            sections: Map::new(),
        }
    }

    fn section<T: Serialize + ?Sized>(&mut self, key: &str, value: &T, text: String) -> Result<()> {
        if self.json {
            self.sections.insert(key.to_string(), serde_json::to_value(value)?);
        } else {
            if !self.text.is_empty() {
                self.text.push('\n');
            }
            self.text.push_str(&text);
        }
        Ok(())
    }

    fn finish(self) -> Result<String> {
        if !self.json || self.sections.is_empty() {
            return Ok(self.text);
        }

        // Una sola sección se emite sin envoltorio
        let value = if self.sections.len() == 1 {
            self.sections.into_iter().map(|(_, v)| v).next().unwrap_or(Value::Null)
        } else {
            Value::Object(self.sections)
        };
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

fn render_gender(analysis: &GenderAnalysis) -> String {
    let mut out = String::new();
    let gender = match analysis.likely_gender {
        LikelyGender::Masculine => "masculino",
        LikelyGender::Feminine => "femenino",
        LikelyGender::Unknown => "desconocido",
    };
    writeln!(out, "{}: {}", analysis.word, gender).ok();
    writeln!(out, "  {}", analysis.rule).ok();
    if let Some(reliability) = analysis.reliability {
        writeln!(out, "  Fiabilidad: {}", reliability).ok();
    }
    if analysis.is_exception == Some(true) {
        writeln!(out, "  ¡Excepción a la regla!").ok();
    }
    if let Some(tip) = analysis.tip {
        writeln!(out, "  Consejo: {}", tip).ok();
    }
    out
}

fn render_partitive(lesson: &PartitiveLesson) -> String {
    let mut out = String::new();
    writeln!(out, "{}", lesson.explanation).ok();
    for (fr, en) in lesson.examples {
        writeln!(out, "  {} - {}", fr, en).ok();
    }
    for rule in lesson.rules {
        writeln!(out, "  * {}", rule).ok();
    }
    out
}

fn render_contractions(lesson: &ContractionLesson) -> String {
    let mut out = String::new();
    writeln!(out, "Contracciones:").ok();
    for (formation, contraction) in lesson.rules {
        writeln!(out, "  {} = {}", formation, contraction).ok();
    }
    for example in lesson.examples {
        writeln!(out, "  {}: {}", example.contraction, example.example).ok();
    }
    writeln!(out, "  Consejo: {}", lesson.tip).ok();
    out
}

fn render_agreement(lesson: &AgreementLesson) -> String {
    let mut out = String::new();
    writeln!(out, "Concordancia de adjetivos:").ok();
    for (rule, description) in lesson.rules {
        writeln!(out, "  {}: {}", rule, description).ok();
    }
    for example in lesson.examples {
        writeln!(
            out,
            "  {}: {} / {} / {} / {}",
            example.adjective,
            example.masculine_singular,
            example.feminine_singular,
            example.masculine_plural,
            example.feminine_plural
        )
        .ok();
    }
    out
}

fn render_feedback(feedback: &PronunciationFeedback) -> String {
    let mut out = String::new();
    writeln!(out, "{} (puntuación {:.0}/100)", feedback.text, feedback.score).ok();
    for challenge in &feedback.challenges {
        writeln!(out, "  - {}", challenge).ok();
    }
    for improvement in &feedback.improvements {
        writeln!(out, "  * {}", improvement).ok();
    }
    out
}

fn render_nasal(lesson: &NasalVowelLesson) -> String {
    let mut out = String::new();
    writeln!(out, "{}", lesson.explanation).ok();
    for vowel in lesson.vowels.iter() {
        writeln!(out, "  {} {} ({})", vowel.label, vowel.ipa, vowel.spellings.join(", ")).ok();
        for (fr, en) in vowel.examples {
            writeln!(out, "      {} - {}", fr, en).ok();
        }
    }
    for phrase in lesson.practice_phrases {
        writeln!(out, "  « {} »", phrase).ok();
    }
    out
}

fn render_liaison(practice: &LiaisonPractice) -> String {
    let mut out = String::new();
    match practice {
        LiaisonPractice::Known {
            phrase,
            pronunciation,
            rule,
            kind,
            explanation,
        } => {
            writeln!(out, "{} → {}", phrase, pronunciation).ok();
            writeln!(out, "  {} ({})", rule, kind).ok();
            writeln!(out, "  {}", explanation).ok();
        }
        LiaisonPractice::Unknown {
            phrase,
            tip,
            common_liaisons,
        } => {
            writeln!(out, "{}: sin ejemplo registrado", phrase).ok();
            writeln!(out, "  Consejo: {}", tip).ok();
            writeln!(out, "  Ejemplos: {}", common_liaisons).ok();
        }
    }
    out
}

fn render_minimal_pairs(groups: &[MinimalPairGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        writeln!(out, "{} ({} / {})", group.name, group.sounds.0, group.sounds.1).ok();
        for (a, b) in group.pairs {
            writeln!(out, "  {} - {}", a, b).ok();
        }
        writeln!(out, "  Consejo: {}", group.tip).ok();
    }
    out
}

fn render_forms(out: &mut String, forms: &FormTable) {
    for (subject, form) in forms.iter() {
        if subject.ends_with('\'') {
            writeln!(out, "  {}{}", subject, form).ok();
        } else {
            writeln!(out, "  {} {}", subject, form).ok();
        }
    }
}

fn render_conjugation(conjugation: &Conjugation) -> String {
    let mut out = String::new();
    match conjugation {
        Conjugation::Form(single) => {
            writeln!(out, "{} ({}, {}): {}", single.infinitive, single.tense, single.subject, single.form).ok();
        }
        Conjugation::Table(table) => {
            writeln!(out, "{} ({})", table.infinitive, table.tense).ok();
            render_forms(&mut out, &table.forms);
            if let (Some(auxiliary), Some(participle)) = (table.auxiliary, &table.past_participle) {
                writeln!(out, "  Auxiliar: {}, participio: {}", auxiliary, participle).ok();
            }
        }
        Conjugation::Unsupported(unsupported) => {
            writeln!(out, "{}", unsupported.error).ok();
        }
    }
    out
}

fn render_passe_compose(pc: &PasseCompose) -> String {
    let mut out = String::new();
    writeln!(out, "{} ({}, {}): {}", pc.infinitive, pc.tense, pc.subject, pc.complete_form).ok();
    writeln!(out, "  Auxiliar: {}, participio: {}", pc.auxiliary, pc.past_participle).ok();
    out
}

fn render_reflexive(reflexive: &ReflexiveConjugation) -> String {
    let mut out = String::new();
    writeln!(out, "{}", reflexive.infinitive).ok();
    render_forms(&mut out, &reflexive.conjugation);
    writeln!(out, "  {}", reflexive.note).ok();
    out
}

fn render_subjunctive(practice: &SubjunctivePractice) -> String {
    let mut out = String::new();
    writeln!(out, "Subjonctif: {}", practice.verb).ok();
    render_forms(&mut out, &practice.forms);
    for trigger in practice.trigger_phrases {
        writeln!(out, "  * {}", trigger).ok();
    }
    for sentence in &practice.example_sentences {
        writeln!(out, "  « {} »", sentence).ok();
    }
    writeln!(out, "  {}", practice.tip).ok();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::french::models::{CefrLevel, Formality};

    fn config(command: Command, json: bool) -> Config {
        Config {
            command,
            json,
            verbose: false,
        }
    }

    #[test]
    fn test_gender_text_output() {
        let tutor = Tutor::new();
        let output = tutor
            .execute(&config(
                Command::Gender {
                    word: "information".to_string(),
                    partitive: false,
                    contractions: false,
                    agreement: false,
                },
                false,
            ))
            .unwrap();
        assert!(output.starts_with("information: femenino"));
        assert!(output.contains("Fiabilidad: 100%"));
    }

    #[test]
    fn test_single_section_json_is_unwrapped() {
        let tutor = Tutor::new();
        let output = tutor
            .execute(&config(
                Command::Conjugate {
                    verb: "être".to_string(),
                    tense: "présent".to_string(),
                    subject: Some("je".to_string()),
                    reflexive: false,
                    subjunctive: false,
                    passe_compose: None,
                },
                true,
            ))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["form"], "suis");
    }

    #[test]
    fn test_several_sections_json_are_keyed() {
        let tutor = Tutor::new();
        let output = tutor
            .execute(&config(
                Command::Gender {
                    word: "voiture".to_string(),
                    partitive: true,
                    contractions: false,
                    agreement: false,
                },
                true,
            ))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["analysis"]["likely_gender"], "feminine");
        assert!(value["partitive"]["examples"].get("du pain").is_some());
    }

    #[test]
    fn test_elided_subject_renders_without_space() {
        let mut out = String::new();
        render_forms(&mut out, &FormTable::from_pairs(&[("j'", "ai"), ("tu", "as")]));
        assert_eq!(out, "  j'ai\n  tu as\n");
    }

    #[test]
    fn test_sections_keep_request_order() {
        let tutor = Tutor::new();
        let output = tutor
            .execute(&config(
                Command::Pronunciation {
                    text: Some("Bonjour".to_string()),
                    nasal: true,
                    liaison: Some("les amis".to_string()),
                    minimal_pairs: true,
                },
                true,
            ))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["feedback", "nasal_vowels", "liaison", "minimal_pairs"],
            "Las secciones deben salir en el orden en que se calculan"
        );
        assert_eq!(value["nasal_vowels"]["vowels"]["an"]["ipa"], "/ɑ̃/");
        assert_eq!(value["minimal_pairs"]["an_vs_on"]["pairs"][0]["on"], "son");
    }

    #[test]
    fn test_chat_banner_uses_register_name() {
        let tutor = Tutor::new();
        let chat = Command::Chat {
            level: CefrLevel::B1,
            formality: Formality::Informal,
        };

        let output = tutor.execute(&config(chat.clone(), false)).unwrap();
        assert!(output.contains("registro informal"), "Cabecera inesperada: {}", output);

        let output = tutor.execute(&config(chat, true)).unwrap();
        assert!(output.is_empty(), "Con --json no debe haber cabecera: {}", output);
    }

    #[test]
    fn test_unknown_scenario_lists_available_kinds() {
        let tutor = Tutor::new();
        let output = tutor
            .execute(&config(
                Command::Scenario {
                    kind: "gare".to_string(),
                },
                false,
            ))
            .unwrap();
        assert!(output.starts_with("Escenario 'gare' desconocido. Disponibles: café, marché"));
        assert!(output.contains("You're at a Parisian café"));

        let output = tutor
            .execute(&config(
                Command::Scenario {
                    kind: "marché".to_string(),
                },
                false,
            ))
            .unwrap();
        assert!(!output.contains("desconocido"));
    }
}
