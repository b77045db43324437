//! Módulo de conjugación verbal para francés
//!
//! Sintetiza las formas regulares (raíz + terminación), consulta el
//! diccionario de irregulares y resuelve el passé composé (auxiliar +
//! participio con concordancia).

pub mod auxiliary;
pub mod irregular;
pub mod regular;

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use super::models::{Auxiliary, FormTable, Tense, Verb, VerbGroup};
use super::starts_with_elision_letter;
use auxiliary::{AuxiliaryRules, AUXILIARY_RULES};

/// Valor centinela cuando el sujeto pedido no existe en la tabla
pub const FORM_NOT_FOUND: &str = "Form not found";

const REFLEXIVE_NOTE: &str = "Reflexive verbs always use être in compound tenses";

const SUBJUNCTIVE_TRIGGERS: &[&str] = &[
    "Il faut que... - It's necessary that...",
    "Je veux que... - I want that...",
    "Il est important que... - It's important that...",
    "Bien que... - Although...",
    "Pour que... - So that...",
    "Avant que... - Before...",
    "J'ai peur que... - I'm afraid that...",
];

const SUBJUNCTIVE_TIP: &str =
    "Subjunctive expresses doubt, emotion, necessity, or subjective thoughts";

/// Pronombre reflexivo para una etiqueta de sujeto
///
/// Las etiquetas que no están en la tabla (como "j'") reciben "se".
fn reflexive_pronoun(subject: &str) -> &'static str {
    match subject {
        "je" => "me",
        "tu" => "te",
        "il/elle/on" => "se",
        "nous" => "nous",
        "vous" => "vous",
        "ils/elles" => "se",
        _ => "se",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConjugationKind {
    Regular,
    Irregular,
}

/// Forma de un único sujeto (solo verbos irregulares)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectForm {
    pub infinitive: String,
    pub tense: Tense,
    pub subject: String,
    /// `FORM_NOT_FOUND` si el sujeto no está en la tabla
    pub form: String,
}

/// Tabla completa de un tiempo
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugationTable {
    pub infinitive: String,
    pub tense: Tense,
    pub forms: FormTable,
    #[serde(rename = "type")]
    pub kind: ConjugationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auxiliary: Option<Auxiliary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub past_participle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<VerbGroup>,
}

/// Combinación grupo/tiempo sin tabla redactada
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Unsupported {
    pub error: String,
}

/// Resultado de `conjugate`
///
/// `Unsupported` no es un fallo: indica una combinación que las tablas no
/// cubren y el llamador debe comprobarlo con `error()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Conjugation {
    Form(SubjectForm),
    Table(ConjugationTable),
    Unsupported(Unsupported),
}

impl Conjugation {
    pub fn forms(&self) -> Option<&FormTable> {
        match self {
            Conjugation::Table(table) => Some(&table.forms),
            _ => None,
        }
    }

    pub fn form(&self) -> Option<&str> {
        match self {
            Conjugation::Form(single) => Some(&single.form),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Conjugation::Unsupported(unsupported) => Some(&unsupported.error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasseCompose {
    pub infinitive: String,
    pub tense: &'static str,
    pub subject: String,
    pub auxiliary: Auxiliary,
    /// Vacío si no se encontró el sujeto en la tabla del auxiliar
    pub auxiliary_form: String,
    pub past_participle: String,
    pub complete_form: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflexiveConjugation {
    pub infinitive: String,
    pub base_verb: String,
    pub conjugation: FormTable,
    pub note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjunctivePractice {
    pub verb: String,
    pub forms: FormTable,
    pub trigger_phrases: &'static [&'static str],
    pub example_sentences: Vec<String>,
    pub tip: &'static str,
}

/// Motor de conjugación
#[derive(Debug, Clone)]
pub struct VerbConjugator {
    regular_endings: HashMap<(VerbGroup, Tense), FormTable>,
    irregular_verbs: HashMap<&'static str, Verb>,
    auxiliary_rules: AuxiliaryRules,
}

impl Default for VerbConjugator {
    fn default() -> Self {
        Self::new()
    }
}

impl VerbConjugator {
    pub fn new() -> Self {
        Self {
            regular_endings: regular::ending_tables(),
            irregular_verbs: irregular::irregular_verbs(),
            auxiliary_rules: AUXILIARY_RULES,
        }
    }

    /// Conjuga un verbo en un tiempo
    ///
    /// Los irregulares con el tiempo redactado se consultan directamente (y
    /// solo ellos respetan `subject`). El resto se sintetiza con raíz +
    /// terminación; `je` pasa a `j'` ante vocal o `h`.
    pub fn conjugate(&self, infinitive: &str, tense: Tense, subject: Option<&str>) -> Conjugation {
        if let Some(verb) = self.irregular_verbs.get(infinitive) {
            if let Some(forms) = verb.forms(tense) {
                debug!(infinitive, tense = tense.label(), "conjugación irregular");

                if let Some(subject) = subject.filter(|s| !s.is_empty()) {
                    return Conjugation::Form(SubjectForm {
                        infinitive: infinitive.to_string(),
                        tense,
                        subject: subject.to_string(),
                        form: forms.get(subject).unwrap_or(FORM_NOT_FOUND).to_string(),
                    });
                }

                return Conjugation::Table(ConjugationTable {
                    infinitive: infinitive.to_string(),
                    tense,
                    forms: forms.clone(),
                    kind: ConjugationKind::Irregular,
                    auxiliary: Some(verb.auxiliary_verb),
                    past_participle: Some(verb.past_participle.clone()),
                    group: None,
                });
            }
        }

        let group = regular::verb_group(infinitive);
        let stem = regular::stem(infinitive, group);

        let Some(endings) = self.regular_endings.get(&(group, tense)) else {
            debug!(infinitive, tense = tense.label(), group = group.as_str(), "sin tabla de terminaciones");
            return Conjugation::Unsupported(Unsupported {
                error: format!("Cannot conjugate {} in {}", infinitive, tense.label()),
            });
        };

        let mut forms = FormTable::new();
        for (subject, ending) in endings.iter() {
            let form = format!("{}{}", stem, ending);
            if subject == "je" && starts_with_elision_letter(&form) {
                forms.insert("j'", form);
            } else {
                forms.insert(subject, form);
            }
        }
        debug!(infinitive, tense = tense.label(), group = group.as_str(), "conjugación regular");

        Conjugation::Table(ConjugationTable {
            infinitive: infinitive.to_string(),
            tense,
            forms,
            kind: ConjugationKind::Regular,
            auxiliary: None,
            past_participle: None,
            group: Some(group),
        })
    }

    /// Auxiliar del passé composé: être para la lista cerrada, avoir en otro caso
    pub fn auxiliary_for(&self, infinitive: &str) -> Auxiliary {
        if self.auxiliary_rules.takes_etre(infinitive) {
            Auxiliary::Etre
        } else {
            Auxiliary::Avoir
        }
    }

    /// Forma el passé composé para un sujeto
    ///
    /// Con être el participio concuerda con el sujeto (elle/elles → -e,
    /// ils/elles → -s). Con avoir no se aplica concordancia.
    pub fn form_passe_compose(&self, infinitive: &str, subject: &str) -> PasseCompose {
        let auxiliary = self.auxiliary_for(infinitive);
        let aux_conjugation = self.conjugate(auxiliary.infinitive(), Tense::Present, None);

        let auxiliary_form = aux_conjugation
            .forms()
            .and_then(|forms| find_subject_form(forms, subject))
            .unwrap_or("")
            .to_string();

        let mut past_participle = self.past_participle(infinitive);
        if auxiliary == Auxiliary::Etre {
            if matches!(subject, "elle" | "elles") {
                past_participle.push('e');
            }
            if matches!(subject, "ils" | "elles") {
                past_participle.push('s');
            }
        }
        debug!(infinitive, subject, auxiliary = auxiliary.infinitive(), "passé composé");

        PasseCompose {
            infinitive: infinitive.to_string(),
            tense: "passé composé",
            subject: subject.to_string(),
            auxiliary,
            complete_form: format!("{} {}", auxiliary_form, past_participle),
            auxiliary_form,
            past_participle,
        }
    }

    /// Participio pasado sin concordancia
    pub fn past_participle(&self, infinitive: &str) -> String {
        match self.irregular_verbs.get(infinitive) {
            Some(verb) => verb.past_participle.clone(),
            None => {
                let group = regular::verb_group(infinitive);
                format!(
                    "{}{}",
                    regular::stem(infinitive, group),
                    regular::participle_ending(group)
                )
            }
        }
    }

    /// Conjuga un verbo pronominal en presente
    ///
    /// Si no empieza por "se ", se eliminan todas las apariciones de "se "
    /// del texto recibido.
    pub fn reflexive_verb(&self, infinitive: &str) -> ReflexiveConjugation {
        let base_verb = match infinitive.strip_prefix("se ") {
            Some(rest) => rest.to_string(),
            None => infinitive.replace("se ", ""),
        };

        let conjugation = self.conjugate(&base_verb, Tense::Present, None);

        let mut reflexive_forms = FormTable::new();
        if let Some(forms) = conjugation.forms() {
            for (subject, form) in forms.iter() {
                if subject == "je" && starts_with_elision_letter(form) {
                    // La conjugación base ya etiqueta estas formas como "j'"
                    reflexive_forms.insert("je m'", form.strip_prefix("j'").unwrap_or(form));
                } else {
                    reflexive_forms.insert(
                        format!("{} {}", subject, reflexive_pronoun(subject)),
                        form,
                    );
                }
            }
        }

        ReflexiveConjugation {
            infinitive: format!("se {}", base_verb),
            base_verb,
            conjugation: reflexive_forms,
            note: REFLEXIVE_NOTE,
        }
    }

    /// Práctica del presente de subjuntivo
    ///
    /// Solo los irregulares tienen este tiempo; para el resto las frases de
    /// ejemplo usan "parle" y "comprenne".
    pub fn subjunctive_practice(&self, verb: &str) -> SubjunctivePractice {
        let conjugation = self.conjugate(verb, Tense::SubjunctivePresent, None);
        let forms = conjugation.forms().cloned().unwrap_or_default();

        let first = forms.get("que je").unwrap_or("parle");
        let third = forms.get("qu'il/elle/on").unwrap_or("comprenne");
        let example_sentences = vec![
            format!("Il faut que je {}", first),
            format!("Je veux qu'il {}", third),
        ];

        SubjunctivePractice {
            verb: verb.to_string(),
            forms,
            trigger_phrases: SUBJUNCTIVE_TRIGGERS,
            example_sentences,
            tip: SUBJUNCTIVE_TIP,
        }
    }

    pub fn irregular_verb(&self, infinitive: &str) -> Option<&Verb> {
        self.irregular_verbs.get(infinitive)
    }

    pub fn auxiliary_rules(&self) -> &AuxiliaryRules {
        &self.auxiliary_rules
    }

    pub fn verb_group(&self, infinitive: &str) -> VerbGroup {
        regular::verb_group(infinitive)
    }
}

/// Busca la forma del auxiliar para un sujeto
///
/// Orden: clave exacta, elisión con la primera letra ("j'"), primera clave
/// que contiene al sujeto. El último paso depende del orden de la tabla.
fn find_subject_form<'a>(forms: &'a FormTable, subject: &str) -> Option<&'a str> {
    if let Some(form) = forms.get(subject) {
        return Some(form);
    }

    if let Some(first) = subject.chars().next() {
        if let Some(form) = forms.get(&format!("{}'", first)) {
            return Some(form);
        }
    }

    forms
        .iter()
        .find(|(key, _)| key.contains(subject))
        .map(|(_, form)| form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_first_group_present() {
        let conjugator = VerbConjugator::new();
        let result = conjugator.conjugate("parler", Tense::Present, None);
        let forms = result.forms().unwrap();
        assert_eq!(forms.get("je"), Some("parle"));
        assert_eq!(forms.get("tu"), Some("parles"));
        assert_eq!(forms.get("ils/elles"), Some("parlent"));
    }

    #[test]
    fn test_regular_ignores_subject() {
        let conjugator = VerbConjugator::new();
        let result = conjugator.conjugate("parler", Tense::Present, Some("tu"));
        assert!(result.forms().is_some());
        assert!(result.form().is_none());
    }

    #[test]
    fn test_empty_subject_returns_table() {
        let conjugator = VerbConjugator::new();
        let result = conjugator.conjugate("être", Tense::Present, Some(""));
        assert!(result.forms().is_some());
    }

    #[test]
    fn test_find_subject_form_fallbacks() {
        let table = FormTable::from_pairs(&[("j'", "ai"), ("tu", "as"), ("il/elle/on", "a"), ("ils/elles", "ont")]);
        assert_eq!(find_subject_form(&table, "tu"), Some("as"));
        assert_eq!(find_subject_form(&table, "je"), Some("ai"));
        assert_eq!(find_subject_form(&table, "elle"), Some("a"));
        assert_eq!(find_subject_form(&table, "elles"), Some("ont"));
        assert_eq!(find_subject_form(&table, "xyz"), None);
        // Subcadena vacía: la primera clave
        assert_eq!(find_subject_form(&table, ""), Some("ai"));
    }

    #[test]
    fn test_unexpected_subject_uses_first_letter_elision() {
        let table = FormTable::from_pairs(&[("j'", "ai"), ("tu", "as")]);
        assert_eq!(find_subject_form(&table, "jamais"), Some("ai"));
    }

    #[test]
    fn test_reflexive_pronouns() {
        assert_eq!(reflexive_pronoun("je"), "me");
        assert_eq!(reflexive_pronoun("nous"), "nous");
        assert_eq!(reflexive_pronoun("j'"), "se");
    }
}
