//! Tipos del modelo de datos compartidos por los módulos de contenido

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::Error;

/// Género gramatical de un sustantivo francés
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculine => "masculine",
            Gender::Feminine => "feminine",
        }
    }

    /// El género contrario (se usa al invertir el veredicto por excepción)
    pub fn opposite(&self) -> Self {
        match self {
            Gender::Masculine => Gender::Feminine,
            Gender::Feminine => Gender::Masculine,
        }
    }
}

/// Nivel del Marco Común Europeo de Referencia
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CefrLevel {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
}

impl CefrLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CefrLevel::A1 => "A1",
            CefrLevel::A2 => "A2",
            CefrLevel::B1 => "B1",
            CefrLevel::B2 => "B2",
            CefrLevel::C1 => "C1",
            CefrLevel::C2 => "C2",
        }
    }
}

impl FromStr for CefrLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A1" => Ok(CefrLevel::A1),
            "A2" => Ok(CefrLevel::A2),
            "B1" => Ok(CefrLevel::B1),
            "B2" => Ok(CefrLevel::B2),
            "C1" => Ok(CefrLevel::C1),
            "C2" => Ok(CefrLevel::C2),
            _ => Err(Error::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for CefrLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Registro tu/vous
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    Informal,
    #[default]
    Formal,
}

impl Formality {
    /// Interpreta el registro; cualquier valor desconocido se trata como formal
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "informal" | "tu" => Formality::Informal,
            _ => Formality::Formal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Informal => "informal",
            Formality::Formal => "formal",
        }
    }
}

/// Grupo verbal francés
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerbGroup {
    First,
    Second,
    Third,
}

impl VerbGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbGroup::First => "first",
            VerbGroup::Second => "second",
            VerbGroup::Third => "third",
        }
    }
}

/// Verbo auxiliar de los tiempos compuestos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Auxiliary {
    #[serde(rename = "avoir")]
    Avoir,
    #[serde(rename = "être")]
    Etre,
}

impl Auxiliary {
    /// Infinitivo del auxiliar
    pub fn infinitive(&self) -> &'static str {
        match self {
            Auxiliary::Avoir => "avoir",
            Auxiliary::Etre => "être",
        }
    }
}

impl fmt::Display for Auxiliary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.infinitive())
    }
}

/// Tiempos verbales franceses, con la etiqueta que ve el usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Tense {
    #[serde(rename = "présent")]
    Present,
    #[serde(rename = "passé_composé")]
    PasseCompose,
    #[serde(rename = "imparfait")]
    Imparfait,
    #[serde(rename = "plus_que_parfait")]
    PlusQueParfait,
    #[serde(rename = "futur_simple")]
    FuturSimple,
    #[serde(rename = "futur_antérieur")]
    FuturAnterieur,
    #[serde(rename = "passé_simple")]
    PasseSimple,
    #[serde(rename = "passé_antérieur")]
    PasseAnterieur,
    #[serde(rename = "conditionnel_présent")]
    ConditionalPresent,
    #[serde(rename = "conditionnel_passé")]
    ConditionalPast,
    #[serde(rename = "subjonctif_présent")]
    SubjunctivePresent,
    #[serde(rename = "subjonctif_passé")]
    SubjunctivePast,
    #[serde(rename = "subjonctif_imparfait")]
    SubjunctiveImperfect,
    #[serde(rename = "subjonctif_plus_que_parfait")]
    SubjunctivePluperfect,
}

impl Tense {
    pub const ALL: [Tense; 14] = [
        Tense::Present,
        Tense::PasseCompose,
        Tense::Imparfait,
        Tense::PlusQueParfait,
        Tense::FuturSimple,
        Tense::FuturAnterieur,
        Tense::PasseSimple,
        Tense::PasseAnterieur,
        Tense::ConditionalPresent,
        Tense::ConditionalPast,
        Tense::SubjunctivePresent,
        Tense::SubjunctivePast,
        Tense::SubjunctiveImperfect,
        Tense::SubjunctivePluperfect,
    ];

    /// Etiqueta en francés usada en la interfaz y en los mensajes
    pub fn label(&self) -> &'static str {
        match self {
            Tense::Present => "présent",
            Tense::PasseCompose => "passé_composé",
            Tense::Imparfait => "imparfait",
            Tense::PlusQueParfait => "plus_que_parfait",
            Tense::FuturSimple => "futur_simple",
            Tense::FuturAnterieur => "futur_antérieur",
            Tense::PasseSimple => "passé_simple",
            Tense::PasseAnterieur => "passé_antérieur",
            Tense::ConditionalPresent => "conditionnel_présent",
            Tense::ConditionalPast => "conditionnel_passé",
            Tense::SubjunctivePresent => "subjonctif_présent",
            Tense::SubjunctivePast => "subjonctif_passé",
            Tense::SubjunctiveImperfect => "subjonctif_imparfait",
            Tense::SubjunctivePluperfect => "subjonctif_plus_que_parfait",
        }
    }

    /// Busca un tiempo por su etiqueta exacta
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    /// Igual que `from_label`, pero una etiqueta desconocida cae en presente
    pub fn parse_or_present(label: &str) -> Self {
        Self::from_label(label.trim()).unwrap_or(Tense::Present)
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tabla sujeto → forma que conserva el orden de inserción
///
/// El orden importa: la búsqueda por subcadena del passé composé toma la
/// primera clave que coincide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormTable {
    entries: Vec<(String, String)>,
}

impl FormTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut table = Self::new();
        for (subject, form) in pairs {
            table.insert(*subject, *form);
        }
        table
    }

    /// Inserta o reemplaza, manteniendo la posición original de la clave
    pub fn insert(&mut self, subject: impl Into<String>, form: impl Into<String>) {
        let subject = subject.into();
        let form = form.into();
        match self.entries.iter_mut().find(|(k, _)| *k == subject) {
            Some(entry) => entry.1 = form,
            None => self.entries.push((subject, form)),
        }
    }

    pub fn get(&self, subject: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == subject)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, subject: &str) -> bool {
        self.get(subject).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FormTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Verbo francés con sus conjugaciones redactadas
#[derive(Debug, Clone, Serialize)]
pub struct Verb {
    pub id: String,
    pub infinitive: String,
    pub english: String,
    pub verb_group: VerbGroup,
    pub is_reflexive: bool,
    pub auxiliary_verb: Auxiliary,
    /// Solo los tiempos redactados; un tiempo ausente no aparece
    pub conjugations: BTreeMap<Tense, FormTable>,
    pub past_participle: String,
    pub present_participle: String,
    pub level: CefrLevel,
}

impl Verb {
    pub fn forms(&self, tense: Tense) -> Option<&FormTable> {
        self.conjugations.get(&tense)
    }
}
