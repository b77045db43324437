//! Contenidos del idioma francés
//!
//! Tres módulos hermanos e independientes: género de sustantivos,
//! pronunciación y conjugación. Cada uno construye sus tablas una vez y
//! responde consultas puras sobre ellas.

pub mod conjugation;
pub mod gender;
pub mod models;
pub mod pronunciation;

pub use conjugation::VerbConjugator;
pub use gender::GenderTeacher;
pub use models::{
    Auxiliary, CefrLevel, FormTable, Formality, Gender, Tense, Verb, VerbGroup,
};
pub use pronunciation::{PronunciationCoach, PronunciationFeedback};

use std::ops::Deref;

use serde::{Serialize, Serializer};

/// Serializa una tabla estática de pares como un objeto JSON, preservando el orden
pub(crate) fn pairs_as_map<S>(
    pairs: &[(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_map(pairs.iter().map(|(k, v)| (*k, *v)))
}

/// Registro de una tabla de referencia identificado por una etiqueta corta
pub trait Labeled {
    fn label(&self) -> &'static str;
}

/// Tabla estática de registros etiquetados
///
/// Se recorre como un slice, pero se serializa como objeto
/// `{etiqueta: registro}` en el orden de la tabla.
#[derive(Debug)]
pub struct LabeledTable<T: 'static>(&'static [T]);

impl<T: 'static> LabeledTable<T> {
    pub const fn new(items: &'static [T]) -> Self {
        Self(items)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Labeled + 'static> LabeledTable<T> {
    /// Busca un registro por su etiqueta exacta
    pub fn get(&self, label: &str) -> Option<&'static T> {
        self.0.iter().find(|item| item.label() == label)
    }
}

impl<T: 'static> Clone for LabeledTable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for LabeledTable<T> {}

impl<T: 'static> Deref for LabeledTable<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.0
    }
}

impl<T: Labeled + Serialize + 'static> Serialize for LabeledTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|item| (item.label(), item)))
    }
}

/// ¿Empieza la forma por vocal o `h`? (regla de elisión de `je` → `j'`)
///
/// Solo considera letras sin tilde: "écoute" no provoca elisión.
pub(crate) fn starts_with_elision_letter(form: &str) -> bool {
    matches!(form.chars().next(), Some('a' | 'e' | 'i' | 'o' | 'u' | 'h'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elision_letters() {
        assert!(starts_with_elision_letter("aime"));
        assert!(starts_with_elision_letter("habite"));
        assert!(!starts_with_elision_letter("parle"));
        assert!(!starts_with_elision_letter("écoute"));
        assert!(!starts_with_elision_letter(""));
    }
}
