//! Elección del auxiliar y notas de concordancia del participio

use serde::Serialize;

use crate::french::pairs_as_map;

/// Los 16 verbos de "la maison d'être" (DR & MRS VANDERTRAMP)
pub const ETRE_VERBS: [&str; 16] = [
    "devenir",
    "revenir",
    "monter",
    "rentrer",
    "sortir",
    "venir",
    "aller",
    "naître",
    "descendre",
    "entrer",
    "retourner",
    "tomber",
    "rester",
    "arriver",
    "mourir",
    "partir",
];

/// Reglas informativas del auxiliar; solo `list` se aplica algorítmicamente
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AuxiliaryRules {
    pub movement: &'static [&'static str],
    pub state_change: &'static [&'static str],
    pub all_reflexive: bool,
    pub mnemonic: &'static str,
    pub list: &'static [&'static str],
    pub agreement: AgreementNotes,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgreementNotes {
    pub with_etre: &'static str,
    /// No se aplica: la concordancia con el complemento directo antepuesto queda fuera
    pub with_avoir: &'static str,
    #[serde(serialize_with = "pairs_as_map")]
    pub examples: &'static [(&'static str, &'static str)],
}

pub const AUXILIARY_RULES: AuxiliaryRules = AuxiliaryRules {
    movement: &["aller", "venir", "arriver", "partir", "entrer", "sortir"],
    state_change: &["naître", "mourir", "devenir", "rester"],
    all_reflexive: true,
    mnemonic: "DR & MRS VANDERTRAMP",
    list: &ETRE_VERBS,
    agreement: AgreementNotes {
        with_etre: "Past participle agrees with subject",
        with_avoir: "Past participle agrees with preceding direct object",
        examples: &[
            ("être", "Elle est allée (feminine singular)"),
            ("avoir", "Les fleurs que j'ai achetées (feminine plural object before)"),
        ],
    },
};

impl AuxiliaryRules {
    /// ¿Forma este infinitivo sus tiempos compuestos con être?
    pub fn takes_etre(&self, infinitive: &str) -> bool {
        let lower = infinitive.to_lowercase();
        self.list.contains(&lower.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etre_list_size() {
        assert_eq!(AUXILIARY_RULES.list.len(), 16);
    }

    #[test]
    fn test_takes_etre_is_case_insensitive() {
        assert!(AUXILIARY_RULES.takes_etre("aller"));
        assert!(AUXILIARY_RULES.takes_etre("Tomber"));
        assert!(!AUXILIARY_RULES.takes_etre("parler"));
        // Los compuestos no listados no se deducen
        assert!(!AUXILIARY_RULES.takes_etre("parvenir"));
    }
}
