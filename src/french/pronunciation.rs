//! Pronunciación francesa
//!
//! Tablas de referencia (vocales nasales, letras mudas, sonidos especiales,
//! acentos), ejemplos de liaison y una heurística de puntuación.
//! No es un analizador fonético: las búsquedas son por subcadena.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::{pairs_as_map, Labeled, LabeledTable};

/// Vocal nasal con sus grafías posibles
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NasalVowel {
    #[serde(skip)]
    pub label: &'static str,
    pub ipa: &'static str,
    pub spellings: &'static [&'static str],
    #[serde(serialize_with = "pairs_as_map")]
    pub examples: &'static [(&'static str, &'static str)],
    pub tips: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_mistakes: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// Variante con nombre dentro de una regla (h muet / h aspiré)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LetterVariant {
    #[serde(skip)]
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SilentLetterRule {
    #[serde(skip)]
    pub label: &'static str,
    pub rule: &'static str,
    /// Letras que sí se pronuncian
    pub exceptions: &'static [&'static str],
    #[serde(serialize_with = "pairs_as_map")]
    pub examples: &'static [(&'static str, &'static str)],
    #[serde(skip_serializing_if = "LabeledTable::is_empty")]
    pub variants: LabeledTable<LetterVariant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exception: Option<&'static str>,
}

/// Realización concreta de un sonido (eu cerrado / abierto)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SoundVariant {
    #[serde(skip)]
    pub name: &'static str,
    pub sound: &'static str,
    pub examples: &'static [&'static str],
    pub tip: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpecialSound {
    #[serde(skip)]
    pub label: &'static str,
    pub ipa: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub tips: &'static [&'static str],
    pub practice_words: &'static [&'static str],
    #[serde(skip_serializing_if = "LabeledTable::is_empty")]
    pub variants: LabeledTable<SoundVariant>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AccentMark {
    #[serde(skip)]
    pub mark: &'static str,
    pub name: &'static str,
    pub sound: &'static str,
    pub examples: &'static [&'static str],
    pub tip: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<&'static str>,
}

impl Labeled for NasalVowel {
    fn label(&self) -> &'static str {
        self.label
    }
}

impl Labeled for LetterVariant {
    fn label(&self) -> &'static str {
        self.name
    }
}

impl Labeled for SilentLetterRule {
    fn label(&self) -> &'static str {
        self.label
    }
}

impl Labeled for SoundVariant {
    fn label(&self) -> &'static str {
        self.name
    }
}

impl Labeled for SpecialSound {
    fn label(&self) -> &'static str {
        self.label
    }
}

impl Labeled for AccentMark {
    fn label(&self) -> &'static str {
        self.mark
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LiaisonExample {
    pub phrase: &'static str,
    pub pronunciation: &'static str,
    pub rule: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// Grupo de pares mínimos entre dos sonidos
#[derive(Debug, Clone, Copy)]
pub struct MinimalPairGroup {
    pub name: &'static str,
    pub sounds: (&'static str, &'static str),
    pub pairs: &'static [(&'static str, &'static str)],
    pub tip: &'static str,
}

impl Labeled for MinimalPairGroup {
    fn label(&self) -> &'static str {
        self.name
    }
}

/// Un par como objeto `{sonido_a: palabra_a, sonido_b: palabra_b}`
struct PairView<'a> {
    sounds: (&'a str, &'a str),
    words: (&'a str, &'a str),
}

impl Serialize for PairView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(self.sounds.0, self.words.0)?;
        map.serialize_entry(self.sounds.1, self.words.1)?;
        map.end()
    }
}

impl Serialize for MinimalPairGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let pairs: Vec<PairView<'_>> = self
            .pairs
            .iter()
            .map(|&words| PairView { sounds: self.sounds, words })
            .collect();

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("pairs", &pairs)?;
        map.serialize_entry("tip", self.tip)?;
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NasalVowelLesson {
    pub explanation: &'static str,
    pub vowels: LabeledTable<NasalVowel>,
    pub practice_phrases: &'static [&'static str],
    pub tips: &'static [&'static str],
}

/// Resultado de `practice_liaison`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LiaisonPractice {
    Known {
        phrase: String,
        pronunciation: &'static str,
        rule: &'static str,
        #[serde(rename = "type")]
        kind: &'static str,
        explanation: &'static str,
    },
    Unknown {
        phrase: String,
        tip: &'static str,
        common_liaisons: String,
    },
}

/// Retroalimentación de pronunciación
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PronunciationFeedback {
    pub text: String,
    pub challenges: Vec<String>,
    /// Entre 0 y 100
    pub score: f64,
    pub improvements: Vec<String>,
}

const NASAL_VOWELS: &[NasalVowel] = &[
    NasalVowel {
        label: "an",
        ipa: "/ɑ̃/",
        spellings: &["an", "am", "en", "em"],
        examples: &[("dans", "in"), ("chambre", "room"), ("enfant", "child"), ("temps", "time")],
        tips: "Round your lips and let air flow through nose",
        common_mistakes: Some("Don't pronounce the 'n' separately"),
        note: None,
    },
    NasalVowel {
        label: "in",
        ipa: "/ɛ̃/",
        spellings: &["in", "im", "ein", "ain", "aim", "yn", "ym"],
        examples: &[
            ("vin", "wine"),
            ("impossible", "impossible"),
            ("plein", "full"),
            ("pain", "bread"),
            ("faim", "hunger"),
        ],
        tips: "Smile slightly while nasalizing",
        common_mistakes: None,
        note: None,
    },
    NasalVowel {
        label: "on",
        ipa: "/ɔ̃/",
        spellings: &["on", "om"],
        examples: &[("bon", "good"), ("nom", "name"), ("maison", "house"), ("comprendre", "understand")],
        tips: "Round lips as for 'o' but nasalize",
        common_mistakes: None,
        note: None,
    },
    NasalVowel {
        label: "un",
        ipa: "/œ̃/ or /ɛ̃/",
        spellings: &["un", "um"],
        examples: &[("un", "one/a"), ("brun", "brown"), ("parfum", "perfume"), ("lundi", "Monday")],
        tips: "In many regions, now pronounced like 'in'",
        common_mistakes: None,
        note: Some("Distinction disappearing in modern French"),
    },
];

const SILENT_LETTERS: &[SilentLetterRule] = &[
    SilentLetterRule {
        label: "final_consonants",
        rule: "Most final consonants are silent",
        exceptions: &["c", "r", "f", "l"],
        examples: &[
            ("petit", "peh-TEE (t is silent)"),
            ("beaucoup", "boh-KOO (p is silent)"),
            ("avec", "ah-VEK (c is pronounced)"),
            ("amour", "ah-MOOR (r is pronounced)"),
        ],
        variants: LabeledTable::new(&[]),
        exception: None,
    },
    SilentLetterRule {
        label: "h",
        rule: "H is always silent in French",
        exceptions: &[],
        examples: &[],
        variants: LabeledTable::new(&[
            LetterVariant {
                name: "h_muet",
                description: "Silent h, allows liaison",
                examples: &["l'homme", "l'histoire"],
                note: None,
            },
            LetterVariant {
                name: "h_aspiré",
                description: "Aspirated h, prevents liaison",
                examples: &["le haricot", "la honte"],
                note: Some("Usually marked with *"),
            },
        ]),
        exception: None,
    },
    SilentLetterRule {
        label: "e_muet",
        rule: "Final 'e' often silent or very light",
        exceptions: &[],
        examples: &[("table", "TAHBL"), ("libre", "LEEBR"), ("je mange", "zhuh MAHNZH")],
        variants: LabeledTable::new(&[]),
        exception: Some("Pronounced in songs and poetry"),
    },
];

const SPECIAL_SOUNDS: &[SpecialSound] = &[
    SpecialSound {
        label: "r",
        ipa: "/ʁ/",
        description: Some("Uvular fricative (back of throat)"),
        tips: &[
            "Gargle lightly without water",
            "Air vibrates at back of throat",
            "Not rolled like Spanish R",
        ],
        practice_words: &["rouge", "rue", "trois", "français"],
        variants: LabeledTable::new(&[]),
    },
    SpecialSound {
        label: "u",
        ipa: "/y/",
        description: Some("Rounded front vowel"),
        tips: &["Say 'ee' then round your lips", "Keep tongue forward", "Not like English 'oo'"],
        practice_words: &["tu", "rue", "sûr", "mur"],
        variants: LabeledTable::new(&[]),
    },
    SpecialSound {
        label: "eu",
        ipa: "/ø/ or /œ/",
        description: None,
        tips: &[],
        practice_words: &[],
        variants: LabeledTable::new(&[
            SoundVariant {
                name: "closed",
                sound: "/ø/",
                examples: &["peu", "deux", "feu"],
                tip: "Lips rounded, tongue mid-position",
            },
            SoundVariant {
                name: "open",
                sound: "/œ/",
                examples: &["peur", "seul", "fleur"],
                tip: "More open than closed 'eu'",
            },
        ]),
    },
    SpecialSound {
        label: "oi",
        ipa: "/wa/",
        description: None,
        tips: &["Pronounced like 'wah'"],
        practice_words: &["moi", "toi", "boire", "voir"],
        variants: LabeledTable::new(&[]),
    },
];

const ACCENT_MARKS: &[AccentMark] = &[
    AccentMark {
        mark: "é",
        name: "accent aigu",
        sound: "/e/",
        examples: &["été", "café", "télé"],
        tip: "Closed 'e' sound like 'ay'",
        history: None,
    },
    AccentMark {
        mark: "è",
        name: "accent grave",
        sound: "/ɛ/",
        examples: &["père", "mère", "très"],
        tip: "Open 'e' sound like 'eh'",
        history: None,
    },
    AccentMark {
        mark: "ê",
        name: "accent circonflexe",
        sound: "/ɛ/",
        examples: &["être", "fenêtre", "forêt"],
        tip: "Open 'e', often marks lost 's'",
        history: Some("feste → fête, hospital → hôpital"),
    },
    AccentMark {
        mark: "ç",
        name: "cédille",
        sound: "/s/",
        examples: &["français", "ça", "leçon"],
        tip: "Makes 'c' soft before a, o, u",
        history: None,
    },
];

const LIAISON_EXAMPLES: &[LiaisonExample] = &[
    LiaisonExample {
        phrase: "les amis",
        pronunciation: "lay-zah-MEE",
        rule: "s → /z/ before vowel",
        kind: "obligatory",
    },
    LiaisonExample {
        phrase: "petit ami",
        pronunciation: "puh-tee-tah-MEE",
        rule: "t → /t/ before vowel",
        kind: "obligatory",
    },
    LiaisonExample {
        phrase: "vous avez",
        pronunciation: "voo-zah-VEH",
        rule: "s → /z/ between pronoun and verb",
        kind: "obligatory",
    },
    LiaisonExample {
        phrase: "deux heures",
        pronunciation: "deu-ZEUR",
        rule: "x → /z/ before vowel",
        kind: "obligatory",
    },
    LiaisonExample {
        phrase: "grand homme",
        pronunciation: "grahn-TOM",
        rule: "d → /t/ before vowel",
        kind: "obligatory",
    },
];

const MINIMAL_PAIRS: &[MinimalPairGroup] = &[
    MinimalPairGroup {
        name: "u_vs_ou",
        sounds: ("u", "ou"),
        pairs: &[("tu", "tout"), ("rue", "roue"), ("su", "sous")],
        tip: "U is front rounded, OU is back rounded",
    },
    MinimalPairGroup {
        name: "é_vs_è",
        sounds: ("é", "è"),
        pairs: &[("été", "être"), ("fée", "fait"), ("pré", "près")],
        tip: "É is closed, È is open",
    },
    MinimalPairGroup {
        name: "an_vs_on",
        sounds: ("an", "on"),
        pairs: &[("sans", "son"), ("banc", "bon"), ("vent", "vont")],
        tip: "Different nasal vowels - practice separately",
    },
];

const NASAL_LESSON: NasalVowelLesson = NasalVowelLesson {
    explanation: "Nasal vowels are unique to French - air flows through nose",
    vowels: LabeledTable::new(NASAL_VOWELS),
    practice_phrases: &[
        "Un bon vin blanc - A good white wine",
        "Mon oncle et ma tante - My uncle and aunt",
        "Il prend son temps - He takes his time",
    ],
    tips: &[
        "Don't pronounce the 'n' or 'm' - they just nasalize the vowel",
        "Practice with a mirror to see air fog",
        "Hold your nose - you shouldn't be able to say them properly",
    ],
};

/// Consonantes finales que suelen ser mudas
const SILENT_FINALS: [char; 6] = ['t', 'd', 's', 'x', 'z', 'p'];

const IMPROVEMENTS: [&str; 3] = [
    "Practice nasal vowels separately",
    "Focus on French 'r' production",
    "Remember silent final consonants",
];

const LIAISON_EXPLANATION: &str =
    "The final consonant links to the next word starting with a vowel";

/// Entrenador de pronunciación
#[derive(Debug, Clone)]
pub struct PronunciationCoach {
    nasal_vowels: LabeledTable<NasalVowel>,
    silent_letters: LabeledTable<SilentLetterRule>,
    special_sounds: LabeledTable<SpecialSound>,
    accent_marks: LabeledTable<AccentMark>,
    liaisons: &'static [LiaisonExample],
}

impl Default for PronunciationCoach {
    fn default() -> Self {
        Self::new()
    }
}

impl PronunciationCoach {
    pub fn new() -> Self {
        Self {
            nasal_vowels: LabeledTable::new(NASAL_VOWELS),
            silent_letters: LabeledTable::new(SILENT_LETTERS),
            special_sounds: LabeledTable::new(SPECIAL_SOUNDS),
            accent_marks: LabeledTable::new(ACCENT_MARKS),
            liaisons: LIAISON_EXAMPLES,
        }
    }

    pub fn teach_nasal_vowels(&self) -> &'static NasalVowelLesson {
        &NASAL_LESSON
    }

    /// Busca la frase exacta (en minúsculas) entre los ejemplos de liaison
    pub fn practice_liaison(&self, phrase: &str) -> LiaisonPractice {
        let lower = phrase.to_lowercase();

        match self.liaisons.iter().find(|ex| ex.phrase == lower) {
            Some(example) => LiaisonPractice::Known {
                phrase: phrase.to_string(),
                pronunciation: example.pronunciation,
                rule: example.rule,
                kind: example.kind,
                explanation: LIAISON_EXPLANATION,
            },
            None => LiaisonPractice::Unknown {
                phrase: phrase.to_string(),
                tip: "Check if there's a consonant before a vowel sound",
                common_liaisons: self
                    .liaisons
                    .iter()
                    .map(|ex| ex.phrase)
                    .collect::<Vec<_>>()
                    .join(", "),
            },
        }
    }

    /// Puntúa un texto según las dificultades que contiene
    ///
    /// Cada grafía nasal presente cuenta por separado, así que una misma
    /// palabra puede sumar varias dificultades ("vin" → "in").
    pub fn analyze_pronunciation(&self, text: &str) -> PronunciationFeedback {
        let lower = text.to_lowercase();
        let mut challenges = Vec::new();

        for vowel in self.nasal_vowels.iter() {
            for spelling in vowel.spellings {
                if lower.contains(spelling) {
                    challenges.push(format!("Nasal vowel '{}' → {}", spelling, vowel.ipa));
                }
            }
        }

        if SILENT_FINALS.iter().any(|&c| lower.ends_with(c)) {
            challenges.push("Final consonant likely silent".to_string());
        }

        if lower.contains('r') {
            challenges.push("French 'r' sound /ʁ/".to_string());
        }

        if lower.contains('u') {
            challenges.push("French 'u' sound /y/".to_string());
        }

        let score = (100.0 - challenges.len() as f64 * 10.0).max(0.0);
        debug!(challenges = challenges.len(), score, "pronunciación analizada");

        PronunciationFeedback {
            text: text.to_string(),
            challenges,
            score,
            improvements: IMPROVEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Grupos de pares mínimos, serializados como `{nombre: {pairs, tip}}`
    pub fn get_minimal_pairs(&self) -> LabeledTable<MinimalPairGroup> {
        LabeledTable::new(MINIMAL_PAIRS)
    }

    pub fn nasal_vowels(&self) -> LabeledTable<NasalVowel> {
        self.nasal_vowels
    }

    /// Busca una vocal nasal por su etiqueta ("an", "in", "on", "un")
    pub fn nasal_vowel(&self, label: &str) -> Option<&'static NasalVowel> {
        self.nasal_vowels.get(label)
    }

    pub fn silent_letters(&self) -> LabeledTable<SilentLetterRule> {
        self.silent_letters
    }

    pub fn special_sounds(&self) -> LabeledTable<SpecialSound> {
        self.special_sounds
    }

    pub fn accent_marks(&self) -> LabeledTable<AccentMark> {
        self.accent_marks
    }

    /// Busca un acento por su carácter ("é", "ç"...)
    pub fn accent_mark(&self, mark: &str) -> Option<&'static AccentMark> {
        self.accent_marks.get(mark)
    }
}
