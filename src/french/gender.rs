//! Género de los sustantivos franceses
//!
//! Tablas de terminaciones con su fiabilidad, excepciones conocidas y las
//! formas de los artículos (definidos, indefinidos, partitivos y contracciones).

use serde::Serialize;
use tracing::debug;

use super::models::Gender;
use super::pairs_as_map;

/// Terminación asociada a un género
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenderPattern {
    /// Terminación con guion; puede ser una alternancia ("-ance/-ence")
    pub suffix: &'static str,
    pub gender: Gender,
    pub examples: &'static [&'static str],
    /// Palabras con artículo que contradicen la regla ("la page")
    pub exceptions: &'static [&'static str],
    pub reliability: &'static str,
}

impl GenderPattern {
    /// ¿Termina la palabra (ya en minúsculas) en alguna de las alternativas?
    pub fn matches(&self, word_lower: &str) -> bool {
        self.suffix
            .split('/')
            .map(|alt| alt.trim_matches('-'))
            .any(|bare| word_lower.ends_with(bare))
    }

    /// ¿Contiene la palabra alguna de las excepciones (sin su artículo)?
    pub fn is_exception(&self, word_lower: &str) -> bool {
        self.exceptions.iter().any(|ex| {
            let bare = ex.replace("l'", "").replace("la ", "").replace("le ", "");
            word_lower.contains(bare.as_str())
        })
    }
}

/// Excepción informativa; `identify_pattern` no la consulta
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenderException {
    pub word: &'static str,
    pub expected: &'static str,
    pub actual: &'static str,
    pub note: &'static str,
}

/// Categoría semántica con género fijo (días, meses, ciencias...)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NounCategory {
    pub name: &'static str,
    pub gender: Gender,
    pub examples: &'static [&'static str],
}

const FEMININE_PATTERNS: &[GenderPattern] = &[
    GenderPattern {
        suffix: "-tion",
        gender: Gender::Feminine,
        examples: &["la nation", "la situation", "la solution"],
        exceptions: &[],
        reliability: "100%",
    },
    GenderPattern {
        suffix: "-té",
        gender: Gender::Feminine,
        examples: &["la liberté", "la société", "la qualité"],
        exceptions: &[],
        reliability: "100%",
    },
    GenderPattern {
        suffix: "-ité",
        gender: Gender::Feminine,
        examples: &["la liberté", "la société", "la qualité"],
        exceptions: &[],
        reliability: "100%",
    },
    GenderPattern {
        suffix: "-ance/-ence",
        gender: Gender::Feminine,
        examples: &["la chance", "la distance", "la science"],
        exceptions: &[],
        reliability: "98%",
    },
    GenderPattern {
        suffix: "-ure",
        gender: Gender::Feminine,
        examples: &["la nature", "la culture", "la voiture"],
        exceptions: &[],
        reliability: "95%",
    },
    GenderPattern {
        suffix: "-ie",
        gender: Gender::Feminine,
        examples: &["la vie", "la philosophie", "la boulangerie"],
        exceptions: &["le génie", "le parapluie"],
        reliability: "90%",
    },
];

const MASCULINE_PATTERNS: &[GenderPattern] = &[
    GenderPattern {
        suffix: "-age",
        gender: Gender::Masculine,
        examples: &["le voyage", "le fromage", "le garage"],
        exceptions: &["la page", "la plage", "la cage", "l'image"],
        reliability: "85%",
    },
    GenderPattern {
        suffix: "-ment",
        gender: Gender::Masculine,
        examples: &["le gouvernement", "le monument", "le document"],
        exceptions: &[],
        reliability: "95%",
    },
    GenderPattern {
        suffix: "-isme",
        gender: Gender::Masculine,
        examples: &["le tourisme", "le capitalisme", "le réalisme"],
        exceptions: &[],
        reliability: "100%",
    },
    GenderPattern {
        suffix: "-eau",
        gender: Gender::Masculine,
        examples: &["le bureau", "le château", "le tableau"],
        exceptions: &["l'eau (f)", "la peau"],
        reliability: "90%",
    },
];

const CATEGORIES: &[NounCategory] = &[
    NounCategory { name: "days", gender: Gender::Masculine, examples: &["le lundi", "le mardi", "le mercredi"] },
    NounCategory { name: "months", gender: Gender::Masculine, examples: &["le janvier", "le février", "le mars"] },
    NounCategory { name: "seasons", gender: Gender::Masculine, examples: &["le printemps", "l'été", "l'automne", "l'hiver"] },
    NounCategory { name: "languages", gender: Gender::Masculine, examples: &["le français", "l'anglais", "l'espagnol"] },
    NounCategory { name: "trees", gender: Gender::Masculine, examples: &["le chêne", "le sapin", "le pommier"] },
    NounCategory { name: "metals", gender: Gender::Masculine, examples: &["le fer", "l'or", "l'argent"] },
    NounCategory { name: "sciences", gender: Gender::Feminine, examples: &["la physique", "la chimie", "la biologie"] },
    NounCategory { name: "continents", gender: Gender::Feminine, examples: &["l'Europe", "l'Asie", "l'Afrique"] },
    NounCategory { name: "most_countries", gender: Gender::Feminine, examples: &["la France", "l'Allemagne", "l'Espagne"] },
    NounCategory { name: "exceptions_countries", gender: Gender::Feminine, examples: &["le Mexique", "le Canada", "le Japon"] },
];

const EXCEPTIONS: &[GenderException] = &[
    GenderException { word: "le problème", expected: "feminine", actual: "masculine", note: "Greek origin" },
    GenderException { word: "le système", expected: "feminine", actual: "masculine", note: "Greek origin" },
    GenderException { word: "la victime", expected: "masculine", actual: "feminine", note: "Always feminine even for males" },
    GenderException { word: "la personne", expected: "varies", actual: "feminine", note: "Always feminine" },
    GenderException { word: "le mannequin", expected: "feminine", actual: "masculine", note: "Always masculine" },
];

/// Formas de un artículo para un género
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArticleForms {
    pub singular: &'static str,
    pub plural: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_vowel: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenderedArticles {
    pub masculine: ArticleForms,
    pub feminine: ArticleForms,
}

impl GenderedArticles {
    pub fn for_gender(&self, gender: Gender) -> &ArticleForms {
        match gender {
            Gender::Masculine => &self.masculine,
            Gender::Feminine => &self.feminine,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PartitiveForms {
    pub masculine: &'static str,
    pub feminine: &'static str,
    pub before_vowel: &'static str,
    pub plural: &'static str,
    pub negative: &'static str,
}

/// Artículos y contracciones
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ArticleSet {
    pub definite: GenderedArticles,
    pub indefinite: GenderedArticles,
    pub partitive: PartitiveForms,
    #[serde(serialize_with = "pairs_as_map")]
    pub contractions: &'static [(&'static str, &'static str)],
}

impl ArticleSet {
    /// Contracción de preposición + artículo ("à" + "le" → "au")
    pub fn contraction(&self, preposition: &str, article: &str) -> Option<&'static str> {
        let key = format!("{} + {}", preposition.trim(), article.trim());
        self.contractions
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }
}

const ARTICLES: ArticleSet = ArticleSet {
    definite: GenderedArticles {
        masculine: ArticleForms { singular: "le", plural: "les", before_vowel: Some("l'") },
        feminine: ArticleForms { singular: "la", plural: "les", before_vowel: Some("l'") },
    },
    indefinite: GenderedArticles {
        masculine: ArticleForms { singular: "un", plural: "des", before_vowel: None },
        feminine: ArticleForms { singular: "une", plural: "des", before_vowel: None },
    },
    partitive: PartitiveForms {
        masculine: "du",
        feminine: "de la",
        before_vowel: "de l'",
        plural: "des",
        negative: "de/d'",
    },
    contractions: &[
        ("à + le", "au"),
        ("à + les", "aux"),
        ("de + le", "du"),
        ("de + les", "des"),
    ],
};

/// Género probable devuelto por `identify_pattern`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LikelyGender {
    Masculine,
    Feminine,
    Unknown,
}

impl From<Gender> for LikelyGender {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Masculine => LikelyGender::Masculine,
            Gender::Feminine => LikelyGender::Feminine,
        }
    }
}

/// Resultado del análisis de género de una palabra
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderAnalysis {
    pub word: String,
    pub likely_gender: LikelyGender,
    pub rule: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reliability: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_exception: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PartitiveLesson {
    pub explanation: &'static str,
    pub forms: PartitiveForms,
    #[serde(serialize_with = "pairs_as_map")]
    pub examples: &'static [(&'static str, &'static str)],
    pub rules: &'static [&'static str],
    pub practice_sentences: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContractionExample {
    pub contraction: &'static str,
    pub formation: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContractionLesson {
    #[serde(serialize_with = "pairs_as_map")]
    pub rules: &'static [(&'static str, &'static str)],
    pub examples: &'static [ContractionExample],
    pub no_contraction: &'static [&'static str],
    pub tip: &'static str,
}

/// Las cuatro formas de un adjetivo en contexto
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AdjectiveAgreement {
    pub adjective: &'static str,
    pub masculine_singular: &'static str,
    pub feminine_singular: &'static str,
    pub masculine_plural: &'static str,
    pub feminine_plural: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AgreementLesson {
    #[serde(serialize_with = "pairs_as_map")]
    pub rules: &'static [(&'static str, &'static str)],
    pub examples: &'static [AdjectiveAgreement],
    #[serde(serialize_with = "pairs_as_map")]
    pub special_cases: &'static [(&'static str, &'static str)],
}

const PARTITIVE_LESSON: PartitiveLesson = PartitiveLesson {
    explanation: "Partitive articles express 'some' or 'any' in French",
    forms: ARTICLES.partitive,
    examples: &[
        ("du pain", "some bread (masculine)"),
        ("de la viande", "some meat (feminine)"),
        ("de l'eau", "some water (before vowel)"),
        ("des fruits", "some fruits (plural)"),
        ("pas de sucre", "no sugar (negative)"),
    ],
    rules: &[
        "Use du with masculine singular",
        "Use de la with feminine singular",
        "Use de l' before vowels",
        "Use des for plural",
        "After negative, use de/d' only",
    ],
    practice_sentences: &[
        "Je voudrais du café - I would like some coffee",
        "Il n'y a pas de lait - There is no milk",
        "Elle mange des légumes - She eats vegetables",
    ],
};

const CONTRACTION_LESSON: ContractionLesson = ContractionLesson {
    rules: ARTICLES.contractions,
    examples: &[
        ContractionExample {
            contraction: "au",
            formation: "à + le → au",
            example: "Je vais au cinéma (à + le cinéma)",
        },
        ContractionExample {
            contraction: "aux",
            formation: "à + les → aux",
            example: "Je parle aux enfants (à + les enfants)",
        },
        ContractionExample {
            contraction: "du",
            formation: "de + le → du",
            example: "Le livre du professeur (de + le professeur)",
        },
        ContractionExample {
            contraction: "des",
            formation: "de + les → des",
            example: "La voiture des voisins (de + les voisins)",
        },
    ],
    no_contraction: &[
        "à la → à la (no change)",
        "de la → de la (no change)",
        "à l' → à l' (before vowel)",
        "de l' → de l' (before vowel)",
    ],
    tip: "Contractions only happen with le and les, not with la or l'",
};

const AGREEMENT_LESSON: AgreementLesson = AgreementLesson {
    rules: &[
        ("basic", "Adjectives must agree in gender and number with the noun"),
        ("feminine", "Usually add -e to masculine form"),
        ("plural", "Usually add -s to singular form"),
        ("feminine_plural", "Add -es to masculine singular"),
    ],
    examples: &[
        AdjectiveAgreement {
            adjective: "petit",
            masculine_singular: "un petit garçon",
            feminine_singular: "une petite fille",
            masculine_plural: "des petits garçons",
            feminine_plural: "des petites filles",
        },
        AdjectiveAgreement {
            adjective: "intelligent",
            masculine_singular: "un homme intelligent",
            feminine_singular: "une femme intelligente",
            masculine_plural: "des hommes intelligents",
            feminine_plural: "des femmes intelligentes",
        },
    ],
    special_cases: &[
        ("beau", "beau → belle (irregular)"),
        ("nouveau", "nouveau → nouvelle (irregular)"),
        ("vieux", "vieux → vieille (irregular)"),
        ("endings_in_eux", "-eux → -euse (heureux → heureuse)"),
        ("endings_in_er", "-er → -ère (premier → première)"),
    ],
};

/// Profesor de género: patrones de terminación y artículos
#[derive(Debug, Clone)]
pub struct GenderTeacher {
    feminine_patterns: &'static [GenderPattern],
    masculine_patterns: &'static [GenderPattern],
    categories: &'static [NounCategory],
    exceptions: &'static [GenderException],
    articles: ArticleSet,
}

impl Default for GenderTeacher {
    fn default() -> Self {
        Self::new()
    }
}

impl GenderTeacher {
    pub fn new() -> Self {
        Self {
            feminine_patterns: FEMININE_PATTERNS,
            masculine_patterns: MASCULINE_PATTERNS,
            categories: CATEGORIES,
            exceptions: EXCEPTIONS,
            articles: ARTICLES,
        }
    }

    /// Identifica el género probable de una palabra por su terminación
    ///
    /// Las terminaciones femeninas se prueban antes que las masculinas y gana
    /// la primera que coincide. Si la palabra contiene una de las excepciones
    /// de esa terminación, el veredicto se invierte.
    pub fn identify_pattern(&self, word: &str) -> GenderAnalysis {
        let word_lower = word.trim().to_lowercase();

        let candidates = self
            .feminine_patterns
            .iter()
            .chain(self.masculine_patterns.iter());

        for pattern in candidates {
            if !pattern.matches(&word_lower) {
                continue;
            }

            let is_exception = pattern.is_exception(&word_lower);
            let gender = if is_exception {
                pattern.gender.opposite()
            } else {
                pattern.gender
            };
            debug!(word = %word_lower, suffix = pattern.suffix, is_exception, "terminación reconocida");

            return GenderAnalysis {
                word: word.to_string(),
                likely_gender: gender.into(),
                rule: format!(
                    "Words ending in {} are usually {}",
                    pattern.suffix,
                    pattern.gender.as_str()
                ),
                reliability: Some(pattern.reliability),
                is_exception: Some(is_exception),
                tip: None,
            };
        }

        debug!(word = %word_lower, "sin patrón de género");
        GenderAnalysis {
            word: word.to_string(),
            likely_gender: LikelyGender::Unknown,
            rule: "No clear pattern detected - memorization needed".to_string(),
            reliability: None,
            is_exception: None,
            tip: Some("Use context and practice to remember"),
        }
    }

    pub fn partitive_practice(&self) -> &'static PartitiveLesson {
        &PARTITIVE_LESSON
    }

    pub fn get_contractions(&self) -> &'static ContractionLesson {
        &CONTRACTION_LESSON
    }

    pub fn practice_agreement(&self) -> &'static AgreementLesson {
        &AGREEMENT_LESSON
    }

    pub fn articles(&self) -> &ArticleSet {
        &self.articles
    }

    pub fn exceptions(&self) -> &[GenderException] {
        self.exceptions
    }

    pub fn feminine_patterns(&self) -> &[GenderPattern] {
        self.feminine_patterns
    }

    pub fn masculine_patterns(&self) -> &[GenderPattern] {
        self.masculine_patterns
    }

    /// Categorías semánticas de un género
    pub fn categories(&self, gender: Gender) -> impl Iterator<Item = &NounCategory> {
        self.categories.iter().filter(move |c| c.gender == gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_suffix_matches_both_tails() {
        let pattern = FEMININE_PATTERNS[3];
        assert!(pattern.matches("chance"));
        assert!(pattern.matches("science"));
        assert!(!pattern.matches("chant"));
    }

    #[test]
    fn test_exception_strips_article() {
        let age = MASCULINE_PATTERNS[0];
        assert!(age.is_exception("plage"));
        assert!(age.is_exception("image"));
        assert!(!age.is_exception("fromage"));
    }

    #[test]
    fn test_eau_exception_with_annotation_never_matches() {
        // "l'eau (f)" conserva la anotación tras quitar el artículo
        let teacher = GenderTeacher::new();
        let result = teacher.identify_pattern("eau");
        assert_eq!(result.likely_gender, LikelyGender::Masculine);
        assert_eq!(result.is_exception, Some(false));
    }

    #[test]
    fn test_peau_is_exception() {
        let teacher = GenderTeacher::new();
        let result = teacher.identify_pattern("peau");
        assert_eq!(result.likely_gender, LikelyGender::Feminine);
        assert_eq!(result.is_exception, Some(true));
        assert_eq!(result.reliability, Some("90%"));
    }

    #[test]
    fn test_contraction_lookup() {
        let teacher = GenderTeacher::new();
        assert_eq!(teacher.articles().contraction("à", "le"), Some("au"));
        assert_eq!(teacher.articles().contraction("de", "les"), Some("des"));
        assert_eq!(teacher.articles().contraction("à", "la"), None);
    }

    #[test]
    fn test_categories_by_gender() {
        let teacher = GenderTeacher::new();
        let masculine: Vec<&str> = teacher.categories(Gender::Masculine).map(|c| c.name).collect();
        assert_eq!(masculine, vec!["days", "months", "seasons", "languages", "trees", "metals"]);
        assert_eq!(teacher.categories(Gender::Feminine).count(), 4);
    }
}
