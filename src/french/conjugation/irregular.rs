//! Verbos irregulares franceses
//!
//! Cada verbo guarda solo los tiempos redactados. Las claves de sujeto
//! reflejan la elisión real ("j'" para avoir, "que j'" en subjuntivo).

use std::collections::{BTreeMap, HashMap};

use crate::french::models::{Auxiliary, CefrLevel, FormTable, Tense, Verb, VerbGroup};

/// Crea el HashMap infinitivo → verbo irregular
pub fn irregular_verbs() -> HashMap<&'static str, Verb> {
    let mut map = HashMap::new();

    // ÊTRE
    add_etre(&mut map);

    // AVOIR
    add_avoir(&mut map);

    // ALLER
    add_aller(&mut map);

    // FAIRE
    add_faire(&mut map);

    map
}

struct VerbEntry {
    infinitive: &'static str,
    english: &'static str,
    auxiliary: Auxiliary,
    past_participle: &'static str,
    present_participle: &'static str,
    level: CefrLevel,
}

fn insert(
    map: &mut HashMap<&'static str, Verb>,
    entry: VerbEntry,
    tenses: &[(Tense, [(&str, &str); 6])],
) {
    let conjugations: BTreeMap<Tense, FormTable> = tenses
        .iter()
        .map(|(tense, forms)| (*tense, FormTable::from_pairs(forms)))
        .collect();

    map.insert(
        entry.infinitive,
        Verb {
            id: format!("verb_{}", entry.infinitive),
            infinitive: entry.infinitive.to_string(),
            english: entry.english.to_string(),
            verb_group: VerbGroup::Third,
            is_reflexive: false,
            auxiliary_verb: entry.auxiliary,
            conjugations,
            past_participle: entry.past_participle.to_string(),
            present_participle: entry.present_participle.to_string(),
            level: entry.level,
        },
    );
}

fn add_etre(map: &mut HashMap<&'static str, Verb>) {
    insert(
        map,
        VerbEntry {
            infinitive: "être",
            english: "to be",
            auxiliary: Auxiliary::Avoir,
            past_participle: "été",
            present_participle: "étant",
            level: CefrLevel::A1,
        },
        &[
            (
                Tense::Present,
                [
                    ("je", "suis"),
                    ("tu", "es"),
                    ("il/elle/on", "est"),
                    ("nous", "sommes"),
                    ("vous", "êtes"),
                    ("ils/elles", "sont"),
                ],
            ),
            (
                Tense::Imparfait,
                [
                    ("je", "étais"),
                    ("tu", "étais"),
                    ("il/elle/on", "était"),
                    ("nous", "étions"),
                    ("vous", "étiez"),
                    ("ils/elles", "étaient"),
                ],
            ),
            (
                Tense::FuturSimple,
                [
                    ("je", "serai"),
                    ("tu", "seras"),
                    ("il/elle/on", "sera"),
                    ("nous", "serons"),
                    ("vous", "serez"),
                    ("ils/elles", "seront"),
                ],
            ),
            (
                Tense::SubjunctivePresent,
                [
                    ("que je", "sois"),
                    ("que tu", "sois"),
                    ("qu'il/elle/on", "soit"),
                    ("que nous", "soyons"),
                    ("que vous", "soyez"),
                    ("qu'ils/elles", "soient"),
                ],
            ),
        ],
    );
}

fn add_avoir(map: &mut HashMap<&'static str, Verb>) {
    insert(
        map,
        VerbEntry {
            infinitive: "avoir",
            english: "to have",
            auxiliary: Auxiliary::Avoir,
            past_participle: "eu",
            present_participle: "ayant",
            level: CefrLevel::A1,
        },
        &[
            (
                Tense::Present,
                [
                    ("j'", "ai"),
                    ("tu", "as"),
                    ("il/elle/on", "a"),
                    ("nous", "avons"),
                    ("vous", "avez"),
                    ("ils/elles", "ont"),
                ],
            ),
            (
                Tense::Imparfait,
                [
                    ("j'", "avais"),
                    ("tu", "avais"),
                    ("il/elle/on", "avait"),
                    ("nous", "avions"),
                    ("vous", "aviez"),
                    ("ils/elles", "avaient"),
                ],
            ),
            (
                Tense::FuturSimple,
                [
                    ("j'", "aurai"),
                    ("tu", "auras"),
                    ("il/elle/on", "aura"),
                    ("nous", "aurons"),
                    ("vous", "aurez"),
                    ("ils/elles", "auront"),
                ],
            ),
            (
                Tense::SubjunctivePresent,
                [
                    ("que j'", "aie"),
                    ("que tu", "aies"),
                    ("qu'il/elle/on", "ait"),
                    ("que nous", "ayons"),
                    ("que vous", "ayez"),
                    ("qu'ils/elles", "aient"),
                ],
            ),
        ],
    );
}

fn add_aller(map: &mut HashMap<&'static str, Verb>) {
    insert(
        map,
        VerbEntry {
            infinitive: "aller",
            english: "to go",
            auxiliary: Auxiliary::Etre,
            past_participle: "allé",
            present_participle: "allant",
            level: CefrLevel::A1,
        },
        &[
            (
                Tense::Present,
                [
                    ("je", "vais"),
                    ("tu", "vas"),
                    ("il/elle/on", "va"),
                    ("nous", "allons"),
                    ("vous", "allez"),
                    ("ils/elles", "vont"),
                ],
            ),
            (
                Tense::Imparfait,
                [
                    ("j'", "allais"),
                    ("tu", "allais"),
                    ("il/elle/on", "allait"),
                    ("nous", "allions"),
                    ("vous", "alliez"),
                    ("ils/elles", "allaient"),
                ],
            ),
            (
                Tense::FuturSimple,
                [
                    ("j'", "irai"),
                    ("tu", "iras"),
                    ("il/elle/on", "ira"),
                    ("nous", "irons"),
                    ("vous", "irez"),
                    ("ils/elles", "iront"),
                ],
            ),
        ],
    );
}

fn add_faire(map: &mut HashMap<&'static str, Verb>) {
    insert(
        map,
        VerbEntry {
            infinitive: "faire",
            english: "to do/make",
            auxiliary: Auxiliary::Avoir,
            past_participle: "fait",
            present_participle: "faisant",
            level: CefrLevel::A1,
        },
        &[(
            Tense::Present,
            [
                ("je", "fais"),
                ("tu", "fais"),
                ("il/elle/on", "fait"),
                ("nous", "faisons"),
                ("vous", "faites"),
                ("ils/elles", "font"),
            ],
        )],
    );
}
