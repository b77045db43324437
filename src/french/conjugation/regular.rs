//! Tablas de terminaciones para verbos regulares franceses

use std::collections::HashMap;

use crate::french::models::{FormTable, Tense, VerbGroup};

/// Etiquetas de sujeto en el orden de las tablas de terminaciones
pub const SUBJECTS: [&str; 6] = ["je", "tu", "il/elle/on", "nous", "vous", "ils/elles"];

/// Presente, primer grupo (-er)
pub const PRESENT_FIRST: [&str; 6] = ["e", "es", "e", "ons", "ez", "ent"];

/// Imperfecto, primer grupo
pub const IMPARFAIT_FIRST: [&str; 6] = ["ais", "ais", "ait", "ions", "iez", "aient"];

/// Futuro simple, primer grupo (se añade a la raíz, no al infinitivo)
pub const FUTUR_SIMPLE_FIRST: [&str; 6] = ["erai", "eras", "era", "erons", "erez", "eront"];

/// Presente, segundo grupo (-ir)
pub const PRESENT_SECOND: [&str; 6] = ["is", "is", "it", "issons", "issez", "issent"];

/// Presente, tercer grupo
pub const PRESENT_THIRD: [&str; 6] = ["s", "s", "", "ons", "ez", "ent"];

/// Terminación del participio pasado
pub const PARTICIPLE_FIRST: &str = "é";
pub const PARTICIPLE_SECOND: &str = "i";
pub const PARTICIPLE_THIRD: &str = "u";

/// Construye la tabla {grupo × tiempo} → {sujeto → terminación}
///
/// Solo el primer grupo tiene imperfecto y futuro; cualquier otra
/// combinación no está redactada.
pub fn ending_tables() -> HashMap<(VerbGroup, Tense), FormTable> {
    let entries: [(VerbGroup, Tense, &[&str; 6]); 5] = [
        (VerbGroup::First, Tense::Present, &PRESENT_FIRST),
        (VerbGroup::First, Tense::Imparfait, &IMPARFAIT_FIRST),
        (VerbGroup::First, Tense::FuturSimple, &FUTUR_SIMPLE_FIRST),
        (VerbGroup::Second, Tense::Present, &PRESENT_SECOND),
        (VerbGroup::Third, Tense::Present, &PRESENT_THIRD),
    ];

    let mut tables = HashMap::with_capacity(entries.len());
    for (group, tense, endings) in entries {
        let mut table = FormTable::new();
        for (subject, ending) in SUBJECTS.iter().zip(endings.iter()) {
            table.insert(*subject, *ending);
        }
        tables.insert((group, tense), table);
    }
    tables
}

/// Determina el grupo a partir de la terminación del infinitivo
pub fn verb_group(infinitive: &str) -> VerbGroup {
    if infinitive.ends_with("er") {
        VerbGroup::First
    } else if infinitive.ends_with("ir") {
        VerbGroup::Second
    } else {
        VerbGroup::Third
    }
}

/// Obtiene la raíz quitando la terminación del grupo
///
/// Tercer grupo: quita 2 caracteres si acaba en -re, si no 3 (-oir).
pub fn stem(infinitive: &str, group: VerbGroup) -> &str {
    match group {
        VerbGroup::First | VerbGroup::Second => drop_last_chars(infinitive, 2),
        VerbGroup::Third if infinitive.ends_with("re") => drop_last_chars(infinitive, 2),
        VerbGroup::Third => drop_last_chars(infinitive, 3),
    }
}

/// Terminación del participio pasado para un grupo
pub fn participle_ending(group: VerbGroup) -> &'static str {
    match group {
        VerbGroup::First => PARTICIPLE_FIRST,
        VerbGroup::Second => PARTICIPLE_SECOND,
        VerbGroup::Third => PARTICIPLE_THIRD,
    }
}

/// Quita `n` caracteres (no bytes) del final; cadena vacía si no hay tantos
fn drop_last_chars(s: &str, n: usize) -> &str {
    if n == 0 {
        return s;
    }
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}
