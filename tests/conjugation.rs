//! Tests de integración del conjugador.
//!
//! Ejecutar solo estos tests:  cargo test --test conjugation

use earlyfrench::french::conjugation::{Conjugation, FORM_NOT_FOUND};
use earlyfrench::french::models::{Auxiliary, Tense, VerbGroup};
use earlyfrench::VerbConjugator;

#[test]
fn test_parler_present_tu() {
    let conjugator = VerbConjugator::new();
    let result = conjugator.conjugate("parler", Tense::Present, None);
    let forms = result.forms().expect("parler debería tener tabla en presente");
    assert_eq!(forms.get("tu"), Some("parles"));
    assert_eq!(forms.len(), 6);
}

#[test]
fn test_regular_table_keeps_subject_order() {
    let conjugator = VerbConjugator::new();
    let result = conjugator.conjugate("finir", Tense::Present, None);
    let keys: Vec<_> = result.forms().unwrap().keys().collect();
    assert_eq!(keys, vec!["je", "tu", "il/elle/on", "nous", "vous", "ils/elles"]);
    assert_eq!(result.forms().unwrap().get("nous"), Some("finissons"));
}

#[test]
fn test_elision_for_vowel_initial_forms() {
    let conjugator = VerbConjugator::new();
    let result = conjugator.conjugate("aimer", Tense::Present, None);
    let forms = result.forms().unwrap();
    assert_eq!(forms.get("j'"), Some("aime"));
    assert!(!forms.contains_key("je"));
}

#[test]
fn test_third_group_stems() {
    let conjugator = VerbConjugator::new();
    let vendre = conjugator.conjugate("vendre", Tense::Present, None);
    assert_eq!(vendre.forms().unwrap().get("il/elle/on"), Some("vend"));
    assert_eq!(conjugator.verb_group("vendre"), VerbGroup::Third);
}

#[test]
fn test_etre_present_je() {
    let conjugator = VerbConjugator::new();
    let result = conjugator.conjugate("être", Tense::Present, Some("je"));
    assert_eq!(result.form(), Some("suis"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["form"], "suis");
    assert_eq!(json["tense"], "présent");
}

#[test]
fn test_irregular_missing_subject_is_sentinel() {
    let conjugator = VerbConjugator::new();
    // La tabla del imperfecto de aller usa "j'"
    let result = conjugator.conjugate("aller", Tense::Imparfait, Some("je"));
    assert_eq!(result.form(), Some(FORM_NOT_FOUND));
}

#[test]
fn test_irregular_table_carries_auxiliary_and_participle() {
    let conjugator = VerbConjugator::new();
    let json = serde_json::to_value(conjugator.conjugate("aller", Tense::Present, None)).unwrap();
    assert_eq!(json["type"], "irregular");
    assert_eq!(json["auxiliary"], "être");
    assert_eq!(json["past_participle"], "allé");
    assert_eq!(json["forms"]["je"], "vais");
}

#[test]
fn test_unsupported_combination() {
    let conjugator = VerbConjugator::new();
    let result = conjugator.conjugate("finir", Tense::Imparfait, None);
    assert!(matches!(result, Conjugation::Unsupported(_)));
    assert_eq!(result.error(), Some("Cannot conjugate finir in imparfait"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["error"], "Cannot conjugate finir in imparfait");
}

#[test]
fn test_irregular_without_tense_falls_back_to_regular() {
    let conjugator = VerbConjugator::new();
    // faire solo tiene presente: el imperfecto cae en el tercer grupo, que no lo tiene
    let result = conjugator.conjugate("faire", Tense::Imparfait, None);
    assert_eq!(result.error(), Some("Cannot conjugate faire in imparfait"));
}

#[test]
fn test_passe_compose_with_etre_agrees() {
    let conjugator = VerbConjugator::new();
    let pc = conjugator.form_passe_compose("aller", "elles");
    assert_eq!(pc.auxiliary, Auxiliary::Etre);
    assert_eq!(pc.past_participle, "allées");
    assert_eq!(pc.auxiliary_form, "sont");
    assert_eq!(pc.complete_form, "sont allées");

    let elle = conjugator.form_passe_compose("aller", "elle");
    assert_eq!(elle.past_participle, "allée");
    assert_eq!(elle.auxiliary_form, "est");
}

#[test]
fn test_passe_compose_with_avoir() {
    let conjugator = VerbConjugator::new();
    let pc = conjugator.form_passe_compose("parler", "je");
    assert_eq!(pc.auxiliary, Auxiliary::Avoir);
    assert_eq!(pc.auxiliary_form, "ai");
    assert!(pc.complete_form.starts_with("ai"));
    assert_eq!(pc.complete_form, "ai parlé");

    let json = serde_json::to_value(&pc).unwrap();
    assert_eq!(json["auxiliary"], "avoir");
    assert_eq!(json["tense"], "passé composé");
}

#[test]
fn test_passe_compose_avoir_has_no_agreement() {
    let conjugator = VerbConjugator::new();
    let pc = conjugator.form_passe_compose("finir", "elles");
    assert_eq!(pc.past_participle, "fini");
    assert_eq!(pc.complete_form, "ont fini");
}

#[test]
fn test_passe_compose_unknown_subject_leaves_auxiliary_empty() {
    let conjugator = VerbConjugator::new();
    let pc = conjugator.form_passe_compose("parler", "xyz");
    assert_eq!(pc.auxiliary_form, "");
    assert_eq!(pc.complete_form, " parlé");
}

#[test]
fn test_auxiliary_choice() {
    let conjugator = VerbConjugator::new();
    assert_eq!(conjugator.auxiliary_for("venir"), Auxiliary::Etre);
    assert_eq!(conjugator.auxiliary_for("Mourir"), Auxiliary::Etre);
    assert_eq!(conjugator.auxiliary_for("manger"), Auxiliary::Avoir);
}

#[test]
fn test_reflexive_verb() {
    let conjugator = VerbConjugator::new();
    let reflexive = conjugator.reflexive_verb("se laver");
    assert_eq!(reflexive.infinitive, "se laver");
    assert_eq!(reflexive.base_verb, "laver");
    assert_eq!(reflexive.conjugation.get("je me"), Some("lave"));
    assert_eq!(reflexive.conjugation.get("nous nous"), Some("lavons"));
    assert_eq!(reflexive.note, "Reflexive verbs always use être in compound tenses");
}

#[test]
fn test_reflexive_vowel_verb_keeps_elided_key() {
    let conjugator = VerbConjugator::new();
    let reflexive = conjugator.reflexive_verb("se habiller");
    // La tabla base ya usa "j'", por lo que la rama "je m'" no se alcanza
    assert_eq!(reflexive.conjugation.get("j' se"), Some("habille"));
    assert!(!reflexive.conjugation.contains_key("je m'"));
}

#[test]
fn test_reflexive_without_prefix() {
    let conjugator = VerbConjugator::new();
    let reflexive = conjugator.reflexive_verb("laver");
    assert_eq!(reflexive.infinitive, "se laver");
    assert_eq!(reflexive.base_verb, "laver");
}

#[test]
fn test_subjunctive_practice() {
    let conjugator = VerbConjugator::new();
    let etre = conjugator.subjunctive_practice("être");
    assert_eq!(etre.forms.get("que je"), Some("sois"));
    assert_eq!(etre.example_sentences, vec!["Il faut que je sois", "Je veux qu'il soit"]);
    assert_eq!(etre.trigger_phrases.len(), 7);

    let parler = conjugator.subjunctive_practice("parler");
    assert!(parler.forms.is_empty());
    assert_eq!(parler.example_sentences, vec!["Il faut que je parle", "Je veux qu'il comprenne"]);
}

#[test]
fn test_conjugation_is_idempotent() {
    let conjugator = VerbConjugator::new();
    let first = serde_json::to_string(&conjugator.form_passe_compose("aller", "elles")).unwrap();
    let second = serde_json::to_string(&conjugator.form_passe_compose("aller", "elles")).unwrap();
    assert_eq!(first, second);

    let a = serde_json::to_string(&conjugator.conjugate("parler", Tense::Present, None)).unwrap();
    let b = serde_json::to_string(&conjugator.conjugate("parler", Tense::Present, None)).unwrap();
    assert_eq!(a, b);
}
