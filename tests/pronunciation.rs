//! Tests de integración del entrenador de pronunciación.
//!
//! Ejecutar solo estos tests:  cargo test --test pronunciation

use earlyfrench::french::pronunciation::LiaisonPractice;
use earlyfrench::PronunciationCoach;

fn expected_score(challenges: usize) -> f64 {
    (100.0 - challenges as f64 * 10.0).max(0.0)
}

#[test]
fn test_text_without_challenges_scores_100() {
    let coach = PronunciationCoach::new();
    let feedback = coach.analyze_pronunciation("a");
    assert!(feedback.challenges.is_empty(), "No debería haber dificultades: {:?}", feedback.challenges);
    assert_eq!(feedback.score, 100.0);
    assert_eq!(feedback.improvements.len(), 3);
}

#[test]
fn test_bonjour_challenges() {
    let coach = PronunciationCoach::new();
    let feedback = coach.analyze_pronunciation("Bonjour");
    assert!(feedback.challenges.contains(&"Nasal vowel 'on' → /ɔ̃/".to_string()));
    assert!(feedback.challenges.contains(&"French 'r' sound /ʁ/".to_string()));
    assert!(feedback.challenges.contains(&"French 'u' sound /y/".to_string()));
    assert_eq!(feedback.text, "Bonjour");
}

#[test]
fn test_silent_final_consonant() {
    let coach = PronunciationCoach::new();
    let feedback = coach.analyze_pronunciation("chat");
    assert!(feedback.challenges.contains(&"Final consonant likely silent".to_string()));
}

#[test]
fn test_score_matches_challenge_count_and_stays_in_range() {
    let coach = PronunciationCoach::new();
    let texts = [
        "",
        "a",
        "bon",
        "Bonjour",
        "Un bon vin blanc",
        "Mon oncle et ma tante prennent leur temps dans un grand jardin plein de parfums",
        "an am en em in im ein ain aim yn ym on om un um rue",
    ];

    for text in texts {
        let feedback = coach.analyze_pronunciation(text);
        assert!(
            (0.0..=100.0).contains(&feedback.score),
            "Puntuación fuera de rango para '{}': {}",
            text,
            feedback.score
        );
        assert_eq!(feedback.score, expected_score(feedback.challenges.len()));
    }
}

#[test]
fn test_more_challenges_never_raise_the_score() {
    let coach = PronunciationCoach::new();
    let mut results: Vec<_> = ["a", "bon", "Bonjour", "Un bon vin blanc", "an am en em in im ein ain aim yn ym on om un um rue"]
        .iter()
        .map(|t| coach.analyze_pronunciation(t))
        .collect();
    results.sort_by_key(|f| f.challenges.len());

    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    assert_eq!(results.last().map(|f| f.score), Some(0.0));
}

#[test]
fn test_known_liaison() {
    let coach = PronunciationCoach::new();
    match coach.practice_liaison("Les amis") {
        LiaisonPractice::Known { phrase, pronunciation, kind, .. } => {
            assert_eq!(phrase, "Les amis");
            assert_eq!(pronunciation, "lay-zah-MEE");
            assert_eq!(kind, "obligatory");
        }
        other => panic!("Debería reconocer la liaison: {:?}", other),
    }
}

#[test]
fn test_unknown_liaison_lists_examples() {
    let coach = PronunciationCoach::new();
    let practice = coach.practice_liaison("mes enfants");
    let json = serde_json::to_value(&practice).unwrap();
    assert_eq!(json["phrase"], "mes enfants");
    assert_eq!(
        json["common_liaisons"],
        "les amis, petit ami, vous avez, deux heures, grand homme"
    );
    assert!(json.get("type").is_none());
}

#[test]
fn test_nasal_lesson_and_minimal_pairs() {
    let coach = PronunciationCoach::new();
    let lesson = coach.teach_nasal_vowels();
    assert_eq!(lesson.vowels.len(), 4);
    assert_eq!(lesson.practice_phrases.len(), 3);

    let lesson = serde_json::to_value(lesson).unwrap();
    assert_eq!(lesson["vowels"]["an"]["ipa"], "/ɑ̃/");
    assert_eq!(lesson["vowels"]["un"]["note"], "Distinction disappearing in modern French");

    let pairs = serde_json::to_value(coach.get_minimal_pairs()).unwrap();
    assert_eq!(pairs["u_vs_ou"]["pairs"][0]["u"], "tu");
    assert_eq!(pairs["u_vs_ou"]["pairs"][0]["ou"], "tout");
    assert_eq!(pairs["é_vs_è"]["tip"], "É is closed, È is open");
}

#[test]
fn test_reference_tables() {
    let coach = PronunciationCoach::new();
    assert_eq!(coach.accent_mark("ç").map(|a| a.name), Some("cédille"));
    assert!(coach.accent_mark("ñ").is_none());
    assert!(coach.silent_letters().get("h").is_some());
    assert!(coach.special_sounds().get("r").is_some());
    assert_eq!(coach.nasal_vowel("on").map(|v| v.ipa), Some("/ɔ̃/"));
    assert!(coach.nasal_vowel("ou").is_none());
}

#[test]
fn test_analysis_is_idempotent() {
    let coach = PronunciationCoach::new();
    assert_eq!(
        coach.analyze_pronunciation("Un bon vin blanc"),
        coach.analyze_pronunciation("Un bon vin blanc")
    );
}
