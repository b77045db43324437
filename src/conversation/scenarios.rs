//! Escenarios de conversación guiada (café, mercado)

use serde::Serialize;

use crate::french::pairs_as_map;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Scenario {
    #[serde(skip)]
    pub kind: &'static str,
    pub setting: &'static str,
    /// Primera réplica en francés
    #[serde(rename = "dialogue")]
    pub starter: &'static str,
    pub english: &'static str,
    #[serde(serialize_with = "pairs_as_map")]
    pub vocabulary: &'static [(&'static str, &'static str)],
    pub useful_phrases: &'static [&'static str],
    pub cultural_tips: &'static [&'static str],
}

const SCENARIOS: &[Scenario] = &[
    Scenario {
        kind: "café",
        setting: "You're at a Parisian café",
        starter: "Bonjour ! Qu'est-ce que je vous sers ?",
        english: "Hello! What can I serve you?",
        vocabulary: &[
            ("un café", "coffee"),
            ("un expresso", "espresso"),
            ("un café crème", "coffee with milk"),
            ("un croissant", "croissant"),
            ("l'addition (f)", "the bill"),
        ],
        useful_phrases: &[
            "Je voudrais... - I would like...",
            "Un café, s'il vous plaît - A coffee, please",
            "Combien ça coûte ? - How much does it cost?",
            "L'addition, s'il vous plaît - The bill, please",
        ],
        cultural_tips: &[
            "Coffee is typically served after meals, not during",
            "Un café means espresso, not American coffee",
            "Tipping is appreciated but not obligatory (round up)",
        ],
    },
    Scenario {
        kind: "marché",
        setting: "You're at a French market",
        starter: "Bonjour madame/monsieur ! Vous désirez ?",
        english: "Hello madam/sir! What would you like?",
        vocabulary: &[
            ("les fruits (m)", "fruits"),
            ("les légumes (m)", "vegetables"),
            ("le kilo", "kilogram"),
            ("la livre", "pound (500g)"),
            ("frais/fraîche", "fresh"),
        ],
        useful_phrases: &[
            "Je voudrais un kilo de... - I'd like a kilo of...",
            "C'est combien le kilo ? - How much per kilo?",
            "Ils sont mûrs ? - Are they ripe?",
            "C'est tout, merci - That's all, thanks",
        ],
        cultural_tips: &[],
    },
];

/// Escenario por nombre; uno desconocido cae en el café
pub fn scenario(kind: &str) -> &'static Scenario {
    SCENARIOS
        .iter()
        .find(|s| s.kind == kind)
        .unwrap_or(&SCENARIOS[0])
}

/// Nombres de los escenarios disponibles
pub fn scenario_kinds() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|s| s.kind)
}
