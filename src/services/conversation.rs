//! Scripted dialogue scenarios, picked by difficulty.

use rand::seq::IndexedRandom;
use serde::Serialize;

use crate::catalog::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueLine {
    pub speaker: &'static str,
    pub text: &'static str,
    pub translation: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: &'static str,
    pub title: &'static str,
    pub difficulty: Difficulty,
    pub setting: &'static str,
    pub lines: &'static [DialogueLine],
}

const fn line(speaker: &'static str, text: &'static str, translation: &'static str) -> DialogueLine {
    DialogueLine {
        speaker,
        text,
        translation,
    }
}

pub static SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "cafe_order",
        title: "At the café",
        difficulty: Difficulty::Beginner,
        setting: "Ordering a drink at a Parisian café.",
        lines: &[
            line("Serveur", "Bonjour ! Qu'est-ce que vous désirez ?", "Hello! What would you like?"),
            line("Vous", "Un café, s'il vous plaît.", "A coffee, please."),
            line("Serveur", "Avec du lait ?", "With milk?"),
            line("Vous", "Non, merci. C'est combien ?", "No, thank you. How much is it?"),
            line("Serveur", "Deux euros.", "Two euros."),
        ],
    },
    Scenario {
        id: "meeting_someone",
        title: "Meeting someone new",
        difficulty: Difficulty::Beginner,
        setting: "Introducing yourself at a party.",
        lines: &[
            line("Claire", "Salut ! Je m'appelle Claire. Et toi ?", "Hi! My name is Claire. And you?"),
            line("Vous", "Je m'appelle Sam. Enchanté !", "My name is Sam. Nice to meet you!"),
            line("Claire", "Tu viens d'où ?", "Where are you from?"),
            line("Vous", "Je viens du Canada.", "I come from Canada."),
        ],
    },
    Scenario {
        id: "train_station",
        title: "Buying a train ticket",
        difficulty: Difficulty::Intermediate,
        setting: "At the ticket counter of a train station.",
        lines: &[
            line("Vous", "Je voudrais un billet pour Lyon, s'il vous plaît.", "I would like a ticket to Lyon, please."),
            line("Agent", "Aller simple ou aller-retour ?", "One way or round trip?"),
            line("Vous", "Aller-retour. Le prochain train part à quelle heure ?", "Round trip. What time does the next train leave?"),
            line("Agent", "Il part à quatorze heures, voie trois.", "It leaves at two p.m., platform three."),
        ],
    },
    Scenario {
        id: "doctor_visit",
        title: "At the doctor's",
        difficulty: Difficulty::Intermediate,
        setting: "Describing symptoms to a doctor.",
        lines: &[
            line("Médecin", "Qu'est-ce qui ne va pas ?", "What is wrong?"),
            line("Vous", "J'ai mal à la tête depuis deux jours.", "I have had a headache for two days."),
            line("Médecin", "Avez-vous de la fièvre ?", "Do you have a fever?"),
            line("Vous", "Un peu, surtout le soir.", "A little, especially in the evening."),
        ],
    },
    Scenario {
        id: "job_interview",
        title: "Job interview",
        difficulty: Difficulty::Advanced,
        setting: "A formal interview for a marketing position.",
        lines: &[
            line("Recruteuse", "Pourquoi souhaitez-vous rejoindre notre entreprise ?", "Why do you wish to join our company?"),
            line("Vous", "Votre démarche innovante correspond à mes ambitions professionnelles.", "Your innovative approach matches my professional ambitions."),
            line("Recruteuse", "Quel a été votre plus grand défi jusqu'à présent ?", "What has been your greatest challenge so far?"),
            line("Vous", "J'ai dû redresser une campagne qui avait pris du retard.", "I had to turn around a campaign that had fallen behind."),
        ],
    },
    Scenario {
        id: "debate",
        title: "A friendly debate",
        difficulty: Difficulty::Advanced,
        setting: "Discussing remote work with a colleague.",
        lines: &[
            line("Julien", "À mon avis, le télétravail nuit à la cohésion d'équipe.", "In my opinion, remote work harms team cohesion."),
            line("Vous", "Je ne suis pas tout à fait d'accord, cela dépend de l'organisation.", "I don't entirely agree, it depends on the organization."),
            line("Julien", "Certes, mais les échanges informels se font plus rares.", "Granted, but informal exchanges become rarer."),
            line("Vous", "C'est vrai, bien qu'on puisse les encourager autrement.", "True, although they can be encouraged in other ways."),
        ],
    },
];

pub fn all() -> &'static [Scenario] {
    SCENARIOS
}

pub fn get(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

pub fn scenarios(difficulty: Difficulty) -> Vec<&'static Scenario> {
    SCENARIOS
        .iter()
        .filter(|s| s.difficulty == difficulty)
        .collect()
}

pub fn random_scenario(difficulty: Difficulty) -> Option<&'static Scenario> {
    scenarios(difficulty).choose(&mut rand::rng()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_difficulty_has_two_scenarios() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ] {
            assert!(scenarios(difficulty).len() >= 2);
        }
    }

    #[test]
    fn test_random_scenario_matches_difficulty() {
        let scenario = random_scenario(Difficulty::Advanced).unwrap();
        assert_eq!(scenario.difficulty, Difficulty::Advanced);
        assert!(!scenario.lines.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        assert_eq!(get("cafe_order").map(|s| s.title), Some("At the café"));
        assert!(get("unknown").is_none());
        assert_eq!(all().len(), SCENARIOS.len());
    }
}
