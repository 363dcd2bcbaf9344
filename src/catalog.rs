//! Word catalog
//!
//! Immutable word list loaded once at startup. Records keep catalog order,
//! which is the order review queues are produced in.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub id: u32,
    pub word: String,
    pub translation: String,
    pub pronunciation: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
    pub example_translation: String,
    pub difficulty: Difficulty,
    pub category: String,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate word id: {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<WordRecord>,
    index: HashMap<u32, usize>,
}

impl WordCatalog {
    pub fn new(words: Vec<WordRecord>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(words.len());
        for (pos, word) in words.iter().enumerate() {
            if index.insert(word.id, pos).is_some() {
                return Err(CatalogError::DuplicateId(word.id));
            }
        }
        Ok(Self { words, index })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let words: Vec<WordRecord> = serde_json::from_str(json)?;
        Self::new(words)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            words = catalog.len(),
            "word catalog loaded"
        );
        Ok(catalog)
    }

    pub fn words(&self) -> &[WordRecord] {
        &self.words
    }

    pub fn get(&self, id: u32) -> Option<&WordRecord> {
        self.index.get(&id).map(|&pos| &self.words[pos])
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<&WordRecord> {
        self.words
            .iter()
            .filter(|w| w.difficulty == difficulty)
            .collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&WordRecord> {
        self.words
            .iter()
            .filter(|w| w.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn categories(&self) -> Vec<&str> {
        self.words
            .iter()
            .map(|w| w.category.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(id: u32, word: &str, category: &str, difficulty: Difficulty) -> WordRecord {
        WordRecord {
            id,
            word: word.to_string(),
            translation: format!("{word}-en"),
            pronunciation: String::new(),
            part_of_speech: "noun".to_string(),
            definition: String::new(),
            example: String::new(),
            example_translation: String::new(),
            difficulty,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = WordCatalog::new(vec![
            word(1, "chat", "animals", Difficulty::Beginner),
            word(1, "chien", "animals", Difficulty::Beginner),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_lookup_and_filters() {
        let catalog = WordCatalog::new(vec![
            word(1, "chat", "animals", Difficulty::Beginner),
            word(2, "pomme", "food", Difficulty::Beginner),
            word(3, "renard", "animals", Difficulty::Advanced),
        ])
        .unwrap();

        assert_eq!(catalog.get(2).map(|w| w.word.as_str()), Some("pomme"));
        assert!(catalog.get(9).is_none());
        assert_eq!(catalog.by_difficulty(Difficulty::Beginner).len(), 2);
        assert_eq!(catalog.by_category("Animals").len(), 2);
        assert_eq!(catalog.categories(), vec!["animals", "food"]);
    }

    #[test]
    fn test_from_json_camel_case() {
        let json = r#"[{
            "id": 7, "word": "bonjour", "translation": "hello",
            "pronunciation": "/bɔ̃.ʒuʁ/", "partOfSpeech": "interjection",
            "definition": "greeting", "example": "Bonjour, Marie !",
            "exampleTranslation": "Hello, Marie!", "difficulty": "beginner",
            "category": "greetings"
        }]"#;
        let catalog = WordCatalog::from_json_str(json).unwrap();
        let w = catalog.get(7).unwrap();
        assert_eq!(w.part_of_speech, "interjection");
        assert_eq!(w.difficulty, Difficulty::Beginner);
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!(Difficulty::parse("ADVANCED"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::parse("expert"), None);
        assert_eq!(Difficulty::Intermediate.as_str(), "intermediate");
    }
}
