#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use vocab_trainer::{Difficulty, WordCatalog, WordRecord};

pub fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap())
}

pub fn word(id: u32, word: &str, translation: &str) -> WordRecord {
    WordRecord {
        id,
        word: word.to_string(),
        translation: translation.to_string(),
        pronunciation: format!("/{word}/"),
        part_of_speech: "noun".to_string(),
        definition: format!("The French word for {translation}."),
        example: format!("J'aime le {word}."),
        example_translation: format!("I like the {translation}."),
        difficulty: Difficulty::Beginner,
        category: "general".to_string(),
    }
}

pub fn sample_catalog() -> WordCatalog {
    WordCatalog::new(vec![
        word(1, "chat", "cat"),
        word(2, "chien", "dog"),
        word(3, "pain", "bread"),
        word(4, "fromage", "cheese"),
        word(5, "livre", "book"),
        word(6, "maison", "house"),
        word(7, "voiture", "car"),
    ])
    .unwrap()
}
