use std::path::PathBuf;

use crate::catalog::Difficulty;
use crate::services::exercise::{DEFAULT_OPTION_COUNT, DEFAULT_QUESTION_COUNT};

const MIN_OPTION_COUNT: usize = 2;
const MIN_QUIZ_SIZE: usize = 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: PathBuf,
    pub data_dir: PathBuf,
    pub option_count: usize,
    pub quiz_size: usize,
    pub difficulty: Difficulty,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let catalog_path = std::env::var("VOCAB_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./words.json"));

        let data_dir = std::env::var("VOCAB_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_data_dir());

        let option_count = parse_count(
            std::env::var("VOCAB_OPTION_COUNT").ok().as_deref(),
            MIN_OPTION_COUNT,
            DEFAULT_OPTION_COUNT,
        );

        let quiz_size = parse_count(
            std::env::var("VOCAB_QUIZ_SIZE").ok().as_deref(),
            MIN_QUIZ_SIZE,
            DEFAULT_QUESTION_COUNT,
        );

        let difficulty = parse_difficulty(std::env::var("VOCAB_DIFFICULTY").ok().as_deref());

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            catalog_path,
            data_dir,
            option_count,
            quiz_size,
            difficulty,
            log_level,
        }
    }
}

/// Missing, unparsable or too-small values fall back to `default`.
fn parse_count(value: Option<&str>, min: usize, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n >= min)
        .unwrap_or(default)
}

fn parse_difficulty(value: Option<&str>) -> Difficulty {
    value
        .and_then(|v| Difficulty::parse(v.trim()))
        .unwrap_or(Difficulty::Beginner)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("vocab-trainer"))
        .unwrap_or_else(|| PathBuf::from("./data"))
}
