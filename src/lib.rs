//! # vocab-trainer
//!
//! Core of a vocabulary learning app:
//!
//! - [`services::spaced_repetition`] - fixed interval ladder and due checks
//! - [`services::exercise`] - review queue, multiple choice, fill-in-the-blank,
//!   matching, listening and quizzes
//! - [`services::badge`] / [`services::reward`] - badges, XP and levels
//! - [`services::performance`] - accuracy, speed, retention and consistency scores
//! - [`services::conversation`] - scripted dialogue scenarios
//!
//! The caller owns a [`ProgressSnapshot`] and a [`RewardSystem`] and persists
//! them through a [`storage::KeyValueStore`].
//!
//! ```rust
//! use vocab_trainer::storage::MemoryStore;
//! use vocab_trainer::RewardSystem;
//!
//! let mut rewards = RewardSystem::load(MemoryStore::new()).unwrap();
//! let outcome = rewards.word_learned().unwrap();
//! assert_eq!(outcome.new_badges[0].id, "first_word");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod storage;

pub use catalog::{Difficulty, WordCatalog, WordRecord};
pub use error::{VocabError, VocabResult};
pub use services::exercise::ExerciseGenerator;
pub use services::progress::{ProgressSnapshot, WordProgressEntry};
pub use services::reward::RewardSystem;
