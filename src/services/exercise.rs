//! Exercise generation
//!
//! Turns catalog words into exercise payloads and decides which words are
//! up for review. The generator only reads the progress snapshot; answer
//! outcomes are applied by the caller through
//! [`ProgressSnapshot::record_answer`](super::progress::ProgressSnapshot::record_answer).

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use regex::{NoExpand, RegexBuilder};
use serde::{Deserialize, Serialize};

use super::progress::{ProgressSnapshot, WordProgressEntry};
use super::spaced_repetition::is_due_at;
use crate::catalog::{WordCatalog, WordRecord};

pub const DEFAULT_OPTION_COUNT: usize = 4;
pub const DEFAULT_PAIR_COUNT: usize = 5;
pub const DEFAULT_QUESTION_COUNT: usize = 10;
pub const BLANK_MARKER: &str = "_____";

const QUIZ_OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceExercise {
    pub word_id: u32,
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillInTheBlankExercise {
    pub word_id: u32,
    pub sentence: String,
    pub correct_answer: String,
    pub hint: String,
    pub full_sentence: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPair {
    pub english_id: u32,
    pub french_id: u32,
}

/// The two item lists are shuffled independently; answers are checked
/// against `correct_pairs` by id, never by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchingExercise {
    pub english_items: Vec<MatchItem>,
    pub french_items: Vec<MatchItem>,
    pub correct_pairs: Vec<MatchPair>,
}

impl MatchingExercise {
    pub fn is_correct_pair(&self, english_id: u32, french_id: u32) -> bool {
        self.correct_pairs
            .iter()
            .any(|p| p.english_id == english_id && p.french_id == french_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListeningExercise {
    pub word_id: u32,
    pub audio_text: String,
    pub pronunciation: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
    pub translation: String,
}

pub struct ExerciseGenerator<'a> {
    catalog: &'a WordCatalog,
    progress: HashMap<u32, &'a WordProgressEntry>,
}

impl<'a> ExerciseGenerator<'a> {
    pub fn new(catalog: &'a WordCatalog, progress: &'a ProgressSnapshot) -> Self {
        let progress = progress
            .words_learned
            .iter()
            .map(|entry| (entry.id, entry))
            .collect();
        Self { catalog, progress }
    }

    pub fn words_for_review(&self) -> Vec<&'a WordRecord> {
        self.words_for_review_at(Utc::now())
    }

    /// New words plus words whose interval has elapsed, in catalog order.
    pub fn words_for_review_at(&self, now: DateTime<Utc>) -> Vec<&'a WordRecord> {
        let words: Vec<&'a WordRecord> = self
            .catalog
            .words()
            .iter()
            .filter(|word| match self.progress.get(&word.id) {
                None => true,
                Some(entry) => is_due_at(entry.last_review, entry.interval, now),
            })
            .collect();

        tracing::debug!(
            due = words.len(),
            catalog = self.catalog.len(),
            "review queue built"
        );
        words
    }

    /// Options are capped at `option_count`; when the catalog has too few
    /// distinct translations the list is shorter.
    pub fn multiple_choice(&self, word: &WordRecord, option_count: usize) -> MultipleChoiceExercise {
        let mut rng = rand::rng();
        let mut answers = self.wrong_translations(word, option_count.max(1) - 1);
        answers.push(word.translation.clone());
        answers.shuffle(&mut rng);

        MultipleChoiceExercise {
            word_id: word.id,
            question: format!("What does \"{}\" mean?", word.word),
            answers,
            correct_answer: word.translation.clone(),
            explanation: explanation(word),
            example: word.example.clone(),
        }
    }

    pub fn fill_in_the_blank(&self, word: &WordRecord) -> FillInTheBlankExercise {
        FillInTheBlankExercise {
            word_id: word.id,
            sentence: blank_out(&word.example, &word.word),
            correct_answer: word.word.clone(),
            hint: word.translation.clone(),
            full_sentence: word.example.clone(),
        }
    }

    pub fn matching<'w, I>(&self, words: I, pair_count: usize) -> MatchingExercise
    where
        I: IntoIterator<Item = &'w WordRecord>,
    {
        let mut rng = rand::rng();
        let mut selected: Vec<&WordRecord> = words.into_iter().collect();
        selected.shuffle(&mut rng);
        selected.truncate(pair_count);

        let mut english_items: Vec<MatchItem> = selected
            .iter()
            .map(|w| MatchItem {
                id: w.id,
                text: w.translation.clone(),
            })
            .collect();
        let mut french_items: Vec<MatchItem> = selected
            .iter()
            .map(|w| MatchItem {
                id: w.id,
                text: w.word.clone(),
            })
            .collect();
        english_items.shuffle(&mut rng);
        french_items.shuffle(&mut rng);

        let correct_pairs = selected
            .iter()
            .map(|w| MatchPair {
                english_id: w.id,
                french_id: w.id,
            })
            .collect();

        MatchingExercise {
            english_items,
            french_items,
            correct_pairs,
        }
    }

    /// Samples up to `question_count` distinct words and builds one
    /// four-option question per word.
    pub fn quiz<'w, I>(&self, words: I, question_count: usize) -> Vec<MultipleChoiceExercise>
    where
        I: IntoIterator<Item = &'w WordRecord>,
    {
        let mut rng = rand::rng();
        let mut selected: Vec<&WordRecord> = words.into_iter().collect();
        selected.shuffle(&mut rng);
        selected.truncate(question_count);

        selected
            .into_iter()
            .map(|word| self.multiple_choice(word, QUIZ_OPTION_COUNT))
            .collect()
    }

    /// The learner hears `audio_text` and picks its spelling among other
    /// catalog words.
    pub fn listening(&self, word: &WordRecord, option_count: usize) -> ListeningExercise {
        let mut rng = rand::rng();
        let mut answers = distinct_sample(
            self.catalog
                .words()
                .iter()
                .filter(|w| w.id != word.id)
                .map(|w| w.word.as_str()),
            &word.word,
            option_count.max(1) - 1,
        );
        answers.push(word.word.clone());
        answers.shuffle(&mut rng);

        ListeningExercise {
            word_id: word.id,
            audio_text: word.word.clone(),
            pronunciation: word.pronunciation.clone(),
            answers,
            correct_answer: word.word.clone(),
            translation: word.translation.clone(),
        }
    }

    fn wrong_translations(&self, word: &WordRecord, limit: usize) -> Vec<String> {
        distinct_sample(
            self.catalog
                .words()
                .iter()
                .filter(|w| w.id != word.id)
                .map(|w| w.translation.as_str()),
            &word.translation,
            limit,
        )
    }
}

/// Distinct candidates other than `correct`, shuffled and cut to `limit`.
fn distinct_sample<'s, I>(candidates: I, correct: &str, limit: usize) -> Vec<String>
where
    I: Iterator<Item = &'s str>,
{
    let mut seen = HashSet::new();
    let mut pool: Vec<String> = candidates
        .filter(|c| *c != correct && seen.insert(*c))
        .map(str::to_string)
        .collect();
    pool.shuffle(&mut rand::rng());
    pool.truncate(limit);
    pool
}

fn explanation(word: &WordRecord) -> String {
    let mut text = format!(
        "\"{}\" ({}) means \"{}\".",
        word.word, word.part_of_speech, word.translation
    );
    if !word.definition.is_empty() {
        text.push(' ');
        text.push_str(&word.definition);
    }
    text
}

fn blank_out(sentence: &str, word: &str) -> String {
    if word.trim().is_empty() {
        return sentence.to_string();
    }
    match RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(sentence, NoExpand(BLANK_MARKER)).into_owned(),
        Err(err) => {
            tracing::warn!(word, error = %err, "could not build blank pattern");
            sentence.to_string()
        }
    }
}
