//! Learner progress aggregate
//!
//! The caller owns a [`ProgressSnapshot`], hands read-only views of it to the
//! exercise generator and performance analyzer, and persists it under
//! [`PROGRESS_KEY`](crate::storage::PROGRESS_KEY). Word entries only change
//! through [`ProgressSnapshot::record_answer`].

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::spaced_repetition::{next_interval, REVIEW_INTERVALS};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgressEntry {
    pub id: u32,
    pub last_review: Option<DateTime<Utc>>,
    pub interval: u32,
    pub success_count: u32,
}

impl WordProgressEntry {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            last_review: None,
            interval: REVIEW_INTERVALS[0],
            success_count: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressSnapshot {
    pub words_learned: Vec<WordProgressEntry>,
    pub total_score: u32,
    pub total_answered: u32,
    pub streak_days: u32,
    pub last_study_date: Option<NaiveDate>,
    pub achievements: BTreeSet<String>,
    pub favorites: BTreeSet<u32>,
}

impl ProgressSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, word_id: u32) -> Option<&WordProgressEntry> {
        self.words_learned.iter().find(|e| e.id == word_id)
    }

    pub fn learned_count(&self) -> usize {
        self.words_learned.len()
    }

    /// Applies one answer outcome: creates the entry on first exposure,
    /// moves its interval along the ladder and bumps the answer totals.
    pub fn record_answer(
        &mut self,
        word_id: u32,
        correct: bool,
        now: DateTime<Utc>,
    ) -> &WordProgressEntry {
        self.total_answered += 1;
        if correct {
            self.total_score += 1;
        }

        let pos = match self.words_learned.iter().position(|e| e.id == word_id) {
            Some(pos) => pos,
            None => {
                self.words_learned.push(WordProgressEntry::new(word_id));
                self.words_learned.len() - 1
            }
        };

        let entry = &mut self.words_learned[pos];
        entry.interval = next_interval(entry.interval, correct);
        if correct {
            entry.success_count += 1;
        }
        entry.last_review = Some(now);

        tracing::debug!(
            word_id,
            correct,
            interval = entry.interval,
            success_count = entry.success_count,
            "answer recorded"
        );

        &self.words_learned[pos]
    }

    /// Counts `today` into the daily streak. Returns true when it is a new
    /// study day.
    pub fn record_study_day(&mut self, today: NaiveDate) -> bool {
        let (streak, is_new) = advance_streak(self.streak_days, self.last_study_date, today);
        self.streak_days = streak;
        if is_new {
            self.last_study_date = Some(today);
        }
        is_new
    }

    /// Mirrors the unlocked badge ids into `achievements`. Returns true when
    /// the set changed.
    pub fn sync_achievements(&mut self, unlocked: &[String]) -> bool {
        let before = self.achievements.len();
        self.achievements.extend(unlocked.iter().cloned());
        self.achievements.len() != before
    }

    /// Adds or removes a favorite; returns whether the word is now a favorite.
    pub fn toggle_favorite(&mut self, word_id: u32) -> bool {
        if self.favorites.remove(&word_id) {
            false
        } else {
            self.favorites.insert(word_id);
            true
        }
    }
}

/// The following day extends the streak and any gap restarts it at 1. The
/// last study day itself, or a date before it, is not a new day.
pub(crate) fn advance_streak(
    streak: u32,
    last: Option<NaiveDate>,
    today: NaiveDate,
) -> (u32, bool) {
    match last {
        Some(last) if today <= last => (streak.max(1), false),
        Some(last) if (today - last).num_days() == 1 => (streak + 1, true),
        _ => (1, true),
    }
}
