//! XP, levels and learner actions
//!
//! [`RewardSystem`] owns the reward stats and the unlocked badge ids for one
//! learner session. It is built from a [`KeyValueStore`] and writes both
//! aggregates back after every mutation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badge::{check_new_badges, Badge};
use super::progress::advance_streak;
use crate::storage::{
    load_json, save_json, KeyValueStore, StorageResult, REWARD_STATS_KEY, UNLOCKED_BADGES_KEY,
};

const XP_WORD_LEARNED: u64 = 10;
const XP_CORRECT_ANSWER: u64 = 2;
const XP_PERFECT_QUIZ: u64 = 50;
const XP_PRONUNCIATION: u64 = 1;
const XP_FAVORITE: u64 = 2;
const XP_STUDY_DAY: u64 = 5;

const STREAK_BONUS_STEP: u32 = 5;
const STREAK_BONUS_XP: u64 = 2;
const FAST_ANSWER_MS: u64 = 3000;
const SPEED_BONUS_XP: u64 = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardStats {
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
    pub words_learned: u32,
    pub correct_answers: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub quizzes_completed: u32,
    pub perfect_quizzes: u32,
    pub pronunciations_listened: u32,
    pub favorites_added: u32,
    pub study_days: u32,
    pub last_study_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub level: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub xp_required: u64,
}

const fn level(level: u32, title: &'static str, icon: &'static str, xp_required: u64) -> Level {
    Level {
        level,
        title,
        icon,
        xp_required,
    }
}

/// Ascending by `xp_required`, starting at 0.
pub static LEVELS: &[Level] = &[
    level(1, "Beginner", "🥚", 0),
    level(2, "Novice", "🐣", 50),
    level(3, "Apprentice", "🐥", 150),
    level(4, "Learner", "📖", 300),
    level(5, "Intermediate", "🎓", 500),
    level(6, "Skilled", "⚡", 800),
    level(7, "Advanced", "🚀", 1200),
    level(8, "Expert", "🧠", 1700),
    level(9, "Master", "🏅", 2500),
    level(10, "Legend", "👑", 3500),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub percentage: u8,
    #[serde(rename = "currentXPInLevel")]
    pub current_xp_in_level: u64,
    #[serde(rename = "requiredXPForLevel")]
    pub required_xp_for_level: u64,
    pub next_level: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub level: u32,
    pub title: &'static str,
    pub icon: &'static str,
    pub progress: LevelProgress,
}

pub fn level_for_xp(total_xp: u64) -> LevelInfo {
    let index = LEVELS
        .iter()
        .rposition(|l| l.xp_required <= total_xp)
        .unwrap_or(0);
    let current = &LEVELS[index];

    let progress = match LEVELS.get(index + 1) {
        None => LevelProgress {
            percentage: 100,
            current_xp_in_level: total_xp.saturating_sub(current.xp_required),
            required_xp_for_level: 0,
            next_level: None,
        },
        Some(next) => {
            let current_xp_in_level = total_xp.saturating_sub(current.xp_required);
            let required_xp_for_level = next.xp_required - current.xp_required;
            let percentage = (current_xp_in_level as f64 / required_xp_for_level as f64 * 100.0)
                .round()
                .clamp(0.0, 100.0) as u8;
            LevelProgress {
                percentage,
                current_xp_in_level,
                required_xp_for_level,
                next_level: Some(next.level),
            }
        }
    };

    LevelInfo {
        level: current.level,
        title: current.title,
        icon: current.icon,
        progress,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardOutcome {
    pub xp_awarded: u64,
    pub new_badges: Vec<&'static Badge>,
    pub level: LevelInfo,
    pub leveled_up: bool,
    pub stats: RewardStats,
}

pub struct RewardSystem<S: KeyValueStore> {
    store: S,
    stats: RewardStats,
    unlocked: Vec<String>,
}

impl<S: KeyValueStore> RewardSystem<S> {
    /// Restores stats and unlocked badges from `store`, or starts fresh.
    pub fn load(store: S) -> StorageResult<Self> {
        let stats: RewardStats = load_json(&store, REWARD_STATS_KEY)?;
        let unlocked: Vec<String> = load_json(&store, UNLOCKED_BADGES_KEY)?;
        tracing::debug!(
            total_xp = stats.total_xp,
            badges = unlocked.len(),
            "reward state loaded"
        );
        Ok(Self {
            store,
            stats,
            unlocked,
        })
    }

    pub fn save(&mut self) -> StorageResult<()> {
        persist(&mut self.store, &self.stats, &self.unlocked)
    }

    pub fn stats(&self) -> &RewardStats {
        &self.stats
    }

    pub fn unlocked_badges(&self) -> &[String] {
        &self.unlocked
    }

    pub fn current_level(&self) -> LevelInfo {
        level_for_xp(self.stats.total_xp)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn reset(&mut self) -> StorageResult<()> {
        let stats = RewardStats::default();
        persist(&mut self.store, &stats, &[])?;
        self.stats = stats;
        self.unlocked.clear();
        Ok(())
    }

    /// Adds `amount` XP, then unlocks every badge whose condition now holds.
    /// Badge XP is applied immediately and the check repeats until no further
    /// badge unlocks.
    pub fn add_xp(&mut self, amount: u64, reason: &str) -> StorageResult<RewardOutcome> {
        let staged = self.stats.clone();
        self.apply(staged, amount, reason)
    }

    /// Awards XP on top of `staged` and commits it only once both aggregates
    /// are written; on a store error `self` keeps its previous state.
    fn apply(
        &mut self,
        mut staged: RewardStats,
        amount: u64,
        reason: &str,
    ) -> StorageResult<RewardOutcome> {
        let level_before = level_for_xp(self.stats.total_xp).level;
        let mut unlocked = self.unlocked.clone();
        staged.total_xp = staged.total_xp.saturating_add(amount);

        let mut new_badges = Vec::new();
        let mut xp_awarded = amount;
        loop {
            let unlocked_now = check_new_badges(&staged, &unlocked);
            if unlocked_now.is_empty() {
                break;
            }
            for badge in unlocked_now {
                unlocked.push(badge.id.to_string());
                staged.total_xp = staged.total_xp.saturating_add(badge.xp);
                xp_awarded = xp_awarded.saturating_add(badge.xp);
                new_badges.push(badge);
            }
        }

        persist(&mut self.store, &staged, &unlocked)?;
        self.stats = staged;
        self.unlocked = unlocked;

        for badge in &new_badges {
            tracing::info!(badge = badge.id, xp = badge.xp, "badge unlocked");
        }
        let level = level_for_xp(self.stats.total_xp);
        let leveled_up = level.level > level_before;
        if leveled_up {
            tracing::info!(level = level.level, title = level.title, "level up");
        }
        tracing::debug!(amount, reason, total_xp = self.stats.total_xp, "xp added");

        Ok(RewardOutcome {
            xp_awarded,
            new_badges,
            level,
            leveled_up,
            stats: self.stats.clone(),
        })
    }

    pub fn word_learned(&mut self) -> StorageResult<RewardOutcome> {
        let mut staged = self.stats.clone();
        staged.words_learned += 1;
        self.apply(staged, XP_WORD_LEARNED, "word learned")
    }

    /// Base XP plus a bonus for every five answers in the current streak and
    /// a bonus for answering in under three seconds.
    pub fn correct_answer(&mut self, response_time_ms: u64) -> StorageResult<RewardOutcome> {
        let mut staged = self.stats.clone();
        staged.correct_answers += 1;
        staged.current_streak += 1;
        staged.best_streak = staged.best_streak.max(staged.current_streak);

        let xp = correct_answer_xp(staged.current_streak, response_time_ms);
        self.apply(staged, xp, "correct answer")
    }

    pub fn incorrect_answer(&mut self) -> StorageResult<()> {
        let mut staged = self.stats.clone();
        staged.current_streak = 0;
        persist(&mut self.store, &staged, &self.unlocked)?;
        self.stats = staged;
        Ok(())
    }

    pub fn perfect_quiz(&mut self) -> StorageResult<RewardOutcome> {
        let staged = self.stats.clone();
        self.perfect_quiz_from(staged)
    }

    pub fn pronunciation_listened(&mut self) -> StorageResult<RewardOutcome> {
        let mut staged = self.stats.clone();
        staged.pronunciations_listened += 1;
        self.apply(staged, XP_PRONUNCIATION, "pronunciation listened")
    }

    pub fn favorite_added(&mut self) -> StorageResult<RewardOutcome> {
        let mut staged = self.stats.clone();
        staged.favorites_added += 1;
        self.apply(staged, XP_FAVORITE, "favorite added")
    }

    /// Counts a finished quiz; a perfect score also counts as a perfect quiz.
    pub fn quiz_completed(&mut self, score: u32, total: u32) -> StorageResult<RewardOutcome> {
        let mut staged = self.stats.clone();
        staged.quizzes_completed += 1;
        if total > 0 && score == total {
            return self.perfect_quiz_from(staged);
        }
        // Quiz count alone can unlock a badge.
        self.apply(staged, 0, "quiz completed")
    }

    /// Awards daily XP the first time a given day is reported. Repeated or
    /// earlier days change nothing.
    pub fn study_day(&mut self, today: NaiveDate) -> StorageResult<Option<RewardOutcome>> {
        let (streak, is_new) =
            advance_streak(self.stats.study_days, self.stats.last_study_date, today);
        if !is_new {
            return Ok(None);
        }
        let mut staged = self.stats.clone();
        staged.study_days = streak;
        staged.last_study_date = Some(today);
        self.apply(staged, XP_STUDY_DAY, "study day").map(Some)
    }

    fn perfect_quiz_from(&mut self, mut staged: RewardStats) -> StorageResult<RewardOutcome> {
        staged.perfect_quizzes += 1;
        self.apply(staged, XP_PERFECT_QUIZ, "perfect quiz")
    }
}

/// Unlocked ids go first: if the stats write then fails, a reload sees the
/// badge as taken and never pays its XP twice.
fn persist<S: KeyValueStore + ?Sized>(
    store: &mut S,
    stats: &RewardStats,
    unlocked: &[String],
) -> StorageResult<()> {
    save_json(store, UNLOCKED_BADGES_KEY, unlocked)?;
    save_json(store, REWARD_STATS_KEY, stats)
}

pub fn correct_answer_xp(current_streak: u32, response_time_ms: u64) -> u64 {
    let streak_bonus = u64::from(current_streak / STREAK_BONUS_STEP) * STREAK_BONUS_XP;
    let speed_bonus = if response_time_ms < FAST_ANSWER_MS {
        SPEED_BONUS_XP
    } else {
        0
    };
    XP_CORRECT_ANSWER + streak_bonus + speed_bonus
}
