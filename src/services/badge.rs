use serde::Serialize;

use super::reward::RewardStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatMetric {
    TotalXp,
    WordsLearned,
    CorrectAnswers,
    BestStreak,
    QuizzesCompleted,
    PerfectQuizzes,
    PronunciationsListened,
    FavoritesAdded,
    StudyDays,
}

impl StatMetric {
    pub fn value(&self, stats: &RewardStats) -> u64 {
        match self {
            Self::TotalXp => stats.total_xp,
            Self::WordsLearned => u64::from(stats.words_learned),
            Self::CorrectAnswers => u64::from(stats.correct_answers),
            Self::BestStreak => u64::from(stats.best_streak),
            Self::QuizzesCompleted => u64::from(stats.quizzes_completed),
            Self::PerfectQuizzes => u64::from(stats.perfect_quizzes),
            Self::PronunciationsListened => u64::from(stats.pronunciations_listened),
            Self::FavoritesAdded => u64::from(stats.favorites_added),
            Self::StudyDays => u64::from(stats.study_days),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCondition {
    pub metric: StatMetric,
    pub threshold: u64,
}

impl BadgeCondition {
    pub fn is_met(&self, stats: &RewardStats) -> bool {
        self.metric.value(stats) >= self.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: BadgeCondition,
    pub xp: u64,
}

const fn badge(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    metric: StatMetric,
    threshold: u64,
    xp: u64,
) -> Badge {
    Badge {
        id,
        name,
        description,
        icon,
        condition: BadgeCondition { metric, threshold },
        xp,
    }
}

/// Evaluated in declaration order.
#[rustfmt::skip]
pub static BADGES: &[Badge] = &[
    badge("first_word", "First Word", "Learn your first word", "🌱", StatMetric::WordsLearned, 1, 10),
    badge("vocab_builder", "Vocabulary Builder", "Learn 25 words", "📚", StatMetric::WordsLearned, 25, 50),
    badge("word_master", "Word Master", "Learn 100 words", "🏆", StatMetric::WordsLearned, 100, 150),
    badge("sharp_mind", "Sharp Mind", "Answer 50 questions correctly", "🎯", StatMetric::CorrectAnswers, 50, 40),
    badge("hot_streak", "Hot Streak", "Get 10 answers right in a row", "🔥", StatMetric::BestStreak, 10, 30),
    badge("quiz_taker", "Quiz Taker", "Complete 5 quizzes", "📝", StatMetric::QuizzesCompleted, 5, 25),
    badge("perfectionist", "Perfectionist", "Finish a quiz without a mistake", "💯", StatMetric::PerfectQuizzes, 1, 30),
    badge("good_listener", "Good Listener", "Listen to 20 pronunciations", "🎧", StatMetric::PronunciationsListened, 20, 20),
    badge("collector", "Collector", "Add 10 words to favorites", "⭐", StatMetric::FavoritesAdded, 10, 15),
    badge("dedicated", "Dedicated", "Study 7 days in a row", "📅", StatMetric::StudyDays, 7, 50),
    badge("century", "Century", "Earn 100 XP", "💎", StatMetric::TotalXp, 100, 10),
    badge("xp_hunter", "XP Hunter", "Earn 1000 XP", "👑", StatMetric::TotalXp, 1000, 100),
];

pub fn find_badge(id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == id)
}

/// Badges whose condition holds for `stats` and that are not in `unlocked`.
pub fn check_new_badges(stats: &RewardStats, unlocked: &[String]) -> Vec<&'static Badge> {
    BADGES
        .iter()
        .filter(|badge| !unlocked.iter().any(|id| id == badge.id))
        .filter(|badge| badge.condition.is_met(stats))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProgress {
    pub badge_id: &'static str,
    pub current_value: u64,
    pub target_value: u64,
    pub percentage: f64,
}

pub fn badge_progress(stats: &RewardStats, badge: &'static Badge) -> BadgeProgress {
    let current_value = badge.condition.metric.value(stats);
    let target_value = badge.condition.threshold;
    let percentage = if target_value == 0 {
        100.0
    } else {
        (current_value as f64 / target_value as f64 * 100.0).min(100.0)
    };

    BadgeProgress {
        badge_id: badge.id,
        current_value,
        target_value,
        percentage,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    pub badge: &'static Badge,
    pub unlocked: bool,
    pub progress: u8,
}

pub fn badges_with_status(stats: &RewardStats, unlocked: &[String]) -> Vec<BadgeStatus> {
    BADGES
        .iter()
        .map(|badge| {
            let is_unlocked = unlocked.iter().any(|id| id == badge.id);
            let progress = if is_unlocked {
                100
            } else {
                badge_progress(stats, badge).percentage.round() as u8
            };
            BadgeStatus {
                badge,
                unlocked: is_unlocked,
                progress,
            }
        })
        .collect()
}
