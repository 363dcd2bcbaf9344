use serde::{Deserialize, Serialize};

use super::progress::ProgressSnapshot;

const ACCURACY_ADVICE_BELOW: u8 = 70;
const SPEED_ADVICE_BELOW: u8 = 60;
const RETENTION_ADVICE_BELOW: u8 = 50;
const CONSISTENCY_ADVICE_BELOW: u8 = 40;

/// Scores are integers in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub accuracy: u8,
    pub speed: u8,
    pub retention: u8,
    pub consistency: u8,
    pub overall: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Accuracy,
    Speed,
    Retention,
    Consistency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub metric: Metric,
    pub message: &'static str,
}

pub fn analyze(progress: &ProgressSnapshot, time_spent_ms: u64) -> PerformanceReport {
    let accuracy = accuracy_score(progress.total_score, progress.total_answered);
    let speed = speed_score(average_seconds(time_spent_ms, progress.total_answered));
    let retention = retention_score(progress.learned_count());
    let consistency = consistency_score(progress.streak_days);

    let sum = u32::from(accuracy) + u32::from(speed) + u32::from(retention) + u32::from(consistency);
    let overall = (f64::from(sum) / 4.0).round() as u8;

    PerformanceReport {
        accuracy,
        speed,
        retention,
        consistency,
        overall,
    }
}

pub fn accuracy_score(total_score: u32, total_answered: u32) -> u8 {
    if total_answered == 0 {
        return 0;
    }
    let ratio = f64::from(total_score.min(total_answered)) / f64::from(total_answered);
    (ratio * 100.0).round() as u8
}

/// `None` when nothing was answered; that falls into the slowest bucket.
fn average_seconds(time_spent_ms: u64, total_answered: u32) -> Option<f64> {
    if total_answered == 0 {
        return None;
    }
    Some(time_spent_ms as f64 / f64::from(total_answered) / 1000.0)
}

pub fn speed_score(average_seconds: Option<f64>) -> u8 {
    match average_seconds {
        Some(s) if s <= 5.0 => 100,
        Some(s) if s <= 10.0 => 80,
        Some(s) if s <= 15.0 => 60,
        Some(s) if s <= 20.0 => 40,
        _ => 20,
    }
}

pub fn retention_score(words_learned: usize) -> u8 {
    match words_learned {
        n if n >= 50 => 100,
        n if n >= 30 => 80,
        n if n >= 15 => 60,
        n if n >= 5 => 40,
        n => (n * 8) as u8,
    }
}

pub fn consistency_score(streak_days: u32) -> u8 {
    match streak_days {
        d if d >= 30 => 100,
        d if d >= 14 => 80,
        d if d >= 7 => 60,
        d if d >= 3 => 40,
        d => (d * 10) as u8,
    }
}

pub fn recommendations(report: &PerformanceReport) -> Vec<Recommendation> {
    let mut out = Vec::new();
    if report.accuracy < ACCURACY_ADVICE_BELOW {
        out.push(Recommendation {
            metric: Metric::Accuracy,
            message: "Review your difficult words more often before taking new quizzes.",
        });
    }
    if report.speed < SPEED_ADVICE_BELOW {
        out.push(Recommendation {
            metric: Metric::Speed,
            message: "Practice with flashcards to recognize words faster.",
        });
    }
    if report.retention < RETENTION_ADVICE_BELOW {
        out.push(Recommendation {
            metric: Metric::Retention,
            message: "Learn a few new words every day to grow your vocabulary.",
        });
    }
    if report.consistency < CONSISTENCY_ADVICE_BELOW {
        out.push(Recommendation {
            metric: Metric::Consistency,
            message: "Study a little every day to build a learning streak.",
        });
    }
    out
}
