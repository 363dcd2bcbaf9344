//! Property-based tests for scheduling and exercise generation
//!
//! - intervals never leave the fixed ladder
//! - success never shortens an interval, failure never lengthens it
//! - multiple choice keeps exactly one correct option and respects the cap

mod common;

use chrono::Duration;
use proptest::prelude::*;

use vocab_trainer::services::spaced_repetition::{
    is_due_at, next_interval, REVIEW_INTERVALS,
};
use vocab_trainer::{ExerciseGenerator, ProgressSnapshot, WordCatalog};

use common::{day, word};

fn arb_interval() -> impl Strategy<Value = u32> {
    prop_oneof![
        proptest::sample::select(REVIEW_INTERVALS.to_vec()),
        any::<u32>(),
    ]
}

proptest! {
    #[test]
    fn next_interval_stays_on_ladder(current in arb_interval(), success in any::<bool>()) {
        prop_assert!(REVIEW_INTERVALS.contains(&next_interval(current, success)));
    }

    #[test]
    fn ladder_moves_one_step(index in 0usize..REVIEW_INTERVALS.len()) {
        let current = REVIEW_INTERVALS[index];
        let up = REVIEW_INTERVALS[(index + 1).min(REVIEW_INTERVALS.len() - 1)];
        let down = REVIEW_INTERVALS[index.saturating_sub(1)];
        prop_assert_eq!(next_interval(current, true), up);
        prop_assert_eq!(next_interval(current, false), down);
    }

    #[test]
    fn outcome_sequences_stay_on_ladder(outcomes in prop::collection::vec(any::<bool>(), 0..40)) {
        let mut progress = ProgressSnapshot::default();
        let mut now = day(2024, 1, 1);
        for correct in &outcomes {
            let entry = progress.record_answer(9, *correct, now);
            prop_assert!(REVIEW_INTERVALS.contains(&entry.interval));
            now += Duration::days(1);
        }
        let successes = outcomes.iter().filter(|c| **c).count() as u32;
        let expected_success = if outcomes.is_empty() { None } else { Some(successes) };
        prop_assert_eq!(progress.entry(9).map(|e| e.success_count), expected_success);
        prop_assert_eq!(progress.total_answered as usize, outcomes.len());
    }

    #[test]
    fn due_exactly_when_interval_elapsed(elapsed in 0i64..200, index in 0usize..REVIEW_INTERVALS.len()) {
        let interval = REVIEW_INTERVALS[index];
        let last = day(2024, 1, 1);
        let now = last + Duration::days(elapsed);
        prop_assert_eq!(is_due_at(Some(last), interval, now), elapsed >= i64::from(interval));
    }

    #[test]
    fn multiple_choice_invariants(
        translations in prop::collection::vec("[a-e]{1,2}", 1..12),
        option_count in 0usize..8,
    ) {
        let words = translations
            .iter()
            .enumerate()
            .map(|(i, t)| word(i as u32, &format!("mot{i}"), t))
            .collect();
        let catalog = WordCatalog::new(words).unwrap();
        let progress = ProgressSnapshot::default();
        let generator = ExerciseGenerator::new(&catalog, &progress);

        let target = &catalog.words()[0];
        let exercise = generator.multiple_choice(target, option_count);
        prop_assert!(exercise.answers.len() <= option_count.max(1));
        prop_assert_eq!(
            exercise.answers.iter().filter(|a| **a == target.translation).count(),
            1
        );
    }
}
