mod common;

use std::collections::HashSet;

use vocab_trainer::services::exercise::BLANK_MARKER;
use vocab_trainer::{ExerciseGenerator, ProgressSnapshot, WordCatalog, WordProgressEntry};

use common::{day, sample_catalog, word};

#[test]
fn review_queue_holds_due_and_new_words_only() {
    let catalog = WordCatalog::new(vec![
        word(1, "chat", "cat"),
        word(2, "chien", "dog"),
        word(3, "pain", "bread"),
        word(4, "fromage", "cheese"),
        word(5, "livre", "book"),
    ])
    .unwrap();

    let progress = ProgressSnapshot {
        words_learned: vec![
            WordProgressEntry {
                id: 1,
                last_review: Some(day(2024, 1, 10)),
                interval: 3,
                success_count: 1,
            },
            WordProgressEntry {
                id: 2,
                last_review: Some(day(2024, 1, 14)),
                interval: 3,
                success_count: 1,
            },
        ],
        ..Default::default()
    };

    let generator = ExerciseGenerator::new(&catalog, &progress);
    let ids: Vec<u32> = generator
        .words_for_review_at(day(2024, 1, 15))
        .iter()
        .map(|w| w.id)
        .collect();

    assert_eq!(ids, vec![1, 3, 4, 5]);
}

#[test]
fn review_queue_on_empty_catalog_is_empty() {
    let catalog = WordCatalog::default();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);
    assert!(generator.words_for_review().is_empty());
    assert!(generator.quiz(catalog.words(), 10).is_empty());
}

#[test]
fn multiple_choice_has_unique_options_with_one_correct() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    for target in catalog.words() {
        let exercise = generator.multiple_choice(target, 4);
        assert_eq!(exercise.answers.len(), 4);
        assert_eq!(exercise.correct_answer, target.translation);
        assert_eq!(
            exercise
                .answers
                .iter()
                .filter(|a| **a == target.translation)
                .count(),
            1
        );
        let unique: HashSet<_> = exercise.answers.iter().collect();
        assert_eq!(unique.len(), exercise.answers.len());
        assert!(exercise.question.contains(&target.word));
        assert_eq!(exercise.example, target.example);
    }
}

#[test]
fn fill_in_the_blank_hides_the_word() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    let target = catalog.get(3).unwrap();
    let exercise = generator.fill_in_the_blank(target);
    assert_eq!(exercise.sentence, format!("J'aime le {BLANK_MARKER}."));
    assert_eq!(exercise.correct_answer, "pain");
    assert_eq!(exercise.hint, "bread");
    assert_eq!(exercise.full_sentence, "J'aime le pain.");
}

#[test]
fn matching_pairs_by_id() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    let exercise = generator.matching(catalog.words(), 5);
    assert_eq!(exercise.english_items.len(), 5);
    assert_eq!(exercise.french_items.len(), 5);
    assert_eq!(exercise.correct_pairs.len(), 5);

    for pair in &exercise.correct_pairs {
        let english = exercise
            .english_items
            .iter()
            .find(|i| i.id == pair.english_id)
            .unwrap();
        let french = exercise
            .french_items
            .iter()
            .find(|i| i.id == pair.french_id)
            .unwrap();
        let record = catalog.get(pair.english_id).unwrap();
        assert_eq!(english.text, record.translation);
        assert_eq!(french.text, record.word);
        assert!(exercise.is_correct_pair(pair.english_id, pair.french_id));
    }
}

#[test]
fn matching_with_fewer_words_than_pairs() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    let words: Vec<_> = catalog.words().iter().take(2).collect();
    let exercise = generator.matching(words, 5);
    assert_eq!(exercise.correct_pairs.len(), 2);
}

#[test]
fn quiz_samples_without_replacement() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    let quiz = generator.quiz(catalog.words(), 5);
    assert_eq!(quiz.len(), 5);
    let ids: HashSet<u32> = quiz.iter().map(|q| q.word_id).collect();
    assert_eq!(ids.len(), 5);
    assert!(quiz.iter().all(|q| q.answers.len() == 4));

    let quiz = generator.quiz(catalog.words(), 50);
    assert_eq!(quiz.len(), catalog.len());
}

#[test]
fn listening_offers_written_words() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    let target = catalog.get(1).unwrap();
    let exercise = generator.listening(target, 3);
    assert_eq!(exercise.audio_text, "chat");
    assert_eq!(exercise.correct_answer, "chat");
    assert_eq!(exercise.translation, "cat");
    assert_eq!(exercise.answers.len(), 3);
    assert!(exercise.answers.iter().all(|a| catalog.words().iter().any(|w| &w.word == a)));
}

#[test]
fn exercises_serialize_in_camel_case() {
    let catalog = sample_catalog();
    let progress = ProgressSnapshot::default();
    let generator = ExerciseGenerator::new(&catalog, &progress);

    let exercise = generator.multiple_choice(catalog.get(2).unwrap(), 4);
    let json = serde_json::to_value(&exercise).unwrap();
    assert_eq!(json["correctAnswer"], "dog");
    assert_eq!(json["wordId"], 2);
}

#[test]
fn recorded_answers_move_words_out_of_the_queue() {
    let catalog = sample_catalog();
    let mut progress = ProgressSnapshot::default();
    progress.record_answer(1, true, day(2024, 1, 15));
    progress.record_answer(2, false, day(2024, 1, 15));

    let generator = ExerciseGenerator::new(&catalog, &progress);
    let ids: Vec<u32> = generator
        .words_for_review_at(day(2024, 1, 16))
        .iter()
        .map(|w| w.id)
        .collect();

    // word 1 climbed to a 3-day interval, word 2 stayed at 1 day
    assert!(!ids.contains(&1));
    assert!(ids.contains(&2));
    assert_eq!(ids.len(), catalog.len() - 1);
}
