use chrono::Utc;
use serde::Serialize;

use vocab_trainer::config::Config;
use vocab_trainer::logging::init_tracing;
use vocab_trainer::services::conversation::{self, Scenario};
use vocab_trainer::services::exercise::MultipleChoiceExercise;
use vocab_trainer::services::reward::LevelInfo;
use vocab_trainer::storage::{load_json, save_json, JsonFileStore, PROGRESS_KEY};
use vocab_trainer::{ExerciseGenerator, ProgressSnapshot, RewardSystem, VocabResult, WordCatalog};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionSummary {
    catalog_size: usize,
    review_queue: Vec<u32>,
    practice: Option<MultipleChoiceExercise>,
    quiz: Vec<MultipleChoiceExercise>,
    conversation: Option<&'static Scenario>,
    level: LevelInfo,
    streak_days: u32,
    achievements: Vec<String>,
}

fn main() {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();
    let _log_guard = init_tracing(&config.log_level);

    if let Err(err) = run(&config) {
        tracing::error!(error = %err, "session failed");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> VocabResult<()> {
    let catalog = WordCatalog::from_path(&config.catalog_path)?;
    tracing::info!(words = catalog.len(), path = %config.catalog_path.display(), "catalog ready");

    let mut store = JsonFileStore::open(&config.data_dir)?;
    let mut progress: ProgressSnapshot = load_json(&store, PROGRESS_KEY)?;
    let today = Utc::now().date_naive();
    let mut progress_changed = progress.record_study_day(today);

    let mut rewards = RewardSystem::load(store.clone())?;
    if let Some(outcome) = rewards.study_day(today)? {
        for badge in &outcome.new_badges {
            tracing::info!(badge = badge.name, "new badge");
        }
    }

    progress_changed |= progress.sync_achievements(rewards.unlocked_badges());
    if progress_changed {
        save_json(&mut store, PROGRESS_KEY, &progress)?;
    }

    let generator = ExerciseGenerator::new(&catalog, &progress);
    let review = generator.words_for_review();
    let practice = review
        .first()
        .map(|word| generator.multiple_choice(word, config.option_count));
    let quiz = generator.quiz(review.iter().copied(), config.quiz_size);

    let conversation = conversation::random_scenario(config.difficulty);
    tracing::debug!(
        difficulty = config.difficulty.as_str(),
        scenario = conversation.map(|s| s.id),
        "conversation picked"
    );

    let summary = SessionSummary {
        catalog_size: catalog.len(),
        review_queue: review.iter().map(|w| w.id).collect(),
        practice,
        quiz,
        conversation,
        level: rewards.current_level(),
        streak_days: progress.streak_days,
        achievements: progress.achievements.iter().cloned().collect(),
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
