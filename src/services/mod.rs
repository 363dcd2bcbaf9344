pub mod badge;
pub mod conversation;
pub mod exercise;
pub mod performance;
pub mod progress;
pub mod reward;
pub mod spaced_repetition;
