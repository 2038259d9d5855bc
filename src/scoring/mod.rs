pub mod engine;

pub use engine::{calculate_score, ScoreResult, StatContribution, DEFAULT_PPR};
