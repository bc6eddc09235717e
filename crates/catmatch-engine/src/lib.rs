pub mod engine;
pub mod error;
pub mod normalize;
pub mod score;
pub mod similarity;

pub use engine::{find_best_match, rank_candidates, score_candidate};
pub use error::EngineError;
pub use normalize::normalize_text;
pub use similarity::token_set_ratio;
