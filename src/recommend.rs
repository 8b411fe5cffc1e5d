pub mod engine;
#[cfg(test)]
mod tests;

pub use engine::{AircraftScore, Reason, Recommender, ScoreWeights, SubScores, RANGE_SAFETY_MARGIN};
