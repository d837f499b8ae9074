pub mod epoch_stats;
pub mod evaluate;

pub use epoch_stats::EpochStats;
pub use evaluate::{classify, evaluate, Evaluation, PredictionRow};
