pub mod error;
pub mod activation;
pub mod data;
pub mod perceptron;
pub mod train;
pub mod demo;

// Convenience re-exports
pub use error::{PerceptronError, Result};
pub use activation::{activate, Activation};
pub use data::{BuiltinDataset, Dataset, Sample};
pub use perceptron::{Perceptron, UnitState};
pub use train::{EpochStats, Evaluation};
pub use demo::{run_demo, DemoConfig};
