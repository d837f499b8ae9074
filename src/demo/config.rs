use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::activation::activation::Activation;
use crate::data::builtin::BuiltinDataset;
use crate::error::{PerceptronError, Result};

pub const DEFAULT_EPOCHS: usize = 20;
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Settings for one `run_demo` sweep.
///
/// Every field has a default, so a JSON config file only needs the keys it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Built-in dataset to train on; ignored when `dataset_path` is set.
    pub dataset: BuiltinDataset,
    /// JSON dataset file (`{ "inputs": [[..]], "labels": [..] }`).
    pub dataset_path: Option<String>,
    /// Activations to sweep, in order. Each gets a fresh unit.
    pub activations: Vec<Activation>,
    pub epochs: usize,
    pub learning_rate: f64,
    /// Base seed; unit `i` is seeded with `seed + i`. Random when absent.
    pub seed: Option<u64>,
    /// Scale each feature by its column max-abs before training.
    pub normalize: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            dataset: BuiltinDataset::Or,
            dataset_path: None,
            activations: Activation::DEMO_ORDER.to_vec(),
            epochs: DEFAULT_EPOCHS,
            learning_rate: DEFAULT_LEARNING_RATE,
            seed: None,
            normalize: false,
        }
    }
}

impl DemoConfig {
    /// Reads a config from a JSON file and validates it.
    pub fn load_json(path: impl AsRef<Path>) -> Result<DemoConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: DemoConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.activations.is_empty() {
            return Err(PerceptronError::InvalidConfig("no activations to run".into()));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }
}
