use rand::Rng;
use serde::Serialize;

use crate::activation::activation::Activation;
use crate::data::dataset::Dataset;
use crate::error::{PerceptronError, Result};
use crate::perceptron::unit_state::UnitState;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::classify;

/// A single linear threshold unit trained with the perceptron learning rule.
///
/// The unit owns its weights; only `train` changes them. The learning rate
/// and activation are fixed at construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Perceptron {
    weights: Vec<f64>,
    bias: f64,
    learning_rate: f64,
    activation: Activation,
    epochs_trained: usize,
}

impl Perceptron {
    /// Builds a unit with weights and bias drawn uniformly from [-1, 1].
    pub fn new(input_size: usize, activation: Activation, learning_rate: f64) -> Result<Perceptron> {
        Perceptron::with_rng(input_size, activation, learning_rate, &mut rand::thread_rng())
    }

    /// Same as `new`, drawing the initial parameters from `rng`.
    pub fn with_rng<R: Rng>(
        input_size: usize,
        activation: Activation,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Perceptron> {
        if input_size == 0 {
            return Err(PerceptronError::InvalidConfig("input size must be at least 1".into()));
        }
        let weights = (0..input_size).map(|_| rng.gen_range(-1.0..=1.0)).collect();
        let bias = rng.gen_range(-1.0..=1.0);
        let unit = Perceptron::from_parameters(weights, bias, activation, learning_rate)?;
        log::debug!(
            "new {activation} perceptron: {input_size} inputs, lr {learning_rate}, weights {:?}, bias {bias:.4}",
            unit.weights
        );
        Ok(unit)
    }

    /// Builds an untrained unit from known parameters.
    pub fn from_parameters(
        weights: Vec<f64>,
        bias: f64,
        activation: Activation,
        learning_rate: f64,
    ) -> Result<Perceptron> {
        if weights.is_empty() {
            return Err(PerceptronError::InvalidConfig("input size must be at least 1".into()));
        }
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(PerceptronError::InvalidConfig(format!(
                "learning rate must be a positive finite number, got {learning_rate}"
            )));
        }
        Ok(Perceptron { weights, bias, learning_rate, activation, epochs_trained: 0 })
    }

    /// Weighted sum of `input` plus the bias, before activation.
    pub fn net_input(&self, input: &[f64]) -> Result<f64> {
        self.check_dimension(input.len())?;
        Ok(self.weights.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + self.bias)
    }

    /// Output of the unit for `input`. Never modifies the unit.
    pub fn predict(&self, input: &[f64]) -> Result<f64> {
        let z = self.net_input(input)?;
        Ok(self.activation.function(z))
    }

    /// Runs exactly `epochs` online passes over `dataset` in order.
    ///
    /// After each sample, every weight moves by `lr * (label - prediction) * x_i`
    /// and the bias by `lr * (label - prediction)`. The new weight vector is
    /// computed from the old one in full and then swapped in.
    pub fn train(&mut self, dataset: &Dataset, epochs: usize) -> Result<()> {
        self.train_with_stats(dataset, epochs).map(|_| ())
    }

    /// `train`, returning what each pass observed before its updates.
    pub fn train_with_stats(&mut self, dataset: &Dataset, epochs: usize) -> Result<Vec<EpochStats>> {
        self.check_dimension(dataset.feature_count())?;

        let mut history = Vec::with_capacity(epochs);
        for epoch in 1..=epochs {
            let mut squared_error = 0.0;
            let mut misclassified = 0;

            for sample in dataset.samples() {
                let prediction = self.predict(&sample.input)?;
                let error = sample.label - prediction;
                squared_error += error * error;
                if classify(self.activation, prediction) != sample.label {
                    misclassified += 1;
                }
                self.apply_update(&sample.input, error);
            }

            self.epochs_trained += 1;
            let stats = EpochStats { epoch, total_epochs: epochs, squared_error, misclassified };
            log::trace!("{} epoch {epoch}/{epochs}: sse {squared_error:.6}, misclassified {misclassified}", self.activation);
            history.push(stats);
        }

        if let Some(last) = history.last() {
            log::debug!(
                "{} trained {epochs} epochs on {} samples: final sse {:.6}, weights {:?}, bias {:.4}",
                self.activation,
                dataset.len(),
                last.squared_error,
                self.weights,
                self.bias
            );
        }
        Ok(history)
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    /// Number of full passes completed across all `train` calls.
    pub fn epochs_trained(&self) -> usize {
        self.epochs_trained
    }

    pub fn state(&self) -> UnitState {
        if self.epochs_trained == 0 {
            UnitState::Initialized
        } else {
            UnitState::Trained
        }
    }

    /// Simultaneous update: every new weight reads only pre-update values.
    fn apply_update(&mut self, input: &[f64], error: f64) {
        let step = self.learning_rate * error;
        let updated: Vec<f64> = self.weights.iter()
            .zip(input)
            .map(|(w, x)| w + step * x)
            .collect();
        self.weights = updated;
        self.bias += step;
    }

    fn check_dimension(&self, actual: usize) -> Result<()> {
        if actual != self.weights.len() {
            return Err(PerceptronError::DimensionMismatch {
                expected: self.weights.len(),
                actual,
            });
        }
        Ok(())
    }
}
