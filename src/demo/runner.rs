use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::activation::activation::Activation;
use crate::data::dataset::{normalize_row, Dataset};
use crate::demo::config::DemoConfig;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;
use crate::train::epoch_stats::EpochStats;
use crate::train::evaluate::{classify, evaluate, Evaluation};

/// Output of the unit on an input outside the training set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnseenRow {
    pub input: Vec<f64>,
    pub output: f64,
    pub class: f64,
}

/// Everything the driver reports for one activation.
///
/// Inputs in `evaluation` and `unseen` are the values as given, before any
/// normalisation; outputs come from the unit fed the scaled copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivationReport {
    pub activation: Activation,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub epochs: usize,
    /// Statistics of the last pass; `None` when zero epochs were run.
    pub final_epoch: Option<EpochStats>,
    pub evaluation: Evaluation,
    pub unseen: Vec<UnseenRow>,
}

/// The dataset as given, the copy the units train on, and the column
/// scales linking the two when normalisation is on.
struct PreparedData {
    raw: Dataset,
    training: Dataset,
    unseen: Vec<Vec<f64>>,
    scales: Option<Vec<f64>>,
}

impl PreparedData {
    fn scaled(&self, input: &[f64]) -> Vec<f64> {
        match &self.scales {
            Some(scales) => normalize_row(input, scales),
            None => input.to_vec(),
        }
    }
}

/// Trains one fresh unit per configured activation and collects its report.
pub fn run_demo(config: &DemoConfig) -> Result<Vec<ActivationReport>> {
    config.validate()?;
    let data = load_data(config)?;
    log::info!(
        "training on {} samples x {} features, {} epochs, lr {}",
        data.training.len(),
        data.training.feature_count(),
        config.epochs,
        config.learning_rate
    );

    config.activations.iter()
        .enumerate()
        .map(|(index, &activation)| {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(index as u64)),
                None => StdRng::from_entropy(),
            };
            run_one(activation, &data, config, &mut rng)
        })
        .collect()
}

fn run_one(
    activation: Activation,
    data: &PreparedData,
    config: &DemoConfig,
    rng: &mut StdRng,
) -> Result<ActivationReport> {
    let mut unit = Perceptron::with_rng(data.training.feature_count(), activation, config.learning_rate, rng)?;
    let history = unit.train_with_stats(&data.training, config.epochs)?;

    let mut evaluation = evaluate(&unit, &data.training)?;
    for (row, sample) in evaluation.rows.iter_mut().zip(data.raw.samples()) {
        row.input = sample.input.clone();
    }

    let unseen = data.unseen.iter()
        .map(|input| -> Result<UnseenRow> {
            let output = unit.predict(&data.scaled(input))?;
            Ok(UnseenRow { input: input.clone(), output, class: classify(activation, output) })
        })
        .collect::<Result<Vec<_>>>()?;

    log::info!(
        "{activation}: {}/{} correct after {} epochs",
        evaluation.correct(),
        evaluation.rows.len(),
        unit.epochs_trained()
    );

    Ok(ActivationReport {
        activation,
        weights: unit.weights().to_vec(),
        bias: unit.bias(),
        epochs: unit.epochs_trained(),
        final_epoch: history.last().cloned(),
        evaluation,
        unseen,
    })
}

/// Resolves the training set and unseen inputs. With normalisation on, the
/// training copy is scaled by the raw set's column max-abs.
fn load_data(config: &DemoConfig) -> Result<PreparedData> {
    let (raw, unseen) = match &config.dataset_path {
        Some(path) => {
            log::info!("loading dataset from {path}");
            (Dataset::load_json(path)?, Vec::new())
        }
        None => (config.dataset.dataset()?, config.dataset.unseen()),
    };

    if !config.normalize {
        let training = raw.clone();
        return Ok(PreparedData { raw, training, unseen, scales: None });
    }
    let scales = raw.column_max_abs();
    log::debug!("normalising features by {scales:?}");
    Ok(PreparedData { training: raw.normalized(), raw, unseen, scales: Some(scales) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BuiltinDataset;

    fn seeded(seed: u64) -> DemoConfig {
        DemoConfig { seed: Some(seed), ..DemoConfig::default() }
    }

    #[test]
    fn test_one_report_per_activation_in_order() {
        let reports = run_demo(&seeded(1)).unwrap();
        let order: Vec<Activation> = reports.iter().map(|r| r.activation).collect();
        assert_eq!(order, Activation::DEMO_ORDER.to_vec());
        for r in &reports {
            assert_eq!(r.epochs, 20);
            assert_eq!(r.weights.len(), 2);
            assert_eq!(r.evaluation.rows.len(), 4);
            assert_eq!(r.final_epoch.as_ref().map(|s| s.epoch), Some(20));
            assert!(r.unseen.is_empty());
        }
    }

    #[test]
    fn test_seed_makes_runs_reproducible() {
        assert_eq!(run_demo(&seeded(123)).unwrap(), run_demo(&seeded(123)).unwrap());
    }

    #[test]
    fn test_unseen_inputs_are_reported_as_given() {
        let config = DemoConfig {
            dataset: BuiltinDataset::Climate,
            activations: vec![Activation::Sigmoid],
            normalize: true,
            ..seeded(5)
        };
        let reports = run_demo(&config).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].unseen.len(), 5);
        assert_eq!(reports[0].unseen[0].input, vec![8.0]);
        assert_eq!(reports[0].evaluation.rows[3].input, vec![30.0]);
    }

    #[test]
    fn test_normalised_run_predicts_on_scaled_inputs() {
        let config = DemoConfig {
            dataset: BuiltinDataset::Climate,
            activations: vec![Activation::Linear],
            normalize: true,
            ..seeded(8)
        };
        let report = &run_demo(&config).unwrap()[0];
        let unit = Perceptron::from_parameters(
            report.weights.clone(),
            report.bias,
            Activation::Linear,
            config.learning_rate,
        ).unwrap();
        // 8 °C scaled by the training max of 30 °C
        let expected = unit.predict(&[8.0 / 30.0]).unwrap();
        assert!((report.unseen[0].output - expected).abs() < 1e-12);
        let expected = unit.predict(&[1.0]).unwrap();
        assert!((report.evaluation.rows[3].output - expected).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_config_fails_before_training() {
        let config = DemoConfig { activations: vec![], ..DemoConfig::default() };
        assert!(run_demo(&config).is_err());
    }
}
