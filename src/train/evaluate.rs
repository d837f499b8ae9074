use serde::Serialize;

use crate::activation::activation::Activation;
use crate::data::dataset::Dataset;
use crate::error::Result;
use crate::perceptron::perceptron::Perceptron;

/// Decision threshold for activations with a continuous output.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// Maps a raw unit output to a class label in {0, 1}.
///
/// Step output is already a class; everything else is cut at 0.5.
pub fn classify(activation: Activation, output: f64) -> f64 {
    if activation.is_binary() {
        output
    } else if output >= DECISION_THRESHOLD {
        1.0
    } else {
        0.0
    }
}

/// One evaluated sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRow {
    pub input: Vec<f64>,
    pub expected: f64,
    pub output: f64,
    pub class: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub rows: Vec<PredictionRow>,
    /// Fraction of rows with `class == expected`, in [0, 1].
    pub accuracy: f64,
}

impl Evaluation {
    pub fn correct(&self) -> usize {
        self.rows.iter().filter(|r| r.class == r.expected).count()
    }
}

/// Runs `predict` over every sample of `dataset` without training.
pub fn evaluate(perceptron: &Perceptron, dataset: &Dataset) -> Result<Evaluation> {
    let activation = perceptron.activation();
    let rows = dataset.samples().iter()
        .map(|sample| -> Result<PredictionRow> {
            let output = perceptron.predict(&sample.input)?;
            Ok(PredictionRow {
                input: sample.input.clone(),
                expected: sample.label,
                output,
                class: classify(activation, output),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let correct = rows.iter().filter(|r| r.class == r.expected).count();
    let accuracy = correct as f64 / rows.len() as f64;
    Ok(Evaluation { rows, accuracy })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BuiltinDataset;

    #[test]
    fn test_classify_thresholds_continuous_outputs() {
        assert_eq!(classify(Activation::Sigmoid, 0.5), 1.0);
        assert_eq!(classify(Activation::Sigmoid, 0.4999), 0.0);
        assert_eq!(classify(Activation::Relu, 3.2), 1.0);
        assert_eq!(classify(Activation::Tanh, -0.9), 0.0);
        assert_eq!(classify(Activation::Step, 0.0), 0.0);
        assert_eq!(classify(Activation::Step, 1.0), 1.0);
    }

    #[test]
    fn test_evaluate_reports_every_sample() {
        let or = BuiltinDataset::Or.dataset().unwrap();
        // z = x0 + x1 - 0.5 solves OR exactly under step
        let p = Perceptron::from_parameters(vec![1.0, 1.0], -0.5, Activation::Step, 0.1).unwrap();
        let eval = evaluate(&p, &or).unwrap();
        assert_eq!(eval.rows.len(), 4);
        assert_eq!(eval.accuracy, 1.0);
        assert_eq!(eval.correct(), 4);
        assert_eq!(eval.rows[0].output, 0.0);
        assert_eq!(eval.rows[3].input, vec![1.0, 1.0]);
    }

    #[test]
    fn test_evaluate_counts_mistakes() {
        let and = BuiltinDataset::And.dataset().unwrap();
        // always fires
        let p = Perceptron::from_parameters(vec![0.0, 0.0], 1.0, Activation::Step, 0.1).unwrap();
        let eval = evaluate(&p, &and).unwrap();
        assert_eq!(eval.correct(), 1);
        assert_eq!(eval.accuracy, 0.25);
    }

    #[test]
    fn test_evaluate_rejects_wrong_width() {
        let climate = BuiltinDataset::Climate.dataset().unwrap();
        let p = Perceptron::new(2, Activation::Sigmoid, 0.1).unwrap();
        assert!(evaluate(&p, &climate).is_err());
    }
}
