use serde::{Serialize, Deserialize};
use std::path::Path;

use crate::error::{PerceptronError, Result};

/// One training pair: an input vector and its expected label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub label: f64,
}

/// Ordered, non-empty set of samples that all share the same input width.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    samples: Vec<Sample>,
    feature_count: usize,
}

/// On-disk layout read by `Dataset::load_json`.
#[derive(Deserialize)]
struct DatasetFile {
    inputs: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl Dataset {
    /// Pairs `inputs[i]` with `labels[i]`.
    ///
    /// Fails if either side is empty, the counts differ, or the input vectors
    /// do not all have the same non-zero length.
    pub fn new(inputs: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Dataset> {
        if inputs.len() != labels.len() {
            return Err(PerceptronError::InvalidConfig(format!(
                "{} inputs but {} labels",
                inputs.len(),
                labels.len()
            )));
        }
        let samples = inputs.into_iter()
            .zip(labels)
            .map(|(input, label)| Sample { input, label })
            .collect();
        Dataset::from_samples(samples)
    }

    pub fn from_samples(samples: Vec<Sample>) -> Result<Dataset> {
        let feature_count = match samples.first() {
            Some(first) => first.input.len(),
            None => return Err(PerceptronError::InvalidConfig("dataset is empty".into())),
        };
        if feature_count == 0 {
            return Err(PerceptronError::InvalidConfig("samples have no features".into()));
        }
        if let Some((row, sample)) = samples.iter()
            .enumerate()
            .find(|(_, s)| s.input.len() != feature_count)
        {
            return Err(PerceptronError::InvalidConfig(format!(
                "sample {row} has {} features, expected {feature_count}",
                sample.input.len()
            )));
        }
        Ok(Dataset { samples, feature_count })
    }

    /// Reads `{ "inputs": [[...], ...], "labels": [...] }` from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Dataset> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let raw: DatasetFile = serde_json::from_reader(reader)?;
        Dataset::new(raw.inputs, raw.labels)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn inputs(&self) -> impl Iterator<Item = &[f64]> {
        self.samples.iter().map(|s| s.input.as_slice())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn feature_count(&self) -> usize {
        self.feature_count
    }

    /// Scales every feature column by its largest absolute value so inputs
    /// land in [-1, 1]. All-zero columns are left as they are.
    pub fn normalized(&self) -> Dataset {
        let scales = self.column_max_abs();
        let samples = self.samples.iter()
            .map(|s| Sample {
                input: normalize_row(&s.input, &scales),
                label: s.label,
            })
            .collect();
        Dataset { samples, feature_count: self.feature_count }
    }

    /// Per-column maximum absolute value, used as the normalisation divisor.
    pub fn column_max_abs(&self) -> Vec<f64> {
        let mut max = vec![0.0_f64; self.feature_count];
        for sample in &self.samples {
            for (m, v) in max.iter_mut().zip(&sample.input) {
                *m = f64::max(*m, v.abs());
            }
        }
        max
    }
}

/// Divides each value by the matching scale, skipping zero scales.
pub fn normalize_row(row: &[f64], scales: &[f64]) -> Vec<f64> {
    row.iter()
        .zip(scales)
        .map(|(&v, &scale)| if scale == 0.0 { v } else { v / scale })
        .collect()
}
