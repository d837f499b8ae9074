use serde::{Serialize, Deserialize};

use crate::data::dataset::Dataset;
use crate::error::Result;

/// Small toy datasets bundled with the crate.
///
/// `Or` is the classic demonstration set; the others are one- to
/// three-feature binary problems of the same size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BuiltinDataset {
    #[default]
    Or,
    And,
    /// Two keyword flags; spam when either is present.
    Spam,
    /// Temperature in °C; 1 = rain.
    Climate,
    /// Transaction amount; 1 = fraud.
    Fraud,
    /// Weekly study hours; 1 = at risk.
    StudyHours,
    /// Failed courses, attendance %, grade average (0..20); 1 = at risk.
    AcademicRisk,
}

impl BuiltinDataset {
    pub fn dataset(&self) -> Result<Dataset> {
        let (inputs, labels) = match self {
            BuiltinDataset::Or => builtin_or(),
            BuiltinDataset::And => builtin_and(),
            BuiltinDataset::Spam => builtin_spam(),
            BuiltinDataset::Climate => builtin_climate(),
            BuiltinDataset::Fraud => builtin_fraud(),
            BuiltinDataset::StudyHours => builtin_study_hours(),
            BuiltinDataset::AcademicRisk => builtin_academic_risk(),
        };
        Dataset::new(inputs, labels)
    }

    /// Unlabelled inputs reported after training in addition to the
    /// training set itself.
    pub fn unseen(&self) -> Vec<Vec<f64>> {
        match self {
            BuiltinDataset::Climate => vec![
                vec![8.0],
                vec![14.0],
                vec![20.0],
                vec![27.0],
                vec![32.0],
            ],
            _ => Vec::new(),
        }
    }
}

fn truth_table() -> Vec<Vec<f64>> {
    vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 0.0],
        vec![1.0, 1.0],
    ]
}

/// Logical OR over two binary inputs.
pub fn builtin_or() -> (Vec<Vec<f64>>, Vec<f64>) {
    (truth_table(), vec![0.0, 1.0, 1.0, 1.0])
}

/// Logical AND over two binary inputs.
pub fn builtin_and() -> (Vec<Vec<f64>>, Vec<f64>) {
    (truth_table(), vec![0.0, 0.0, 0.0, 1.0])
}

pub fn builtin_spam() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = vec![
        vec![1.0, 0.0],
        vec![0.0, 1.0],
        vec![1.0, 1.0],
        vec![0.0, 0.0],
    ];
    (inputs, vec![1.0, 1.0, 1.0, 0.0])
}

pub fn builtin_climate() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = vec![
        vec![10.0],
        vec![12.0],
        vec![28.0],
        vec![30.0],
        vec![18.0],
        vec![26.0],
    ];
    (inputs, vec![1.0, 1.0, 0.0, 0.0, 1.0, 0.0])
}

pub fn builtin_fraud() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = vec![
        vec![1000.0],
        vec![50.0],
        vec![2000.0],
        vec![10.0],
    ];
    (inputs, vec![1.0, 0.0, 1.0, 0.0])
}

pub fn builtin_study_hours() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs = vec![
        vec![8.0],
        vec![4.0],
        vec![6.0],
        vec![2.0],
    ];
    (inputs, vec![0.0, 1.0, 0.0, 1.0])
}

/// Labels follow a fixed rule: at risk when failed >= 4, grade < 10 or
/// attendance < 70.
pub fn builtin_academic_risk() -> (Vec<Vec<f64>>, Vec<f64>) {
    let inputs: Vec<Vec<f64>> = [
        [0.0, 95.0, 16.0],
        [1.0, 90.0, 14.0],
        [4.0, 60.0, 9.0],
        [5.0, 50.0, 8.0],
        [2.0, 75.0, 12.0],
        [3.0, 65.0, 11.0],
        [0.0, 85.0, 18.0],
        [6.0, 40.0, 6.0],
        [1.0, 72.0, 10.0],
        [0.0, 98.0, 19.0],
        [2.0, 68.0, 9.0],
        [3.0, 80.0, 13.0],
    ]
    .iter()
    .map(|row| row.to_vec())
    .collect();
    let labels = inputs.iter().map(|row| academic_risk_label(row)).collect();
    (inputs, labels)
}

fn academic_risk_label(row: &[f64]) -> f64 {
    let (failed, attendance, grade) = (row[0], row[1], row[2]);
    if failed >= 4.0 || grade < 10.0 || attendance < 70.0 { 1.0 } else { 0.0 }
}
