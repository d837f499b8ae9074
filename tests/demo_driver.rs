use std::io::Write;

use perceptron_lab::demo::{render_json, render_text, run_demo, DemoConfig};
use perceptron_lab::{Activation, BuiltinDataset};
use tempfile::NamedTempFile;

#[test]
fn test_default_demo_prints_four_lines_per_activation() {
    let config = DemoConfig { seed: Some(2024), ..DemoConfig::default() };
    let reports = run_demo(&config).unwrap();
    assert_eq!(reports.len(), 6);

    let text = render_text(&reports);
    for activation in Activation::DEMO_ORDER {
        assert!(text.contains(&format!("Activation: {activation}")));
    }
    assert_eq!(text.matches("Input [").count(), 24);
    assert!(text.contains("Input [1, 1] -> Prediction: "));
}

#[test]
fn test_every_activation_runs_on_every_builtin() {
    let datasets = [
        BuiltinDataset::Or,
        BuiltinDataset::And,
        BuiltinDataset::Spam,
        BuiltinDataset::Climate,
        BuiltinDataset::Fraud,
        BuiltinDataset::StudyHours,
        BuiltinDataset::AcademicRisk,
    ];
    for dataset in datasets {
        let config = DemoConfig {
            dataset,
            normalize: true,
            seed: Some(11),
            ..DemoConfig::default()
        };
        let reports = run_demo(&config).unwrap();
        let rows = dataset.dataset().unwrap().len();
        assert!(reports.iter().all(|r| r.evaluation.rows.len() == rows), "{dataset:?}");
    }
}

#[test]
fn test_custom_dataset_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{ "inputs": [[0,0],[0,1],[1,0],[1,1]], "labels": [0,0,0,1] }}"#).unwrap();

    let config = DemoConfig {
        dataset_path: Some(file.path().to_string_lossy().into_owned()),
        activations: vec![Activation::Step],
        epochs: 50,
        seed: Some(4),
        ..DemoConfig::default()
    };
    let reports = run_demo(&config).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].evaluation.rows[3].input, vec![1.0, 1.0]);
    assert_eq!(reports[0].evaluation.rows[3].expected, 1.0);
    assert_eq!(reports[0].epochs, 50);
}

#[test]
fn test_normalized_report_shows_inputs_as_given() {
    let config = DemoConfig {
        dataset: BuiltinDataset::AcademicRisk,
        activations: vec![Activation::Sigmoid],
        normalize: true,
        seed: Some(3),
        ..DemoConfig::default()
    };
    let text = render_text(&run_demo(&config).unwrap());
    assert!(text.contains("Input [0, 95, 16] -> Prediction: "));

    let config = DemoConfig { dataset: BuiltinDataset::Climate, ..config };
    let reports = run_demo(&config).unwrap();
    let text = render_text(&reports);
    assert!(text.contains("Unseen [8] -> Prediction: "));
    assert!(text.contains("Unseen [32] -> Prediction: "));

    let value: serde_json::Value = serde_json::from_str(&render_json(&reports).unwrap()).unwrap();
    assert_eq!(value[0]["unseen"][0]["input"][0], 8.0);
}
