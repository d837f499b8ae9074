//! Trains a fresh perceptron per activation function on a small binary
//! dataset and prints what each one learned.
//!
//!   cargo run -- --seed 7
//!   cargo run -- --dataset climate --normalize --activation sigmoid --json

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;

use perceptron_lab::demo::{render_json, render_text, run_demo, DemoConfig};
use perceptron_lab::{Activation, BuiltinDataset, PerceptronError};

#[derive(Parser)]
#[command(name = "perceptron-lab")]
#[command(about = "Single-neuron perceptron trained under six activation functions", long_about = None)]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<String>,

    /// Built-in dataset
    #[arg(short, long, value_enum)]
    dataset: Option<BuiltinDataset>,

    /// JSON dataset file with `inputs` and `labels`
    #[arg(long)]
    dataset_path: Option<String>,

    /// Activation to run (repeatable); defaults to all six
    #[arg(short, long = "activation")]
    activations: Vec<Activation>,

    /// Full passes over the dataset
    #[arg(short, long)]
    epochs: Option<usize>,

    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Seed for reproducible initial weights
    #[arg(short, long)]
    seed: Option<u64>,

    /// Scale each feature by its max absolute value
    #[arg(long)]
    normalize: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> Result<DemoConfig, PerceptronError> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::load_json(path)?,
            None => DemoConfig::default(),
        };
        if let Some(dataset) = self.dataset {
            config.dataset = dataset;
        }
        if self.dataset_path.is_some() {
            config.dataset_path = self.dataset_path;
        }
        if !self.activations.is_empty() {
            config.activations = self.activations;
        }
        if let Some(epochs) = self.epochs {
            config.epochs = epochs;
        }
        if let Some(lr) = self.learning_rate {
            config.learning_rate = lr;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.normalize |= self.normalize;
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PerceptronError> {
    let json = cli.json;
    let config = cli.into_config()?;
    let reports = run_demo(&config)?;
    if json {
        println!("{}", render_json(&reports)?);
    } else {
        print!("{}", render_text(&reports));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_default_config() {
        let cli = Cli::try_parse_from(["perceptron-lab"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.into_config().unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "dataset": "and", "epochs": 5, "seed": 1 }}"#).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "perceptron-lab", "-c", &path, "-e", "40", "-a", "tanh", "-a", "relu", "--normalize", "--json",
        ]).unwrap();
        assert!(cli.json);

        let config = cli.into_config().unwrap();
        assert_eq!(config.dataset, BuiltinDataset::And);
        assert_eq!(config.epochs, 40);
        assert_eq!(config.seed, Some(1));
        assert_eq!(config.activations, vec![Activation::Tanh, Activation::Relu]);
        assert!(config.normalize);
    }

    #[test]
    fn test_unknown_activation_flag_is_rejected() {
        assert!(Cli::try_parse_from(["perceptron-lab", "--activation", "gelu"]).is_err());
    }
}
