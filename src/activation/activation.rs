use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PerceptronError;

/// Scalar transform applied to a perceptron's pre-activation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Linear,
    Step,
    Sigmoid,
    Relu,
    Tanh,
    /// Single-output approximation: a binary unit has no classes to normalise
    /// over, so this is the logistic function, identical to `Sigmoid`.
    Softmax,
}

impl Activation {
    pub const ALL: [Activation; 6] = [
        Activation::Linear,
        Activation::Step,
        Activation::Sigmoid,
        Activation::Relu,
        Activation::Tanh,
        Activation::Softmax,
    ];

    /// Order in which the demo driver sweeps the activations.
    pub const DEMO_ORDER: [Activation; 6] = [
        Activation::Step,
        Activation::Sigmoid,
        Activation::Relu,
        Activation::Tanh,
        Activation::Linear,
        Activation::Softmax,
    ];

    /// Applies the activation to a pre-activation value `x`.
    ///
    /// No overflow guards: `exp(-x)` saturating to infinity yields `0.0` for
    /// the logistic variants. A `NaN` input stays `NaN` for linear, sigmoid,
    /// tanh and softmax; step and relu map it to `0.0`.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            Activation::Linear => x,
            Activation::Step => if x >= 0.0 { 1.0 } else { 0.0 },
            Activation::Sigmoid | Activation::Softmax => logistic(x),
            Activation::Relu => if x > 0.0 { x } else { 0.0 },
            Activation::Tanh => x.tanh(),
        }
    }

    /// True when the output is already a class label in {0, 1}.
    pub fn is_binary(&self) -> bool {
        matches!(self, Activation::Step)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Activation::Linear => "linear",
            Activation::Step => "step",
            Activation::Sigmoid => "sigmoid",
            Activation::Relu => "relu",
            Activation::Tanh => "tanh",
            Activation::Softmax => "softmax",
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Activation {
    type Err = PerceptronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Activation::ALL
            .into_iter()
            .find(|a| a.name() == wanted)
            .ok_or_else(|| PerceptronError::UnknownActivation(s.to_owned()))
    }
}

/// Name-keyed resolver.
///
/// Unrecognised names pass the input through unchanged (identity) instead of
/// failing; use `Activation::from_str` where strict validation is wanted.
pub fn activate(name: &str, x: f64) -> f64 {
    match name.parse::<Activation>() {
        Ok(activation) => activation.function(x),
        Err(_) => {
            log::warn!("unrecognised activation `{name}`, falling back to identity");
            x
        }
    }
}

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
