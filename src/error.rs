use thiserror::Error;

/// Every failure the perceptron, its datasets and the demo driver can report.
///
/// Floating-point overflow in the exponential activations is not represented
/// here: it shows up as `inf` / `NaN` in the output value.
#[derive(Debug, Error)]
pub enum PerceptronError {
    /// An input vector's length disagrees with the unit's weight count.
    #[error("dimension mismatch: expected {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A name that is not one of the six activation selectors.
    #[error("unknown activation `{0}` (expected one of linear, step, sigmoid, relu, tanh, softmax)")]
    UnknownActivation(String),

    /// Rejected construction parameters, dataset shape or driver settings.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PerceptronError>;
