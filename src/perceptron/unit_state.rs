use serde::Serialize;

/// Lifecycle of a `Perceptron`. There is no terminal state: a trained unit
/// keeps accepting further `train` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitState {
    /// Random initial parameters, no completed epoch yet.
    Initialized,
    /// At least one epoch has completed.
    Trained,
}
