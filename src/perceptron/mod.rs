pub mod perceptron;
pub mod unit_state;

pub use perceptron::Perceptron;
pub use unit_state::UnitState;
