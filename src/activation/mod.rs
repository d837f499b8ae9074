pub mod activation;

pub use activation::{activate, Activation};
