pub mod builtin;
pub mod dataset;

pub use builtin::BuiltinDataset;
pub use dataset::{Dataset, Sample};
