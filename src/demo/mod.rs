pub mod config;
pub mod report;
pub mod runner;

pub use config::DemoConfig;
pub use report::{render_json, render_text};
pub use runner::{run_demo, ActivationReport, UnseenRow};
