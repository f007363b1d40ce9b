//! Configuration: layered loading and validated types

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{Config, LlmConfig, OutputConfig, ProjectConfig, RenderConfig, ScanConfig};
