pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::{engine::DashboardEngine, pipeline::DashboardPipeline};
pub use crate::domain::model::{CompoundRecord, PropertySummary};
pub use crate::utils::error::{DashError, Result};
