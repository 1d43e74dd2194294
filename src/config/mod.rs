#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::components::PropertyComponent;
use crate::core::ConfigProvider;
use crate::utils::error::{DashError, Result};
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "chembl-props"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Property statistics and histogram components for a compound dashboard")
)]
pub struct CliConfig {
    /// JSON document with the raw compound records.
    #[cfg_attr(feature = "cli", arg(long, default_value = "./compounds.json"))]
    pub input_path: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    /// Built-in property components to compute.
    #[cfg_attr(
        feature = "cli",
        arg(
            long,
            value_delimiter = ',',
            default_value = "aromatic_rings,num_ro5_violations"
        )
    )]
    pub properties: Vec<String>,

    /// Optional TOML config; when given it replaces the flags above.
    #[cfg_attr(feature = "cli", arg(long))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn components(&self) -> Result<Vec<PropertyComponent>> {
        self.properties
            .iter()
            .map(|name| {
                PropertyComponent::preset(name).ok_or_else(|| DashError::ConfigError {
                    message: format!(
                        "unknown property '{}', available: {}",
                        name,
                        PropertyComponent::preset_names().join(", ")
                    ),
                })
            })
            .collect()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;

        if self.properties.is_empty() {
            return Err(DashError::ConfigError {
                message: "at least one property must be selected".to_string(),
            });
        }

        // Resolving the presets also reports unknown names.
        self.components()?;
        Ok(())
    }
}
