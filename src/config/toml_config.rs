use crate::core::components::PropertyComponent;
use crate::core::histogram::HistogramStyle;
use crate::core::ConfigProvider;
use crate::utils::error::{DashError, Result};
use crate::utils::validation::{
    validate_field_name, validate_hex_color, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dashboard: DashboardConfig,
    #[serde(default, rename = "property")]
    pub properties: Vec<PropertyConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub name: String,
    pub input_path: String,
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyConfig {
    pub field: String,
    pub display_name: String,
    pub axis_title: Option<String>,
    pub fill_color: String,
    pub border_color: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    // Replaces ${VAR_NAME} with the environment value; unknown variables are
    // left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.dashboard.input_path
    }

    fn output_path(&self) -> &str {
        &self.dashboard.output_path
    }

    fn components(&self) -> Result<Vec<PropertyComponent>> {
        Ok(self
            .properties
            .iter()
            .map(|p| {
                PropertyComponent::new(
                    p.field.clone(),
                    p.display_name.clone(),
                    p.axis_title.clone().unwrap_or_else(|| p.display_name.clone()),
                    HistogramStyle::new(p.fill_color.clone(), p.border_color.clone()),
                )
            })
            .collect())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dashboard.name", &self.dashboard.name)?;
        validate_path("dashboard.input_path", &self.dashboard.input_path)?;
        validate_path("dashboard.output_path", &self.dashboard.output_path)?;

        if self.properties.is_empty() {
            return Err(DashError::ConfigError {
                message: "at least one [[property]] table is required".to_string(),
            });
        }

        for property in &self.properties {
            validate_field_name("property.field", &property.field)?;
            validate_non_empty_string("property.display_name", &property.display_name)?;
            validate_hex_color("property.fill_color", &property.fill_color)?;
            validate_hex_color("property.border_color", &property.border_color)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
[dashboard]
name = "Compound properties"
input_path = "./compounds.json"
output_path = "./output"

[[property]]
field = "aromatic_rings"
display_name = "Number of aromatic rings"
fill_color = "#92d050"
border_color = "#73A340"

[[property]]
field = "num_ro5_violations"
display_name = "Number of ro5 violations"
axis_title = "Number of `rule of five` violations"
fill_color = "#002060"
border_color = "#011745"
"##;

    #[test]
    fn test_parse_sample_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.dashboard.name, "Compound properties");
        assert_eq!(config.properties.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_components_from_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        let components = config.components().unwrap();

        assert_eq!(components[0].field_name, "aromatic_rings");
        // Axis title falls back to the display name when not given.
        assert_eq!(components[0].axis_title, "Number of aromatic rings");
        assert_eq!(components[1].axis_title, "Number of `rule of five` violations");
        assert_eq!(components[1].style.border_color, "#011745");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CHEMBL_PROPS_TEST_DIR", "/data");
        let content = SAMPLE.replace("./compounds.json", "${CHEMBL_PROPS_TEST_DIR}/compounds.json");

        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.dashboard.input_path, "/data/compounds.json");
    }

    #[test]
    fn test_unknown_env_var_left_in_place() {
        let content =
            SAMPLE.replace("./compounds.json", "${CHEMBL_PROPS_UNSET_VAR}/compounds.json");

        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(
            config.dashboard.input_path,
            "${CHEMBL_PROPS_UNSET_VAR}/compounds.json"
        );
    }

    #[test]
    fn test_missing_properties_fails_validation() {
        let content = r#"
[dashboard]
name = "Compound properties"
input_path = "./compounds.json"
output_path = "./output"
"#;
        let config = TomlConfig::from_toml_str(content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_color_fails_validation() {
        let content = SAMPLE.replace("#92d050", "green");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(TomlConfig::from_toml_str("not toml at all [").is_err());
    }
}
