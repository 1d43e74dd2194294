use crate::utils::error::{DashError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DashError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(DashError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DashError::ConfigError {
            message: format!("{}: value cannot be empty or whitespace-only", field_name),
        });
    }
    Ok(())
}

/// Colors land verbatim in the chart description, so only the `#rrggbb`
/// form the dashboard understands is accepted.
pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    let valid = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !valid {
        return Err(DashError::ConfigError {
            message: format!(
                "{}: expected a hex color like #92d050, got '{}'",
                field_name, value
            ),
        });
    }
    Ok(())
}

pub fn validate_field_name(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if value.chars().any(|c| c.is_whitespace()) {
        return Err(DashError::ConfigError {
            message: format!(
                "{}: attribute name '{}' must not contain whitespace",
                field_name, value
            ),
        });
    }
    Ok(())
}
