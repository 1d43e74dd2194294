use crate::core::histogram::Figure;
use crate::utils::error::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One compound's property bag as delivered by the upstream ChEMBL
/// retrieval layer. The shape is externally defined; this crate only reads
/// the nested `molecule_properties` mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundRecord {
    pub data: HashMap<String, serde_json::Value>,
}

impl CompoundRecord {
    pub fn new(data: HashMap<String, serde_json::Value>) -> Self {
        Self { data }
    }

    /// Looks up an integer attribute under `molecule_properties`.
    ///
    /// Returns `Ok(None)` when the attribute is absent or null. A record
    /// without a `molecule_properties` mapping violates the input schema and
    /// surfaces as an error; schema conformance is the caller's precondition.
    /// ChEMBL sometimes delivers counts as numeric strings, so those are
    /// parsed too.
    pub fn molecule_property(&self, field_name: &str) -> Result<Option<i64>> {
        let properties = self
            .data
            .get("molecule_properties")
            .ok_or_else(|| DashError::MalformedRecordError {
                message: "record has no molecule_properties mapping".to_string(),
            })?;

        let properties =
            properties
                .as_object()
                .ok_or_else(|| DashError::MalformedRecordError {
                    message: "molecule_properties is not a mapping".to_string(),
                })?;

        match properties.get(field_name) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(serde_json::Value::Number(n)) => {
                n.as_i64()
                    .map(Some)
                    .ok_or_else(|| DashError::MalformedRecordError {
                        message: format!("{} is not an integer: {}", field_name, n),
                    })
            }
            Some(serde_json::Value::String(s)) => {
                s.trim()
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| DashError::MalformedRecordError {
                        message: format!("{} is not an integer: '{}'", field_name, s),
                    })
            }
            Some(other) => Err(DashError::MalformedRecordError {
                message: format!("{} has unsupported type: {}", field_name, other),
            }),
        }
    }
}

/// Summary statistics for one molecular property across all usable records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub component: String,
    pub data: Vec<i64>,
    pub mean: f64,
    pub std: f64,
    pub min_value: i64,
    pub max_value: i64,
}

/// One dashboard component ready for rendering: the statistics plus the
/// histogram figure derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentOutput {
    pub summary: PropertySummary,
    pub figure: Figure,
}

#[derive(Debug, Clone)]
pub struct DashboardBundle {
    pub components: Vec<ComponentOutput>,
    pub csv_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: serde_json::Value) -> CompoundRecord {
        let serde_json::Value::Object(obj) = json else {
            panic!("test record must be an object");
        };
        CompoundRecord::new(obj.into_iter().collect())
    }

    #[test]
    fn test_molecule_property_integer_value() {
        let r = record(serde_json::json!({"molecule_properties": {"aromatic_rings": 3}}));
        assert_eq!(r.molecule_property("aromatic_rings").unwrap(), Some(3));
    }

    #[test]
    fn test_molecule_property_numeric_string_value() {
        let r = record(serde_json::json!({"molecule_properties": {"num_ro5_violations": "2"}}));
        assert_eq!(r.molecule_property("num_ro5_violations").unwrap(), Some(2));
    }

    #[test]
    fn test_molecule_property_null_is_absent() {
        let r = record(serde_json::json!({"molecule_properties": {"aromatic_rings": null}}));
        assert_eq!(r.molecule_property("aromatic_rings").unwrap(), None);
    }

    #[test]
    fn test_molecule_property_missing_attribute_is_absent() {
        let r = record(serde_json::json!({"molecule_properties": {}}));
        assert_eq!(r.molecule_property("aromatic_rings").unwrap(), None);
    }

    #[test]
    fn test_molecule_property_zero_is_a_value() {
        let r = record(serde_json::json!({"molecule_properties": {"num_ro5_violations": 0}}));
        assert_eq!(r.molecule_property("num_ro5_violations").unwrap(), Some(0));
    }

    #[test]
    fn test_missing_molecule_properties_is_malformed() {
        let r = record(serde_json::json!({"molecule_chembl_id": "CHEMBL25"}));
        let err = r.molecule_property("aromatic_rings").unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::DashError::MalformedRecordError { .. }
        ));
    }

    #[test]
    fn test_non_mapping_molecule_properties_is_malformed() {
        let r = record(serde_json::json!({"molecule_properties": [1, 2, 3]}));
        assert!(r.molecule_property("aromatic_rings").is_err());
    }

    #[test]
    fn test_unparseable_string_is_malformed() {
        let r = record(serde_json::json!({"molecule_properties": {"aromatic_rings": "many"}}));
        assert!(r.molecule_property("aromatic_rings").is_err());
    }
}
