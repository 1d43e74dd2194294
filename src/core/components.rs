use crate::core::histogram::{render_histogram, Figure, HistogramStyle};
use crate::core::summary::summarize;
use crate::domain::model::{CompoundRecord, PropertySummary};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// One dashboard property component: which attribute to extract and how to
/// label and color its histogram. The built-in properties only differ in
/// these parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyComponent {
    pub field_name: String,
    pub display_name: String,
    pub axis_title: String,
    pub style: HistogramStyle,
}

impl PropertyComponent {
    pub fn new(
        field_name: impl Into<String>,
        display_name: impl Into<String>,
        axis_title: impl Into<String>,
        style: HistogramStyle,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            display_name: display_name.into(),
            axis_title: axis_title.into(),
            style,
        }
    }

    pub fn aromatic_rings() -> Self {
        Self::new(
            "aromatic_rings",
            "Number of aromatic rings",
            "Number of aromatic rings",
            HistogramStyle::new("#92d050", "#73A340"),
        )
    }

    pub fn ro5_violations() -> Self {
        Self::new(
            "num_ro5_violations",
            "Number of ro5 violations",
            "Number of `rule of five` violations",
            HistogramStyle::new("#002060", "#011745"),
        )
    }

    /// Returns the preset for a field name used on the CLI, if one exists.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "aromatic_rings" => Some(Self::aromatic_rings()),
            "num_ro5_violations" => Some(Self::ro5_violations()),
            _ => None,
        }
    }

    pub fn preset_names() -> &'static [&'static str] {
        &["aromatic_rings", "num_ro5_violations"]
    }

    pub fn summarize(&self, records: &[CompoundRecord]) -> Result<Option<PropertySummary>> {
        summarize(records, &self.field_name, &self.display_name)
    }

    pub fn chart(&self, summary: &PropertySummary) -> Result<Figure> {
        render_histogram(&summary.data, &self.axis_title, &self.style)
    }
}
