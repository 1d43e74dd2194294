use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{CompoundRecord, ComponentOutput, DashboardBundle};
use crate::utils::error::{DashError, Result};
use serde::Serialize;
use std::collections::HashMap;

const DASHBOARD_FILENAME: &str = "dashboard.json";
const SUMMARY_CSV_FILENAME: &str = "summary.csv";

#[derive(Serialize)]
struct DashboardDocument<'a> {
    generated_at: String,
    components: &'a [ComponentOutput],
}

pub struct DashboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DashboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn build_summary_csv(components: &[ComponentOutput]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer.write_record(["component", "count", "mean", "std", "min_value", "max_value"])?;

        for output in components {
            let summary = &output.summary;
            writer.write_record([
                summary.component.clone(),
                summary.data.len().to_string(),
                summary.mean.to_string(),
                summary.std.to_string(),
                summary.min_value.to_string(),
                summary.max_value.to_string(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| DashError::ProcessingError {
                message: format!("failed to finish CSV output: {}", e),
            })?;
        String::from_utf8(bytes).map_err(|e| DashError::ProcessingError {
            message: format!("CSV output is not valid UTF-8: {}", e),
        })
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CompoundRecord>> {
        tracing::debug!("Reading compound records from: {}", self.config.input_path());
        let raw = self.storage.read_file(self.config.input_path()).await?;
        let json_data: serde_json::Value = serde_json::from_slice(&raw)?;

        let mut records = Vec::new();
        match json_data {
            serde_json::Value::Array(items) => {
                for item in items {
                    if let serde_json::Value::Object(obj) = item {
                        let mut data = HashMap::new();
                        for (key, value) in obj {
                            data.insert(key, value);
                        }
                        records.push(CompoundRecord::new(data));
                    } else {
                        return Err(DashError::MalformedRecordError {
                            message: format!("expected a record object, got: {}", item),
                        });
                    }
                }
            }
            // A single record is wrapped rather than rejected.
            serde_json::Value::Object(obj) => {
                let mut data = HashMap::new();
                for (key, value) in obj {
                    data.insert(key, value);
                }
                records.push(CompoundRecord::new(data));
            }
            other => {
                return Err(DashError::MalformedRecordError {
                    message: format!("expected an array of record objects, got: {}", other),
                });
            }
        }

        tracing::debug!("Parsed {} compound records", records.len());
        Ok(records)
    }

    async fn transform(&self, records: Vec<CompoundRecord>) -> Result<DashboardBundle> {
        let mut components = Vec::new();

        for component in self.config.components()? {
            match component.summarize(&records)? {
                Some(summary) => {
                    let figure = component.chart(&summary)?;
                    tracing::debug!(
                        "Component '{}': {} values, mean {:.3}",
                        summary.component,
                        summary.data.len(),
                        summary.mean
                    );
                    components.push(ComponentOutput { summary, figure });
                }
                None => {
                    tracing::warn!(
                        "No usable '{}' values, skipping component '{}'",
                        component.field_name,
                        component.display_name
                    );
                }
            }
        }

        let csv_output = Self::build_summary_csv(&components)?;

        Ok(DashboardBundle {
            components,
            csv_output,
        })
    }

    async fn load(&self, bundle: DashboardBundle) -> Result<String> {
        let document = DashboardDocument {
            generated_at: chrono::Utc::now().to_rfc3339(),
            components: &bundle.components,
        };
        let json_data = serde_json::to_string_pretty(&document)?;

        tracing::debug!(
            "Writing dashboard output ({} components) to storage",
            bundle.components.len()
        );
        self.storage
            .write_file(DASHBOARD_FILENAME, json_data.as_bytes())
            .await?;
        self.storage
            .write_file(SUMMARY_CSV_FILENAME, bundle.csv_output.as_bytes())
            .await?;

        Ok(self.config.output_path().to_string())
    }
}
