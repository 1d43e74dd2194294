use crate::domain::model::{CompoundRecord, PropertySummary};
use crate::utils::error::Result;

/// Extracts one integer attribute from every record's `molecule_properties`
/// and computes summary statistics over the usable values.
///
/// Values are collected in input order. Absent and null attributes are
/// skipped; a genuine zero counts as a value. When no record contributes a
/// value (including empty input) the result is `None` — statistics are never
/// taken over an empty sequence.
pub fn summarize(
    records: &[CompoundRecord],
    field_name: &str,
    display_name: &str,
) -> Result<Option<PropertySummary>> {
    let mut data = Vec::with_capacity(records.len());
    for record in records {
        if let Some(value) = record.molecule_property(field_name)? {
            data.push(value);
        }
    }

    if data.is_empty() {
        tracing::debug!("No usable '{}' values in input", field_name);
        return Ok(None);
    }

    let mean = mean(&data);
    let std = population_std(&data, mean);
    let min_value = *data.iter().min().unwrap_or(&0);
    let max_value = *data.iter().max().unwrap_or(&0);

    Ok(Some(PropertySummary {
        component: display_name.to_string(),
        data,
        mean,
        std,
        min_value,
        max_value,
    }))
}

fn mean(values: &[i64]) -> f64 {
    let sum: i64 = values.iter().sum();
    sum as f64 / values.len() as f64
}

// Population standard deviation: divide by N, not N-1.
fn population_std(values: &[i64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}
