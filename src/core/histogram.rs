use crate::utils::error::{DashError, Result};
use serde::{Deserialize, Serialize};

/// Fixed y-axis title shared by every property histogram.
const FREQUENCY_AXIS_TITLE: &str = "Frequency";
/// Top margin in pixels; the dashboard supplies its own component headers.
const TOP_MARGIN: u32 = 5;
const BAR_BORDER_WIDTH: u32 = 3;
const X_AXIS_DTICK: u32 = 1;

/// Fill and border colors for a property's bars, as `#rrggbb` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramStyle {
    pub fill_color: String,
    pub border_color: String,
}

impl HistogramStyle {
    pub fn new(fill_color: impl Into<String>, border_color: impl Into<String>) -> Self {
        Self {
            fill_color: fill_color.into(),
            border_color: border_color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub width: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
    pub line: MarkerLine,
}

/// Bin range metadata: one unit of padding on each side of the data,
/// bin width exactly 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinRange {
    pub start: i64,
    pub end: i64,
    pub size: i64,
}

/// One bar per integer value in `[min, max]`: `x` holds the bin values,
/// `y` the frequencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistogramTrace {
    pub x: Vec<i64>,
    pub y: Vec<u64>,
    pub marker: Marker,
    pub xbins: BinRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtick: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub t: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub margin: Margin,
}

/// A renderable histogram description consumable by the dashboard's layout
/// tree. Serializes to a plotly-style `{data, layout}` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<HistogramTrace>,
    pub layout: Layout,
}

/// Builds a histogram figure over discrete integer counts.
///
/// `values` must be non-empty: the bin range is derived from the data, and
/// the only callers hold a non-empty `PropertySummary`. An empty slice is a
/// precondition violation and fails loudly rather than guessing a range.
pub fn render_histogram(values: &[i64], axis_title: &str, style: &HistogramStyle) -> Result<Figure> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Err(DashError::ProcessingError {
            message: "cannot render a histogram over an empty value list".to_string(),
        });
    };

    let mut x = Vec::with_capacity((max - min + 1) as usize);
    let mut y = Vec::with_capacity((max - min + 1) as usize);
    for bin in min..=max {
        x.push(bin);
        y.push(values.iter().filter(|&&v| v == bin).count() as u64);
    }

    Ok(Figure {
        data: vec![HistogramTrace {
            x,
            y,
            marker: Marker {
                color: style.fill_color.clone(),
                line: MarkerLine {
                    width: BAR_BORDER_WIDTH,
                    color: style.border_color.clone(),
                },
            },
            xbins: BinRange {
                start: min - 1,
                end: max + 1,
                size: 1,
            },
        }],
        layout: Layout {
            xaxis: Axis {
                title: axis_title.to_string(),
                dtick: Some(X_AXIS_DTICK),
            },
            yaxis: Axis {
                title: FREQUENCY_AXIS_TITLE.to_string(),
                dtick: None,
            },
            margin: Margin { t: TOP_MARGIN },
        },
    })
}
