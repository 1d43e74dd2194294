// Domain layer: core models and ports (interfaces).

pub mod model;
pub mod ports;

pub use crate::domain::model::{CompoundRecord, DashboardBundle, PropertySummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
