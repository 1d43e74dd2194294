pub mod components;
pub mod engine;
pub mod histogram;
pub mod pipeline;
pub mod summary;

pub use crate::domain::model::{CompoundRecord, DashboardBundle, PropertySummary};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
