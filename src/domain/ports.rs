use crate::core::components::PropertyComponent;
use crate::domain::model::{CompoundRecord, DashboardBundle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn components(&self) -> Result<Vec<PropertyComponent>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CompoundRecord>>;
    async fn transform(&self, records: Vec<CompoundRecord>) -> Result<DashboardBundle>;
    async fn load(&self, bundle: DashboardBundle) -> Result<String>;
}
