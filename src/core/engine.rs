use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives the extract → transform → load stages of a pipeline.
pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Extracting compound records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", records.len());

        tracing::info!("Computing property summaries...");
        let bundle = self.pipeline.transform(records).await?;
        tracing::info!("Built {} dashboard components", bundle.components.len());

        tracing::info!("Writing dashboard output...");
        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
