use anyhow::Context;
use chembl_props::core::ConfigProvider;
use chembl_props::utils::{logger, validation::Validate};
use chembl_props::{CliConfig, DashboardEngine, DashboardPipeline, LocalStorage, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting chembl-props");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Some(config_path) = cli.config.clone() {
        let config = TomlConfig::from_file(&config_path)
            .with_context(|| format!("Failed to load TOML config from {}", config_path))?;
        run(config).await
    } else {
        run(cli).await
    }
}

async fn run<C: ConfigProvider + Validate + 'static>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = DashboardPipeline::new(storage, config);
    let engine = DashboardEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Dashboard data generated successfully!");
            println!("✅ Dashboard data generated successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Dashboard generation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
