use clap::Parser;
use sensor_match::utils::{logger, validation::Validate};
use sensor_match::{CliConfig, LocalStorage, MatchEngine, SensorPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sensor-match");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.data_dir.clone());
    let pipeline = SensorPipeline::new(storage, config);
    let engine = MatchEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Matching complete");
            println!("✅ Matching complete. Results saved to {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ Matching failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
