use clap::Parser;
use sensor_match::config::toml_config::TomlConfig;
use sensor_match::utils::{logger, validation::Validate};
use sensor_match::{LocalStorage, MatchEngine, SensorPipeline};

#[derive(Parser)]
#[command(name = "toml-match")]
#[command(about = "Sensor proximity matching driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "sensor-match.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("Loading configuration from: {}", args.config);
    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("Running pipeline '{}'", config.pipeline.name);

    let storage = LocalStorage::new(config.data_dir().to_string());
    let pipeline = SensorPipeline::new(storage, config);
    let engine = MatchEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Matching complete. Results saved to {}", output_path);
        }
        Err(e) => {
            tracing::error!("Matching failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
