use clap::Parser;
use multiples_etl::utils::{logger, validation::Validate};
use multiples_etl::{CliConfig, LocalStorage, MultiplesPipeline, PipelineEngine};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting multiples-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new();
    let pipeline = MultiplesPipeline::new(storage, config);
    let engine = PipelineEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("Run failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
