use clap::error::ErrorKind;
use clap::Parser;
use yogurt_etl::config::USAGE;
use yogurt_etl::utils::{logger, validation::Validate};
use yogurt_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, YogurtPipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let err = EtlError::from(e);
            eprintln!("{}", err.user_friendly_message());
            std::process::exit(err.exit_code());
        }
    };

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting yogurt-etl");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("{}", USAGE);
        std::process::exit(e.exit_code());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new();
    let pipeline = YogurtPipeline::new(storage, config);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            tracing::info!(
                "✅ Classified {} products ({} yogurt, {} plain)",
                report.total_count,
                report.yogurt_count,
                report.plain_count
            );
            println!(
                "Transformation complete! Data written to {}",
                report.output_path
            );
        }
        Err(e) => {
            tracing::error!("❌ ETL process failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
