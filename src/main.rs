use anyhow::Context;
use clap::Parser;
use location_geojson::config::LogFormat;
use location_geojson::utils::{logger, validation::Validate};
use location_geojson::{
    CliConfig, ConversionEngine, ConversionSummary, ConvertError, GeoJsonPipeline, LocalStorage,
};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting location-geojson");
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(summary) => {
            tracing::info!("✅ Conversion completed successfully!");
            println!(
                "✅ Wrote {} points and {} paths to {}",
                summary.points, summary.lines, summary.output_path
            );
            if summary.dropped > 0 {
                println!("⚠️ Skipped {} unparseable records", summary.dropped);
            }
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {:#}", e);

            let exit_code = match e.downcast_ref::<ConvertError>() {
                Some(err) => {
                    tracing::error!(
                        "Category: {:?}, Severity: {:?}",
                        err.category(),
                        err.severity()
                    );
                    eprintln!("❌ {}", err.user_friendly_message());
                    eprintln!("💡 Suggestion: {}", err.recovery_suggestion());
                    err.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(cli: &CliConfig) -> anyhow::Result<ConversionSummary> {
    // 驗證參數，輸入輸出相同時不碰任何檔案
    cli.validate()?;

    let config = cli.resolve().context("failed to resolve settings")?;

    let storage = LocalStorage::new(config.atomic_write);
    let pipeline = GeoJsonPipeline::new(storage, config);
    let engine = ConversionEngine::new(pipeline);

    let summary = engine
        .run()
        .with_context(|| format!("failed to convert {}", cli.input))?;
    Ok(summary)
}
