use clap::Parser;
use registry_etl::utils::{logger, validation::Validate};
use registry_etl::{CliConfig, CsvSource, CsvTarget, DomainPipeline, EtlEngine, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting registry-etl");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = TomlConfig::from_file(&cli.config)?;
    config.validate()?;

    let mut pipelines = Vec::new();
    for domain in &config.domains {
        pipelines.push(DomainPipeline {
            source: Box::new(CsvSource::new(&domain.source)),
            target: Box::new(CsvTarget::new(&domain.target)),
            tag: domain.domain()?,
        });
    }

    let engine = EtlEngine::new(pipelines);
    let report = engine.run().await;

    tracing::info!(
        "Run summary: {}",
        serde_json::to_string_pretty(&report.summary())?
    );

    if report.is_success() {
        println!("ETL run completed: {} rows loaded", report.total_rows());
    } else {
        for failure in &report.failures {
            eprintln!("Domain '{}' failed: {}", failure.domain, failure.error);
        }
        std::process::exit(1);
    }

    Ok(())
}
