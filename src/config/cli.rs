use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "registry-etl")]
#[command(about = "Normalizes per-domain registry records into one canonical table shape")]
pub struct CliConfig {
    /// Path to the pipeline TOML configuration.
    #[arg(long, default_value = "etl.toml")]
    pub config: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
