use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use terraless_switch_roles::{ConfigLoader, ConfigRenderer, Extension, TerralessData, TracingLogger};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};

/// Render AWS Extend Switch Roles configuration from a Terraless config
///
/// The generated profiles are written to the log at info level.
#[derive(Parser, Debug)]
#[command(name = "terraless-switch-roles")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Terraless global configuration (TOML)
    ///
    /// If not specified, looks in order for:
    /// 1. $TERRALESS_CONFIG
    /// 2. ./terraless.toml
    /// 3. ~/.config/terraless/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Log to file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn setup_logging(log_level: &str, log_file: Option<PathBuf>) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env()
        .add_directive(level.into());

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true);

    if let Some(log_path) = log_file {
        let file = std::fs::File::create(log_path)?;
        subscriber.with_ansi(false).with_writer(file).init();
    } else {
        subscriber.with_writer(std::io::stderr).init();
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    setup_logging(&args.log_level, args.log_file)?;

    let global_config = match ConfigLoader::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let logger = TracingLogger::new().child("terraless");
    let extension = ConfigRenderer::new(Arc::new(logger));
    let extension_info = extension.info();
    info!("Running {} v{}", extension_info.name, extension_info.version);

    extension.exec(&global_config, &TerralessData::default())?;

    Ok(())
}
