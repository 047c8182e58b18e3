use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use camfeed::infrastructure::{AppConfig, CliArgs, ConfigSource, StorageManager};
use camfeed::presentation::{App, OutputFormat};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<(AppConfig, ConfigSource)> {
    let storage = StorageManager::new()?;
    Ok(storage.load_config(args.global.config.as_deref())?)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (mut config, source) = load_config(&args)?;
    let format = OutputFormat::from_json_flag(args.global.json);
    config.merge_with_args(args.global);

    init_logging(&config)?;
    source.log();
    info!(version = camfeed::VERSION, "Starting camfeed");

    let app = App::from_config(config, format)?;
    app.run(args.command, std::io::stdout()).await?;

    Ok(())
}
