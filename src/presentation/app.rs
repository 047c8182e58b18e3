//! Command dispatcher for the `camfeed` binary.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::application::services::{
    add_cache_buster, add_cache_buster_now, build_fallback_chain, optimize_url, resolve_url,
};
use crate::application::use_cases::{LoadWebcamUseCase, Preloader};
use crate::domain::entities::Webcam;
use crate::domain::errors::LoadFailureReason;
use crate::domain::ports::ImageProbePort;
use crate::infrastructure::config::{AppConfig, Command};
use crate::infrastructure::image::{
    HttpImageProbe, HttpProbeConfig, ImageProbeRouter, LocalImageProbe,
};

use super::report::{OutputFormat, Reporter};

/// Builds the probe described by the preload configuration.
///
/// # Errors
/// Returns `InvalidUrl` if the configured origin does not parse, or `Network`
/// if the HTTP client cannot be created.
pub fn build_probe(config: &AppConfig) -> Result<ImageProbeRouter, LoadFailureReason> {
    let origin = config
        .preload
        .origin
        .as_deref()
        .map(Url::parse)
        .transpose()
        .map_err(|e| LoadFailureReason::invalid_url(format!("origin: {e}")))?;

    let http = HttpImageProbe::new(HttpProbeConfig {
        origin,
        timeout_secs: config.preload.timeout_secs,
        user_agent: config.preload.user_agent.clone(),
    })?;

    let router = ImageProbeRouter::new(Arc::new(http));
    Ok(match &config.preload.public_dir {
        Some(dir) => router.with_local(Arc::new(LocalImageProbe::new(
            dir.clone(),
            config.resolver.base_path.clone(),
        ))),
        None => router,
    })
}

/// Runs one command against the configured resolver and preloader.
pub struct App {
    config: AppConfig,
    preloader: Preloader,
    format: OutputFormat,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl App {
    /// Creates the app on top of an explicit probe.
    #[must_use]
    pub fn new(config: AppConfig, probe: Arc<dyn ImageProbePort>, format: OutputFormat) -> Self {
        Self {
            config,
            preloader: Preloader::new(probe),
            format,
        }
    }

    /// Creates the app with the probe built from `config`.
    ///
    /// # Errors
    /// Returns error if the probe cannot be built.
    pub fn from_config(config: AppConfig, format: OutputFormat) -> Result<Self, LoadFailureReason> {
        let probe = build_probe(&config)?;
        Ok(Self::new(config, Arc::new(probe), format))
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    fn webcam_loader(&self) -> LoadWebcamUseCase {
        LoadWebcamUseCase::new(self.preloader.clone(), self.config.resolver.base_path.clone())
            .with_cache_bust(self.config.preload.cache_bust)
    }

    /// Executes `command`, writing results to `out`.
    ///
    /// Load failures are part of the output, not errors.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub async fn run<W: Write>(&self, command: Command, out: W) -> io::Result<()> {
        let mut reporter = Reporter::new(out, self.format);
        let base = &self.config.resolver.base_path;

        match command {
            Command::Resolve { reference } => {
                reporter.url(&resolve_url(reference.as_deref(), base))?;
            }
            Command::Bust { url, timestamp } => {
                let busted = match timestamp {
                    Some(ts) => add_cache_buster(&url, ts),
                    None => add_cache_buster_now(&url),
                };
                reporter.url(&busted)?;
            }
            Command::Optimize {
                url,
                width,
                height,
                quality,
            } => {
                let mut options = self.config.optimize.clone();
                options.width = width.unwrap_or(options.width);
                options.height = height.unwrap_or(options.height);
                options.quality = quality.unwrap_or(options.quality);
                reporter.url(&optimize_url(
                    &url,
                    &options,
                    &self.config.resolver.optimize_hosts,
                ))?;
            }
            Command::Chain { id } => {
                reporter.chain(&build_fallback_chain(&id, base))?;
            }
            Command::Preload { urls } => {
                let resolved: Vec<String> = urls
                    .iter()
                    .map(|u| resolve_url(Some(u.as_str()), base))
                    .collect();
                debug!(count = resolved.len(), "Preloading urls");
                let report = self.preloader.preload_all(&resolved).await;
                reporter.preload(&report)?;
            }
            Command::Webcams { ids } => {
                let webcams = self.config.select_webcams(&ids);
                let images = self.webcam_loader().execute_all(webcams).await;
                reporter.webcams(&images)?;
            }
            Command::Watch { ids, interval_secs } => {
                let period = interval_secs.unwrap_or(self.config.watch.interval_secs);
                let webcams = self.config.select_webcams(&ids);
                self.watch(webcams, Duration::from_secs(period.max(1)), &mut reporter)
                    .await?;
            }
        }

        Ok(())
    }

    async fn watch<W: Write>(
        &self,
        webcams: Vec<Webcam>,
        period: Duration,
        reporter: &mut Reporter<W>,
    ) -> io::Result<()> {
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "Cannot listen for Ctrl-C");
                std::future::pending::<()>().await;
            }
        };
        self.watch_until(webcams, period, reporter, shutdown).await
    }

    /// Reloads `webcams` every `period` until `shutdown` completes.
    ///
    /// A round in progress is abandoned as soon as `shutdown` fires.
    async fn watch_until<W: Write>(
        &self,
        webcams: Vec<Webcam>,
        period: Duration,
        reporter: &mut Reporter<W>,
        shutdown: impl Future<Output = ()>,
    ) -> io::Result<()> {
        tokio::pin!(shutdown);

        let loader = self.webcam_loader();
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(webcams = webcams.len(), period_secs = period.as_secs(), "Watching webcams");

        loop {
            tokio::select! {
                biased;
                () = &mut shutdown => break,
                _ = ticker.tick() => {}
            }

            tokio::select! {
                biased;
                () = &mut shutdown => break,
                images = loader.execute_all(webcams.clone()) => reporter.webcams(&images)?,
            }
        }

        info!("Interrupted, stopping watch");
        Ok(())
    }
}
