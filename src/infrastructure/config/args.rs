use super::app_config::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "camfeed",
    version,
    about = "Resolve, decorate and preload webcam images",
    long_about = None
)]
pub struct CliArgs {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags shared by every subcommand.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH", global = true)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevel>,

    /// Prefix for site-relative references.
    #[arg(short, long, value_name = "PATH", global = true)]
    pub base_path: Option<String>,

    /// Origin used to fetch site-relative urls.
    #[arg(long, value_name = "URL", global = true)]
    pub origin: Option<String>,

    /// Directory serving site-relative urls.
    #[arg(long, value_name = "DIR", global = true)]
    pub public_dir: Option<PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout_secs: Option<u64>,

    /// Do not append a timestamp to webcam urls.
    #[arg(long, global = true)]
    pub no_cache_bust: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve an image reference to a url.
    Resolve {
        /// Reference to resolve; omit for the placeholder.
        reference: Option<String>,
    },
    /// Append a cache-busting timestamp.
    Bust {
        /// Url to decorate.
        url: String,
        /// Timestamp to use instead of the current time.
        #[arg(short, long)]
        timestamp: Option<i64>,
    },
    /// Add size and quality parameters for known image hosts.
    Optimize {
        /// Url to optimize.
        url: String,
        /// Target width.
        #[arg(long)]
        width: Option<u32>,
        /// Target height.
        #[arg(long)]
        height: Option<u32>,
        /// Encoder quality.
        #[arg(long)]
        quality: Option<u8>,
    },
    /// Print the fallback chain for a webcam.
    Chain {
        /// Webcam identifier.
        id: String,
    },
    /// Preload urls and report which ones load.
    Preload {
        /// Urls or references to preload.
        #[arg(required = true)]
        urls: Vec<String>,
    },
    /// Pick the first loadable image for each webcam.
    Webcams {
        /// Webcam identifiers; defaults to every configured webcam.
        ids: Vec<String>,
    },
    /// Refresh webcam images periodically until interrupted.
    Watch {
        /// Webcam identifiers; defaults to every configured webcam.
        ids: Vec<String>,
        /// Seconds between refreshes.
        #[arg(short, long)]
        interval_secs: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "camfeed",
            "resolve",
            "/images/foo.jpg",
            "--base-path",
            "/app",
            "--json",
        ])
        .expect("valid args");

        assert_eq!(args.global.base_path.as_deref(), Some("/app"));
        assert!(args.global.json);
        assert!(matches!(
            args.command,
            Command::Resolve { reference: Some(ref r) } if r == "/images/foo.jpg"
        ));
    }

    #[test]
    fn test_preload_requires_urls() {
        assert!(CliArgs::try_parse_from(["camfeed", "preload"]).is_err());
    }

    #[test]
    fn test_parse_bust_timestamp() {
        let args = CliArgs::try_parse_from(["camfeed", "bust", "/cam.jpg", "-t", "99"])
            .expect("valid args");
        assert!(matches!(
            args.command,
            Command::Bust { timestamp: Some(99), .. }
        ));
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
