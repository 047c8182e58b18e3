//! Text and JSON rendering of command results.

use std::io::{self, Write};

use serde::Serialize;

use crate::application::dto::{PreloadReport, WebcamImage};
use crate::domain::entities::FallbackChain;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable lines.
    #[default]
    Text,
    /// One JSON document per result.
    Json,
}

impl OutputFormat {
    /// Picks the format from the `--json` flag.
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

/// Writes results to an output stream.
pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter.
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes a single url.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub fn url(&mut self, url: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{url}"),
            OutputFormat::Json => self.json(&serde_json::json!({ "url": url })),
        }
    }

    /// Writes a fallback chain, one entry per line.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub fn chain(&mut self, chain: &FallbackChain) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for url in chain {
                    writeln!(self.out, "{url}")?;
                }
                Ok(())
            }
            OutputFormat::Json => self.json(&serde_json::json!({ "chain": chain.entries() })),
        }
    }

    /// Writes a preload report.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub fn preload(&mut self, report: &PreloadReport) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for url in &report.successful {
                    writeln!(self.out, "ok    {url}")?;
                }
                for failure in &report.failed {
                    writeln!(self.out, "fail  {}  ({})", failure.url, failure.reason)?;
                }
                writeln!(
                    self.out,
                    "{} loaded, {} failed",
                    report.successful.len(),
                    report.failed.len()
                )
            }
            OutputFormat::Json => self.json(report),
        }
    }

    /// Writes the chosen image per webcam.
    ///
    /// # Errors
    /// Returns error if writing fails.
    pub fn webcams(&mut self, images: &[WebcamImage]) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for image in images {
                    let marker = match (image.verified, image.position) {
                        (false, _) => "none",
                        (true, 0) => "live",
                        (true, _) => "fallback",
                    };
                    writeln!(
                        self.out,
                        "{:<9} {}  {}",
                        marker,
                        image.webcam.display_name(),
                        image.url
                    )?;
                }
                Ok(())
            }
            OutputFormat::Json => self.json(images),
        }
    }

    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, value).map_err(io::Error::other)?;
        writeln!(self.out)
    }
}
