//! CLI for bcdl: one positional argument, the album page URL.

use anyhow::Result;
use bcdl_core::config;
use bcdl_core::http::CurlClient;
use bcdl_core::pipeline;
use clap::Parser;

/// Download every track of an album page into `<artist>/<album>/`.
#[derive(Debug, Parser)]
#[command(name = "bcdl", version)]
#[command(about = "Download every track of an album page into <artist>/<album>/", long_about = None)]
pub struct Cli {
    /// Album page URL.
    pub url: String,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let url = self.url.trim();
        println!("Downloading {}", url);

        let client = CurlClient::from_config(&cfg);
        let report = pipeline::download_album_page(url, &cfg, &client, |event| {
            println!("{}", event)
        })?;

        tracing::info!(
            directory = %report.directory.display(),
            downloaded = report.downloaded.len(),
            skipped = report.skipped.len(),
            "album complete"
        );
        Ok(())
    }
}
