use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use scrapers::{Config, images, jobs, logging, save_to_csv};

mod cli;

use crate::cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.as_deref()).context("loading config")?;
    args.apply(&mut config);
    logging::init(&config.log)?;

    match args.command {
        Command::Jobs {
            listings, output, ..
        } => {
            let found = jobs::scrape(&config.jobs, listings)
                .await
                .context("scraping job board")?;
            save_to_csv(&found, &output)
                .with_context(|| format!("writing {}", output.display()))?;
            info!(listings = found.len(), path = %output.display(), "saved job listings");
        }
        Command::Images { terms, tag, .. } => {
            let terms = if terms.is_empty() {
                images::DEFAULT_TERMS.iter().map(|t| t.to_string()).collect()
            } else {
                terms
            };
            let summaries = images::scrape_terms(&terms, tag.as_deref(), &config.images)
                .await
                .context("scraping images")?;

            let saved: usize = summaries.iter().map(|s| s.saved).sum();
            for s in &summaries {
                info!(term = %s.term, selected = s.selected, saved = s.saved, "term done");
            }
            info!(terms = summaries.len(), saved, "image scrape finished");
        }
    }

    Ok(())
}
