use std::path::PathBuf;

use clap::{Parser, Subcommand};
use scrapers::{Config, pagination};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Job board and photo search scrapers")]
pub struct Args {
    /// TOML config file; built-in defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Page through the job board and write the listings to CSV.
    Jobs {
        #[arg(long, default_value = "150", value_parser = target_count)]
        listings: u32,

        #[arg(long, default_value = "jobs.csv")]
        output: PathBuf,

        #[arg(long)]
        webdriver_url: Option<String>,

        /// Show the browser window.
        #[arg(long, default_value_t = false)]
        headful: bool,
    },

    /// Download the best variant of each search result image.
    Images {
        /// Search terms; defaults to a list of animals.
        terms: Vec<String>,

        /// Prefix for saved file names; defaults to the term.
        #[arg(long)]
        tag: Option<String>,

        #[arg(long)]
        output_dir: Option<String>,
    },
}

fn target_count(raw: &str) -> Result<u32, String> {
    pagination::parse_target_count(raw).map_err(|e| e.to_string())
}

impl Args {
    /// Folds command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        match &self.command {
            Command::Jobs {
                webdriver_url,
                headful,
                ..
            } => {
                if let Some(url) = webdriver_url {
                    config.jobs.webdriver_url = url.clone();
                }
                if *headful {
                    config.jobs.headless = false;
                }
            }
            Command::Images { output_dir, .. } => {
                if let Some(dir) = output_dir {
                    config.images.output_dir = dir.clone();
                }
            }
        }
    }
}
