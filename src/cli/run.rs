// src/cli/run.rs
use dialoguer::{theme::ColorfulTheme, Input};
use tracing::{error, info};

use crate::config::Config;
use crate::extractor::{ContactExtractor, ContactReport};
use crate::fetcher::PageFetcher;
use crate::models::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct CliApp {
    fetcher: PageFetcher,
    extractor: ContactExtractor,
}

impl CliApp {
    pub fn new(config: &Config) -> Self {
        Self {
            fetcher: PageFetcher::new(&config.fetch),
            extractor: ContactExtractor::new(),
        }
    }

    pub async fn run(&self) -> Result<()> {
        loop {
            print_banner();

            let url: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Enter the full URL to scrape (empty to exit)")
                .allow_empty(true)
                .interact_text()?;

            if url.trim().is_empty() {
                println!("\nGoodbye!\n");
                break;
            }

            match self.lookup(&url).await {
                Ok(report) => {
                    println!("\n{}", serde_json::to_string_pretty(&report)?);
                }
                Err(e) => {
                    error!("Lookup failed for {}: {}", url, e);
                }
            }
        }

        Ok(())
    }

    /// One fetch, one extraction pass, one report.
    pub async fn lookup(&self, url: &str) -> Result<ContactReport> {
        let body = self.fetcher.fetch(url).await?;
        let result = self.extractor.extract(&body);

        info!(
            "Scraped {}: {} phones, {} faxes, {} emails, {} social links",
            url,
            result.phone_numbers.len(),
            result.fax_numbers.len(),
            result.emails.len(),
            result.social_profiles.len()
        );

        Ok(result.to_report())
    }
}

fn print_banner() {
    println!(
        "\n🔎 InfoHarvest: Website Contact Info Scraper (v{})",
        VERSION
    );
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
