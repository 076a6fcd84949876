use clap::Parser;

use eln_scraper::core::export::records_to_csv;
use eln_scraper::domain::ports::{ConfigProvider, Storage};
use eln_scraper::utils::error::ScrapeError;
use eln_scraper::utils::validation::Validate;
use eln_scraper::utils::{input, logger};
use eln_scraper::{CliConfig, CourseScraper, Credentials, HttpSession, LocalStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting eln-scraper");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let credentials = match read_credentials(&config) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let session = match HttpSession::new(config.base_url()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Failed to build HTTP session: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    let scraper = CourseScraper::new(session, config.clone());

    let result = scraper
        .scrape_all(
            &credentials,
            |fraction| tracing::info!("progress: {:.0}%", fraction * 100.0),
            |message| println!("{message}"),
        )
        .await;

    match result {
        Ok(records) => {
            let csv_bytes = records_to_csv(&records)?;
            let storage = LocalStorage::new(".");
            storage.write_file(config.output_file(), &csv_bytes).await?;

            if config.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            }

            // An empty result is a completed run, not a failure.
            if records.is_empty() {
                println!("Scrape complete. No Fast Lane US classes found.");
            } else {
                println!("✅ Found {} Fast Lane US classes!", records.len());
            }
            println!("📁 Results saved to: {}", config.output_file());
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            eprintln!("❌ Scrape failed: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn read_credentials(config: &CliConfig) -> eln_scraper::Result<Credentials> {
    let email = match &config.email {
        Some(email) => email.clone(),
        None => input::prompt("Email: ")?,
    };
    if email.is_empty() {
        return Err(ScrapeError::MissingConfigError {
            field: "email".to_string(),
        });
    }

    let password = match &config.password {
        Some(password) => password.clone(),
        None => input::prompt_password("Password: ")?,
    };
    if password.is_empty() {
        return Err(ScrapeError::MissingConfigError {
            field: "password".to_string(),
        });
    }

    Ok(Credentials { email, password })
}
