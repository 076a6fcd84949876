use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

pub const DEFAULT_BASE_URL: &str = "https://www.epiclearningnetwork.com";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "eln-scraper")]
#[command(about = "Scrapes Fast Lane US class schedules from the Epic Learning Network")]
pub struct CliConfig {
    /// Portal root. The login form posts here.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Course listing page. Defaults to {base_url}/courses/.
    #[arg(long)]
    pub courses_url: Option<String>,

    /// Login email. Prompted for interactively when omitted.
    #[arg(long)]
    pub email: Option<String>,

    /// Login password. Prompted for interactively when omitted.
    #[arg(long)]
    pub password: Option<String>,

    /// Where the CSV export is written.
    #[arg(long, default_value = "class_schedules.csv")]
    pub output_file: String,

    /// Also print the scraped records as pretty JSON on stdout.
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn courses_url(&self) -> String {
        self.courses_url.clone().unwrap_or_else(|| {
            format!("{}/courses/", self.base_url.trim_end_matches('/'))
        })
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(url) = &self.courses_url {
            validate_url("courses_url", url)?;
        }
        validate_non_empty_string("output_file", &self.output_file)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CliConfig {
        CliConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            courses_url: None,
            email: None,
            password: None,
            output_file: "class_schedules.csv".to_string(),
            json: false,
            verbose: false,
        }
    }

    #[test]
    fn courses_url_derives_from_base_url() {
        assert_eq!(
            config().courses_url(),
            "https://www.epiclearningnetwork.com/courses/"
        );

        let mut with_slash = config();
        with_slash.base_url = "https://portal.test/".to_string();
        assert_eq!(with_slash.courses_url(), "https://portal.test/courses/");
    }

    #[test]
    fn explicit_courses_url_wins() {
        let mut cfg = config();
        cfg.courses_url = Some("https://portal.test/catalog/".to_string());
        assert_eq!(cfg.courses_url(), "https://portal.test/catalog/");
    }

    #[test]
    fn validation_rejects_bad_base_url() {
        let mut cfg = config();
        cfg.base_url = "not a url".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn default_config_validates() {
        assert!(config().validate().is_ok());
    }
}
