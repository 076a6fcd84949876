pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::session::HttpSession;
pub use adapters::storage::LocalStorage;
pub use config::CliConfig;
pub use core::orchestrator::{CourseScraper, Credentials};
pub use domain::model::{CourseListing, ScheduleRecord};
pub use utils::error::{Result, ScrapeError};
