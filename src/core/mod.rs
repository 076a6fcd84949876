pub mod export;
pub mod orchestrator;
pub mod parse;

pub use crate::domain::model::{CourseListing, ScheduleRecord, CSV_COLUMNS, PARTNER_FILTER};
pub use crate::domain::ports::{ConfigProvider, SessionDriver, Storage};
pub use crate::utils::error::Result;
