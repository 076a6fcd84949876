use serde::{Deserialize, Serialize};

/// Training partner whose class instances are collected. Rows offered by any
/// other partner are skipped during parsing.
pub const PARTNER_FILTER: &str = "Fast Lane US";

/// Fixed column order for CSV export. The header row is written on every
/// export, even when no records were found.
pub const CSV_COLUMNS: [&str; 13] = [
    "Course Code",
    "Course Title",
    "Start Date",
    "Start Time",
    "Partner",
    "Days",
    "Status",
    "Retail Price",
    "Epic Price",
    "CW Included",
    "Last Updated",
    "Student Count",
    "Registration Link",
];

/// One entry on the course listing page: a detail-page link and the course
/// title, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseListing {
    pub detail_url: String,
    pub title: String,
}

/// One normalized, partner-filtered class instance from a course detail page.
/// Every field is a verbatim trimmed string; a cell missing from the source
/// markup leaves its field empty rather than failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub course_code: String,
    pub course_title: String,
    pub start_date: String,
    pub start_time: String,
    pub partner: String,
    pub days: String,
    pub status: String,
    pub retail_price: String,
    pub epic_price: String,
    pub cw_included: String,
    pub last_updated: String,
    pub student_count: String,
    pub registration_link: String,
}

impl ScheduleRecord {
    /// Field values in [`CSV_COLUMNS`] order.
    pub fn as_row(&self) -> [&str; 13] {
        [
            &self.course_code,
            &self.course_title,
            &self.start_date,
            &self.start_time,
            &self.partner,
            &self.days,
            &self.status,
            &self.retail_price,
            &self.epic_price,
            &self.cw_included,
            &self.last_updated,
            &self.student_count,
            &self.registration_link,
        ]
    }
}
