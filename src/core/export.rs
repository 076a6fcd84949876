use crate::domain::model::{ScheduleRecord, CSV_COLUMNS};
use crate::utils::error::{Result, ScrapeError};

/// Render records as CSV bytes: the fixed header row, then one row per
/// record in scrape order. Delimiter escaping is left to the csv writer.
pub fn records_to_csv(records: &[ScheduleRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_COLUMNS)?;
    for record in records {
        writer.write_record(record.as_row())?;
    }
    writer
        .into_inner()
        .map_err(|e| ScrapeError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> ScheduleRecord {
        ScheduleRecord {
            course_code: "AWS-ADVDEV".to_string(),
            course_title: "AWS-ADVDEV: Advanced Developing on AWS".to_string(),
            start_date: "Sep 1, 2025".to_string(),
            start_time: "9:00 AM".to_string(),
            partner: "Fast Lane US".to_string(),
            days: "3".to_string(),
            status: "Guaranteed".to_string(),
            retail_price: "$2,025".to_string(),
            epic_price: "$1,620".to_string(),
            cw_included: "Yes".to_string(),
            last_updated: "08/15/2025".to_string(),
            student_count: "4".to_string(),
            registration_link: "/register?id=17".to_string(),
        }
    }

    #[test]
    fn empty_export_still_has_header() {
        let bytes = records_to_csv(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text.trim_end(),
            "Course Code,Course Title,Start Date,Start Time,Partner,Days,Status,\
             Retail Price,Epic Price,CW Included,Last Updated,Student Count,Registration Link"
        );
    }

    #[test]
    fn records_are_quoted_where_needed() {
        let bytes = records_to_csv(&[sample_record()]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        // Fields containing commas get quoted, the rest stay verbatim.
        assert!(lines[1].contains("AWS-ADVDEV: Advanced Developing on AWS"));
        assert!(lines[1].contains(r#""Sep 1, 2025""#));
        assert!(lines[1].contains(r#""$2,025""#));
        assert!(lines[1].contains("/register?id=17"));
        assert!(lines[1].starts_with("AWS-ADVDEV,"));
    }

    #[test]
    fn rows_follow_input_order() {
        let mut second = sample_record();
        second.course_code = "GCP-ARCH".to_string();
        let bytes = records_to_csv(&[sample_record(), second]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("AWS-ADVDEV,"));
        assert!(lines[2].starts_with("GCP-ARCH,"));
    }
}
