use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use crate::domain::model::{CourseListing, ScheduleRecord, PARTNER_FILTER};

// Structural markers used by the portal's markup. The site is not a stable
// API, so every lookup by these classes tolerates absence.
const SCHEDULE_TABLE: &str = "table.course-lp-table";
const SCHEDULE_ROW: &str = "tr.course-lp-info";
const LISTING_ROW: &str = "tr.course-info";
const TITLE_CELL: &str = "td.course-title";

static COURSE_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([^:]+):").unwrap());

/// Leading short code from a course title, e.g.
/// "AWS-ADVDEV: Advanced Developing on AWS" yields "AWS-ADVDEV".
/// Titles without a colon have no code and yield "".
pub fn derive_course_code(title: &str) -> String {
    COURSE_CODE_RE
        .captures(title)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of the first cell in `row` matching `marker`, or "" when the
/// cell is absent. Absence is data here, not an error.
pub fn extract_field(row: ElementRef<'_>, marker: &str) -> String {
    let cell_sel = Selector::parse(marker).unwrap();
    row.select(&cell_sel)
        .next()
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Href of the first anchor inside the cell matching `marker`, or "" when
/// either the cell or the anchor is missing. The URL is returned verbatim,
/// absolute or relative as the page provides it.
pub fn extract_link(row: ElementRef<'_>, marker: &str) -> String {
    let cell_sel = Selector::parse(marker).unwrap();
    let anchor_sel = Selector::parse("a").unwrap();
    row.select(&cell_sel)
        .next()
        .and_then(|cell| cell.select(&anchor_sel).next())
        .and_then(|anchor| anchor.value().attr("href"))
        .unwrap_or_default()
        .to_string()
}

/// Parse the class-schedule table out of one course detail page.
///
/// Rows whose partner cell does not read exactly "Fast Lane US" (after
/// trimming) contribute nothing. A page without a schedule table is a valid
/// page with no classes, not an error. Record order matches row order in the
/// source table; every field degrades independently to "" when its cell is
/// missing.
pub fn parse_class_schedule(html: &str, course_title: &str) -> Vec<ScheduleRecord> {
    let document = Html::parse_document(html);
    let table_sel = Selector::parse(SCHEDULE_TABLE).unwrap();
    let row_sel = Selector::parse(SCHEDULE_ROW).unwrap();

    let Some(table) = document.select(&table_sel).next() else {
        return Vec::new();
    };

    let course_code = derive_course_code(course_title);
    let mut records = Vec::new();

    for row in table.select(&row_sel) {
        if extract_field(row, "td.course-lp-partner") != PARTNER_FILTER {
            continue;
        }

        records.push(ScheduleRecord {
            course_code: course_code.clone(),
            course_title: course_title.to_string(),
            start_date: extract_field(row, "td.course-lp-date"),
            start_time: extract_field(row, "td.course-lp-time"),
            partner: PARTNER_FILTER.to_string(),
            days: extract_field(row, "td.course-lp-days"),
            status: extract_field(row, "td.course-lp-status"),
            retail_price: extract_field(row, "td.course-lp-price"),
            epic_price: extract_field(row, "td.course-lp-partner-price"),
            cw_included: extract_field(row, "td.course-lp-cw-included"),
            last_updated: extract_field(row, "td.course-lp-last-updated"),
            student_count: extract_field(row, "td.course-lp-students"),
            registration_link: extract_link(row, "td.course-lp-register"),
        });
    }

    records
}

/// Collect (detail URL, title) pairs from the course listing page, in
/// document order. Rows without a title cell or without an anchor inside it
/// contribute nothing; duplicates are preserved verbatim.
pub fn collect_course_links(html: &str) -> Vec<CourseListing> {
    let document = Html::parse_document(html);
    let row_sel = Selector::parse(LISTING_ROW).unwrap();
    let title_sel = Selector::parse(TITLE_CELL).unwrap();
    let anchor_sel = Selector::parse("a").unwrap();

    let mut listings = Vec::new();
    for row in document.select(&row_sel) {
        let Some(title_cell) = row.select(&title_sel).next() else {
            continue;
        };
        let Some(href) = title_cell
            .select(&anchor_sel)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
        else {
            continue;
        };

        listings.push(CourseListing {
            detail_url: href.to_string(),
            title: title_cell.text().collect::<String>().trim().to_string(),
        });
    }

    listings
}
