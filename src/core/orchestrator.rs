use url::Url;

use crate::core::parse::{collect_course_links, parse_class_schedule};
use crate::domain::model::ScheduleRecord;
use crate::domain::ports::{ConfigProvider, SessionDriver};
use crate::utils::error::Result;

/// Opaque login credentials, handed through to the session driver verbatim.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Drives one scrape run: login, collect course links, then fetch and parse
/// each detail page in listing order.
///
/// The traversal is strictly sequential. The authenticated session behind the
/// driver is a single mutable resource, so no page is fetched before the
/// previous page's records are incorporated. The first session failure aborts
/// the run; accumulated records are not returned on failure.
pub struct CourseScraper<S: SessionDriver, C: ConfigProvider> {
    driver: S,
    config: C,
}

impl<S: SessionDriver, C: ConfigProvider> CourseScraper<S, C> {
    pub fn new(driver: S, config: C) -> Self {
        Self { driver, config }
    }

    /// Run the full scrape. `on_status` receives one human-readable line per
    /// phase and per course; `on_progress` receives the completed fraction
    /// after each course page, in order. Both are invoked synchronously on
    /// this task, so callers must not block inside them. Pass `|_| {}` to
    /// ignore either one.
    pub async fn scrape_all<P, M>(
        &self,
        credentials: &Credentials,
        mut on_progress: P,
        mut on_status: M,
    ) -> Result<Vec<ScheduleRecord>>
    where
        P: FnMut(f64),
        M: FnMut(&str),
    {
        on_status("Logging in to Epic Learning Network...");
        self.driver
            .authenticate(&credentials.email, &credentials.password)
            .await?;

        on_status("Collecting course links...");
        let listing_html = self.driver.fetch_rendered(&self.config.courses_url()).await?;
        let listings = collect_course_links(&listing_html);
        on_status(&format!("Found {} courses. Processing...", listings.len()));
        tracing::info!("found {} courses on listing page", listings.len());

        let total = listings.len();
        let mut records = Vec::new();

        for (index, listing) in listings.iter().enumerate() {
            let detail_url = self.resolve_detail_url(&listing.detail_url);
            let page_html = self.driver.fetch_rendered(&detail_url).await?;

            let parsed = parse_class_schedule(&page_html, &listing.title);
            tracing::debug!(
                "{}: {} matching classes",
                listing.title,
                parsed.len()
            );
            records.extend(parsed);

            on_status(&format!(
                "Processing course {} of {}: {}",
                index + 1,
                total,
                listing.title
            ));
            on_progress((index + 1) as f64 / total as f64);
        }

        Ok(records)
    }

    /// Listing pages link detail pages by site-relative hrefs; resolve them
    /// against the portal base URL. Absolute hrefs pass through untouched.
    fn resolve_detail_url(&self, href: &str) -> String {
        if Url::parse(href).is_ok() {
            return href.to_string();
        }
        Url::parse(self.config.base_url())
            .and_then(|base| base.join(href))
            .map(String::from)
            .unwrap_or_else(|_| href.to_string())
    }
}
