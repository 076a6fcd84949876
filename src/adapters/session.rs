use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::SessionDriver;
use crate::utils::error::{Result, ScrapeError};

/// Cookie-backed portal session over plain HTTP. One instance corresponds to
/// one logged-in session: the login POST sets the auth cookies, later fetches
/// reuse them through the shared cookie store.
pub struct HttpSession {
    client: Client,
    login_url: String,
}

impl HttpSession {
    /// `base_url` is the portal root; the credential form posts there.
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(concat!("eln-scraper/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            login_url: format!("{}/", base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl SessionDriver for HttpSession {
    async fn authenticate(&self, email: &str, password: &str) -> Result<()> {
        tracing::debug!("submitting credential form to {}", self.login_url);
        let response = self
            .client
            .post(&self.login_url)
            .form(&[("email", email), ("password", password)])
            .send()
            .await
            .map_err(|e| ScrapeError::AuthenticationFailure(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScrapeError::AuthenticationFailure(format!(
                "login request returned {}",
                response.status()
            )));
        }
        Ok(())
    }

    async fn fetch_rendered(&self, url: &str) -> Result<String> {
        tracing::debug!("fetching {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            ScrapeError::NavigationFailure {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        if !response.status().is_success() {
            return Err(ScrapeError::NavigationFailure {
                url: url.to_string(),
                reason: format!("status {}", response.status()),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ScrapeError::NavigationFailure {
                url: url.to_string(),
                reason: e.to_string(),
            })
    }
}
