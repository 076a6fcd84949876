use crate::utils::error::Result;
use async_trait::async_trait;

/// Boundary to the browser/HTTP automation layer. One implementation holds
/// one authenticated portal session; cookies and navigation state live behind
/// this trait. Fetches are strictly sequential per session.
#[async_trait]
pub trait SessionDriver: Send + Sync {
    /// Submit credentials to the portal. Must complete before any fetch.
    async fn authenticate(&self, email: &str, password: &str) -> Result<()>;

    /// Retrieve the rendered HTML for a fully-qualified URL.
    async fn fetch_rendered(&self, url: &str) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn courses_url(&self) -> String;
    fn output_file(&self) -> &str;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
