use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Credential submission or login navigation failed. Fatal to the run,
    /// never retried.
    #[error("Authentication failed: {0}")]
    AuthenticationFailure(String),

    /// A page fetch (listing or detail) failed. Fatal at the point of
    /// occurrence; the run returns no partial result.
    #[error("Navigation failed for {url}: {reason}")]
    NavigationFailure { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
