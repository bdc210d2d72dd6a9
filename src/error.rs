use serde::{Deserialize, Serialize};
use std::fmt;

/// Error body returned by the InsightCloudSec API on non-success statuses.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "snake_case")]
pub struct ApiError {
    pub error_code: i32,
    pub error_message: String,
    pub error_type: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error_message.is_empty() {
            write!(f, "code={}", self.error_code)
        } else {
            write!(f, "code={}, message={}", self.error_code, self.error_message)
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
    #[error("url parse error: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("insightcloudsec api error: {0}")]
    Api(ApiError),
    #[error("api reported failure: {0}")]
    Failure(String),
}
