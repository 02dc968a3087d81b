use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Properties API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Property not found")]
    NotFound,

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Invalid API URL: {0}")]
    Url(String),
}

impl ApiError {
    /// Only transport failures, 5xx and 429 can succeed on a later attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            ApiError::NotFound | ApiError::JsonParse(_) | ApiError::Url(_) => false,
        }
    }
}
