use crate::infrastructure::endpoints::EndpointError;

/// Alert text used when the endpoint gives no usable message
pub const GENERIC_FAILURE_TEXT: &str = "An error occurred.";

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The endpoint answered but produced no audio locator
    #[error("generation rejected: {0}")]
    Rejected(String),

    /// The endpoint could not be reached or its reply could not be decoded
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
}

impl GenerationError {
    /// The single user-facing message for this failure.
    ///
    /// Transport failures, undecodable replies and message-less
    /// rejections all collapse to the generic fallback; only an explicit
    /// message from the endpoint survives to the alert.
    pub fn alert_text(&self) -> &str {
        match self {
            Self::Rejected(message) => message,
            Self::Endpoint(_) => GENERIC_FAILURE_TEXT,
        }
    }
}
