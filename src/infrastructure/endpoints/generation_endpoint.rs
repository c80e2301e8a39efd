use crate::domain::generation::{GenerationReply, GenerationRequest};
use async_trait::async_trait;

/// Client seam for the generation endpoint.
/// Abstracts the transport so the handler can be driven against a double.
///
/// Implementations are responsible for:
/// - Encoding the request as multipart form data
/// - Decoding the JSON reply regardless of HTTP status
/// - Keeping transport and decode failures distinct for diagnostics
#[async_trait]
pub trait GenerationEndpoint: Send + Sync {
    /// Submit one generation request and decode the endpoint's reply
    ///
    /// The reply is returned as the wire shape; callers decide what a
    /// missing `audio_file` means.
    ///
    /// # Errors
    /// Returns an error if the request cannot be delivered or the body is
    /// not valid JSON
    async fn generate(&self, request: &GenerationRequest)
        -> Result<GenerationReply, EndpointError>;
}

/// Failures raised by endpoint implementations
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    /// The request never produced a response body
    #[error("generation request failed: {0}")]
    Transport(String),

    /// The endpoint answered with something that is not the JSON reply
    /// shape
    #[error("malformed generation reply: {0}")]
    Malformed(String),
}
