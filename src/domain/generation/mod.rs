pub mod dto;
pub mod error;
pub mod service;

pub use dto::{FormFile, GeneratedAudio, GenerationReply, GenerationRequest};
pub use error::{GenerationError, GENERIC_FAILURE_TEXT};
pub use service::{GenerationService, GenerationServiceApi};
