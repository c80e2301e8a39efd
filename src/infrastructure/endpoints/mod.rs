pub mod generation_endpoint;
pub mod http_generation_endpoint;

pub use generation_endpoint::{EndpointError, GenerationEndpoint};
pub use http_generation_endpoint::HttpGenerationEndpoint;
