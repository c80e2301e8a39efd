use std::sync::Arc;

use voicelab_client::domain::generation::{FormFile, GenerationRequest, GenerationService};
use voicelab_client::infrastructure::endpoints::HttpGenerationEndpoint;
use wiremock::MockServer;


pub use recording_view::{RecordingView, ViewEvent};

/// Real handler wired to a mock endpoint and a recording view
pub struct TestHarness {
    pub server: MockServer,
    pub view: Arc<RecordingView>,
    pub service: GenerationService,
}

impl TestHarness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let view = Arc::new(RecordingView::new());
        let endpoint = Arc::new(HttpGenerationEndpoint::new(server.uri()));
        let service = GenerationService::new(endpoint, view.clone());

        Self {
            server,
            view,
            service,
        }
    }

    /// Handler whose endpoint points at an address nothing listens on
    pub fn unreachable() -> (Arc<RecordingView>, GenerationService) {
        let view = Arc::new(RecordingView::new());
        let endpoint = Arc::new(HttpGenerationEndpoint::new(
            "http://127.0.0.1:9".to_string(),
        ));
        let service = GenerationService::new(endpoint, view.clone());

        (view, service)
    }
}

pub fn sample_request() -> GenerationRequest {
    GenerationRequest {
        text: "Hello, this is a test script for voice generation.".to_string(),
        voice_file: FormFile {
            file_name: "speaker.wav".to_string(),
            bytes: b"RIFF fake wav bytes".to_vec(),
        },
        style_file: None,
    }
}

pub fn sample_request_with_style() -> GenerationRequest {
    GenerationRequest {
        style_file: Some(FormFile {
            file_name: "style.wav".to_string(),
            bytes: b"RIFF fake style bytes".to_vec(),
        }),
        ..sample_request()
    }
}
