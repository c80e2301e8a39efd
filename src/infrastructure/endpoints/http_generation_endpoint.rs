use super::generation_endpoint::{EndpointError, GenerationEndpoint};
use crate::domain::generation::{GenerationReply, GenerationRequest};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

/// HTTP implementation of the generation endpoint client
pub struct HttpGenerationEndpoint {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpGenerationEndpoint {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/generate", self.base_url.trim_end_matches('/'))
    }

    fn build_form(request: &GenerationRequest) -> Form {
        let mut form = Form::new().text("text", request.text.clone()).part(
            "voice_file",
            Part::bytes(request.voice_file.bytes.clone())
                .file_name(request.voice_file.file_name.clone()),
        );

        if let Some(style) = &request.style_file {
            form = form.part(
                "style_file",
                Part::bytes(style.bytes.clone()).file_name(style.file_name.clone()),
            );
        }

        form
    }
}

#[async_trait]
impl GenerationEndpoint for HttpGenerationEndpoint {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationReply, EndpointError> {
        let url = self.generate_url();

        tracing::info!(
            url = %url,
            text_length = request.text.len(),
            voice_file = %request.voice_file.file_name,
            has_style_file = request.style_file.is_some(),
            "Dispatching generation request"
        );

        let response = self
            .http_client
            .post(&url)
            .multipart(Self::build_form(request))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Generation request failed to send");
                EndpointError::Transport(e.to_string())
            })?;

        let status = response.status();

        // Decoded whatever the status: a rejected request still carries
        // its message as JSON.
        let reply = response.json::<GenerationReply>().await.map_err(|e| {
            tracing::error!(
                error = %e,
                status = %status,
                "Generation reply was not valid JSON"
            );
            EndpointError::Malformed(e.to_string())
        })?;

        tracing::debug!(
            status = %status,
            has_audio_file = reply.audio_file.is_some(),
            has_error = reply.error.is_some(),
            "Generation reply decoded"
        );

        Ok(reply)
    }
}
