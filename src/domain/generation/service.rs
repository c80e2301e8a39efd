use super::dto::{GeneratedAudio, GenerationRequest};
use super::error::{GenerationError, GENERIC_FAILURE_TEXT};
use crate::infrastructure::endpoints::GenerationEndpoint;
use crate::ui::GenerationView;
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct GenerationService {
    endpoint: Arc<dyn GenerationEndpoint>,
    view: Arc<dyn GenerationView>,
}

impl GenerationService {
    pub fn new(endpoint: Arc<dyn GenerationEndpoint>, view: Arc<dyn GenerationView>) -> Self {
        Self { endpoint, view }
    }
}

#[async_trait]
pub trait GenerationServiceApi: Send + Sync {
    /// Submit one generation request and drive the view through its
    /// lifecycle
    ///
    /// This operation:
    /// - Enters the busy state (loader shown, trigger disabled, previous
    ///   result hidden)
    /// - Posts the captured fields to the generation endpoint
    /// - Binds the cache-busted audio locator to the playback and
    ///   download handles, or raises a single alert
    /// - Restores the idle state exactly once, on every exit path
    ///
    /// Overlapping submissions are not queued or locked out; each runs
    /// its own lifecycle and the later completion wins whichever handles
    /// it touches last.
    async fn submit(&self, request: GenerationRequest) -> Result<GeneratedAudio, GenerationError>;
}

#[async_trait]
impl GenerationServiceApi for GenerationService {
    async fn submit(&self, request: GenerationRequest) -> Result<GeneratedAudio, GenerationError> {
        let submission_id = Uuid::new_v4();

        tracing::info!(
            submission_id = %submission_id,
            text_length = request.text.len(),
            voice_file = %request.voice_file.file_name,
            has_style_file = request.style_file.is_some(),
            "Generation request submitted"
        );

        // Busy until this submission settles. Dropping the guard restores
        // the idle state on every path out, panics included.
        let _busy = BusyGuard::engage(self.view.as_ref());

        let outcome = self.dispatch(&request).await;

        match &outcome {
            Ok(audio) => {
                tracing::info!(
                    submission_id = %submission_id,
                    audio_url = %audio.audio_url,
                    "Generation succeeded"
                );
            }
            Err(e) => {
                // The failure kind is not surfaced to the user; the alert
                // carries the endpoint's message or the generic fallback.
                tracing::error!(
                    submission_id = %submission_id,
                    error = %e,
                    "Generation failed"
                );
                self.view.alert(e.alert_text());
            }
        }

        outcome
    }
}

impl GenerationService {
    async fn dispatch(&self, request: &GenerationRequest) -> Result<GeneratedAudio, GenerationError> {
        // 1. Single POST to the endpoint; no retry, no timeout beyond the
        //    transport's own limits
        let reply = self.endpoint.generate(request).await?;

        // 2. A present audio locator defines success
        let locator = match reply.audio_file {
            Some(locator) => locator,
            None => {
                return Err(GenerationError::Rejected(
                    reply
                        .error
                        .unwrap_or_else(|| GENERIC_FAILURE_TEXT.to_string()),
                ));
            }
        };

        // 3. Bind the locator to both handles and reveal the result
        let audio_url = cache_busted(&locator, chrono::Utc::now().timestamp_millis());
        self.view.bind_audio(&audio_url);
        self.view.bind_download(&audio_url);
        self.view.set_result_visible(true);

        Ok(GeneratedAudio { audio_url })
    }
}

/// Scoped busy state for one submission.
///
/// Engaging shows the loader, disables the trigger and hides the previous
/// result; dropping hides the loader and re-enables the trigger. The
/// restore runs exactly once per submission.
struct BusyGuard<'a> {
    view: &'a dyn GenerationView,
}

impl<'a> BusyGuard<'a> {
    fn engage(view: &'a dyn GenerationView) -> Self {
        view.set_loader_visible(true);
        view.set_trigger_enabled(false);
        view.set_result_visible(false);
        Self { view }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.view.set_loader_visible(false);
        self.view.set_trigger_enabled(true);
    }
}

/// Append the cache-defeating query parameter so playback surfaces fetch
/// the freshly generated file instead of a stale cached one.
fn cache_busted(locator: &str, timestamp_millis: i64) -> String {
    format!("{}?t={}", locator, timestamp_millis)
}
