use serde::{Deserialize, Serialize};

/// One uploaded form file: original file name plus contents.
#[derive(Debug, Clone)]
pub struct FormFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The field set submitted as POST /generate
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Script to speak
    pub text: String,
    /// Reference audio for tone colour
    pub voice_file: FormFile,
    /// Optional reference audio for speaking style
    pub style_file: Option<FormFile>,
}

/// Wire shape of the endpoint's JSON reply.
///
/// A present `audio_file` defines success. `error` is optional even on
/// failure; callers fall back to generic text when it is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Successful outcome of one submission
#[derive(Debug, Clone)]
pub struct GeneratedAudio {
    /// Cache-busted locator, exactly as bound to the playback and
    /// download handles
    pub audio_url: String,
}
