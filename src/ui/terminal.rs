use super::GenerationView;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Console rendering of the view contract.
///
/// Holds the same state a hosting page would: visibility flags plus the
/// currently bound playback and download locators. User-facing lines go
/// to stdout, alerts to stderr; diagnostics stay on `tracing`.
pub struct TerminalView {
    state: Mutex<ViewState>,
}

#[derive(Debug)]
struct ViewState {
    loader_visible: bool,
    trigger_enabled: bool,
    result_visible: bool,
    audio_src: Option<String>,
    download_href: Option<String>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ViewState {
                loader_visible: false,
                trigger_enabled: true,
                result_visible: false,
                audio_src: None,
                download_href: None,
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, ViewState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn audio_src(&self) -> Option<String> {
        self.state().audio_src.clone()
    }

    pub fn download_href(&self) -> Option<String> {
        self.state().download_href.clone()
    }

    pub fn trigger_enabled(&self) -> bool {
        self.state().trigger_enabled
    }

    pub fn loader_visible(&self) -> bool {
        self.state().loader_visible
    }

    pub fn result_visible(&self) -> bool {
        self.state().result_visible
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationView for TerminalView {
    fn set_loader_visible(&self, visible: bool) {
        self.state().loader_visible = visible;
        if visible {
            println!("Generating voice...");
        }
    }

    fn set_trigger_enabled(&self, enabled: bool) {
        self.state().trigger_enabled = enabled;
        tracing::debug!(enabled, "Trigger control toggled");
    }

    fn set_result_visible(&self, visible: bool) {
        let (audio_src, download_href) = {
            let mut state = self.state();
            state.result_visible = visible;
            (state.audio_src.clone(), state.download_href.clone())
        };
        if visible {
            if let Some(src) = audio_src {
                println!("Audio ready: {}", src);
            }
            if let Some(href) = download_href {
                println!("Download:    {}", href);
            }
        }
    }

    fn bind_audio(&self, url: &str) {
        self.state().audio_src = Some(url.to_string());
    }

    fn bind_download(&self, url: &str) {
        self.state().download_href = Some(url.to_string());
    }

    fn alert(&self, message: &str) {
        eprintln!("[alert] {}", message);
    }
}
