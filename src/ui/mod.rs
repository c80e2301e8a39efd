pub mod form;
pub mod terminal;

pub use terminal::TerminalView;

/// Handles to the six UI surfaces the generation handler mutates.
///
/// A view is acquired once at startup and injected into the handler; the
/// handler never reaches into the host UI by name. Implementations are
/// mutated from concurrent submissions without coordination, so interior
/// state must be guarded.
pub trait GenerationView: Send + Sync {
    /// Show or hide the loading indicator
    fn set_loader_visible(&self, visible: bool);

    /// Enable or disable the trigger control
    fn set_trigger_enabled(&self, enabled: bool);

    /// Reveal or hide the result region
    fn set_result_visible(&self, visible: bool);

    /// Point the playback surface at a cache-busted audio locator
    fn bind_audio(&self, url: &str);

    /// Point the download surface at a cache-busted audio locator
    fn bind_download(&self, url: &str);

    /// Raise a user-visible alert
    fn alert(&self, message: &str);
}
