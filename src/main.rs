use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voicelab_client::domain::generation::GenerationService;
use voicelab_client::infrastructure::config::{Config, LogFormat};
use voicelab_client::infrastructure::endpoints::HttpGenerationEndpoint;
use voicelab_client::ui::{form, TerminalView};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting VoiceLab client against {}",
        config.endpoint_url
    );

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate the endpoint client (inject base URL)
    let endpoint = Arc::new(HttpGenerationEndpoint::new(config.endpoint_url.clone()));

    // 2. Acquire the view handles once
    let view = Arc::new(TerminalView::new());

    // 3. Instantiate the handler (inject endpoint and view)
    let service = GenerationService::new(endpoint, view);

    // Run the interactive form until end of input
    form::run(&service).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicelab_client=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voicelab_client=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
