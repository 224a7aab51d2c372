use anyhow::{anyhow, Context};
use std::sync::Arc;
use storyline_tts::domain::tts::{SynthesisDefaults, TtsService};
use storyline_tts::infrastructure::config::{Config, LogFormat};
use storyline_tts::infrastructure::http::start_http_server;
use storyline_tts::infrastructure::repositories::{AzureTtsRepository, TtsRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow!("invalid configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Storyline TTS relay on {}:{}",
        config.host,
        config.port
    );

    // Missing credentials are not fatal at startup: every synthesis request
    // answers 500 until they are provided.
    let tts_repo: Option<Arc<dyn TtsRepository>> =
        match (config.azure.as_ref(), config.synthesis_endpoint()) {
            (Some(credentials), Some(endpoint)) => {
                tracing::info!(
                    region = %credentials.region,
                    endpoint = %endpoint,
                    "Azure Speech credentials found"
                );
                let client = reqwest::Client::builder()
                    .build()
                    .context("failed to build HTTP client")?;
                Some(Arc::new(AzureTtsRepository::new(
                    client,
                    endpoint,
                    credentials.key.clone(),
                    config.user_agent.clone(),
                )))
            }
            _ => {
                tracing::warn!(
                    "AZURE_SPEECH_KEY or AZURE_SPEECH_REGION not set; synthesis requests will fail"
                );
                None
            }
        };

    let tts_service = Arc::new(TtsService::new(
        tts_repo,
        SynthesisDefaults::from_config(&config),
    ));

    start_http_server(Arc::new(config), tts_service)
        .await
        .map_err(|e| anyhow!("server error: {}", e))?;

    Ok(())
}

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "storyline_tts=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
