//! Local Concierge HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::sync::Arc;

use ai_core::{ChatModel, OpenAiChatClient};
use ai_speech::{OpenAiSpeechProvider, SpeechToText, TextToSpeech};
use application::{ConciergeService, SpeechService};
use presentation_http::{config::AppConfig, routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "concierge_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "🧠 Local Concierge v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    // Load configuration; a missing API key fails here, not mid-request
    let config = AppConfig::from_env();

    info!(
        host = %config.server.host,
        port = %config.server.port,
        model = %config.chat.model,
        "Configuration loaded"
    );

    let chat_client = OpenAiChatClient::new(config.chat)
        .map_err(|e| anyhow::anyhow!("Failed to initialize chat client: {e}"))?;
    let speech_provider = Arc::new(
        OpenAiSpeechProvider::new(config.speech)
            .map_err(|e| anyhow::anyhow!("Failed to initialize speech provider: {e}"))?,
    );

    // Initialize services
    let chat: Arc<dyn ChatModel> = Arc::new(chat_client);
    let tts: Arc<dyn TextToSpeech> = speech_provider.clone();
    let stt: Arc<dyn SpeechToText> = speech_provider;

    let concierge = ConciergeService::new(chat);
    let speech = SpeechService::new(tts, stt);

    let state = AppState {
        concierge: Arc::new(concierge),
        speech: Arc::new(speech),
    };

    // Build router
    let app = routes::create_router(state).layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
