//! Shopgate binary - process bootstrap.

#![cfg_attr(not(test), forbid(unsafe_code))]

use shopgate::config::GatewayConfig;
use shopgate::state::AppState;

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; defaults to info level for this
    // crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopgate=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Load configuration from environment. Missing upstream credentials do
    // not fail startup; those calls fail at request time instead.
    let config = GatewayConfig::from_env().expect("Failed to load configuration");
    if !config.has_api_token() {
        tracing::warn!("GATEWAY_API_TOKEN is empty; every protected request will be rejected");
    }
    if config.whatsapp.is_none() {
        tracing::info!("WhatsApp configuration absent; order notifications disabled");
    }

    let addr = config.socket_addr();
    let state = AppState::new(config);
    let app = shopgate::app(state);

    tracing::info!("gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
