mod api;
mod middleware;

use influence_core::AppConfig;
use influence_ledger::Session;
use influence_relay::{RelayClient, RelayTarget};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = influence_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let session = build_session(&config)?;
    let app = build_app(AppState::new(session));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

fn build_session(config: &AppConfig) -> anyhow::Result<Session> {
    let session = Session::new();
    let Some(endpoint) = config.webhook_url.as_deref() else {
        tracing::warn!("INFLUENCE_WEBHOOK_URL not set; samples will be kept in memory only");
        return Ok(session);
    };
    let client = RelayClient::new(config.relay_timeout_secs, &config.relay_user_agent)?;
    Ok(session.with_relay(RelayTarget::new(client, endpoint)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal; unsent samples in this session are discarded");
}
