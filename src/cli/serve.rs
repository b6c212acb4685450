// src/cli/serve.rs
// HTTP server startup

use anyhow::Result;
use folio::config::Settings;
use folio::web::{self, state::AppState};
use tracing::info;

pub async fn run_server(settings: &Settings) -> Result<()> {
    let state = AppState::from_settings(settings)?;
    let app = web::create_router(state);

    let addr = settings.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        chat_delay_ms = settings.chat_delay.as_millis() as u64,
        "Portfolio running on http://{}", addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
