//! TBL ROI API Gateway binary

use std::time::Duration;

use tbl_api_gateway::{config::GatewayConfig, router, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_gateway=info".parse()?)
                .add_directive("tbl_api_gateway=info".parse()?)
                .add_directive("tbl_projects=info".parse()?)
                .add_directive("tbl_engine=info".parse()?),
        )
        .json()
        .init();

    let config = GatewayConfig::load()?;
    let state = AppState::from_config(&config)?;

    // Sweep expired sessions in the background
    let sessions = state.sessions.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(300));
        loop {
            interval.tick().await;
            let purged = sessions.purge_expired();
            if purged > 0 {
                info!(purged, "Purged expired sessions");
            }
        }
    });

    let app = router(state);

    let addr = config.bind_addr();
    info!("TBL ROI API Gateway starting on {}", addr);
    info!("Endpoints: /health, /stats, /auth, /calculate, /projects");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("TBL ROI API Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
