use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, Router};

/// Minimal HTTP surface for external uptime probes: any path, any method,
/// always 200 with a fixed body. Carries no application data.
pub fn build_router() -> Router {
    Router::new().fallback(alive)
}

async fn alive() -> impl IntoResponse {
    (StatusCode::OK, "dropwatch is running")
}

pub async fn serve(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "liveness endpoint listening");
    axum::serve(listener, build_router()).await?;
    Ok(())
}
