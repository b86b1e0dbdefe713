use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

use wellness_core::config::Config;
use wellness_mcp::WellnessMcpHandler;
use wellness_mcp::http::{AppState, router};
use wellness_mcp::telemetry;

const DEFAULT_MAX_BODY: usize = 64 * 1024;

fn max_body_size_from(raw: Option<String>) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_BODY)
}

fn address_from(raw: Option<String>) -> SocketAddr {
    raw.and_then(|s| s.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)))
}


#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let log_env = telemetry::init_tracing();
    tracing::info!(%log_env, "wellness_mcp:http: log filter");

    let handle = PrometheusBuilder::new().install_recorder()?;

    let config = Config::from_env()?;
    let handler = WellnessMcpHandler::new(&config);
    let state = Arc::new(AppState {
        metrics: handle,
        handler: handler.clone(),
    });

    let max_body_size = max_body_size_from(std::env::var("MAX_HTTP_BODY_SIZE").ok());

    // Build rmcp StreamableHttpService mounted at /mcp
    let factory = move || -> Result<_, std::io::Error> { Ok(handler.clone()) };
    let session = Arc::new(
        rmcp::transport::streamable_http_server::session::local::LocalSessionManager::default(),
    );
    let mcp_service = rmcp::transport::streamable_http_server::tower::StreamableHttpService::new(
        factory,
        session,
        rmcp::transport::streamable_http_server::tower::StreamableHttpServerConfig::default(),
    );

    let app = router(state)
        .nest_service("/mcp", mcp_service)
        .layer(axum::extract::DefaultBodyLimit::max(max_body_size));

    let addr = address_from(std::env::var("ADDRESS").ok());
    info!(%addr, max_body_bytes = max_body_size, "starting HTTP server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    let server = axum::serve(listener, app.into_make_service());
    if let Err(e) = server
        .with_graceful_shutdown(async {
            if let Err(e) = signal::ctrl_c().await {
                tracing::error!("failed to install ctrl+c handler: {e}");
            }
        })
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
