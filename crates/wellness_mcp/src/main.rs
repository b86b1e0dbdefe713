use wellness_core::config::Config;
use wellness_mcp::WellnessMcpHandler;
use wellness_mcp::telemetry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_env = telemetry::init_tracing();
    tracing::info!("wellness_mcp: log filter: {}", log_env);

    let config = Config::from_env()?;
    let handler = WellnessMcpHandler::new(&config);

    tracing::info!(
        "wellness_mcp: registered {} tools and {} prompts",
        handler.tool_count(),
        handler.prompt_count()
    );

    // Serve over stdio so any MCP client can drive the form
    tracing::info!("wellness_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("wellness_mcp: service initialized as server");

    server.waiting().await?;

    Ok(())
}
