use mcp_sse_server::{Config, Result, server::SseServer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    info!("Starting MCP SSE server demo");

    // Load config from the first argument if given, defaults otherwise
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading configuration from {}", path);
            Config::from_file(path)?
        }
        None => Config::default(),
    };

    let host = config.server.address.clone();
    let port = config.server.port;

    let handle = SseServer::start(config).await?;

    info!("Server started successfully!");
    info!("Available HTTP endpoints:");
    info!(" - Endpoint info:   GET  http://{}:{}/mcp", host, port);
    info!(" - MCP operations:  POST http://{}:{}/mcp", host, port);
    info!(" - Tick stream:     GET  http://{}:{}/sse", host, port);

    info!("Example metadata request with curl:");
    info!("curl -X POST http://{}:{}/mcp \\", host, port);
    info!("  -H \"Content-Type: application/json\" \\");
    info!("  -d '{{\"type\":\"metadata\"}}'");
    info!("");

    info!("Example streamed generate request with curl:");
    info!("curl -N -X POST http://{}:{}/mcp \\", host, port);
    info!("  -H \"Content-Type: application/json\" \\");
    info!("  -d '{{\"type\":\"generate\", \"input\":\"search quantum computing\"}}'");
    info!("");

    info!("Example SSE client with curl:");
    info!("curl -N http://{}:{}/sse", host, port);

    info!("");
    info!("Press Ctrl+C to exit");

    // Keep the server running until Ctrl+C
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to wait for Ctrl+C");

    info!("Shutting down");
    handle.shutdown().await?;

    info!("Demo finished");
    Ok(())
}
