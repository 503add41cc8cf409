/*!
 # MCP SSE Server

 A Rust library for serving MCP-style requests over HTTP with Server-Sent
 Events (SSE) streaming.

 ## Overview

 The crate provides:
 - A streaming session core that interleaves content frames with
   keep-alive heartbeats on one connection and tears down exactly once
 - An MCP-like request contract distinguishing `metadata` (capability
   description) and `generate` (streamed work) request kinds
 - A plain SSE tick stream for connection monitoring
 - JSON configuration, permissive CORS, and structured request validation

 ## Basic Usage

 ```no_run
 use mcp_sse_server::{Config, Result, server::SseServer};

 #[tokio::main]
 async fn main() -> Result<()> {
     // Load configuration (every section has defaults)
     let config = Config::parse_from_str(r#"{"server": {"port": 3000}}"#)?;

     // Start the server in a background task
     let handle = SseServer::start(config).await?;

     // ... serve until some shutdown condition ...
     tokio::signal::ctrl_c().await.expect("Failed to wait for Ctrl+C");

     handle.shutdown().await?;
     Ok(())
 }
 ```

 ## Streaming sessions

 Each streaming response is one [`session::StreamSession`]: an
 event-emission timer pulling frames from an [`session::EventSource`], an
 independent heartbeat timer, and a disconnect signal, multiplexed on a
 single task. Swapping the mock search source for a real backend only
 means providing another `EventSource` implementation.

 ## Features

 - **Session Lifecycle**: race-free, exactly-once teardown on terminal
   message, source exhaustion, or client disconnect
 - **Wire Compatibility**: `data: <JSON>\n\n` content frames and
   `: heartbeat\n\n` comment frames
 - **Configuration**: JSON config files with full defaults
 - **Error Handling**: structured error responses at the HTTP boundary
 - **Async Support**: full async/await support on Tokio and Actix Web

 ## License

 This project is licensed under the terms in the LICENSE file.
*/

pub mod config;
pub mod error;
pub mod search;
pub mod server;
pub mod session;

pub use config::Config;
pub use error::{Error, Result};
pub use server::{SseServer, SseServerHandle};
pub use session::{
    OutboundMessage, SessionConfig, SessionHandle, SessionState, StreamSession,
};
