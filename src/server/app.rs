//! Server construction and lifecycle for the MCP SSE server.
//!
//! This module wires the Actix Web application: CORS, request logging,
//! route table, and worker configuration. [`SseServer::start`] runs the
//! server in a background task and returns a handle used to stop it.

use crate::config::{Config, DEFAULT_WORKERS, validate_config};
use crate::error::{Error, Result};
use crate::server::handlers;

use actix_cors::Cors;
use actix_web::{
    App, HttpServer, middleware,
    web::{self, Data},
};

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing;

/// Handle for controlling a running SSE server.
///
/// Returned by [`SseServer::start`]; stopping the server through it shuts
/// down gracefully and joins the background task with a timeout.
#[derive(Clone)]
pub struct SseServerHandle {
    /// Actix server control handle
    server: actix_web::dev::ServerHandle,
    /// Background task running the server
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl SseServerHandle {
    /// Shut down the server gracefully.
    ///
    /// This method is instrumented with `tracing`.
    #[tracing::instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Stopping SSE server");
        self.server.stop(true).await;

        // Wait for the server task to finish
        let mut task = self.task.lock().await;
        if let Some(handle) = task.take() {
            match tokio::time::timeout(std::time::Duration::from_secs(5), handle).await {
                Ok(result) => {
                    if let Err(e) = result {
                        tracing::warn!("Error while joining server task: {}", e);
                    }
                }
                Err(_) => {
                    tracing::warn!("Timeout waiting for server task to finish");
                }
            }
        }

        tracing::info!("SSE server shut down completely");
        Ok(())
    }
}

/// The MCP SSE server.
///
/// Serves the MCP request/response contract on `/mcp` and the plain tick
/// event stream on `/sse`, with permissive CORS for browser clients.
pub struct SseServer;

impl SseServer {
    /// Validate the configuration, bind the listening socket, and start
    /// serving in a background task.
    ///
    /// This method is instrumented with `tracing`.
    #[tracing::instrument(skip(config), fields(address = %config.server.address, port = config.server.port))]
    pub async fn start(config: Config) -> Result<SseServerHandle> {
        validate_config(&config)?;

        let addr = format!("{}:{}", config.server.address, config.server.port);
        let workers = config.server.workers.unwrap_or(DEFAULT_WORKERS);

        tracing::info!(address = %addr, workers = workers, "Starting SSE server with Actix Web");

        // Share the configuration with handlers via Actix Data
        let data = Data::new(config);
        let factory_data = data.clone();

        let server = HttpServer::new(move || {
            // Browser clients connect from arbitrary origins
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(middleware::Logger::default())
                .wrap(cors)
                .app_data(factory_data.clone())
                .route("/sse", web::get().to(handlers::sse_ticker))
                .service(
                    web::resource("/mcp")
                        .route(web::get().to(handlers::mcp_info))
                        .route(web::post().to(handlers::mcp_post))
                        .route(web::route().to(handlers::method_not_allowed)),
                )
        })
        .workers(workers)
        .bind(&addr)
        .map_err(|e| Error::Other(format!("Failed to bind server on {}: {}", addr, e)))?
        .run();

        let server_handle = server.handle();

        let task = tokio::spawn(async move {
            if let Err(e) = server.await {
                tracing::error!(error = %e, "SSE server task error");
            }
        });

        tracing::info!("SSE server started successfully");

        Ok(SseServerHandle {
            server: server_handle,
            task: Arc::new(Mutex::new(Some(task))),
        })
    }
}
