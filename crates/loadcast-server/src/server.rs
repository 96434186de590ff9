//! tiny_http server loop.
//!
//! `tiny_http::Server::recv` blocks, so the request workers run in
//! `tokio::task::spawn_blocking`; `Server::unblock` releases one blocked
//! `recv` per call, which is how shutdown drains the pool.

use anyhow::Context as _;
use std::io::Read as _;
use std::sync::Arc;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::context::AppContext;
use crate::routes::{self, ApiResponse};

/// A bound server with its worker pool. Dropping it without calling
/// [`Self::shutdown`] leaves the workers blocked in `recv`.
pub struct RunningServer {
    server: Arc<Server>,
    workers: Vec<tokio::task::JoinHandle<()>>,
    port: u16,
}

impl RunningServer {
    /// Actual bound port (useful when configured with port 0).
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Unblock every worker and wait for the loops to drain.
    pub async fn shutdown(self) {
        for _ in 0..self.workers.len() {
            self.server.unblock();
        }
        for worker in self.workers {
            let _ = worker.await;
        }
    }
}

/// Bind the listener and start the request workers.
///
/// # Errors
///
/// Fails if the configured address cannot be bound.
pub fn start(ctx: AppContext) -> anyhow::Result<RunningServer> {
    let addr = ctx.config.http.bind_addr();
    let server =
        Server::http(&addr).map_err(|error| anyhow::anyhow!("failed to bind {addr}: {error}"))?;
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .context("listener has no IP address")?;

    let server = Arc::new(server);
    let ctx = Arc::new(ctx);
    let workers = (0..ctx.config.http.workers)
        .map(|worker| {
            let server = Arc::clone(&server);
            let ctx = Arc::clone(&ctx);
            tokio::task::spawn_blocking(move || worker_loop(worker, &server, &ctx))
        })
        .collect();

    tracing::info!(%addr, port, "listening");
    Ok(RunningServer {
        server,
        workers,
        port,
    })
}

/// Serve until ctrl-c.
///
/// # Errors
///
/// Fails if the listener cannot be bound or the signal handler cannot be
/// installed.
pub async fn run(ctx: AppContext) -> anyhow::Result<()> {
    let running = start(ctx)?;
    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for ctrl-c")?;
    tracing::info!("shutting down");
    running.shutdown().await;
    Ok(())
}

fn worker_loop(worker: usize, server: &Server, ctx: &AppContext) {
    loop {
        match server.recv() {
            Ok(request) => handle(ctx, request),
            Err(error) => {
                // recv returns an error once unblock() is called
                tracing::debug!(worker, %error, "receive loop stopped");
                break;
            }
        }
    }
}

fn handle(ctx: &AppContext, mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();

    let mut body = String::new();
    let api = match request.as_reader().read_to_string(&mut body) {
        Ok(_) => routes::dispatch(ctx, &method, &url, &body),
        Err(error) => {
            tracing::debug!(%error, "failed to read request body");
            routes::body_read_failure()
        }
    };

    respond(
        request,
        api,
        &ctx.config.cors.allow_origin,
        method == Method::Options,
    );
}

fn respond(request: Request, api: ApiResponse, allow_origin: &str, preflight: bool) {
    let mut response = match api.body {
        Some(body) => Response::from_string(body)
            .with_status_code(api.status)
            .with_header(Header::from_bytes("Content-Type", "application/json").unwrap()),
        None => Response::from_string(String::new()).with_status_code(api.status),
    };

    response = response
        .with_header(Header::from_bytes("Access-Control-Allow-Origin", allow_origin).unwrap());
    if preflight {
        response = response
            .with_header(
                Header::from_bytes("Access-Control-Allow-Methods", "GET, POST, OPTIONS").unwrap(),
            )
            .with_header(Header::from_bytes("Access-Control-Allow-Headers", "Content-Type").unwrap());
    }

    if let Err(error) = request.respond(response) {
        tracing::debug!(%error, "failed to send response");
    }
}
