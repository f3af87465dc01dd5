use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use tokio::sync::RwLock;

use crate::{bankroll, sessions, settings, statistics};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

/// Log one line per request: method, path, status and elapsed time.
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        "{} {} {} in {:?}",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );
    response
}

/// Build the application router around a fresh engine.
pub fn app(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(RwLock::new(engine)),
    };
    router(state)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route(
            "/api/sessions",
            get(sessions::list).post(sessions::create),
        )
        .route("/api/sessions/search", get(sessions::search))
        .route(
            "/api/sessions/{id}",
            get(sessions::get)
                .put(sessions::update)
                .delete(sessions::delete),
        )
        .route(
            "/api/bankroll/transactions",
            get(bankroll::list).post(bankroll::create),
        )
        .route(
            "/api/settings/{key}",
            get(settings::get).put(settings::put),
        )
        .route("/api/stats", get(statistics::get_stats))
        .route_layer(middleware::from_fn(log_requests))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:5000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
