//! # Plot Device
//!
//! A small demo service: two static collections of photo URLs (`rocks` and
//! `lake`) served shuffled over HTTP, plus a browser page that fetches both
//! and renders them as image rows.
//!
//!
//!
//! # Layers
//!
//! - **Public layer**: the externally reachable routes (`/`, `/lake`,
//!   `/rocks`, `/app`). The data routes delegate straight into the backend
//!   layer as plain function calls, no loopback HTTP hop.
//! - **Backend layer**: looks up a named collection in the catalog, shuffles
//!   a copy of it, and wraps it in the `{ items: [...] }` envelope. Also
//!   mounted at `/backend/{collection}` as the internal surface.
//! - **Catalog**: both collections, built once at startup and shared through
//!   [`state::State`]. Handlers only ever shuffle per-request copies, so the
//!   source order is never mutated.
//!
//!
//!
//! # Running
//!
//! ```sh
//! PLOT_DEVICE_PORT=8080 RUST_LOG=info cargo run
//! ```
//!
//! Then open `http://localhost:8080/app`.
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};

use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod shuffle;
pub mod state;

use routes::{app_handler, lake_handler, rocks_handler, welcome_handler};
use state::State;

pub fn router(state: Arc<State>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/", get(welcome_handler))
        .route("/lake", get(lake_handler))
        .route("/rocks", get(rocks_handler))
        .route("/app", get(app_handler))
        .route("/backend/{collection}", get(backend::collection_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading catalog...");
    let state = State::new();

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal(SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
