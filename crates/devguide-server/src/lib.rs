pub mod error;
pub mod routes;
pub mod state;
pub mod tools;

use axum::routing::{get, post};
use axum::Router;
use devguide_core::GuideService;
use tower_http::cors::{Any, CorsLayer};

/// Assembles the full route table over a shared [`GuideService`].
/// Integration tests drive this router directly without binding a socket.
pub fn build_router(service: GuideService) -> Router {
    let app_state = state::AppState::new(service);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health))
        .route("/tools/list", post(routes::tools::list_tools))
        .route("/tools/call", post(routes::tools::call_tool))
        .layer(cors)
        .with_state(app_state)
}

/// Binds `0.0.0.0:{port}` and serves the API until the process exits.
pub async fn serve(service: GuideService, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    serve_on(service, listener).await
}

/// Serves the API on a listener the caller already bound. Passing port 0 to
/// the bind lets the OS pick a free port, which this reads back for the
/// startup log line.
pub async fn serve_on(
    service: GuideService,
    listener: tokio::net::TcpListener,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(service);

    tracing::info!("devguide API listening on http://localhost:{actual_port}");

    axum::serve(listener, app).await?;
    Ok(())
}
