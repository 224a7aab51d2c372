pub mod cors;
pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::{any::Any, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::controllers::{health, tts::TtsController};
use crate::domain::tts::TtsService;
use crate::error::AppError;
use crate::infrastructure::config::Config;

pub use cors::cors_middleware;
pub use request_id::{request_id_middleware, RequestId};

/// Build the application router with every route and middleware attached.
pub fn create_app(tts_service: Arc<TtsService>, max_body_bytes: usize) -> Router {
    let tts_controller = Arc::new(TtsController::new(tts_service.clone()));

    let tts_routes = Router::new()
        .route(
            "/api/tts",
            post(TtsController::synthesize).fallback(TtsController::method_not_allowed),
        )
        .with_state(tts_controller);

    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(tts_service);

    // Layers run outermost-last: trace, request id, CORS, panic guard, body limit.
    Router::new()
        .merge(health_routes)
        .merge(tts_routes)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(cors_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server and serve until shutdown
pub async fn start_http_server(
    config: Arc<Config>,
    tts_service: Arc<TtsService>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_app(tts_service, config.max_body_bytes);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::Internal(format!("handler panicked: {}", message)).into_response()
}
