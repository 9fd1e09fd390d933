use axum::{
    http::{HeaderValue, Method},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gatecheck_backend::{config::Config, docs, handlers, middleware, state::AppState};

fn cors_layer(allow_origin: &str) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(24 * 60 * 60));

    Ok(if allow_origin == "*" {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(allow_origin.parse::<HeaderValue>()?)
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gatecheck_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load()?;
    tracing::info!(
        bind_addr = %config.bind_addr,
        cors_allow_origin = %config.cors_allow_origin,
        "Loaded configuration from environment/.env"
    );

    let cors = cors_layer(&config.cors_allow_origin)?;
    let state = AppState::new(config.clone());

    // Compose app with shared layers (request-id/logging/trace/CORS)
    let app = Router::new()
        .route("/api/auth/signin", post(handlers::auth::signin))
        .route("/api/auth/signup", post(handlers::auth::signup))
        .route("/api/health", get(handlers::health::health))
        .route("/api/docs/openapi.json", get(docs::openapi_json))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(axum_middleware::from_fn(middleware::log_error_responses))
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
