use axum::{Json, Router, http::header, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use userdir::{
    DirectoryService, InMemoryLogging, InMemoryStorage, SqliteStorage,
    api::{handlers::api_routes, openapi::ApiDoc},
    config::{CONFIG, MEMORY_DATABASE_URL},
    infrastructure::storage::Storage,
};
use utoipa::OpenApi;

fn build_app<S: Storage + 'static>(storage: S) -> Router {
    let service = Arc::new(DirectoryService::new(storage, InMemoryLogging::new()));

    Router::new()
        .route("/health", get(|| async { "Server is running" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(api_routes(service))
        .fallback_service(ServeDir::new(&CONFIG.public_dir))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(CONFIG.request_timeout_secs)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([http::Method::GET, http::Method::POST, http::Method::DELETE])
                .allow_headers([header::CONTENT_TYPE])
                .expose_headers([header::HeaderName::from_static(userdir::constants::SEARCH_MESSAGE_HEADER)]),
        )
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();
    info!("Loaded {:?}", *CONFIG);

    let app = if CONFIG.uses_sqlite() {
        build_app(SqliteStorage::connect(&CONFIG.database_url).await?)
    } else if CONFIG.database_url == MEMORY_DATABASE_URL {
        build_app(InMemoryStorage::new())
    } else {
        return Err(format!("Unsupported DATABASE_URL; use `{}` or a sqlite: URL", MEMORY_DATABASE_URL).into());
    };

    let addr: SocketAddr = format!("{}:{}", CONFIG.host, CONFIG.port).parse()?;
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
