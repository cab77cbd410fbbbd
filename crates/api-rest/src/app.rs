//! Application builder.
//!
//! Assembles routes, middleware and state into an Axum router.

use crate::{
    config::ApiConfig,
    error::ErrorResponse,
    middleware::{logging_middleware, maintenance_middleware, request_id_middleware},
    routes::{self, health, upload},
    state::AppState,
};
use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method, StatusCode},
    middleware, Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Footprint Admin Edge API",
        version = "0.1.0",
        description = "Upload and maintenance endpoints served next to the Footprint admin panel",
        license(name = "MIT"),
    ),
    paths(health::health, health::ready, upload::upload),
    components(schemas(
        health::HealthResponse,
        health::ReadinessResponse,
        upload::UploadResponse,
        ErrorResponse
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "upload", description = "Blob storage uploads"),
    )
)]
struct ApiDoc;

/// Create the main application router
pub fn create_app(state: AppState) -> anyhow::Result<Router> {
    let config = state.config.clone();

    let api = routes::upload_routes().layer(build_cors_layer(&config)?);

    let mut app = Router::new()
        .merge(routes::health_routes())
        .merge(routes::maintenance_routes())
        .merge(api);

    if config.enable_swagger {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    let app = app
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            maintenance_middleware,
        ))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(config.request_timeout()))
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware))
                .layer(DefaultBodyLimit::max(config.max_body_size)),
        );

    Ok(app)
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
            details: None,
        }),
    )
}

/// CORS for `/api/*`: one pinned origin, credentials allowed
fn build_cors_layer(config: &ApiConfig) -> anyhow::Result<CorsLayer> {
    let origin = HeaderValue::from_str(config.allowed_origin())
        .with_context(|| format!("Invalid CORS origin '{}'", config.allowed_origin()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true))
}
