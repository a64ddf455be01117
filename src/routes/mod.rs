// src/routes/mod.rs
pub mod chat;

use crate::request_id::{REQUEST_ID_HEADER, request_id_middleware};
use crate::state::SharedState;
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::{HeaderName, HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use chat::{chat_handler, health_handler, not_found_handler};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

// Upper bound on JSON request bodies.
const MAX_BODY_BYTES: usize = 1024 * 1024;

pub fn create_router() -> Router<SharedState> {
    let api = Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .fallback(not_found_handler);

    // Unknown paths under public/ get the same JSON 404 as the API.
    let assets = ServeDir::new("public")
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(not_found_handler.into_service());

    Router::new()
        .nest("/api", api)
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// CORS for one configured origin; no layer at all when none is set.
pub fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .with_context(|| format!("invalid CORS_ORIGIN value: {origin:?}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ]))
}
