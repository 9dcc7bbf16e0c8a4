//! HTTP server for the product catalog.
//!
//! Exposes CRUD plus the query pipeline over a JSON API. The handlers own
//! the collaborator duties the engine delegates: query-string coercion
//! ([`crate::params`]), body validation ([`crate::validate`]), obtaining a
//! store snapshot, and mapping lookup misses to 404s. The engine itself
//! runs synchronously over the snapshot and cannot fail.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`    | `/products` | Filtered, sorted, paginated listing |
//! | `GET`    | `/products/{id}` | Single record lookup |
//! | `POST`   | `/products` | Create a record (201) |
//! | `PUT`    | `/products/{id}` | Partial update |
//! | `DELETE` | `/products/{id}` | Remove a record, echoing it back |
//! | `GET`    | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! All error responses share one schema:
//!
//! ```json
//! { "error": { "code": "bad_request", "message": "inStock must be true or false" } }
//! ```
//!
//! Error codes: `bad_request` (400), `not_found` (404), `internal` (500).
//!
//! # CORS
//!
//! All origins, methods, and headers are permitted to support browser
//! clients.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use stockroom_core::models::{NewProduct, Product, ProductPatch};
use stockroom_core::query::{self, QueryResult};
use stockroom_core::store::ProductStore;

use crate::config::Config;
use crate::params::{parse_query, RawQuery};
use crate::validate::{validate_new, validate_patch};

/// Shared application state passed to all route handlers via Axum's
/// `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (wrapped in `Arc` for cheap cloning).
    config: Arc<Config>,
    /// The record store backing both CRUD and query snapshots.
    store: Arc<dyn ProductStore>,
}

/// Starts the HTTP server.
///
/// Binds to the address configured in `[server].bind` and serves until the
/// process is terminated.
pub async fn run_server(config: Config, store: Arc<dyn ProductStore>) -> anyhow::Result<()> {
    let bind_addr = config.server.bind.clone();
    let app = build_router(config, store);

    println!("stockd listening on http://{}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the router with all routes and layers. Split out of
/// [`run_server`] so tests can drive the app without binding a socket.
pub fn build_router(config: Config, store: Arc<dyn ProductStore>) -> Router {
    let state = AppState {
        config: Arc::new(config),
        store,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/products", get(handle_list).post(handle_create))
        .route(
            "/products/{id}",
            get(handle_get).put(handle_update).delete(handle_delete),
        )
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

/// Inner error detail with a machine-readable code and human-readable
/// message.
#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
pub struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

/// Constructs a 400 Bad Request error.
fn bad_request(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::BAD_REQUEST,
        code: "bad_request".to_string(),
        message: message.into(),
    }
}

/// Constructs a 404 Not Found error.
fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

/// Constructs a 500 error for store failures.
fn internal(err: anyhow::Error) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: err.to_string(),
    }
}

// ============ GET /health ============

/// JSON response body for `GET /health`.
#[derive(Serialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is running.
    status: String,
    /// The crate version from `Cargo.toml`.
    version: String,
}

/// Handler for `GET /health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /products ============

/// Handler for `GET /products`.
///
/// Coerces the raw query string, snapshots the store, and runs the query
/// pipeline. Coercion failures map to 400; the pipeline itself is total.
async fn handle_list(
    State(state): State<AppState>,
    Query(raw): Query<RawQuery>,
) -> Result<Json<QueryResult>, AppError> {
    let params = parse_query(raw, &state.config.query).map_err(|e| bad_request(e.to_string()))?;
    let snapshot = state.store.snapshot().await.map_err(internal)?;
    Ok(Json(query::execute(snapshot, &params)))
}

// ============ GET /products/{id} ============

/// Handler for `GET /products/{id}`.
async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, AppError> {
    let product = state.store.get(id).await.map_err(internal)?;
    product
        .map(Json)
        .ok_or_else(|| not_found(format!("no product with id: {}", id)))
}

// ============ POST /products ============

/// Handler for `POST /products`. Returns 201 with the created record.
async fn handle_create(
    State(state): State<AppState>,
    Json(draft): Json<NewProduct>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    validate_new(&draft).map_err(|e| bad_request(e.to_string()))?;
    let product = state.store.insert(draft).await.map_err(internal)?;
    Ok((StatusCode::CREATED, Json(product)))
}

// ============ PUT /products/{id} ============

/// Handler for `PUT /products/{id}`. Applies the present fields only.
async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<Product>, AppError> {
    validate_patch(&patch).map_err(|e| bad_request(e.to_string()))?;
    let updated = state.store.update(id, patch).await.map_err(internal)?;
    updated
        .map(Json)
        .ok_or_else(|| not_found(format!("no product with id: {}", id)))
}

// ============ DELETE /products/{id} ============

/// Handler for `DELETE /products/{id}`. Echoes the removed record.
async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Product>, AppError> {
    let removed = state.store.delete(id).await.map_err(internal)?;
    removed
        .map(Json)
        .ok_or_else(|| not_found(format!("no product with id: {}", id)))
}
