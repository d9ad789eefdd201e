//! HTTP transport - maps REST verbs and paths onto record store operations.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! For an entity `E` with route segment `r`:
//!
//! - `GET /r/GetAll<Es>`: the whole collection.
//! - `POST /r/Create<E>`: body = E, identifier ignored; answers the stored record.
//! - `GET /r/Get<E>ById/:id`: the record, or 404.
//! - `PUT /r/Update<E>/:id`: body = E; answers the updated record, or 404.
//! - `DELETE /r/Delete<E>/:id`: the remaining collection (or 204 for
//!   `DeleteReply::NoContent` entities), or 404.
//! - `GET /health`: `{ "ok": true, "entities": [...] }`.
//!
//! Every store call runs inside [`timed`], so each request reports one timing.
//!
//! ## Example
//!
//! ```ignore
//! use recordstore::{http, Catalog, StoreOptions};
//!
//! let catalog = Catalog::open("./data", StoreOptions::default())?;
//! http::serve(catalog, "127.0.0.1:5000").await?;
//! ```

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::json;
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::entities::{Address, Order, Product, TaskItem, User};
use crate::error::StoreError;
use crate::record::{DeleteReply, Record, RecordId};
use crate::store::RecordStore;
use crate::timing::{timed, LogReporter, Outcome, TimingReporter};

/// Route state for one entity type.
struct Endpoint<T: Record> {
    store: Arc<RecordStore<T>>,
    reporter: Arc<dyn TimingReporter>,
}

impl<T: Record> Clone for Endpoint<T> {
    fn clone(&self) -> Self {
        Endpoint {
            store: self.store.clone(),
            reporter: self.reporter.clone(),
        }
    }
}

/// Build the five routes for one entity type.
pub fn entity_router<T: Record>(
    store: Arc<RecordStore<T>>,
    reporter: Arc<dyn TimingReporter>,
) -> Router {
    let base = format!("/{}", T::ROUTE);
    Router::new()
        .route(
            &format!("{}/GetAll{}", base, T::PLURAL),
            get(get_all::<T>),
        )
        .route(
            &format!("{}/Create{}", base, T::NAME),
            axum::routing::post(create::<T>),
        )
        .route(
            &format!("{}/Get{}ById/:id", base, T::NAME),
            get(get_by_id::<T>),
        )
        .route(
            &format!("{}/Update{}/:id", base, T::NAME),
            axum::routing::put(update::<T>),
        )
        .route(
            &format!("{}/Delete{}/:id", base, T::NAME),
            axum::routing::delete(delete::<T>),
        )
        .with_state(Endpoint { store, reporter })
}

/// Build an axum `Router` serving every store in the catalog.
pub fn router(catalog: &Catalog, reporter: Arc<dyn TimingReporter>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(entity_router(catalog.products().clone(), reporter.clone()))
        .merge(entity_router(catalog.users().clone(), reporter.clone()))
        .merge(entity_router(catalog.orders().clone(), reporter.clone()))
        .merge(entity_router(catalog.addresses().clone(), reporter.clone()))
        .merge(entity_router(catalog.task_items().clone(), reporter))
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:5000"`),
/// logging operation timings.
pub async fn serve(catalog: Catalog, addr: &str) -> Result<(), std::io::Error> {
    let app = router(&catalog, Arc::new(LogReporter::new()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        data_dir = %catalog.data_dir().display(),
        "record store listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

/// `GET /health`: returns `{ "ok": true, "entities": [...] }`.
async fn health_handler() -> impl IntoResponse {
    let entities = [
        Product::ROUTE,
        User::ROUTE,
        Order::ROUTE,
        Address::ROUTE,
        TaskItem::ROUTE,
    ];
    Json(json!({ "ok": true, "entities": entities }))
}

async fn get_all<T: Record>(State(endpoint): State<Endpoint<T>>) -> Response {
    let operation = format!("GetAll{}", T::PLURAL);
    respond(timed(endpoint.reporter.as_ref(), &operation, || {
        endpoint.store.list().map(Some)
    }))
}

async fn create<T: Record>(
    State(endpoint): State<Endpoint<T>>,
    Json(record): Json<T>,
) -> Response {
    let operation = format!("Create{}", T::NAME);
    respond(timed(endpoint.reporter.as_ref(), &operation, || {
        endpoint.store.create(record).map(Some)
    }))
}

async fn get_by_id<T: Record>(
    State(endpoint): State<Endpoint<T>>,
    Path(id): Path<RecordId>,
) -> Response {
    let operation = format!("Get{}ById", T::NAME);
    respond(timed(endpoint.reporter.as_ref(), &operation, || {
        endpoint.store.get(id)
    }))
}

async fn update<T: Record>(
    State(endpoint): State<Endpoint<T>>,
    Path(id): Path<RecordId>,
    Json(patch): Json<T>,
) -> Response {
    let operation = format!("Update{}", T::NAME);
    respond(timed(endpoint.reporter.as_ref(), &operation, || {
        endpoint.store.update(id, patch)
    }))
}

async fn delete<T: Record>(
    State(endpoint): State<Endpoint<T>>,
    Path(id): Path<RecordId>,
) -> Response {
    let operation = format!("Delete{}", T::NAME);
    let result = timed(endpoint.reporter.as_ref(), &operation, || {
        endpoint.store.delete(id)
    });
    match (T::DELETE_REPLY, result) {
        (DeleteReply::NoContent, Ok(Outcome::Success(_))) => StatusCode::NO_CONTENT.into_response(),
        (_, result) => respond(result),
    }
}

/// Map a timed outcome to a response: 200 + JSON, 404 with no body, or 500.
fn respond<V: Serialize>(result: Result<Outcome<V>, StoreError>) -> Response {
    match result {
        Ok(Outcome::Success(value)) => (StatusCode::OK, Json(value)).into_response(),
        Ok(Outcome::NotFound) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!(error = %e, "record store operation failed");
            let body = json!({ "error": e.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
