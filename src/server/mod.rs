//! HTTP request surface.
//!
//! A thin adapter over [`tracker_lib`]: handlers parse parameters, call
//! into the store or the query pipeline, and shape JSON responses. The
//! store and pipeline never call each other; the pipeline runs on a
//! snapshot taken here.

mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracker_lib::IssueStore;

/// Shared state handed to every handler.
///
/// The store sits behind a reader/writer lock so concurrent requests
/// never observe a torn record or lose an update.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<IssueStore>>,
}

impl AppState {
    #[must_use]
    pub fn new(store: IssueStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

/// Build the application router.
///
/// Cross-origin requests are permitted from any origin: the service has
/// no auth surface and is meant to back a separately-served frontend.
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/issues",
            get(handlers::list_issues).post(handlers::create_issue),
        )
        .route(
            "/issues/:id",
            get(handlers::get_issue).put(handlers::update_issue),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
