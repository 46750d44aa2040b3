//! HTTP route handlers - maps form-based endpoints to filesystem operations.
//!
//! Each submodule defines routes for a feature area:
//! - `listing`: Recursive listing as HTML (GET /) and JSON (GET /api/entries)
//! - `manage`: Create, delete and the two-step rename
//! - `transfer`: Multipart upload and streamed download
//!
//! Every path accepts exactly one method; anything else gets 405.

pub mod listing;
pub mod manage;
pub mod transfer;

use axum::Router;

use crate::storage::SharedRoot;

pub fn create_router(root: SharedRoot) -> Router {
    Router::new()
        .merge(listing::routes(root.clone()))
        .merge(manage::routes(root.clone()))
        .merge(transfer::routes(root))
}
