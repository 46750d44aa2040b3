//! Listing endpoints.
//!
//! - GET /
//!   HTML page with the root path and every entry found by the recursive walk,
//!   plus the create and upload forms.
//!
//! - GET /api/entries
//!   Same walk as JSON: `{ root, entries: [{ name, path, is_directory, depth }] }`.

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::models::Listing;
use crate::storage::SharedRoot;
use crate::views;

pub fn routes(root: SharedRoot) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/entries", get(list_entries))
        .with_state(root)
}

async fn index(State(root): State<SharedRoot>) -> Result<Html<String>> {
    let entries = root.list().await?;
    let page = views::render_index(&root.path().to_string_lossy(), &entries)?;
    Ok(Html(page))
}

async fn list_entries(State(root): State<SharedRoot>) -> Result<Json<Listing>> {
    let entries = root.list().await?;
    Ok(Json(Listing {
        root: root.path().to_string_lossy().to_string(),
        entries,
    }))
}
