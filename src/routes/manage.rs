//! Directory and entry management.
//!
//! - POST /create (form: newName)
//!   mkdir -p under the root, then 303 back to the listing.
//!
//! - GET /delete?name=
//!   Removes one file or empty directory, then 303 back to the listing.
//!
//! - GET /rename?name=
//!   Renders the rename form. Nothing on disk changes.
//!
//! - POST /renamed (form: oldName, newName)
//!   Moves oldName to newName, then 303 back to the listing.

use axum::{
    extract::{Form, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Router,
};

use crate::error::Result;
use crate::models::{CreateForm, NameQuery, RenameForm};
use crate::storage::SharedRoot;
use crate::views;

pub fn routes(root: SharedRoot) -> Router {
    Router::new()
        .route("/create", post(create_directory))
        .route("/delete", get(delete_entry))
        .route("/rename", get(rename_form))
        .route("/renamed", post(rename_entry))
        .with_state(root)
}

async fn create_directory(
    State(root): State<SharedRoot>,
    Form(form): Form<CreateForm>,
) -> Result<Redirect> {
    root.create_dir(&form.new_name).await?;
    Ok(Redirect::to("/"))
}

async fn delete_entry(
    State(root): State<SharedRoot>,
    Query(query): Query<NameQuery>,
) -> Result<Redirect> {
    root.remove(&query.name).await?;
    Ok(Redirect::to("/"))
}

async fn rename_form(Query(query): Query<NameQuery>) -> Result<Html<String>> {
    Ok(Html(views::render_rename(&query.name)?))
}

async fn rename_entry(
    State(root): State<SharedRoot>,
    Form(form): Form<RenameForm>,
) -> Result<Redirect> {
    root.rename(&form.old_name, &form.new_name).await?;
    Ok(Redirect::to("/"))
}
