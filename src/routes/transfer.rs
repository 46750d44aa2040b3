//! File upload and download.
//!
//! - POST /upload (multipart field: file)
//!   Writes the field's bytes to root + declared filename, truncating any
//!   existing file. The body size limit is lifted for this route.
//!
//! - GET /download?name=
//!   Streams the file back as an attachment. The filename in
//!   Content-Disposition is the raw `name`, unquoted.

use axum::{
    body::Body,
    extract::{DefaultBodyLimit, Multipart, Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
    Router,
};
use tokio::io::AsyncWriteExt;
use tokio_util::io::ReaderStream;

use crate::error::{AppError, Result};
use crate::models::NameQuery;
use crate::storage::SharedRoot;

const UPLOAD_FIELD: &str = "file";

pub fn routes(root: SharedRoot) -> Router {
    Router::new()
        .route(
            "/upload",
            post(upload_file).layer(DefaultBodyLimit::disable()),
        )
        .route("/download", get(download_file))
        .with_state(root)
}

async fn upload_file(State(root): State<SharedRoot>, mut multipart: Multipart) -> Result<Redirect> {
    while let Some(mut field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AppError::BadRequest("upload field has no filename".to_string()))?;

        // A failed copy leaves the partial file in place.
        let (path, mut file) = root.create_file(&file_name).await?;
        let mut written = 0u64;
        while let Some(chunk) = field.chunk().await? {
            file.write_all(&chunk)
                .await
                .map_err(|e| AppError::fs("write", &path, e))?;
            written += chunk.len() as u64;
        }
        file.flush()
            .await
            .map_err(|e| AppError::fs("write", &path, e))?;

        tracing::info!(path = %path.display(), bytes = written, "uploaded");
        return Ok(Redirect::to("/"));
    }

    Err(AppError::BadRequest(format!(
        "missing multipart field `{}`",
        UPLOAD_FIELD
    )))
}

async fn download_file(
    State(root): State<SharedRoot>,
    Query(query): Query<NameQuery>,
) -> Result<Response> {
    let (path, file, len) = root.open_file(&query.name).await?;

    let disposition = HeaderValue::from_str(&format!("attachment; filename={}", query.name))
        .map_err(|e| AppError::Internal(format!("invalid download name: {}", e)))?;

    tracing::debug!(path = %path.display(), bytes = len, "download started");

    let mut response = Body::from_stream(ReaderStream::new(file)).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/octet-stream"),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(len));
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}
