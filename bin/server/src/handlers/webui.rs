//! Static files for the browser UI, mounted under `/webui/`

use crate::handlers::error::handle_server_error;
use crate::state::AppState;
use actix_web::http::header;
use actix_web::{get, web, HttpResponse, Result as ActixResult};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const MOUNT_PATH: &str = "/webui/";

/// Resolves request paths to files under the web UI directory
pub struct StaticAssets {
    root: PathBuf,
}

impl StaticAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File for `relative`, or `None` if it is missing or lies outside the root.
    /// Directories resolve to their `index.html`.
    pub async fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let root = tokio::fs::canonicalize(&self.root).await.ok()?;
        let requested = self.root.join(relative.trim_start_matches('/'));
        let mut path = tokio::fs::canonicalize(&requested).await.ok()?;
        if tokio::fs::metadata(&path).await.ok()?.is_dir() {
            path = tokio::fs::canonicalize(path.join("index.html")).await.ok()?;
        }

        let metadata = tokio::fs::metadata(&path).await.ok()?;
        if path.starts_with(&root) && metadata.is_file() {
            Some(path)
        } else {
            None
        }
    }
}

fn content_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .to_string()
}

#[get("/webui")]
pub async fn webui_root() -> HttpResponse {
    HttpResponse::MovedPermanently()
        .insert_header((header::LOCATION, MOUNT_PATH))
        .finish()
}

#[get("/webui/{tail:.*}")]
pub async fn webui_asset(
    tail: web::Path<String>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let tail = tail.into_inner();
    let path = state.webui.resolve(&tail).await.ok_or_else(|| {
        debug!("GET /webui/{} - not found", tail);
        actix_web::error::ErrorNotFound("Not found")
    })?;

    let body = tokio::fs::read(&path)
        .await
        .map_err(|e| handle_server_error("Failed to read web UI asset", e))?;

    Ok(HttpResponse::Ok()
        .content_type(content_type(&path))
        .body(body))
}
