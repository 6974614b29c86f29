use crate::handlers::error::handle_server_error;
use crate::state::AppState;
use actix_web::{get, web, HttpResponse, Result as ActixResult};
use common::ApiResponse;
use tracing::info;

/// Names of every file currently in the storage folder
#[get("/list")]
pub async fn list(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    let names = state
        .store
        .list()
        .await
        .map_err(|e| handle_server_error("Failed to list files", e))?;

    info!("GET /list - {} file(s)", names.len());

    Ok(HttpResponse::Ok().json(ApiResponse::ok(names)))
}
