use crate::handlers::error::{handle_error, handle_server_error};
use crate::handlers::upload_form::UploadForm;
use crate::state::AppState;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse, Result as ActixResult};
use common::{file_utils, ApiResponse, OK_DATA};
use tracing::info;

/// Handle file upload (multipart/form-data, field `file`)
#[post("/upload")]
pub async fn upload(
    form: MultipartForm<UploadForm>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let UploadForm { file } = form.into_inner();

    let sent_name = file
        .file_name
        .clone()
        .ok_or_else(|| handle_error("Upload rejected", "multipart field `file` has no filename"))?;
    let filename = file_utils::base_name(&sent_name).to_string();

    info!(
        filename = ?filename,
        size = file.size,
        content_type = ?file.content_type.as_ref().map(|m| m.essence_str().to_string()),
        "POST /upload - Request received"
    );

    file_utils::validate_filename(&filename)
        .map_err(|e| handle_error("Rejected filename", e))?;

    let mut source = tokio::fs::File::open(file.file.path())
        .await
        .map_err(|e| handle_server_error("Failed to read uploaded file", e))?;

    let written = state
        .store
        .store(&filename, &mut source)
        .await
        .map_err(|e| handle_server_error("Failed to store file", e))?;

    info!(
        filename = ?filename,
        bytes = written,
        "POST /upload - File stored"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(OK_DATA)))
}
