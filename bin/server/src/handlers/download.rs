use crate::handlers::error::{handle_error, handle_store_error};
use crate::state::AppState;
use actix_web::http::header::{
    Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue,
};
use actix_web::{get, web, HttpResponse, Result as ActixResult};
use common::{file_utils, DownloadRequest};
use tokio_util::io::ReaderStream;
use tracing::info;

/// Stream a stored file back as an attachment
#[get("/download")]
pub async fn download(
    query: web::Query<DownloadRequest>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let DownloadRequest { filename } = query.into_inner();

    info!(filename = ?filename, "GET /download - Request received");

    file_utils::validate_filename(&filename)
        .map_err(|e| handle_error("Rejected filename", e))?;

    let stored = state
        .store
        .open(&filename)
        .await
        .map_err(|e| handle_store_error("Failed to stat file", &filename, e))?;

    info!(
        filename = ?filename,
        size = stored.size,
        "GET /download - Streaming file"
    );

    Ok(HttpResponse::Ok()
        .content_type("application/octet-stream")
        .insert_header(attachment(filename))
        .no_chunking(stored.size)
        .streaming(ReaderStream::new(stored.file)))
}

/// `attachment` disposition; non-ASCII names get an ASCII `filename` fallback
/// plus the exact name as RFC 5987 `filename*`
fn attachment(filename: String) -> ContentDisposition {
    let mut parameters = Vec::with_capacity(2);
    if filename.is_ascii() {
        parameters.push(DispositionParam::Filename(filename));
    } else {
        let fallback = filename
            .chars()
            .map(|c| if c.is_ascii() { c } else { '_' })
            .collect();
        parameters.push(DispositionParam::Filename(fallback));
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext("UTF-8".to_string()),
            language_tag: None,
            value: filename.into_bytes(),
        }));
    }

    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}
