use crate::handlers::error::{handle_clipboard_error, handle_server_error};
use crate::state::AppState;
use actix_web::{get, web, HttpRequest, HttpResponse, Result as ActixResult};
use common::{ApiResponse, SetClipboardRequest, OK_DATA};
use tracing::info;

/// Replace the host clipboard; links in the text are opened in the browser
#[get("/set_clipboard")]
pub async fn set_clipboard(
    query: web::Query<SetClipboardRequest>,
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let text = query.into_inner().text;
    info!(
        client = ?req.peer_addr(),
        text = ?text,
        "GET /set_clipboard - Request received"
    );

    // OS clipboard calls block
    let clipboard = state.clipboard.clone();
    let opened = web::block(move || clipboard.set(&text))
        .await
        .map_err(|e| handle_server_error("Clipboard task failed", e))?
        .map_err(|e| handle_clipboard_error("Failed to set clipboard", e))?;

    if !opened.is_empty() {
        info!("GET /set_clipboard - Opened {} link(s)", opened.len());
    }

    Ok(HttpResponse::Ok().json(ApiResponse::ok(OK_DATA)))
}

/// Current host clipboard text
#[get("/get_clipboard")]
pub async fn get_clipboard(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let clipboard = state.clipboard.clone();
    let text = web::block(move || clipboard.get())
        .await
        .map_err(|e| handle_server_error("Clipboard task failed", e))?
        .map_err(|e| handle_clipboard_error("Failed to read clipboard", e))?;

    info!(
        client = ?req.peer_addr(),
        text = ?text,
        "GET /get_clipboard - Clipboard read"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::ok(text)))
}
