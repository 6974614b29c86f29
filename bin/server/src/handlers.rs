//! HTTP request handlers

pub mod clipboard;
pub mod download;
pub mod error;
pub mod health;
pub mod list;
pub mod upload;
pub mod upload_form;
pub mod webui;

use crate::constants::MAX_UPLOAD_BYTES;
use actix_multipart::form::MultipartFormConfig;
use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::web;

/// Register every route of the gateway
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(clipboard::set_clipboard)
        .service(clipboard::get_clipboard)
        .service(list::list)
        .service(download::download)
        .service(upload::upload)
        .service(health::health)
        .service(webui::webui_root)
        .service(webui::webui_asset);
}

/// `Access-Control-Allow-Origin: *` on every response, errors included
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

pub fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default().total_limit(MAX_UPLOAD_BYTES)
}
