use actix_multipart::form::{tempfile::TempFile, MultipartForm};

/// Multipart form posted by the companion app and the web UI
#[derive(MultipartForm)]
pub struct UploadForm {
    /// The file being uploaded; its multipart filename names the stored file.
    /// Limit matches `MAX_UPLOAD_BYTES`.
    #[multipart(limit = "2GiB")]
    pub file: TempFile,
}
