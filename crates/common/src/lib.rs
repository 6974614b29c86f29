pub mod file_utils;

use serde::{Deserialize, Serialize};

/// Value of `code` in every successful JSON response
pub const SUCCESS_CODE: &str = "0";

/// Payload returned by `/set_clipboard` and `/upload` on success
pub const OK_DATA: &str = "ok";

/// JSON envelope shared by the clipboard, list and upload endpoints
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse<T> {
    pub data: T,
    pub code: String, // always "0" on success
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data,
            code: SUCCESS_CODE.to_string(),
        }
    }
}

/// Query parameters for `/set_clipboard`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SetClipboardRequest {
    #[serde(default)]
    pub text: String, // missing `text` clears the clipboard
}

/// Query parameters for `/download`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DownloadRequest {
    pub filename: String, // name relative to the storage folder
}

/// Response from health check endpoint
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String, // "ok" when healthy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_envelope_shape() {
        let json = serde_json::to_string(&ApiResponse::ok(OK_DATA)).unwrap();
        assert_eq!(json, r#"{"data":"ok","code":"0"}"#);

        let json = serde_json::to_string(&ApiResponse::ok(vec!["a.txt", "b.txt"])).unwrap();
        assert_eq!(json, r#"{"data":["a.txt","b.txt"],"code":"0"}"#);
    }

    #[test]
    fn test_set_clipboard_text_defaults_to_empty() {
        let req: SetClipboardRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.text, "");
    }
}
