/// Name of the settings file kept beside the executable
pub const CONFIG_FILE_NAME: &str = "lemon_push.conf";

/// Default listening port written on first run
pub const DEFAULT_PORT: &str = "14756";

/// Default storage folder written on first run, relative to the working directory
pub const DEFAULT_FOLDER: &str = "./_lemon_";

/// Interface the HTTP listener binds to
pub const BIND_HOST: &str = "0.0.0.0";

/// Default web UI asset directory, relative to the working directory
pub const DEFAULT_WEBUI_DIR: &str = "webui";

/// Largest accepted multipart upload (2 GiB); keep in sync with `UploadForm`
pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024 * 1024;
