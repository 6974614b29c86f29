use std::fmt;
use std::path::Path;

/// Reasons a client-supplied filename cannot be joined onto the storage folder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilenameError {
    Empty,
    NullByte,
    Separator,
    DotEntry,
    NotAFileName,
}

impl FilenameError {
    pub fn message(&self) -> &'static str {
        match self {
            FilenameError::Empty => "filename is empty",
            FilenameError::NullByte => "filename contains a null byte",
            FilenameError::Separator => "filename contains a path separator",
            FilenameError::DotEntry => "filename refers to '.' or '..'",
            FilenameError::NotAFileName => "filename is not a plain file name",
        }
    }
}

impl fmt::Display for FilenameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for FilenameError {}

/// Accepts only names that stay inside the storage folder once joined onto it.
pub fn validate_filename(filename: &str) -> Result<(), FilenameError> {
    if filename.is_empty() {
        return Err(FilenameError::Empty);
    }
    if filename.contains('\0') {
        return Err(FilenameError::NullByte);
    }
    if filename.contains(['/', '\\']) {
        return Err(FilenameError::Separator);
    }
    if filename == "." || filename == ".." {
        return Err(FilenameError::DotEntry);
    }

    // e.g. "C:" on Windows is a prefix, not a name
    match Path::new(filename).file_name().and_then(|n| n.to_str()) {
        Some(name) if name == filename => Ok(()),
        _ => Err(FilenameError::NotAFileName),
    }
}

/// Final component of a name sent by an upload form.
///
/// Browsers and mobile HTTP clients sometimes send the full client-side path
/// as the multipart filename; only the last component is kept.
pub fn base_name(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
}
