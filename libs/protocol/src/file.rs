//! File parameters: fields that may be a remote URL or a local upload.

use std::path::{Path, PathBuf};

/// Where a file-backed field's content comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    /// A remote URL the server fetches itself; travels as a plain text
    /// field.
    Url(String),
    /// A local file uploaded as a multipart part.
    Path(PathBuf),
}

/// A named file-backed request field (e.g. `front`, `back`, `file`, `logo`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParam {
    name: String,
    source: FileSource,
}

impl FileParam {
    /// Creates a file parameter backed by a remote URL.
    pub fn url(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Url(url.into()),
        }
    }

    /// Creates a file parameter backed by a local file to upload.
    pub fn path(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source: FileSource::Path(path.into()),
        }
    }

    /// The wire name of the field.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &FileSource {
        &self.source
    }

    /// True when this parameter requires a multipart upload.
    pub fn is_upload(&self) -> bool {
        matches!(self.source, FileSource::Path(_))
    }

    /// The local path for upload-backed parameters.
    pub fn upload_path(&self) -> Option<&Path> {
        match &self.source {
            FileSource::Path(path) => Some(path),
            FileSource::Url(_) => None,
        }
    }
}
