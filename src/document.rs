use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata for one user-picked file. The `uri` is the local path handed back
/// by the file dialog; `name` doubles as the remote object key, so two picks
/// sharing a file name overwrite the same remote object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub uri: PathBuf,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Image,
    Pdf,
    Other,
}

impl DocumentDescriptor {
    /// Builds a descriptor from a picked path. Returns `None` when the path
    /// has no usable file name.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_string();
        let mime_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(mime_from_extension)
            .map(str::to_string);
        let size = fs::metadata(path).ok().map(|m| m.len());

        Some(Self {
            uri: path.to_path_buf(),
            name,
            mime_type,
            size,
        })
    }

    pub fn kind(&self) -> DocumentKind {
        match self.mime_type.as_deref() {
            Some(mime) if mime.starts_with("image/") => DocumentKind::Image,
            Some("application/pdf") => DocumentKind::Pdf,
            _ => DocumentKind::Other,
        }
    }
}

fn mime_from_extension(extension: &str) -> Option<&'static str> {
    let mime = match extension.to_lowercase().as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        _ => return None,
    };
    Some(mime)
}
