//! Binary attachments sent with a new book.

use std::fmt;
use std::path::Path;

use crate::Result;
use crate::error::InvalidInputError;

const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Raw bytes plus the metadata needed to upload them as a file part.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    file_name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl Attachment {
    /// Create an attachment from bytes already in memory.
    pub fn new(
        file_name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self> {
        let file_name = file_name.into();
        let media_type = media_type.into();

        if file_name.trim().is_empty() {
            return Err(InvalidInputError::Attachment {
                reason: "file name cannot be empty".to_string(),
            }
            .into());
        }
        if !media_type.contains('/') {
            return Err(InvalidInputError::Attachment {
                reason: format!("'{}' is not a media type", media_type),
            }
            .into());
        }

        Ok(Self {
            file_name,
            media_type,
            bytes,
        })
    }

    /// Read a file from disk, inferring the media type from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| InvalidInputError::Attachment {
                reason: format!("'{}' has no usable file name", path.display()),
            })?
            .to_string();
        let media_type = media_type_for(&file_name);

        Self::new(file_name, media_type, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The file extension, if the name has one.
    pub fn extension(&self) -> Option<&str> {
        Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
    }
}

// Bytes are elided; attachments can be large.
impl fmt::Debug for Attachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn media_type_for(file_name: &str) -> &'static str {
    let extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("pdf") => "application/pdf",
        Some("txt") => "text/plain",
        Some("epub") => "application/epub+zip",
        _ => DEFAULT_MEDIA_TYPE,
    }
}
