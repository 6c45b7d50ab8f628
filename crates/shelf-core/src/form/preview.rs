//! Local preview of a draft attachment.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::trace;

use crate::Result;
use crate::book::Attachment;

/// A temporary file mirroring a draft attachment, for local display only.
///
/// The file exists exactly as long as this value: dropping it deletes the
/// file. It is never sent to the server.
#[derive(Debug)]
pub struct AttachmentPreview {
    file: NamedTempFile,
    media_type: String,
}

impl AttachmentPreview {
    /// Write the attachment bytes to a fresh temporary file.
    pub fn create(attachment: &Attachment) -> Result<Self> {
        let suffix = attachment
            .extension()
            .map(|e| format!(".{}", e))
            .unwrap_or_default();

        let mut file = tempfile::Builder::new()
            .prefix("shelf-preview-")
            .suffix(&suffix)
            .tempfile()?;
        file.write_all(attachment.bytes())?;
        file.flush()?;

        trace!(path = %file.path().display(), "created attachment preview");

        Ok(Self {
            file,
            media_type: attachment.media_type().to_string(),
        })
    }

    /// Location of the preview file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }
}

impl Drop for AttachmentPreview {
    fn drop(&mut self) {
        trace!(path = %self.file.path().display(), "releasing attachment preview");
    }
}
