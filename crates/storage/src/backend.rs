use crate::StorageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Kind of output file being stored. Sent to the provider as the content type
/// and used as the label on outcome metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    Video,
    Audio,
    Image,
    Playlist,
    Segment,
    Manifest,
}

impl OutputKind {
    /// MIME type sent to the storage provider
    pub fn content_type(&self) -> &'static str {
        match self {
            OutputKind::Video => "video/mp4",
            OutputKind::Audio => "audio/ogg",
            OutputKind::Image => "image/jpeg",
            OutputKind::Playlist => "application/x-mpegurl",
            OutputKind::Segment => "video/mp2t",
            OutputKind::Manifest => "application/json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputKind::Video => "video",
            OutputKind::Audio => "audio",
            OutputKind::Image => "image",
            OutputKind::Playlist => "playlist",
            OutputKind::Segment => "segment",
            OutputKind::Manifest => "manifest",
        }
    }
}

impl fmt::Display for OutputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A durably stored upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// Canonical address of the stored object (provider-specific)
    pub location: String,
    /// Size of the stored object in bytes
    pub size: u64,
    /// Signed download link, for backends that support one
    pub presigned_url: Option<String>,
}

/// Storage backend trait for file storage abstraction
#[async_trait::async_trait]
pub trait StorageBackend: Send + Sync + fmt::Debug {
    /// Upload one file to storage. Either the object is durably stored and a
    /// result is returned, or the call fails with no partial result.
    async fn upload(
        &self,
        local_path: &Path,
        remote_path: &str,
        kind: OutputKind,
    ) -> Result<UploadedFile, StorageError>;
}
