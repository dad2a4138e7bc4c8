use stowage_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UploadError {
    /// The only attempted destination failed; the backend error passes
    /// through unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Both the primary and backup destinations failed. Neither configured
    /// destination is usable, so callers should not retry blindly.
    #[error("primary: {primary}\nbackup: {backup}")]
    AllBackendsFailed { primary: String, backup: String },
}

impl UploadError {
    /// Whether the failure might clear on its own. A dual-destination failure
    /// is a configuration/availability problem needing operator attention.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, UploadError::AllBackendsFailed { .. })
    }
}
