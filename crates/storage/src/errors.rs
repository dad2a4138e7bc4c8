use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[cfg(feature = "s3")]
    #[error("S3 SDK error: {0}")]
    S3SdkError(String),

    #[cfg(any(feature = "gcs", feature = "azure"))]
    #[error("Object store error: {0}")]
    ObjectStoreError(#[from] object_store::Error),

    #[error("Upload failed for '{0}': {1}")]
    UploadError(String, String),

    #[error("Invalid storage configuration: {0}")]
    ConfigError(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}
