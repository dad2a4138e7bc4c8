mod backend;
mod errors;
mod factory;
mod local;

#[cfg(feature = "s3")]
mod s3;

#[cfg(feature = "gcs")]
mod gcs;

#[cfg(feature = "azure")]
mod azure;

pub use backend::{OutputKind, StorageBackend, UploadedFile};
pub use errors::*;
pub use factory::create_backend;
pub use local::LocalBackend;

#[cfg(feature = "s3")]
pub use s3::S3Backend;

#[cfg(feature = "gcs")]
pub use gcs::GcsBackend;

#[cfg(feature = "azure")]
pub use azure::AzureBackend;
