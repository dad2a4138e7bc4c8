// Re-export all public APIs from the workspace crates

pub use stowage_config::*;
pub use stowage_storage::*;
pub use stowage_uploader::*;

/// Prelude module for convenient imports
pub mod prelude {
    // Configuration
    pub use stowage_config::{Config, StorageConfig};

    // Storage backends
    pub use stowage_storage::{create_backend, OutputKind, StorageBackend, UploadedFile};

    // Orchestration
    pub use stowage_uploader::{TracingReporter, UploadError, UploadReporter, Uploader};
}
