use crate::errors::UploadError;
use crate::reporter::UploadReporter;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;
use stowage_config::StorageConfig;
use stowage_storage::{create_backend, OutputKind, StorageBackend, UploadedFile};

/// Drives uploads to a primary destination, falling back to an optional
/// backup destination when the primary fails.
///
/// One instance is built per output session and may serve multiple files,
/// including concurrently.
pub struct Uploader {
    primary: Arc<dyn StorageBackend>,
    backup: Option<Arc<dyn StorageBackend>>,
    backup_used: AtomicBool,
    reporter: Option<Arc<dyn UploadReporter>>,
}

impl Uploader {
    /// Builds an uploader from resolved configuration.
    ///
    /// The primary backend must be constructible. A backup that fails to
    /// construct is logged and disabled for this instance's lifetime.
    pub async fn new(
        primary: Option<&StorageConfig>,
        backup: Option<&StorageConfig>,
        reporter: Option<Arc<dyn UploadReporter>>,
    ) -> Result<Self, UploadError> {
        let primary = create_backend(primary).await?;

        let backup = match backup {
            Some(config) => match create_backend(Some(config)).await {
                Ok(backend) => Some(backend),
                Err(e) => {
                    tracing::error!("Failed to create backup storage backend: {}", e);
                    None
                }
            },
            None => None,
        };

        Ok(Self::from_backends(primary, backup, reporter))
    }

    /// Builds an uploader directly from backend handles
    pub fn from_backends(
        primary: Arc<dyn StorageBackend>,
        backup: Option<Arc<dyn StorageBackend>>,
        reporter: Option<Arc<dyn UploadReporter>>,
    ) -> Self {
        Self {
            primary,
            backup,
            backup_used: AtomicBool::new(false),
            reporter,
        }
    }

    /// Uploads one file. The backup destination is attempted only after the
    /// primary has definitively failed, never in parallel with it.
    pub async fn upload(
        &self,
        local_path: &Path,
        remote_path: &str,
        kind: OutputKind,
        delete_after_upload: bool,
    ) -> Result<UploadedFile, UploadError> {
        let start = Instant::now();
        let primary_result = self.primary.upload(local_path, remote_path, kind).await;
        let elapsed = start.elapsed();

        let primary_err = match primary_result {
            Ok(uploaded) => {
                if let Some(reporter) = &self.reporter {
                    reporter.record_success(kind, elapsed);
                }
                self.cleanup(local_path, delete_after_upload).await;
                return Ok(uploaded);
            }
            Err(e) => e,
        };

        if let Some(reporter) = &self.reporter {
            reporter.record_failure(kind, elapsed);
        }

        let Some(backup) = &self.backup else {
            return Err(primary_err.into());
        };

        match backup.upload(local_path, remote_path, kind).await {
            Ok(uploaded) => {
                self.backup_used.store(true, Ordering::Relaxed);
                if let Some(reporter) = &self.reporter {
                    reporter.record_backup_write(kind);
                }
                self.cleanup(local_path, delete_after_upload).await;
                Ok(uploaded)
            }
            Err(backup_err) => Err(UploadError::AllBackendsFailed {
                primary: primary_err.to_string(),
                backup: backup_err.to_string(),
            }),
        }
    }

    /// True once any upload has landed on the backup destination. Downstream
    /// logic uses this to decide whether a failover manifest must be emitted.
    pub fn manifest_required(&self) -> bool {
        self.backup_used.load(Ordering::Relaxed)
    }

    /// Best-effort removal of the local file after a successful upload.
    /// A failed removal never surfaces as an upload error.
    async fn cleanup(&self, local_path: &Path, delete_after_upload: bool) {
        if delete_after_upload {
            let _ = tokio::fs::remove_file(local_path).await;
        }
    }
}
