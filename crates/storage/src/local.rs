use crate::backend::{OutputKind, StorageBackend, UploadedFile};
use crate::StorageError;
use std::path::{Path, PathBuf};
use stowage_config::LocalSettings;
use tokio::fs;

/// Local filesystem storage backend
#[derive(Debug)]
pub struct LocalBackend {
    directory: PathBuf,
}

impl LocalBackend {
    pub fn new(settings: &LocalSettings) -> Self {
        Self {
            directory: settings.directory.clone(),
        }
    }

    fn absolute(path: PathBuf) -> Result<PathBuf, StorageError> {
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(std::env::current_dir()?.join(path))
        }
    }
}

#[async_trait::async_trait]
impl StorageBackend for LocalBackend {
    async fn upload(
        &self,
        local_path: &Path,
        remote_path: &str,
        _kind: OutputKind,
    ) -> Result<UploadedFile, StorageError> {
        if !local_path.exists() {
            return Err(StorageError::FileNotFound(
                local_path.display().to_string(),
            ));
        }

        let destination = self.directory.join(remote_path);
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).await?;
        }

        let size = fs::copy(local_path, &destination).await?;
        let location = Self::absolute(destination)?;

        tracing::debug!("Stored {} locally at {}", remote_path, location.display());

        Ok(UploadedFile {
            location: location.to_string_lossy().to_string(),
            size,
            presigned_url: None,
        })
    }
}
