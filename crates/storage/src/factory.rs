//! Factory for creating storage backends based on configuration

use crate::backend::StorageBackend;
use crate::local::LocalBackend;
use crate::StorageError;
use std::sync::Arc;
use stowage_config::{LocalSettings, StorageConfig};

/// Create a storage backend for the given destination.
/// An absent configuration means local storage with default settings.
pub async fn create_backend(
    config: Option<&StorageConfig>,
) -> Result<Arc<dyn StorageBackend>, StorageError> {
    match config {
        None => Ok(Arc::new(LocalBackend::new(&LocalSettings::default()))),
        Some(StorageConfig::Local(settings)) => Ok(Arc::new(LocalBackend::new(settings))),

        #[cfg(feature = "s3")]
        Some(StorageConfig::S3(settings)) => {
            let backend = crate::s3::S3Backend::new(settings).await?;
            Ok(Arc::new(backend))
        }
        #[cfg(not(feature = "s3"))]
        Some(StorageConfig::S3(_)) => Err(StorageError::ConfigError(
            "S3 storage selected but not compiled. Rebuild with --features s3.".to_string(),
        )),

        #[cfg(feature = "gcs")]
        Some(StorageConfig::Gcs(settings)) => {
            let backend = crate::gcs::GcsBackend::new(settings)?;
            Ok(Arc::new(backend))
        }
        #[cfg(not(feature = "gcs"))]
        Some(StorageConfig::Gcs(_)) => Err(StorageError::ConfigError(
            "GCS storage selected but not compiled. Rebuild with --features gcs.".to_string(),
        )),

        #[cfg(feature = "azure")]
        Some(StorageConfig::Azure(settings)) => {
            let backend = crate::azure::AzureBackend::new(settings)?;
            Ok(Arc::new(backend))
        }
        #[cfg(not(feature = "azure"))]
        Some(StorageConfig::Azure(_)) => Err(StorageError::ConfigError(
            "Azure storage selected but not compiled. Rebuild with --features azure.".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::OutputKind;

    #[tokio::test]
    async fn test_absent_config_means_local_defaults() {
        let backend = create_backend(None).await.unwrap();

        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("file.json");
        tokio::fs::write(&source, b"{}").await.unwrap();

        // Default local settings store relative to the working directory
        let remote = dir.path().join("stored.json");
        let uploaded = backend
            .upload(&source, remote.to_str().unwrap(), OutputKind::Manifest)
            .await
            .unwrap();
        assert_eq!(uploaded.size, 2);
    }

    #[tokio::test]
    async fn test_local_variant_uses_given_settings() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig::Local(LocalSettings {
            directory: dir.path().to_path_buf(),
        });

        let backend = create_backend(Some(&config)).await.unwrap();

        let source = dir.path().join("in.jpg");
        tokio::fs::write(&source, b"jpeg").await.unwrap();

        let uploaded = backend
            .upload(&source, "thumbs/in.jpg", OutputKind::Image)
            .await
            .unwrap();
        assert!(dir.path().join("thumbs/in.jpg").exists());
        assert_eq!(uploaded.size, 4);
    }

    #[cfg(not(feature = "s3"))]
    #[tokio::test]
    async fn test_provider_not_compiled_is_config_error() {
        let config = StorageConfig::S3(stowage_config::S3Settings {
            endpoint_url: String::new(),
            region: "auto".to_string(),
            access_key_id: "key".to_string(),
            secret_access_key: "secret".to_string(),
            bucket_name: "outputs".to_string(),
            bucket_prefix: String::new(),
            generate_presigned_url: false,
            presign_expiry_secs: 3600,
        });

        let err = create_backend(Some(&config)).await.unwrap_err();
        assert!(matches!(err, StorageError::ConfigError(_)));
    }
}
