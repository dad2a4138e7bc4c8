use crate::backend::{OutputKind, StorageBackend, UploadedFile};
use crate::StorageError;
use object_store::gcp::{GoogleCloudStorage, GoogleCloudStorageBuilder};
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use std::path::Path;
use stowage_config::GcsSettings;

/// Google Cloud Storage backend
#[derive(Debug)]
pub struct GcsBackend {
    store: GoogleCloudStorage,
    bucket_name: String,
    prefix: String,
}

impl GcsBackend {
    pub fn new(settings: &GcsSettings) -> Result<Self, StorageError> {
        if settings.bucket_name.is_empty() {
            return Err(StorageError::ConfigError(
                "GCS bucket_name must not be empty".to_string(),
            ));
        }

        let mut builder =
            GoogleCloudStorageBuilder::from_env().with_bucket_name(settings.bucket_name.clone());
        if !settings.credentials_json.is_empty() {
            builder = builder.with_service_account_key(settings.credentials_json.clone());
        }
        let store = builder.build()?;

        Ok(Self {
            store,
            bucket_name: settings.bucket_name.clone(),
            prefix: settings.prefix.clone(),
        })
    }

    fn build_key(&self, remote_path: &str) -> String {
        if self.prefix.is_empty() {
            remote_path.to_string()
        } else {
            format!("{}/{}", self.prefix, remote_path)
        }
    }
}

#[async_trait::async_trait]
impl StorageBackend for GcsBackend {
    async fn upload(
        &self,
        local_path: &Path,
        remote_path: &str,
        kind: OutputKind,
    ) -> Result<UploadedFile, StorageError> {
        let key = self.build_key(remote_path);

        tracing::info!("Uploading {} to GCS bucket {}", key, self.bucket_name);

        let data = tokio::fs::read(local_path).await?;
        let size = data.len() as u64;

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, kind.content_type().into());
        let opts = PutOptions {
            attributes,
            ..Default::default()
        };

        self.store
            .put_opts(&ObjectPath::from(key.as_str()), PutPayload::from(data), opts)
            .await?;

        let location = format!("https://storage.googleapis.com/{}/{}", self.bucket_name, key);
        tracing::info!("Upload complete: {}", location);

        Ok(UploadedFile {
            location,
            size,
            presigned_url: None,
        })
    }
}
