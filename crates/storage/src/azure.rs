use crate::backend::{OutputKind, StorageBackend, UploadedFile};
use crate::StorageError;
use object_store::azure::{MicrosoftAzure, MicrosoftAzureBuilder};
use object_store::path::Path as ObjectPath;
use object_store::{Attribute, Attributes, ObjectStore, PutOptions, PutPayload};
use std::path::Path;
use stowage_config::AzureSettings;

/// Azure Blob Storage backend
#[derive(Debug)]
pub struct AzureBackend {
    store: MicrosoftAzure,
    account_name: String,
    container_name: String,
    prefix: String,
}

impl AzureBackend {
    pub fn new(settings: &AzureSettings) -> Result<Self, StorageError> {
        if settings.account_name.is_empty() || settings.container_name.is_empty() {
            return Err(StorageError::ConfigError(
                "Azure account_name and container_name must not be empty".to_string(),
            ));
        }

        let store = MicrosoftAzureBuilder::new()
            .with_account(settings.account_name.clone())
            .with_access_key(settings.account_key.clone())
            .with_container_name(settings.container_name.clone())
            .build()?;

        Ok(Self {
            store,
            account_name: settings.account_name.clone(),
            container_name: settings.container_name.clone(),
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
impl StorageBackend for AzureBackend {
    async fn upload(
        &self,
        local_path: &Path,
        remote_path: &str,
        kind: OutputKind,
    ) -> Result<UploadedFile, StorageError> {
        let key = self.build_key(remote_path);

        tracing::info!(
            "Uploading {} to Azure container {}",
            key,
            self.container_name
        );

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

        let location = format!(
            "https://{}.blob.core.windows.net/{}/{}",
            self.account_name, self.container_name, key
        );
        tracing::info!("Upload complete: {}", location);

        Ok(UploadedFile {
            location,
            size,
            presigned_url: None,
        })
    }
}
