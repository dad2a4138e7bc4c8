use crate::backend::{OutputKind, StorageBackend, UploadedFile};
use crate::StorageError;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::{primitives::ByteStream, Client};
use std::path::Path;
use std::time::Duration;
use stowage_config::S3Settings;

/// S3-compatible storage backend
/// Compatible with: Cloudflare R2, AWS S3, MinIO, DigitalOcean Spaces, etc.
#[derive(Debug)]
pub struct S3Backend {
    client: Client,
    bucket_name: String,
    bucket_prefix: String,
    endpoint_url: String,
    region: String,
    generate_presigned_url: bool,
    presign_expiry: Duration,
}

impl S3Backend {
    pub async fn new(settings: &S3Settings) -> Result<Self, StorageError> {
        if settings.bucket_name.is_empty() {
            return Err(StorageError::ConfigError(
                "S3 bucket_name must not be empty".to_string(),
            ));
        }

        let credentials = Credentials::new(
            settings.access_key_id.clone(),
            settings.secret_access_key.clone(),
            None,
            None,
            "stowage-s3",
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .credentials_provider(credentials)
            .region(Region::new(settings.region.clone()));
        if !settings.endpoint_url.is_empty() {
            loader = loader.endpoint_url(settings.endpoint_url.clone());
        }
        let config = loader.load().await;

        let client = Client::new(&config);

        Ok(Self {
            client,
            bucket_name: settings.bucket_name.clone(),
            bucket_prefix: settings.bucket_prefix.clone(),
            endpoint_url: settings.endpoint_url.clone(),
            region: settings.region.clone(),
            generate_presigned_url: settings.generate_presigned_url,
            presign_expiry: Duration::from_secs(settings.presign_expiry_secs),
        })
    }

    fn build_key(&self, remote_path: &str) -> String {
        if self.bucket_prefix.is_empty() {
            remote_path.to_string()
        } else {
            format!("{}/{}", self.bucket_prefix, remote_path)
        }
    }

    fn object_url(&self, key: &str) -> String {
        if self.endpoint_url.is_empty() {
            format!(
                "https://{}.s3.{}.amazonaws.com/{}",
                self.bucket_name, self.region, key
            )
        } else {
            format!(
                "{}/{}/{}",
                self.endpoint_url.trim_end_matches('/'),
                self.bucket_name,
                key
            )
        }
    }

    async fn presign_get(&self, key: &str) -> Result<String, StorageError> {
        let presigning = PresigningConfig::expires_in(self.presign_expiry)
            .map_err(|e| StorageError::S3SdkError(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket_name)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| StorageError::S3SdkError(e.to_string()))?;

        Ok(request.uri().to_string())
    }
}

#[async_trait::async_trait]
impl StorageBackend for S3Backend {
    async fn upload(
        &self,
        local_path: &Path,
        remote_path: &str,
        kind: OutputKind,
    ) -> Result<UploadedFile, StorageError> {
        let key = self.build_key(remote_path);

        tracing::info!("Uploading {} to S3 bucket {}", key, self.bucket_name);

        let size = tokio::fs::metadata(local_path).await?.len();
        let body = ByteStream::from_path(local_path)
            .await
            .map_err(|e| StorageError::UploadError(key.clone(), e.to_string()))?;

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&key)
            .content_type(kind.content_type())
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::UploadError(key.clone(), e.to_string()))?;

        let presigned_url = if self.generate_presigned_url {
            Some(self.presign_get(&key).await?)
        } else {
            None
        };

        let location = self.object_url(&key);
        tracing::info!("Upload complete: {}", location);

        Ok(UploadedFile {
            location,
            size,
            presigned_url,
        })
    }
}
