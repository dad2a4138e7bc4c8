use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Primary storage destination. Absent means local storage with defaults.
    #[serde(default)]
    pub storage: Option<StorageConfig>,
    /// Optional fallback destination, attempted when the primary upload fails.
    #[serde(default)]
    pub backup_storage: Option<StorageConfig>,
}

/// Storage destination, tagged by backend kind. Exactly one variant is
/// populated per destination.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    Local(LocalSettings),
    S3(S3Settings),
    Gcs(GcsSettings),
    Azure(AzureSettings),
}

impl StorageConfig {
    /// Checks requirements serde cannot express: provider identifiers must be
    /// non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            StorageConfig::Local(_) => Ok(()),
            StorageConfig::S3(s3) if s3.bucket_name.is_empty() => Err(
                ConfigError::InvalidConfig("s3 bucket_name must not be empty".to_string()),
            ),
            StorageConfig::Gcs(gcs) if gcs.bucket_name.is_empty() => Err(
                ConfigError::InvalidConfig("gcs bucket_name must not be empty".to_string()),
            ),
            StorageConfig::Azure(azure)
                if azure.account_name.is_empty() || azure.container_name.is_empty() =>
            {
                Err(ConfigError::InvalidConfig(
                    "azure account_name and container_name must not be empty".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalSettings {
    #[serde(default = "super::defaults::local_directory")]
    pub directory: PathBuf,
}

impl Default for LocalSettings {
    fn default() -> Self {
        Self {
            directory: super::defaults::local_directory(),
        }
    }
}

/// S3-compatible settings. Works with AWS S3, Cloudflare R2, MinIO,
/// DigitalOcean Spaces, etc. via `endpoint_url`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct S3Settings {
    #[serde(default)]
    pub endpoint_url: String,
    #[serde(default = "super::defaults::s3_region")]
    pub region: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub bucket_name: String,
    #[serde(default)]
    pub bucket_prefix: String,
    #[serde(default)]
    pub generate_presigned_url: bool,
    #[serde(default = "super::defaults::presign_expiry_secs")]
    pub presign_expiry_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GcsSettings {
    /// Service account key as inline JSON. Empty means ambient credentials
    /// (GOOGLE_APPLICATION_CREDENTIALS, metadata server).
    #[serde(default)]
    pub credentials_json: String,
    pub bucket_name: String,
    #[serde(default)]
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AzureSettings {
    pub account_name: String,
    pub account_key: String,
    pub container_name: String,
    #[serde(default)]
    pub prefix: String,
}
