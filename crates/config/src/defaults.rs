/// Default values for configuration fields
use std::path::PathBuf;

pub fn local_directory() -> PathBuf {
    PathBuf::from(".")
}

pub fn s3_region() -> String {
    "auto".to_string()
}

pub fn presign_expiry_secs() -> u64 {
    3600  // Presigned download links valid for one hour
}

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ===============================================================================
# Stowage Configuration
# ===============================================================================

# Primary storage destination. Remove this section to keep files locally with
# default settings.
[storage]
kind = "local"                       # Storage backend: "local" | "s3" | "gcs" | "azure"
directory = "out"                    # Destination directory for stored files

# ===============================================================================
# BACKUP STORAGE
# ===============================================================================
# Optional fallback destination, attempted only after the primary upload fails.

#[backup_storage]
#kind = "s3"
#endpoint_url = ""                   # Custom S3 endpoint (empty = AWS, or e.g. R2/MinIO URL)
#region = "auto"                     # S3 region (e.g. us-east-1, or "auto")
#access_key_id = ""                  # Access Key ID
#secret_access_key = ""              # Secret Access Key
#bucket_name = "stowage-outputs"     # Bucket name
#bucket_prefix = ""                  # Prefix for all object keys (optional)
#generate_presigned_url = false      # Return a presigned GET link for each upload
#presign_expiry_secs = 3600          # Presigned link lifetime in seconds

# GCS destination:
#[backup_storage]
#kind = "gcs"
#credentials_json = ""               # Inline service account JSON ("" = ambient credentials)
#bucket_name = "stowage-outputs"
#prefix = ""

# Azure Blob Storage destination:
#[backup_storage]
#kind = "azure"
#account_name = ""
#account_key = ""
#container_name = "stowage-outputs"
#prefix = ""
"#;
