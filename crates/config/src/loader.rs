use super::defaults::DEFAULT_CONFIG_TEMPLATE;
use super::errors::ConfigError;
use super::models::Config;
use std::path::Path;

impl Config {
    /// Loads configuration from a file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        // Create default config if it doesn't exist
        if !path.exists() {
            create_default_config(path).await?;
        }

        // Read and parse config
        let content = tokio::fs::read_to_string(path).await?;
        Config::from_toml(&content)
    }

    /// Parses and validates configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if let Some(storage) = &config.storage {
            storage.validate()?;
        }
        if let Some(backup) = &config.backup_storage {
            backup.validate()?;
        }
        Ok(config)
    }
}

/// Creates a default configuration file
async fn create_default_config<P: AsRef<Path>>(path: P) -> Result<(), ConfigError> {
    let path = path.as_ref();
    tracing::warn!("Configuration file not found");
    tokio::fs::write(path, DEFAULT_CONFIG_TEMPLATE).await?;
    tracing::info!("Created default configuration at: {}", path.display());
    Ok(())
}
