use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::errors::ServiceError;
use models::config::PortalConfig;

/// Load/save capability over the persisted portal configuration.
/// Implementations own the whole document: `save` replaces it wholesale.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    async fn load(&self) -> Result<PortalConfig, ServiceError>;
    async fn save(&self, config: &PortalConfig) -> Result<(), ServiceError>;
}

/// JSON file implementation. The document is re-read on every call and
/// overwritten completely on save; there is no locking, so concurrent
/// writers race. The file stays human-readable and externally editable.
#[derive(Clone)]
pub struct JsonConfigStore {
    file_path: PathBuf,
}

impl JsonConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn load(&self) -> Result<PortalConfig, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Storage(format!("config document is corrupt: {e}"))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PortalConfig::default()),
            Err(e) => Err(ServiceError::Storage(format!("config document unreadable: {e}"))),
        }
    }

    async fn save(&self, config: &PortalConfig) -> Result<(), ServiceError> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }
        let data = serde_json::to_vec_pretty(config)
            .map_err(|e| ServiceError::Storage(format!("config serialize failed: {e}")))?;
        fs::write(&self.file_path, data)
            .await
            .map_err(|e| ServiceError::Storage(format!("config document write failed: {e}")))
    }
}
