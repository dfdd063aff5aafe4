use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::errors::ServiceError;
use models::grade::GradeRecord;

/// Read capability over the grade document. The portal never writes it;
/// the file is maintained out-of-band by whoever exports the grades.
#[async_trait]
pub trait GradeStore: Send + Sync {
    async fn load(&self) -> Result<Vec<GradeRecord>, ServiceError>;
}

/// JSON file implementation. Re-read on every request, no cache, so an
/// out-of-band replacement of the file is picked up immediately.
#[derive(Clone)]
pub struct JsonGradeStore {
    file_path: PathBuf,
}

impl JsonGradeStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { file_path: path.into() }
    }
}

#[async_trait]
impl GradeStore for JsonGradeStore {
    async fn load(&self) -> Result<Vec<GradeRecord>, ServiceError> {
        match fs::read(&self.file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ServiceError::Storage(format!("grade document is corrupt: {e}"))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(ServiceError::Storage(format!("grade document unreadable: {e}"))),
        }
    }
}
