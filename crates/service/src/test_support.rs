//! In-memory store stands-ins for unit tests. They exercise the same
//! traits the JSON file stores implement, which is exactly what makes the
//! services testable without touching the filesystem.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::file::{config_store::ConfigStore, grade_store::GradeStore};
use models::config::PortalConfig;
use models::grade::GradeRecord;

pub struct StaticConfigStore {
    config: PortalConfig,
}

impl StaticConfigStore {
    pub fn unset() -> Arc<Self> {
        Arc::new(Self { config: PortalConfig::default() })
    }

    pub fn with_expiry(expiry: &str) -> Arc<Self> {
        Arc::new(Self { config: PortalConfig { expiry_date: Some(expiry.into()) } })
    }
}

#[async_trait]
impl ConfigStore for StaticConfigStore {
    async fn load(&self) -> Result<PortalConfig, ServiceError> {
        Ok(self.config.clone())
    }

    async fn save(&self, _config: &PortalConfig) -> Result<(), ServiceError> {
        Err(ServiceError::Unexpected("static config store is read-only".into()))
    }
}

/// Serves a fixed record list and counts how often it was read.
pub struct StaticGradeStore {
    grades: Vec<GradeRecord>,
    loads: AtomicUsize,
}

impl StaticGradeStore {
    pub fn new(grades: Vec<GradeRecord>) -> Arc<Self> {
        Arc::new(Self { grades, loads: AtomicUsize::new(0) })
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl GradeStore for StaticGradeStore {
    async fn load(&self) -> Result<Vec<GradeRecord>, ServiceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.grades.clone())
    }
}

pub struct FailingGradeStore;

#[async_trait]
impl GradeStore for FailingGradeStore {
    async fn load(&self) -> Result<Vec<GradeRecord>, ServiceError> {
        Err(ServiceError::Storage("grade document unreadable: injected".into()))
    }
}

pub fn record(student_id: &str, name: &str, grade: serde_json::Value) -> GradeRecord {
    GradeRecord { student_id: student_id.into(), name: name.into(), grade }
}
