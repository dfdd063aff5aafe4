use std::sync::Arc;

use serde::Serialize;

use crate::errors::ServiceError;
use crate::expiry::ExpiryPolicy;
use crate::file::{config_store::ConfigStore, grade_store::GradeStore};

/// Read-only snapshot composed from the config document, the expiry
/// policy, and the grade document length.
#[derive(Debug, Serialize)]
pub struct PortalStatus {
    pub expiry_date: Option<String>,
    pub is_expired: bool,
    pub grades_count: usize,
}

#[derive(Clone)]
pub struct StatusService {
    config_store: Arc<dyn ConfigStore>,
    grade_store: Arc<dyn GradeStore>,
    expiry: ExpiryPolicy,
}

impl StatusService {
    pub fn new(config_store: Arc<dyn ConfigStore>, grade_store: Arc<dyn GradeStore>) -> Self {
        let expiry = ExpiryPolicy::new(config_store.clone());
        Self { config_store, grade_store, expiry }
    }

    pub async fn status(&self) -> Result<PortalStatus, ServiceError> {
        let config = self.config_store.load().await?;
        let is_expired = self.expiry.is_expired().await?;
        let grades_count = self.grade_store.load().await?.len();
        Ok(PortalStatus { expiry_date: config.expiry_date, is_expired, grades_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, StaticConfigStore, StaticGradeStore};
    use serde_json::json;

    #[tokio::test]
    async fn reports_unset_expiry_and_count() -> anyhow::Result<()> {
        let grades = StaticGradeStore::new(vec![
            record("202312345", "Kim Minsu", json!("A")),
            record("202399999", "Lee Jiwoo", json!("B+")),
        ]);
        let svc = StatusService::new(StaticConfigStore::unset(), grades);
        let status = svc.status().await?;
        assert_eq!(status.expiry_date, None);
        assert!(!status.is_expired);
        assert_eq!(status.grades_count, 2);
        Ok(())
    }

    #[tokio::test]
    async fn reports_a_closed_window() -> anyhow::Result<()> {
        let svc = StatusService::new(
            StaticConfigStore::with_expiry("2000-01-01 00:00"),
            StaticGradeStore::new(Vec::new()),
        );
        let status = svc.status().await?;
        assert_eq!(status.expiry_date.as_deref(), Some("2000-01-01 00:00"));
        assert!(status.is_expired);
        assert_eq!(status.grades_count, 0);
        Ok(())
    }
}
