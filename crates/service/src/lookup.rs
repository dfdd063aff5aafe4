use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::ServiceError;
use crate::expiry::ExpiryPolicy;
use crate::file::{config_store::ConfigStore, grade_store::GradeStore};
use models::grade::{validate_name, validate_student_id, GradeRecord};

/// Student-facing lookup. Stores are injected so tests (and a future
/// synchronized backend) can swap them without touching this logic.
#[derive(Clone)]
pub struct LookupService {
    expiry: ExpiryPolicy,
    grade_store: Arc<dyn GradeStore>,
}

impl LookupService {
    pub fn new(config_store: Arc<dyn ConfigStore>, grade_store: Arc<dyn GradeStore>) -> Self {
        Self { expiry: ExpiryPolicy::new(config_store), grade_store }
    }

    /// Validate a (student_id, name) pair and return the first matching
    /// record. Checks run in a fixed order and stop at the first failure:
    /// expiry window, presence, ID shape, name shape, then a linear scan
    /// of the grade document. Matching is exact on the trimmed input,
    /// case-sensitive, no normalization.
    pub async fn search(&self, student_id: &str, name: &str) -> Result<GradeRecord, ServiceError> {
        if self.expiry.is_expired().await? {
            warn!("lookup attempted after the expiry date");
            return Err(ServiceError::Expired);
        }

        let student_id = student_id.trim();
        let name = name.trim();
        info!(%student_id, "grade lookup requested");

        if student_id.is_empty() || name.is_empty() {
            warn!("lookup with missing fields");
            return Err(ServiceError::Validation(
                "Please enter both student ID and name.".into(),
            ));
        }
        if let Err(e) = validate_student_id(student_id) {
            warn!(%student_id, "rejected student ID format");
            return Err(e.into());
        }
        if let Err(e) = validate_name(name) {
            warn!("rejected name format");
            return Err(e.into());
        }

        let grades = match self.grade_store.load().await {
            Ok(grades) => grades,
            Err(e) => {
                error!(error = %e, "grade document could not be loaded");
                return Err(ServiceError::Storage("Grade data could not be loaded.".into()));
            }
        };
        info!(count = grades.len(), "grade document loaded");

        match grades
            .into_iter()
            .find(|g| g.student_id == student_id && g.name == name)
        {
            Some(record) => {
                info!(%student_id, "grade lookup succeeded");
                Ok(record)
            }
            None => {
                warn!(%student_id, "no record matches the given ID and name");
                Err(ServiceError::NotFound(
                    "No student matches the given information.".into(),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{record, FailingGradeStore, StaticConfigStore, StaticGradeStore};
    use serde_json::json;

    fn roster() -> Vec<GradeRecord> {
        vec![
            record("202312345", "Kim Minsu", json!("A")),
            record("202399999", "Lee Jiwoo", json!(95)),
        ]
    }

    #[tokio::test]
    async fn finds_the_first_exact_match() -> anyhow::Result<()> {
        let svc = LookupService::new(StaticConfigStore::unset(), StaticGradeStore::new(roster()));
        let rec = svc.search("202312345", "Kim Minsu").await?;
        assert_eq!(rec.grade, json!("A"));

        // input is trimmed before matching
        let rec = svc.search("  202399999 ", " Lee Jiwoo ").await?;
        assert_eq!(rec.grade, json!(95));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_pairs_resolve_to_the_first_record() -> anyhow::Result<()> {
        let grades = vec![
            record("202312345", "Kim Minsu", json!("A")),
            record("202312345", "Kim Minsu", json!("F")),
        ];
        let svc = LookupService::new(StaticConfigStore::unset(), StaticGradeStore::new(grades));
        assert_eq!(svc.search("202312345", "Kim Minsu").await?.grade, json!("A"));
        Ok(())
    }

    #[tokio::test]
    async fn both_fields_must_match() {
        let svc = LookupService::new(StaticConfigStore::unset(), StaticGradeStore::new(roster()));
        let err = svc.search("202312345", "Lee Jiwoo").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn matching_is_case_sensitive() {
        let svc = LookupService::new(StaticConfigStore::unset(), StaticGradeStore::new(roster()));
        let err = svc.search("202312345", "kim minsu").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn invalid_input_never_reaches_the_grade_store() {
        let store = StaticGradeStore::new(roster());
        let svc = LookupService::new(StaticConfigStore::unset(), store.clone());

        let err = svc.search("", "").await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        let err = svc.search("12345", "Kim Minsu").await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));
        let err = svc.search("202312345", "Kim4").await.unwrap_err();
        assert!(matches!(err, ServiceError::Model(_)));

        assert_eq!(store.load_count(), 0);
    }

    #[tokio::test]
    async fn closed_window_rejects_even_a_valid_pair() {
        let svc = LookupService::new(
            StaticConfigStore::with_expiry("2000-01-01 00:00"),
            StaticGradeStore::new(roster()),
        );
        let err = svc.search("202312345", "Kim Minsu").await.unwrap_err();
        assert!(matches!(err, ServiceError::Expired));

        // the expiry check runs before any input validation
        let err = svc.search("bogus", "").await.unwrap_err();
        assert!(matches!(err, ServiceError::Expired));
    }

    #[tokio::test]
    async fn store_failure_is_distinct_from_validation() {
        let svc = LookupService::new(StaticConfigStore::unset(), Arc::new(FailingGradeStore));
        let err = svc.search("202312345", "Kim Minsu").await.unwrap_err();
        match err {
            ServiceError::Storage(msg) => assert_eq!(msg, "Grade data could not be loaded."),
            other => panic!("expected storage error, got {other:?}"),
        }
    }
}
