use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::ServiceError;
use crate::file::config_store::ConfigStore;
use models::config::parse_expiry;

/// Administrator mutation: moving the point where the lookup window
/// closes. This is the only writer of the config document. The endpoint
/// carrying it is unguarded, matching the system this replaces.
#[derive(Clone)]
pub struct AdminService {
    config_store: Arc<dyn ConfigStore>,
}

impl AdminService {
    pub fn new(config_store: Arc<dyn ConfigStore>) -> Self {
        Self { config_store }
    }

    /// Validate and persist a new expiry timestamp. Setting the same
    /// value twice leaves the config in the same observable state.
    pub async fn set_expiry(&self, expiry_date: &str) -> Result<(), ServiceError> {
        let expiry_date = expiry_date.trim();
        if expiry_date.is_empty() {
            return Err(ServiceError::Validation("Please enter an expiry date.".into()));
        }
        if let Err(e) = parse_expiry(expiry_date) {
            warn!(input = %expiry_date, error = %e, "rejected expiry date format");
            return Err(ServiceError::Validation(
                "Please use the date format YYYY-MM-DD HH:MM.".into(),
            ));
        }

        let mut config = self.config_store.load().await?;
        config.expiry_date = Some(expiry_date.to_string());
        self.config_store.save(&config).await?;
        info!(%expiry_date, "expiry date updated");
        Ok(())
    }
}
