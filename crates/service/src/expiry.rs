use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use tracing::warn;

use crate::errors::ServiceError;
use crate::file::config_store::ConfigStore;
use models::config::{parse_expiry, PortalConfig};

/// The portal is either open or closed for lookups, and flips solely on
/// the current time crossing the stored expiry timestamp. There is no
/// timer; callers evaluate lazily on each request.
#[derive(Clone)]
pub struct ExpiryPolicy {
    config_store: Arc<dyn ConfigStore>,
}

impl ExpiryPolicy {
    pub fn new(config_store: Arc<dyn ConfigStore>) -> Self {
        Self { config_store }
    }

    /// True iff a stored expiry timestamp exists and local time is
    /// strictly past it. An unset date never expires. A stored value
    /// that does not parse counts as not expired (fail-open, preserved
    /// from the system this replaces) and is logged.
    pub async fn is_expired(&self) -> Result<bool, ServiceError> {
        let config = self.config_store.load().await?;
        Ok(Self::evaluate(&config, Local::now().naive_local()))
    }

    fn evaluate(config: &PortalConfig, now: NaiveDateTime) -> bool {
        let Some(raw) = config.expiry_date.as_deref() else {
            return false;
        };
        match parse_expiry(raw) {
            Ok(expiry) => now > expiry,
            Err(e) => {
                warn!(expiry_date = %raw, error = %e, "stored expiry date does not parse, keeping lookups open");
                false
            }
        }
    }
}
