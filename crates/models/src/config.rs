use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Timestamp format used everywhere an expiry date crosses a boundary:
/// the admin API, the persisted config document, and the status payload.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The portal's whole persisted configuration. `expiry_date` holds the
/// already-validated `YYYY-MM-DD HH:MM` string, or `None` when lookups
/// never expire.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub expiry_date: Option<String>,
}

/// Parse an expiry timestamp in `YYYY-MM-DD HH:MM`.
pub fn parse_expiry(value: &str) -> Result<NaiveDateTime, ModelError> {
    NaiveDateTime::parse_from_str(value, EXPIRY_FORMAT)
        .map_err(|e| ModelError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_the_admin_date_format() {
        let dt = parse_expiry("2025-06-30 23:59").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 6, 30));
        assert_eq!((dt.hour(), dt.minute()), (23, 59));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(parse_expiry("not-a-date").is_err());
        assert!(parse_expiry("2025-06-30").is_err());
        assert!(parse_expiry("2025/06/30 23:59").is_err());
        assert!(parse_expiry("2025-06-30 23:59:00").is_err());
        assert!(parse_expiry("2025-13-01 00:00").is_err());
    }

    #[test]
    fn absent_file_shape_defaults_to_no_expiry() {
        let cfg = PortalConfig::default();
        assert_eq!(cfg.expiry_date, None);
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(json, r#"{"expiry_date":null}"#);
    }
}
