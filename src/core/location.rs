use crate::core::i18n::texts;
use crate::models::{Coordinate, Language};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons the platform location service can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable")]
    Unavailable,

    #[error("location request timed out")]
    Timeout,

    #[error("geolocation unsupported")]
    Unsupported,

    #[error("unknown location error")]
    Unknown,
}

impl LocationError {
    /// Map a browser `GeolocationPositionError.code`
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            2 => LocationError::Unavailable,
            3 => LocationError::Timeout,
            _ => LocationError::Unknown,
        }
    }

    /// Localized user-visible message
    pub fn message(&self, language: Language) -> &'static str {
        let t = texts(language);
        match self {
            LocationError::PermissionDenied => t.location_permission_denied,
            LocationError::Unavailable => t.location_unavailable,
            LocationError::Timeout => t.location_timeout,
            LocationError::Unsupported => t.location_unsupported,
            LocationError::Unknown => t.location_unknown,
        }
    }
}

/// Outcome of a location request as reported by the client
///
/// Accepts `{"latitude": .., "longitude": ..}`, `{"error": "timeout"}`
/// or `{"errorCode": 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationReport {
    Position {
        latitude: f64,
        longitude: f64,
    },
    Failure {
        error: LocationError,
    },
    FailureCode {
        #[serde(rename = "errorCode")]
        error_code: u16,
    },
}

impl LocationReport {
    /// Resolve the report into a validated coordinate or a failure kind
    ///
    /// A position outside the valid ranges is treated as unavailable.
    pub fn resolve(self) -> Result<Coordinate, LocationError> {
        match self {
            LocationReport::Position { latitude, longitude } => {
                Coordinate::new(latitude, longitude).map_err(|e| {
                    tracing::warn!("Rejecting reported position: {}", e);
                    LocationError::Unavailable
                })
            }
            LocationReport::Failure { error } => Err(error),
            LocationReport::FailureCode { error_code } => Err(LocationError::from_code(error_code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        let kinds = [
            LocationError::PermissionDenied,
            LocationError::Unavailable,
            LocationError::Timeout,
            LocationError::Unsupported,
            LocationError::Unknown,
        ];

        for language in Language::ALL {
            let mut messages: Vec<&str> = kinds.iter().map(|k| k.message(language)).collect();
            messages.sort_unstable();
            messages.dedup();
            assert_eq!(messages.len(), kinds.len(), "duplicate message in {:?}", language);
        }
    }

    #[test]
    fn test_from_code() {
        assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
        assert_eq!(LocationError::from_code(2), LocationError::Unavailable);
        assert_eq!(LocationError::from_code(3), LocationError::Timeout);
        assert_eq!(LocationError::from_code(42), LocationError::Unknown);
    }

    #[test]
    fn test_report_parsing() {
        let position: LocationReport =
            serde_json::from_str(r#"{"latitude": 13.75, "longitude": 100.5}"#).unwrap();
        assert!(position.resolve().is_ok());

        let denied: LocationReport =
            serde_json::from_str(r#"{"error": "permission_denied"}"#).unwrap();
        assert_eq!(denied.resolve(), Err(LocationError::PermissionDenied));

        let coded: LocationReport = serde_json::from_str(r#"{"errorCode": 3}"#).unwrap();
        assert_eq!(coded.resolve(), Err(LocationError::Timeout));
    }

    #[test]
    fn test_out_of_range_position_is_unavailable() {
        let report = LocationReport::Position {
            latitude: 95.0,
            longitude: 0.0,
        };
        assert_eq!(report.resolve(), Err(LocationError::Unavailable));
    }
}
