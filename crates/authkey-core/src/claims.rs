//! Provider token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token validity window: 90 days.
pub const TOKEN_LIFETIME_SECS: i64 = 7_776_000;

/// JWT claims for a provider token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer (team ID)
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build claims issued at `issued_at`, expiring [`TOKEN_LIFETIME_SECS`] later.
    pub fn new(issuer: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        let iat = issued_at.timestamp();
        Self {
            iss: issuer.into(),
            iat,
            exp: iat + TOKEN_LIFETIME_SECS,
        }
    }

    /// Build claims issued now.
    pub fn now(issuer: impl Into<String>) -> Self {
        Self::new(issuer, Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_expiration_is_ninety_days_after_issue() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let claims = Claims::new("TEAM123456", issued_at);

        assert_eq!(claims.iss, "TEAM123456");
        assert_eq!(claims.iat, 1_704_067_200);
        assert_eq!(claims.exp, 1_704_067_200 + 7_776_000);
        assert_eq!(claims.exp - claims.iat, 90 * 24 * 3600);
    }

    #[test]
    fn test_now_captures_single_instant() {
        let before = Utc::now().timestamp();
        let claims = Claims::now("TEAM");
        let after = Utc::now().timestamp();

        assert!(claims.iat >= before && claims.iat <= after);
        assert_eq!(claims.exp, claims.iat + TOKEN_LIFETIME_SECS);
    }

    #[test]
    fn test_serializes_exactly_three_fields() {
        let claims = Claims {
            iss: "T".to_string(),
            iat: 1,
            exp: 2,
        };
        let value = serde_json::to_value(&claims).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 3);
        assert_eq!(value["iss"], "T");
        assert_eq!(value["iat"], 1);
        assert_eq!(value["exp"], 2);
    }
}
