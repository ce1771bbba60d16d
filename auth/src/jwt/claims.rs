use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims embedded in a bearer token.
///
/// The token is self-contained: it carries the user record id and email
/// plus the standard `iat`/`exp` timestamps. There is no server-side
/// session table and no revocation list; expiry is the only
/// deactivation path short of rotating the signing secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: store-assigned user record id
    pub sub: String,

    /// Email address at issuance time
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user with an expiry window starting now.
    ///
    /// # Arguments
    /// * `user_id` - Store-assigned user record id
    /// * `email` - User email address
    /// * `validity_hours` - Hours until the token expires
    pub fn for_user(
        user_id: impl ToString,
        email: impl Into<String>,
        validity_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(validity_hours);

        Self {
            sub: user_id.to_string(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the token is expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
