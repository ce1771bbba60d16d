use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::models::RecordId;
use crate::domain::user::errors::EmailError;

/// User aggregate entity.
///
/// Owned by the external record store; instances live only for the
/// duration of a request. The password hash never leaves the service.
#[derive(Debug, Clone)]
pub struct User {
    pub id: RecordId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<PhoneNumber>,
    /// Computed by the store; absent until the record has been re-read.
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Equality is
/// case-sensitive, matching how the store compares the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Phone number stored as a plain numeric value.
///
/// The record store keeps phone numbers in a numeric column, so
/// formatting separators are stripped before parsing and a leading
/// zero does not survive a round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneNumber(u64);

impl PhoneNumber {
    /// Normalize raw input into a numeric phone value.
    ///
    /// Strips whitespace, dashes, and parentheses, then parses what
    /// remains as a number. Returns `None` when nothing parseable
    /// remains; callers omit the field instead of storing garbage.
    pub fn normalize(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
            .collect();

        cleaned.parse::<u64>().ok().map(Self)
    }

    pub fn from_value(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Validated input for account registration.
#[derive(Debug)]
pub struct RegisterCommand {
    pub email: EmailAddress,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<PhoneNumber>,
}

/// Partial profile update; `None` means "keep the previous value".
///
/// The merge against the stored profile happens in the service layer,
/// not at the transport boundary.
#[derive(Debug, Default)]
pub struct UpdateProfileCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<PhoneNumber>,
}

/// New user record as handed to the repository (no id or timestamps;
/// the store assigns those).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: EmailAddress,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<PhoneNumber>,
}

/// Fully-merged profile fields as written to the store.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<PhoneNumber>,
}

/// Outcome of registration and login: the account plus a fresh token.
#[derive(Debug)]
pub struct AuthenticatedAccount {
    pub user: User,
    pub token: String,
}
