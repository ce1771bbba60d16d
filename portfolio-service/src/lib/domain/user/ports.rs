use async_trait::async_trait;

use crate::domain::models::RecordId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedAccount;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::ProfileUpdate;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;

/// Port for account lifecycle operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account and issue a bearer token.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - A user with this email is already registered
    /// * `Password` - Password hashing failed
    /// * `Token` - Token issuance failed
    /// * `Store` - Record store operation failed
    async fn register(&self, command: RegisterCommand)
        -> Result<AuthenticatedAccount, UserError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    ///   (indistinguishable by design)
    /// * `Token` - Token issuance failed
    /// * `Store` - Record store operation failed
    async fn login(&self, email: &str, password: &str)
        -> Result<AuthenticatedAccount, UserError>;

    /// Resolve a user by record id.
    ///
    /// # Errors
    /// * `NotFound` - No such user
    /// * `Store` - Record store operation failed
    async fn get_user(&self, id: &RecordId) -> Result<User, UserError>;

    /// Apply a partial profile update; unspecified fields keep their
    /// previous value.
    ///
    /// # Errors
    /// * `NotFound` - No such user
    /// * `Store` - Record store operation failed
    async fn update_profile(
        &self,
        id: &RecordId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError>;

    /// Irreversibly delete the user record.
    ///
    /// # Errors
    /// * `NotFound` - No such user
    /// * `Store` - Record store operation failed
    async fn delete_account(&self, id: &RecordId) -> Result<(), UserError>;
}

/// Persistence operations for user records, backed by the external
/// record store. Implementations own field mapping only; no business
/// rules.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user record.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn create(&self, user: NewUser) -> Result<User, UserError>;

    /// Retrieve a user by store-assigned record id.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn find_by_id(&self, id: &RecordId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by exact email match.
    ///
    /// # Errors
    /// * `Store` - Record store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Write a fully-merged profile update.
    ///
    /// # Errors
    /// * `NotFound` - No such user
    /// * `Store` - Record store operation failed
    async fn update(&self, id: &RecordId, update: ProfileUpdate) -> Result<User, UserError>;

    /// Remove a user record.
    ///
    /// # Errors
    /// * `NotFound` - No such user
    /// * `Store` - Record store operation failed
    async fn delete(&self, id: &RecordId) -> Result<(), UserError>;
}
