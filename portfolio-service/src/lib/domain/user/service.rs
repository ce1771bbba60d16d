use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::models::RecordId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::AuthenticatedAccount;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::ProfileUpdate;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::ports::AccountServicePort;
use crate::domain::user::ports::UserRepository;

/// Domain service for the account lifecycle.
///
/// Concrete implementation of AccountServicePort with dependency
/// injection: the repository talks to the record store, the
/// authenticator hashes passwords and issues tokens.
pub struct AccountService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AccountService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }

    fn issue_token(&self, user: &User) -> Result<String, UserError> {
        self.authenticator
            .issue_token(user.id.as_str(), user.email.as_str())
            .map_err(|e| UserError::Token(e.to_string()))
    }
}

#[async_trait]
impl<UR> AccountServicePort for AccountService<UR>
where
    UR: UserRepository,
{
    async fn register(
        &self,
        command: RegisterCommand,
    ) -> Result<AuthenticatedAccount, UserError> {
        // Case-sensitive equality lookup against the store
        if let Some(existing) = self.repository.find_by_email(command.email.as_str()).await? {
            return Err(UserError::EmailAlreadyExists(
                existing.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Password(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                email: command.email,
                password_hash,
                first_name: command.first_name,
                last_name: command.last_name,
                phone: command.phone,
            })
            .await?;

        let token = self.issue_token(&user)?;

        Ok(AuthenticatedAccount { user, token })
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthenticatedAccount, UserError> {
        // An unknown email takes the same failure path as a wrong
        // password further down.
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        let result = self
            .authenticator
            .authenticate(
                password,
                &user.password_hash,
                user.id.as_str(),
                user.email.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => UserError::InvalidCredentials,
                AuthenticationError::Jwt(err) => UserError::Token(err.to_string()),
            })?;

        Ok(AuthenticatedAccount {
            user,
            token: result.access_token,
        })
    }

    async fn get_user(&self, id: &RecordId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn update_profile(
        &self,
        id: &RecordId,
        command: UpdateProfileCommand,
    ) -> Result<User, UserError> {
        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        // Absent means keep the previous value
        let update = ProfileUpdate {
            first_name: command.first_name.unwrap_or(current.first_name),
            last_name: command.last_name.unwrap_or(current.last_name),
            phone: command.phone.or(current.phone),
        };

        self.repository.update(id, update).await
    }

    async fn delete_account(&self, id: &RecordId) -> Result<(), UserError> {
        // The user's Like records are intentionally left in place; reads
        // tolerate orphaned likes.
        self.repository.delete(id).await
    }
}
