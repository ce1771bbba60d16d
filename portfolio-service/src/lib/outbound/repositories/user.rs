use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::models::RecordId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::PhoneNumber;
use crate::domain::user::models::ProfileUpdate;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserRepository;
use crate::outbound::records::formula_string;
use crate::outbound::records::ApiRecord;
use crate::outbound::records::RecordStoreClient;
use crate::outbound::records::RecordStoreError;

/// Users-table adapter: field mapping between the store's camelCase
/// columns and the domain model. No business rules live here.
pub struct RecordStoreUserRepository {
    client: Arc<RecordStoreClient>,
    table: String,
}

impl RecordStoreUserRepository {
    pub fn new(client: Arc<RecordStoreClient>, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserFields {
    #[serde(default)]
    email: String,
    #[serde(rename = "passwordHash", default)]
    password_hash: String,
    #[serde(rename = "firstName", default)]
    first_name: String,
    #[serde(rename = "lastName", default)]
    last_name: String,
    #[serde(default)]
    phone: Option<u64>,
    // Computed by the store
    #[serde(rename = "createdAt", default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    updated_at: Option<DateTime<Utc>>,
}

/// Write shape for registration; createdAt/updatedAt are store-computed
/// and must not be sent.
#[derive(Debug, Serialize)]
struct NewUserFields<'a> {
    email: &'a str,
    #[serde(rename = "passwordHash")]
    password_hash: &'a str,
    #[serde(rename = "firstName")]
    first_name: &'a str,
    #[serde(rename = "lastName")]
    last_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<u64>,
}

#[derive(Debug, Serialize)]
struct ProfileUpdateFields<'a> {
    #[serde(rename = "firstName")]
    first_name: &'a str,
    #[serde(rename = "lastName")]
    last_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<u64>,
}

fn into_user(record: ApiRecord<UserFields>) -> Result<User, UserError> {
    Ok(User {
        id: RecordId::new(record.id),
        email: EmailAddress::new(record.fields.email)?,
        password_hash: record.fields.password_hash,
        first_name: record.fields.first_name,
        last_name: record.fields.last_name,
        phone: record.fields.phone.map(PhoneNumber::from_value),
        created_at: record.fields.created_at,
        updated_at: record.fields.updated_at,
    })
}

fn store_error(e: RecordStoreError) -> UserError {
    UserError::Store(e.to_string())
}

#[async_trait]
impl UserRepository for RecordStoreUserRepository {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let fields = NewUserFields {
            email: user.email.as_str(),
            password_hash: &user.password_hash,
            first_name: &user.first_name,
            last_name: &user.last_name,
            phone: user.phone.map(|p| p.value()),
        };

        let record = self
            .client
            .create(&self.table, &fields)
            .await
            .map_err(store_error)?;

        into_user(record)
    }

    async fn find_by_id(&self, id: &RecordId) -> Result<Option<User>, UserError> {
        let record = self
            .client
            .find(&self.table, id.as_str())
            .await
            .map_err(store_error)?;

        record.map(into_user).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let formula = format!("{{email}} = {}", formula_string(email));

        let records = self
            .client
            .select(&self.table, Some(&formula))
            .await
            .map_err(store_error)?;

        records.into_iter().next().map(into_user).transpose()
    }

    async fn update(&self, id: &RecordId, update: ProfileUpdate) -> Result<User, UserError> {
        let fields = ProfileUpdateFields {
            first_name: &update.first_name,
            last_name: &update.last_name,
            phone: update.phone.map(|p| p.value()),
        };

        let record = self
            .client
            .update(&self.table, id.as_str(), &fields)
            .await
            .map_err(|e| match e.status() {
                Some(404) => UserError::NotFound(id.to_string()),
                _ => store_error(e),
            })?;

        into_user(record)
    }

    async fn delete(&self, id: &RecordId) -> Result<(), UserError> {
        self.client
            .destroy(&self.table, id.as_str())
            .await
            .map_err(|e| match e.status() {
                Some(404) => UserError::NotFound(id.to_string()),
                _ => store_error(e),
            })
    }
}
