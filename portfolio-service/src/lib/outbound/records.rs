//! Low-level client for the external tabular record store.
//!
//! Speaks the store's REST dialect: tables addressed as
//! `{api_url}/{base_id}/{table}`, list filtering through a
//! `filterByFormula` query parameter, and create/update payloads
//! wrapped in a `records` array. Authentication is a bearer API key.
//!
//! Every request carries a bounded timeout; a timeout or connection
//! failure surfaces as `RecordStoreError::Unavailable` and is never
//! retried here.

use std::time::Duration;

use reqwest::Client;
use reqwest::Response;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::config::StoreConfig;

/// Error type for record store calls.
#[derive(Debug, Error)]
pub enum RecordStoreError {
    /// Timeout, connection failure, or client construction failure.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with a non-success status.
    #[error("Record store request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode record store response: {0}")]
    Decode(String),
}

impl RecordStoreError {
    /// Status code of an API-level failure, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            RecordStoreError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A record as returned by the store: opaque id plus typed fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiRecord<F> {
    pub id: String,
    pub fields: F,
}

#[derive(Debug, Deserialize)]
struct RecordPage<F> {
    records: Vec<ApiRecord<F>>,
}

#[derive(Debug, Serialize)]
struct CreatePayload<'a, F: Serialize> {
    records: [NewRecord<'a, F>; 1],
}

#[derive(Debug, Serialize)]
struct NewRecord<'a, F: Serialize> {
    fields: &'a F,
}

#[derive(Debug, Serialize)]
struct UpdatePayload<'a, F: Serialize> {
    records: [UpdatedRecord<'a, F>; 1],
}

#[derive(Debug, Serialize)]
struct UpdatedRecord<'a, F: Serialize> {
    id: &'a str,
    fields: &'a F,
}

/// HTTP client for one record store base.
pub struct RecordStoreClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RecordStoreClient {
    /// Build a client from store configuration.
    ///
    /// # Errors
    /// * `Unavailable` - The underlying HTTP client could not be built
    pub fn new(config: &StoreConfig) -> Result<Self, RecordStoreError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| RecordStoreError::Unavailable(e.to_string()))?;

        Ok(Self {
            http,
            base_url: format!(
                "{}/{}",
                config.api_url.trim_end_matches('/'),
                config.base_id
            ),
            api_key: config.api_key.clone(),
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.base_url, table)
    }

    /// List records in a table, optionally filtered by a formula.
    pub async fn select<F: DeserializeOwned>(
        &self,
        table: &str,
        filter_formula: Option<&str>,
    ) -> Result<Vec<ApiRecord<F>>, RecordStoreError> {
        let mut request = self
            .http
            .get(self.table_url(table))
            .bearer_auth(&self.api_key);

        if let Some(formula) = filter_formula {
            request = request.query(&[("filterByFormula", formula)]);
        }

        let response = request.send().await.map_err(transport_error)?;
        let page: RecordPage<F> = parse(response).await?;

        Ok(page.records)
    }

    /// Fetch a single record by id; a 404 from the store is `None`.
    pub async fn find<F: DeserializeOwned>(
        &self,
        table: &str,
        record_id: &str,
    ) -> Result<Option<ApiRecord<F>>, RecordStoreError> {
        let response = self
            .http
            .get(format!("{}/{}", self.table_url(table), record_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(parse(response).await?))
    }

    /// Create one record and return it with its store-assigned id.
    pub async fn create<W: Serialize, F: DeserializeOwned>(
        &self,
        table: &str,
        fields: &W,
    ) -> Result<ApiRecord<F>, RecordStoreError> {
        let payload = CreatePayload {
            records: [NewRecord { fields }],
        };

        let response = self
            .http
            .post(self.table_url(table))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let page: RecordPage<F> = parse(response).await?;

        page.records
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::Decode("empty create response".to_string()))
    }

    /// Patch one record's fields and return the updated record.
    pub async fn update<W: Serialize, F: DeserializeOwned>(
        &self,
        table: &str,
        record_id: &str,
        fields: &W,
    ) -> Result<ApiRecord<F>, RecordStoreError> {
        let payload = UpdatePayload {
            records: [UpdatedRecord {
                id: record_id,
                fields,
            }],
        };

        let response = self
            .http
            .patch(self.table_url(table))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(transport_error)?;

        let page: RecordPage<F> = parse(response).await?;

        page.records
            .into_iter()
            .next()
            .ok_or_else(|| RecordStoreError::Decode("empty update response".to_string()))
    }

    /// Delete one record.
    pub async fn destroy(&self, table: &str, record_id: &str) -> Result<(), RecordStoreError> {
        let response = self
            .http
            .delete(format!("{}/{}", self.table_url(table), record_id))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RecordStoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Quote a value for embedding in a filter formula string literal.
pub fn formula_string(value: &str) -> String {
    format!(
        "\"{}\"",
        value.replace('\\', "\\\\").replace('"', "\\\"")
    )
}

fn transport_error(e: reqwest::Error) -> RecordStoreError {
    RecordStoreError::Unavailable(e.to_string())
}

async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, RecordStoreError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RecordStoreError::Api {
            status: status.as_u16(),
            body,
        });
    }

    response
        .json()
        .await
        .map_err(|e| RecordStoreError::Decode(e.to_string()))
}
