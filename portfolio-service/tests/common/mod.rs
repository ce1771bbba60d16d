use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

use auth::Authenticator;
use auth::Claims;
use auth::JwtHandler;
use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Json;
use axum::Router;
use portfolio_service::config::StoreConfig;
use portfolio_service::domain::like::service::LikeService;
use portfolio_service::domain::project::service::ProjectService;
use portfolio_service::domain::user::service::AccountService;
use portfolio_service::inbound::http::router::create_router;
use portfolio_service::outbound::records::RecordStoreClient;
use portfolio_service::outbound::repositories::RecordStoreLikeRepository;
use portfolio_service::outbound::repositories::RecordStoreProjectRepository;
use portfolio_service::outbound::repositories::RecordStoreUserRepository;
use serde_json::json;
use serde_json::Value;

pub const TEST_JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application: the real service wired against an in-process fake
/// record store, both listening on random ports.
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub store: FakeStore,
}

impl TestApp {
    /// Spawn the fake store and the application in background tasks.
    pub async fn spawn() -> Self {
        let store = FakeStore::default();

        let store_listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake store port");
        let store_addr = store_listener.local_addr().unwrap();
        let store_router = fake_store_router(store.clone());
        tokio::spawn(async move {
            axum::serve(store_listener, store_router)
                .await
                .expect("Fake store server error");
        });

        let store_config = StoreConfig {
            api_url: format!("http://{}/v0", store_addr),
            api_key: "test-api-key".to_string(),
            base_id: "appTEST".to_string(),
            users_table: "Users".to_string(),
            projects_table: "Projects".to_string(),
            likes_table: "Likes".to_string(),
            timeout_seconds: 5,
        };

        let client = Arc::new(
            RecordStoreClient::new(&store_config).expect("Failed to build store client"),
        );

        let user_repository = Arc::new(RecordStoreUserRepository::new(
            Arc::clone(&client),
            store_config.users_table.clone(),
        ));
        let project_repository = Arc::new(RecordStoreProjectRepository::new(
            Arc::clone(&client),
            store_config.projects_table.clone(),
        ));
        let like_repository = Arc::new(RecordStoreLikeRepository::new(
            Arc::clone(&client),
            store_config.likes_table.clone(),
        ));

        let authenticator = Arc::new(Authenticator::new(TEST_JWT_SECRET, 24));

        let account_service = Arc::new(AccountService::new(
            user_repository,
            Arc::clone(&authenticator),
        ));
        let project_service = Arc::new(ProjectService::new(project_repository));
        let like_service = Arc::new(LikeService::new(like_repository));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let address = format!("http://{}", listener.local_addr().unwrap());

        let router = create_router(
            account_service,
            project_service,
            like_service,
            authenticator,
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            store,
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Register an account and return (token, user record id).
    pub async fn register_user(&self, email: &str, password: &str) -> (String, String) {
        let response = self
            .post("/api/auth/register")
            .json(&json!({
                "email": email,
                "password": password,
                "firstName": "Alice",
                "lastName": "Martin"
            }))
            .send()
            .await
            .expect("Failed to execute register request");

        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: Value = response.json().await.expect("Failed to parse response");
        (
            body["token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }

    /// Seed a project row directly into the fake store and return its
    /// record id. `like_links` stands in for the store's linked like
    /// record ids, which drive the derived like count.
    pub fn seed_project(
        &self,
        external_id: i64,
        title: &str,
        description: &str,
        like_links: &[&str],
    ) -> String {
        self.store.insert(
            "Projects",
            json!({
                "id": external_id,
                "title": title,
                "description": description,
                "createdAt": "2024-01-15",
                "Like": like_links,
            }),
        )
    }

    /// Token signed with the right secret but already expired.
    pub fn expired_token(&self, user_id: &str, email: &str) -> String {
        let handler = JwtHandler::new(TEST_JWT_SECRET);
        let mut claims = Claims::for_user(user_id, email, 24);
        claims.exp = claims.iat - 7200;
        handler.encode(&claims).expect("Failed to encode token")
    }
}

/// In-memory stand-in for the external tabular record store.
///
/// Implements just enough of the REST dialect the adapter speaks: list
/// with `filterByFormula`, find, create, patch, and delete, with the
/// computed timestamp columns the Users table carries.
#[derive(Clone, Default)]
pub struct FakeStore {
    inner: Arc<Mutex<Tables>>,
}

#[derive(Default)]
struct Tables {
    records: HashMap<String, Vec<FakeRecord>>,
    next_id: u64,
}

#[derive(Clone)]
struct FakeRecord {
    id: String,
    fields: Value,
}

impl FakeRecord {
    fn to_json(&self) -> Value {
        json!({ "id": self.id, "fields": self.fields })
    }
}

impl FakeStore {
    /// Insert a record directly, bypassing HTTP. Returns the record id.
    pub fn insert(&self, table: &str, fields: Value) -> String {
        let mut tables = self.inner.lock().unwrap();
        tables.next_id += 1;
        let id = format!("rec{:06}", tables.next_id);
        tables
            .records
            .entry(table.to_string())
            .or_default()
            .push(FakeRecord {
                id: id.clone(),
                fields,
            });
        id
    }

    /// Number of records currently in a table.
    pub fn count(&self, table: &str) -> usize {
        let tables = self.inner.lock().unwrap();
        tables.records.get(table).map(Vec::len).unwrap_or(0)
    }
}

fn fake_store_router(store: FakeStore) -> Router {
    Router::new()
        .route(
            "/v0/:base/:table",
            get(list_records).post(create_record).patch(patch_record),
        )
        .route(
            "/v0/:base/:table/:id",
            get(find_record).delete(delete_record),
        )
        .with_state(store)
}

async fn list_records(
    State(store): State<FakeStore>,
    Path((_base, table)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let tables = store.inner.lock().unwrap();
    let formula = params.get("filterByFormula");

    let records: Vec<Value> = tables
        .records
        .get(&table)
        .map(|records| {
            records
                .iter()
                .filter(|r| formula.map_or(true, |f| formula_matches(f, &r.fields)))
                .map(FakeRecord::to_json)
                .collect()
        })
        .unwrap_or_default();

    Json(json!({ "records": records }))
}

async fn find_record(
    State(store): State<FakeStore>,
    Path((_base, table, id)): Path<(String, String, String)>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let tables = store.inner.lock().unwrap();

    tables
        .records
        .get(&table)
        .and_then(|records| records.iter().find(|r| r.id == id))
        .map(|r| Json(r.to_json()))
        .ok_or_else(not_found)
}

async fn create_record(
    State(store): State<FakeStore>,
    Path((_base, table)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut fields = body["records"][0]["fields"].clone();

    // The Users table carries store-computed timestamp columns
    if table == "Users" {
        let now = chrono::Utc::now().to_rfc3339();
        fields["createdAt"] = json!(now);
        fields["updatedAt"] = json!(now);
    }

    let id = store.insert(&table, fields.clone());

    Json(json!({ "records": [{ "id": id, "fields": fields }] }))
}

async fn patch_record(
    State(store): State<FakeStore>,
    Path((_base, table)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let id = body["records"][0]["id"].as_str().unwrap_or_default().to_string();
    let patch = body["records"][0]["fields"].clone();

    let mut tables = store.inner.lock().unwrap();
    let record = tables
        .records
        .get_mut(&table)
        .and_then(|records| records.iter_mut().find(|r| r.id == id))
        .ok_or_else(not_found)?;

    if let Some(patch_fields) = patch.as_object() {
        for (key, value) in patch_fields {
            record.fields[key] = value.clone();
        }
    }
    if table == "Users" {
        record.fields["updatedAt"] = json!(chrono::Utc::now().to_rfc3339());
    }

    let updated = record.to_json();
    Ok(Json(json!({ "records": [updated] })))
}

async fn delete_record(
    State(store): State<FakeStore>,
    Path((_base, table, id)): Path<(String, String, String)>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let mut tables = store.inner.lock().unwrap();
    let records = tables.records.get_mut(&table).ok_or_else(not_found)?;

    let before = records.len();
    records.retain(|r| r.id != id);

    if records.len() == before {
        return Err(not_found());
    }

    Ok(Json(json!({ "deleted": true, "id": id })))
}

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": { "type": "NOT_FOUND" } })),
    )
}

/// Evaluate the three formula shapes the adapter emits.
fn formula_matches(formula: &str, fields: &Value) -> bool {
    let values = quoted_values(formula);

    if formula.starts_with("AND(") {
        // AND({user} = "...", {project} = "...")
        let user_ok = fields["user"]
            .as_array()
            .map(|links| {
                links
                    .iter()
                    .any(|v| v.as_str() == values.first().map(String::as_str))
            })
            .unwrap_or(false);
        let project_ok = fields["project"].as_str() == values.get(1).map(String::as_str);

        user_ok && project_ok
    } else if formula.starts_with("OR(SEARCH(") {
        // OR(SEARCH("kw", {title}), SEARCH("kw", {description}));
        // SEARCH is case-insensitive in the store's formula language
        let Some(needle) = values.first() else {
            return false;
        };
        let needle = needle.to_lowercase();

        ["title", "description"].iter().any(|column| {
            fields[column]
                .as_str()
                .map(|haystack| haystack.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    } else if formula.starts_with("{email}") {
        // {email} = "..."
        fields["email"].as_str() == values.first().map(String::as_str)
    } else {
        true
    }
}

fn quoted_values(formula: &str) -> Vec<String> {
    formula
        .split('"')
        .skip(1)
        .step_by(2)
        .map(str::to_string)
        .collect()
}
