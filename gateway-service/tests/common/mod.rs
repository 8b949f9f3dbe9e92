use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use auth::Authenticator;
use auth::HashScheme;
use auth::JwtHandler;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::put;
use axum::Json;
use axum::Router;
use gateway_service::config::FrontendConfig;
use gateway_service::config::StoreConfig;
use gateway_service::domain::account::service::AccountService;
use gateway_service::domain::product::service::ProductService;
use gateway_service::inbound::http::router::create_router;
use gateway_service::outbound::store::HttpProductStore;
use gateway_service::outbound::store::HttpUserStore;
use gateway_service::outbound::store::StoreClient;
use serde_json::json;
use serde_json::Value;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// How the stub store answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    Healthy,
    /// Every request answers 500.
    Failing,
    /// Every request stalls for the given duration before answering.
    Stalled(Duration),
}

/// In-memory stand-in for the external record store.
#[derive(Debug)]
pub struct StubStoreState {
    pub mode: StoreMode,
    pub users: Vec<Value>,
    pub products: Vec<Value>,
    pub next_id: i64,
}

pub type SharedStubStore = Arc<Mutex<StubStoreState>>;

/// Test application: the gateway and its stub store, both on random ports.
pub struct TestApp {
    pub address: String,
    pub store: SharedStubStore,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

pub struct TestAppOptions {
    pub store_mode: StoreMode,
    pub store_timeout_ms: u64,
    pub reject_duplicate_emails: bool,
}

impl Default for TestAppOptions {
    fn default() -> Self {
        Self {
            store_mode: StoreMode::Healthy,
            store_timeout_ms: 2_000,
            reject_duplicate_emails: false,
        }
    }
}

impl TestApp {
    /// Spawn the gateway against a healthy stub store
    pub async fn spawn() -> Self {
        Self::spawn_with(TestAppOptions::default()).await
    }

    pub async fn spawn_with(options: TestAppOptions) -> Self {
        let (store_address, store) = spawn_stub_store(options.store_mode).await;

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let store_client = StoreClient::new(&StoreConfig {
            base_url: store_address,
            timeout_ms: options.store_timeout_ms,
        })
        .expect("Failed to create store client");

        // Cheapest bcrypt cost keeps the suite fast
        let authenticator = Arc::new(
            Authenticator::with_settings(
                JWT_SECRET,
                HashScheme::Bcrypt { cost: 4 },
                chrono::Duration::hours(1),
            )
            .expect("Failed to create authenticator"),
        );

        let account_service = Arc::new(
            AccountService::new(
                Arc::new(HttpUserStore::new(store_client.clone())),
                Arc::clone(&authenticator),
            )
            .reject_duplicate_emails(options.reject_duplicate_emails),
        );
        let product_service = Arc::new(ProductService::new(Arc::new(HttpProductStore::new(
            store_client,
        ))));

        let router = create_router(
            account_service,
            product_service,
            authenticator,
            &FrontendConfig::default(),
        );

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
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

    /// Helper to make PUT request
    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    /// Helper to make DELETE request
    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register then log in, returning the raw session token.
    pub async fn register_and_login(&self, email: &str, password: &str, role: &str) -> String {
        let response = self
            .post("/register")
            .json(&json!({
                "name": "Tester",
                "email": email,
                "password": password,
                "role": role
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let response = self
            .post("/login")
            .json(&json!({"email": email, "password": password}))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["token"].as_str().unwrap().to_string()
    }

    pub fn set_store_mode(&self, mode: StoreMode) {
        self.store.lock().unwrap().mode = mode;
    }

    pub fn stored_users(&self) -> Vec<Value> {
        self.store.lock().unwrap().users.clone()
    }

    pub fn stored_products(&self) -> Vec<Value> {
        self.store.lock().unwrap().products.clone()
    }

    /// Put a record straight into the store, bypassing the gateway.
    pub fn seed_user(&self, record: Value) {
        self.store.lock().unwrap().users.push(record);
    }

    /// Put a record straight into the store, bypassing the gateway.
    pub fn seed_product(&self, record: Value) {
        self.store.lock().unwrap().products.push(record);
    }
}

async fn spawn_stub_store(mode: StoreMode) -> (String, SharedStubStore) {
    let state = Arc::new(Mutex::new(StubStoreState {
        mode,
        users: Vec::new(),
        products: Vec::new(),
        next_id: 1,
    }));

    let router = Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/products", get(list_products).post(create_product))
        .route("/products/:id", put(update_product).delete(delete_product))
        .with_state(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub store error");
    });

    (address, state)
}

/// Apply the configured failure mode; `None` means answer normally.
async fn misbehave(store: &SharedStubStore) -> Option<Response> {
    let mode = store.lock().unwrap().mode;
    match mode {
        StoreMode::Healthy => None,
        StoreMode::Failing => Some(
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "store down"})),
            )
                .into_response(),
        ),
        StoreMode::Stalled(delay) => {
            tokio::time::sleep(delay).await;
            None
        }
    }
}

fn insert(collection: &mut Vec<Value>, next_id: &mut i64, mut record: Value) -> Value {
    record["id"] = json!(*next_id);
    *next_id += 1;
    collection.push(record.clone());
    record
}

async fn list_users(State(store): State<SharedStubStore>) -> Response {
    if let Some(response) = misbehave(&store).await {
        return response;
    }
    let users = store.lock().unwrap().users.clone();
    Json(users).into_response()
}

async fn create_user(State(store): State<SharedStubStore>, Json(user): Json<Value>) -> Response {
    if let Some(response) = misbehave(&store).await {
        return response;
    }
    let mut guard = store.lock().unwrap();
    let state = &mut *guard;
    let created = insert(&mut state.users, &mut state.next_id, user);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn list_products(State(store): State<SharedStubStore>) -> Response {
    if let Some(response) = misbehave(&store).await {
        return response;
    }
    let products = store.lock().unwrap().products.clone();
    Json(products).into_response()
}

async fn create_product(
    State(store): State<SharedStubStore>,
    Json(product): Json<Value>,
) -> Response {
    if let Some(response) = misbehave(&store).await {
        return response;
    }
    let mut guard = store.lock().unwrap();
    let state = &mut *guard;
    let created = insert(&mut state.products, &mut state.next_id, product);
    (StatusCode::CREATED, Json(created)).into_response()
}

async fn update_product(
    State(store): State<SharedStubStore>,
    Path(id): Path<String>,
    Json(mut product): Json<Value>,
) -> Response {
    if let Some(response) = misbehave(&store).await {
        return response;
    }
    let mut state = store.lock().unwrap();
    match state
        .products
        .iter_mut()
        .find(|p| p["id"].to_string() == id)
    {
        Some(existing) => {
            product["id"] = existing["id"].clone();
            *existing = product.clone();
            Json(product).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
    }
}

async fn delete_product(State(store): State<SharedStubStore>, Path(id): Path<String>) -> Response {
    if let Some(response) = misbehave(&store).await {
        return response;
    }
    let mut state = store.lock().unwrap();
    let before = state.products.len();
    state.products.retain(|p| p["id"].to_string() != id);
    if state.products.len() == before {
        return (StatusCode::NOT_FOUND, Json(json!({}))).into_response();
    }
    Json(json!({})).into_response()
}
