#![allow(dead_code)]

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use base64::Engine;
use nexcart_client::api::ApiClient;
use nexcart_client::config::{AuthConfig, Config, HttpConfig};
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
            .add_directive("nexcart_client=debug".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// Builds a structurally valid, unsigned JWT-shaped token whose `exp` lies
/// `offset_secs` from now. The signature segment is garbage.
pub fn fake_jwt(offset_secs: i64) -> String {
    let engine = &base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let now = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs() as i64;
    let header = engine.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = engine.encode(json!({ "exp": now + offset_secs }).to_string());
    format!("{header}.{payload}.sig")
}

#[derive(Debug, Clone)]
pub struct RequestRecord {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub auth: Option<String>,
}

/// In-memory state backing the mock NexCart backend.
#[derive(Debug)]
pub struct MockState {
    pub log: Mutex<Vec<RequestRecord>>,
    pub valid_access: Mutex<HashSet<String>>,
    pub valid_refresh: Mutex<HashSet<String>>,
    access_seq: AtomicU64,
    item_seq: AtomicU64,
    pub user: Mutex<Value>,
    pub products: Mutex<Vec<Value>>,
    pub cart_items: Mutex<Vec<Value>>,
    pub orders: Mutex<Vec<Value>>,
    pub wishlist: Mutex<Vec<Value>>,
    pub reviews: Mutex<Vec<Value>>,
    pub settings: Mutex<Value>,
}

impl MockState {
    fn new() -> Self {
        Self {
            log: Mutex::new(Vec::new()),
            valid_access: Mutex::new(HashSet::new()),
            valid_refresh: Mutex::new(HashSet::new()),
            access_seq: AtomicU64::new(0),
            item_seq: AtomicU64::new(0),
            user: Mutex::new(json!({
                "id": 1,
                "email": "a@b.com",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "role": "user",
            })),
            products: Mutex::new(vec![
                json!({"id": 10, "name": "Mechanical Keyboard", "price": "49.99", "stock": 12, "is_featured": true}),
                json!({"id": 11, "name": "USB Microphone", "price": "89.00", "stock": 3, "is_featured": false}),
            ]),
            cart_items: Mutex::new(Vec::new()),
            orders: Mutex::new(Vec::new()),
            wishlist: Mutex::new(Vec::new()),
            reviews: Mutex::new(Vec::new()),
            settings: Mutex::new(json!({"store_name": "NexCart", "currency": "XAF"})),
        }
    }

    pub fn issue_tokens(&self) -> (String, String) {
        let n = self.access_seq.fetch_add(1, Ordering::SeqCst);
        let access = format!("ACCESS-{n}");
        let refresh = format!("REFRESH-{n}");
        self.valid_access.lock().unwrap().insert(access.clone());
        self.valid_refresh.lock().unwrap().insert(refresh.clone());
        (access, refresh)
    }

    /// Server-side revocation of an access token, forcing the next request
    /// carrying it into the refresh path.
    pub fn revoke_access(&self, token: &str) {
        self.valid_access.lock().unwrap().remove(token);
    }

    pub fn revoke_refresh(&self, token: &str) {
        self.valid_refresh.lock().unwrap().remove(token);
    }

    pub fn calls(&self, method: &str, path: &str) -> Vec<RequestRecord> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn refresh_calls(&self) -> usize {
        self.calls("POST", "/auth/token/refresh").len()
    }

    fn authorized(&self, headers: &HeaderMap) -> bool {
        bearer(headers).is_some_and(|t| self.valid_access.lock().unwrap().contains(&t))
    }

    fn next_item_id(&self) -> u64 {
        100 + self.item_seq.fetch_add(1, Ordering::SeqCst)
    }
}

fn bearer(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::to_string)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"error": "Authentication credentials were not provided."})))
        .into_response()
}

fn page_of(items: Vec<Value>) -> Value {
    let count = items.len();
    json!({
        "results": items,
        "count": count,
        "current_page": 1,
        "total_pages": 1,
    })
}

async fn record_request(State(state): State<Arc<MockState>>, req: Request, next: Next) -> Response {
    let record = RequestRecord {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(str::to_string),
        auth: req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    };
    state.log.lock().unwrap().push(record);
    next.run(req).await
}

async fn login(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if email != "a@b.com" || password != "x" {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Invalid credentials"}))).into_response();
    }
    let (access, refresh) = state.issue_tokens();
    let user = state.user.lock().unwrap().clone();
    Json(json!({ "user": user, "tokens": { "access": access, "refresh": refresh } })).into_response()
}

async fn register(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    if body["password"] != body["password_confirm"] {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"password_confirm": ["Passwords do not match."]})),
        )
            .into_response();
    }
    let user = json!({
        "id": 2,
        "email": body["email"],
        "first_name": body["first_name"],
        "last_name": body["last_name"],
        "role": "user",
    });
    *state.user.lock().unwrap() = user.clone();
    let (access, refresh) = state.issue_tokens();
    (
        StatusCode::CREATED,
        Json(json!({ "user": user, "tokens": { "access": access, "refresh": refresh } })),
    )
        .into_response()
}

async fn social_login(
    State(state): State<Arc<MockState>>,
    Path(provider): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let accepted = match provider.as_str() {
        "google" => body["token"].is_string(),
        "discord" | "microsoft" => body["code"].is_string() && body["redirect_uri"].is_string(),
        _ => false,
    };
    if !accepted {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": format!("{provider} login failed")})))
            .into_response();
    }
    let (access, refresh) = state.issue_tokens();
    let user = state.user.lock().unwrap().clone();
    Json(json!({ "user": user, "tokens": { "access": access, "refresh": refresh } })).into_response()
}

async fn refresh_token(State(state): State<Arc<MockState>>, Json(body): Json<Value>) -> Response {
    let refresh = body["refresh"].as_str().unwrap_or_default();
    if !state.valid_refresh.lock().unwrap().contains(refresh) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"error": "Token is invalid or expired"})))
            .into_response();
    }
    let n = state.access_seq.fetch_add(1, Ordering::SeqCst);
    let access = format!("ACCESS-{n}");
    state.valid_access.lock().unwrap().insert(access.clone());
    Json(json!({ "access": access })).into_response()
}

async fn get_profile(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(state.user.lock().unwrap().clone()).into_response()
}

async fn patch_profile(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut user = state.user.lock().unwrap();
    if let (Some(user_map), Some(update)) = (user.as_object_mut(), body.as_object()) {
        for (k, v) in update {
            user_map.insert(k.clone(), v.clone());
        }
    }
    Json(user.clone()).into_response()
}

async fn change_password(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    if body["old_password"].as_str() != Some("x") {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Old password is incorrect"}))).into_response();
    }
    Json(json!({})).into_response()
}

/// Public listing, but an invalid bearer token is still rejected, the way
/// DRF-style backends treat credentials that fail authentication.
async fn list_products(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if bearer(&headers).is_some() && !state.authorized(&headers) {
        return unauthorized();
    }
    let products = state.products.lock().unwrap().clone();
    let filtered: Vec<Value> = match params.get("search") {
        Some(term) if !term.is_empty() => products
            .into_iter()
            .filter(|p| {
                p["name"]
                    .as_str()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&term.to_lowercase())
            })
            .collect(),
        _ => products,
    };
    Json(page_of(filtered)).into_response()
}

async fn get_product(State(state): State<Arc<MockState>>, Path(id): Path<u64>) -> Response {
    let products = state.products.lock().unwrap();
    products.iter().find(|p| p["id"] == id).map_or_else(
        || (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
        |p| Json(p.clone()).into_response(),
    )
}

async fn featured_products(State(state): State<Arc<MockState>>) -> Response {
    let products = state.products.lock().unwrap();
    let featured: Vec<Value> = products.iter().filter(|p| p["is_featured"] == true).cloned().collect();
    Json(Value::Array(featured)).into_response()
}

async fn categories() -> Response {
    Json(json!([
        {"id": 1, "name": "Audio", "slug": "audio"},
        {"id": 2, "name": "Peripherals", "slug": "peripherals"},
    ]))
    .into_response()
}

async fn recommendations(State(state): State<Arc<MockState>>) -> Response {
    Json(Value::Array(state.products.lock().unwrap().clone())).into_response()
}

async fn track_activity(Json(_body): Json<Value>) -> Response {
    Json(json!({})).into_response()
}

fn cart_subtotal(items: &[Value]) -> f64 {
    items
        .iter()
        .map(|i| {
            let price: f64 = i["price"].as_str().unwrap_or("0").parse().unwrap_or(0.0);
            price * i["quantity"].as_u64().unwrap_or(0) as f64
        })
        .sum()
}

async fn get_cart(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    // Totals are intentionally absent; clients derive them from the lines.
    let items = state.cart_items.lock().unwrap().clone();
    Json(json!({ "items": items })).into_response()
}

async fn add_to_cart(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let product_id = body["product_id"].as_u64().unwrap_or_default();
    let Some(product) = state.products.lock().unwrap().iter().find(|p| p["id"] == product_id).cloned()
    else {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "Product not found"}))).into_response();
    };
    let quantity = body["quantity"].as_u64().unwrap_or(1);
    let mut items = state.cart_items.lock().unwrap();
    if let Some(existing) = items.iter_mut().find(|i| i["product"]["id"] == product_id) {
        existing["quantity"] = json!(existing["quantity"].as_u64().unwrap_or(0) + quantity);
        return Json(existing.clone()).into_response();
    }
    let price = product["price"].clone();
    let item = json!({
        "id": state.next_item_id(),
        "product": product,
        "quantity": quantity,
        "price": price,
    });
    items.push(item.clone());
    Json(item).into_response()
}

async fn update_cart_item(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(item_id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut items = state.cart_items.lock().unwrap();
    match items.iter_mut().find(|i| i["id"] == item_id) {
        Some(item) => {
            item["quantity"] = body["quantity"].clone();
            Json(item.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
    }
}

async fn remove_cart_item(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(item_id): Path<u64>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    state.cart_items.lock().unwrap().retain(|i| i["id"] != item_id);
    Json(json!({})).into_response()
}

async fn clear_cart(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    state.cart_items.lock().unwrap().clear();
    Json(json!({})).into_response()
}

async fn create_order(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let items = state.cart_items.lock().unwrap().clone();
    let subtotal = cart_subtotal(&items);
    let order = json!({
        "id": state.orders.lock().unwrap().len() as u64 + 1,
        "status": "pending",
        "total": format!("{subtotal:.2}"),
        "items": [],
        "shipping_address": body["shipping_address"],
        "payment_status": "pending",
    });
    state.orders.lock().unwrap().push(order.clone());
    state.cart_items.lock().unwrap().clear();
    (StatusCode::CREATED, Json(order)).into_response()
}

async fn list_orders(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(page_of(state.orders.lock().unwrap().clone())).into_response()
}

async fn get_order(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let orders = state.orders.lock().unwrap();
    orders.iter().find(|o| o["id"] == id).map_or_else(
        || (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
        |o| Json(o.clone()).into_response(),
    )
}

async fn initiate_payment(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(_body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "transaction_id": Uuid::new_v4(), "status": "pending" })).into_response()
}

async fn payment_status(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(tx): Path<Uuid>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(json!({ "transaction_id": tx, "status": "completed" })).into_response()
}

async fn get_wishlist(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(Value::Array(state.wishlist.lock().unwrap().clone())).into_response()
}

async fn add_to_wishlist(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let product_id = body["product_id"].as_u64().unwrap_or_default();
    let Some(product) = state.products.lock().unwrap().iter().find(|p| p["id"] == product_id).cloned()
    else {
        return (StatusCode::NOT_FOUND, Json(json!({"error": "Product not found"}))).into_response();
    };
    let item = json!({ "id": state.next_item_id(), "product": product });
    state.wishlist.lock().unwrap().push(item.clone());
    (StatusCode::CREATED, Json(item)).into_response()
}

async fn remove_from_wishlist(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(item_id): Path<u64>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    state.wishlist.lock().unwrap().retain(|i| i["id"] != item_id);
    Json(json!({})).into_response()
}

async fn add_review(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let review = json!({
        "id": state.next_item_id(),
        "product_id": body["product_id"],
        "rating": body["rating"],
        "title": body["title"],
        "comment": body["comment"],
        "author": "Ada Lovelace",
    });
    state.reviews.lock().unwrap().push(review.clone());
    (StatusCode::CREATED, Json(review)).into_response()
}

async fn product_reviews(State(state): State<Arc<MockState>>, Path(id): Path<u64>) -> Response {
    let reviews: Vec<Value> = state
        .reviews
        .lock()
        .unwrap()
        .iter()
        .filter(|r| r["product_id"] == id)
        .cloned()
        .collect();
    Json(page_of(reviews)).into_response()
}

async fn admin_users(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(page_of(vec![state.user.lock().unwrap().clone()])).into_response()
}

async fn admin_get_order(
    state: State<Arc<MockState>>,
    headers: HeaderMap,
    path: Path<u64>,
) -> Response {
    get_order(state, headers, path).await
}

async fn admin_patch_order(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let mut orders = state.orders.lock().unwrap();
    match orders.iter_mut().find(|o| o["id"] == id) {
        Some(order) => {
            order["status"] = body["status"].clone();
            Json(order.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
    }
}

async fn create_product(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(mut body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    let id = state.next_item_id();
    if let Some(map) = body.as_object_mut() {
        map.insert("id".to_string(), json!(id));
    }
    state.products.lock().unwrap().push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn update_product(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
    Json(mut body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    if let Some(map) = body.as_object_mut() {
        map.insert("id".to_string(), json!(id));
    }
    let mut products = state.products.lock().unwrap();
    match products.iter_mut().find(|p| p["id"] == id) {
        Some(product) => {
            *product = body.clone();
            Json(body).into_response()
        }
        None => (StatusCode::NOT_FOUND, Json(json!({"error": "Not found"}))).into_response(),
    }
}

async fn delete_product(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Path(id): Path<u64>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    state.products.lock().unwrap().retain(|p| p["id"] != id);
    Json(json!({})).into_response()
}

async fn admin_settings(State(state): State<Arc<MockState>>, headers: HeaderMap) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    Json(state.settings.lock().unwrap().clone()).into_response()
}

async fn update_admin_settings(
    State(state): State<Arc<MockState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !state.authorized(&headers) {
        return unauthorized();
    }
    *state.settings.lock().unwrap() = body.clone();
    Json(body).into_response()
}

fn router(state: Arc<MockState>) -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/token/refresh", post(refresh_token))
        .route("/auth/change-password", post(change_password))
        .route("/auth/profile", get(get_profile).patch(patch_profile))
        .route("/auth/{provider}", post(social_login))
        .route("/products", get(list_products).post(create_product))
        .route("/products/featured", get(featured_products))
        .route("/products/{id}", get(get_product).put(update_product).delete(delete_product))
        .route("/products/{id}/reviews", get(product_reviews))
        .route("/categories", get(categories))
        .route("/recommendations", get(recommendations))
        .route("/recommendations/user/{id}", get(recommendations))
        .route("/activity/track", post(track_activity))
        .route("/cart", get(get_cart))
        .route("/cart/add", post(add_to_cart))
        .route("/cart/items/{id}", patch(update_cart_item).delete(remove_cart_item))
        .route("/cart/clear", delete(clear_cart))
        .route("/orders", get(list_orders))
        .route("/orders/create", post(create_order))
        .route("/orders/{id}", get(get_order))
        .route("/payments/initiate", post(initiate_payment))
        .route("/payments/status/{tx}", get(payment_status))
        .route("/wishlist", get(get_wishlist))
        .route("/wishlist/add", post(add_to_wishlist))
        .route("/wishlist/{id}", delete(remove_from_wishlist))
        .route("/reviews", post(add_review))
        .route("/admin/users", get(admin_users))
        .route("/admin/orders/{id}", get(admin_get_order).patch(admin_patch_order))
        .route("/admin/settings", get(admin_settings).put(update_admin_settings))
        .layer(middleware::from_fn_with_state(state.clone(), record_request))
        .with_state(state)
}

pub struct TestApp {
    pub state: Arc<MockState>,
    pub api: Arc<ApiClient>,
    pub addr: SocketAddr,
    pub config: Config,
}

impl TestApp {
    pub async fn spawn() -> Self {
        setup_tracing();

        let state = Arc::new(MockState::new());
        let app = router(state.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        let config = test_config(addr);
        let api = Arc::new(ApiClient::new(config.clone()).expect("client"));

        Self { state, api, addr, config }
    }

    /// A fresh client over the same backend and state directory, as if the
    /// process restarted.
    pub fn restart_client(&self) -> ApiClient {
        ApiClient::new(self.config.clone()).expect("client")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.config.state_dir.clone()
    }
}

fn test_config(addr: SocketAddr) -> Config {
    Config {
        api_url: format!("http://{addr}"),
        state_dir: std::env::temp_dir().join(format!("nexcart-test-{}", Uuid::new_v4())),
        http: HttpConfig {
            request_timeout_secs: 5,
            user_agent: "nexcart-client-tests".to_string(),
        },
        auth: AuthConfig {
            token_expiry_skew_secs: 5,
            login_route: "/login".to_string(),
        },
    }
}
