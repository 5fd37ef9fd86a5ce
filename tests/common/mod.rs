use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use moranguinho_api::{app_router, store, AppConfig, AppState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

/// Router backed by a fresh SQLite file. The directory lives as long as this value.
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(tweak: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig {
            database_url: format!("sqlite://{}", dir.path().join("test.db").display()),
            ..AppConfig::default()
        };
        tweak(&mut config);
        let pool = store::init(&config).await.unwrap();
        let state = AppState::new(pool);
        let router = app_router(state.clone(), &config);
        TestApp {
            router,
            state,
            _dir: dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&v).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> Response<Body> {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> Response<Body> {
        self.request(Method::DELETE, uri, None).await
    }

    /// POST a character and return the created body, asserting 201.
    pub async fn create(&self, body: Value) -> Value {
        let response = self.post("/characters", body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        body_json(response).await
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn moranguinho() -> Value {
    json!({
        "name": "Moranguinho",
        "gender": "f",
        "favorite_fruit": "strawberry",
        "favorite_color": ["red", "pink"],
        "profession": "baker",
        "personality": "sweet",
        "pet": "cat",
        "image": "img.png"
    })
}

/// `payload` with `"id"` added, the shape every record response has.
pub fn with_id(payload: &Value, id: i64) -> Value {
    let mut v = payload.clone();
    v["id"] = json!(id);
    v
}
