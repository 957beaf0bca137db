#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use pc_store::{app, apply_migrations, connect, AppState, Settings};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

/// A fresh store in its own temp directory plus the router over it. Keep `_dir` alive for the test.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub async fn spawn_app() -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");
    let db_path = dir.path().join("store.db");
    let settings = Settings::from_lookup(|key| match key {
        "DATABASE_URL" => Some(format!("sqlite://{}", db_path.display())),
        _ => None,
    })
    .expect("settings");
    let pool = connect(&settings).await.expect("pool");
    apply_migrations(&pool).await.expect("migrations");
    let router = app(AppState::new(pool.clone()), settings.body_limit_bytes);
    TestApp {
        router,
        pool,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(b) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(b.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into()))
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    /// Configuration i7/16GB/512GB, returns its id.
    pub async fn seed_configuration(&self) -> i64 {
        let (status, body) = self
            .post(
                "/configurations",
                json!({"processor": "i7", "ram": "16GB", "storage": "512GB"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        body["configuration_id"].as_i64().unwrap()
    }

    /// Computer with the given model and price on a new configuration, returns its id.
    pub async fn seed_computer(&self, model: &str, price: f64) -> i64 {
        let configuration_id = self.seed_configuration().await;
        let (status, _) = self
            .post(
                "/computers",
                json!({"model": model, "price": price, "configuration_id": configuration_id}),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        sqlx::query_scalar::<_, i64>("SELECT MAX(ComputerID) FROM Computer")
            .fetch_one(&self.pool)
            .await
            .unwrap()
    }

    /// One customer and one seller, returns (customer_id, seller_id).
    pub async fn seed_parties(&self) -> (i64, i64) {
        let (status, _) = self
            .post(
                "/customers",
                json!({
                    "first_name": "Ada",
                    "last_name": "Lovelace",
                    "middle_name": "King",
                    "telephone": "+44 20 7946 0001",
                    "email": "ada@example.com"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = self
            .post("/sellers", json!({"full_name": "Charles Babbage", "phone": "+44 20 7946 0002"}))
            .await;
        assert_eq!(status, StatusCode::OK);
        let customer_id = sqlx::query_scalar::<_, i64>("SELECT MAX(CustomerID) FROM Customer")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        let seller_id = sqlx::query_scalar::<_, i64>("SELECT MAX(SellerID) FROM Seller")
            .fetch_one(&self.pool)
            .await
            .unwrap();
        (customer_id, seller_id)
    }

    /// Empty order for freshly seeded parties, returns its id.
    pub async fn seed_order(&self) -> i64 {
        let (customer_id, seller_id) = self.seed_parties().await;
        let (status, body) = self
            .post("/orders", json!({"customer_id": customer_id, "seller_id": seller_id}))
            .await;
        assert_eq!(status, StatusCode::OK);
        body["order_id"].as_i64().unwrap()
    }
}
