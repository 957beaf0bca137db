//! Startup concerns: schema creation, health routes and the OpenAPI document.

mod common;

use axum::http::StatusCode;
use common::spawn_app;
use pc_store::migration::table_names;
use pc_store::apply_migrations;

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let app = spawn_app().await;
    apply_migrations(&app.pool).await.unwrap();
    apply_migrations(&app.pool).await.unwrap();

    for table in table_names() {
        let found = sqlx::query_scalar::<_, String>("SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(table)
            .fetch_optional(&app.pool)
            .await
            .unwrap();
        assert_eq!(found.as_deref(), Some(table));
    }
}

#[tokio::test]
async fn reapplying_schema_keeps_existing_rows() {
    let app = spawn_app().await;
    app.seed_configuration().await;
    apply_migrations(&app.pool).await.unwrap();
    assert_eq!(app.count("Configuration").await, 1);
}

#[tokio::test]
async fn foreign_keys_are_enforced_by_the_store() {
    let app = spawn_app().await;
    let result = sqlx::query("INSERT INTO OrderDetail (OrderID, ComputerID, Quantity, UnitPrice) VALUES (1, 1, 1, 10.0)")
        .execute(&app.pool)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn health_ready_and_version_respond() {
    let app = spawn_app().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = app.get("/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"], "ok");

    let (status, body) = app.get("/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "pc-store");
}

#[tokio::test]
async fn openapi_document_lists_store_paths() {
    let app = spawn_app().await;
    let (status, doc) = app.get("/openapi.json").await;
    assert_eq!(status, StatusCode::OK);
    for path in ["/customers", "/sellers", "/configurations", "/computers", "/orders", "/orders/{order_id}", "/orders/{order_id}/items"] {
        assert!(doc["paths"].get(path).is_some(), "missing {}", path);
    }
}
