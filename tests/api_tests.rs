//! API integration tests.
//!
//! These run against a live server with a migrated database:
//! `cargo run` in one shell, then `cargo test -- --ignored`.

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:8080/api/v1";

async fn create_user(client: &Client, first: &str, last: &str) -> i64 {
    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "first_name": first,
            "last_name": last,
            "email": format!("{}.{}@rpg-librarium.de", first, last).to_lowercase()
        }))
        .send()
        .await
        .expect("Failed to send create user request");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse user");
    body["id"].as_i64().expect("Created user has no id")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_persist_then_find_returns_same_user() {
    let client = Client::new();

    let id = create_user(&client, "Erika", "Musterfrau").await;

    let response = client
        .get(format!("{}/users/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["id"].as_i64(), Some(id));
    assert_eq!(body["first_name"], "Erika");
    assert_eq!(body["last_name"], "Musterfrau");
}

#[tokio::test]
#[ignore]
async fn test_find_unknown_key_is_404_not_error() {
    let client = Client::new();

    let response = client
        .get(format!("{}/users/999999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchEntity");
}

#[tokio::test]
#[ignore]
async fn test_update_nonexistent_key_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/users/999999999", BASE_URL))
        .json(&json!({
            "first_name": "Nobody",
            "last_name": "Nowhere",
            "email": "nobody@rpg-librarium.de"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_persist_with_identifier_is_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/users", BASE_URL))
        .json(&json!({
            "id": 42,
            "first_name": "Max",
            "last_name": "Mustermann",
            "email": "max@rpg-librarium.de"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore]
async fn test_delete_then_find_is_absent() {
    let client = Client::new();

    let id = create_user(&client, "Kurz", "Lebig").await;

    let response = client
        .delete(format!("{}/users/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .get(format!("{}/users/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_update_changes_are_visible() {
    let client = Client::new();

    let id = create_user(&client, "Alte", "Adresse").await;

    let response = client
        .put(format!("{}/users/{}", BASE_URL, id))
        .json(&json!({
            "first_name": "Alte",
            "last_name": "Adresse",
            "email": "neue.adresse@rpg-librarium.de"
        }))
        .send()
        .await
        .expect("Failed to send update request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body: Value = client
        .get(format!("{}/users/{}", BASE_URL, id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(body["email"], "neue.adresse@rpg-librarium.de");
}

#[tokio::test]
#[ignore]
async fn test_book_title_with_unknown_rule_system_is_conflict() {
    let client = Client::new();

    let response = client
        .post(format!("{}/item-types", BASE_URL))
        .json(&json!({
            "kind": "book_title",
            "product_number": null,
            "title": "Orphaned Tome",
            "author": null,
            "isbn": null,
            "rule_system_id": 999999999
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ConstraintViolation");
}

#[tokio::test]
#[ignore]
async fn test_item_round_trip_keeps_references() {
    let client = Client::new();

    // Rule system and catalog definition
    let response = client
        .post(format!("{}/rule-systems", BASE_URL))
        .json(&json!({ "name": "Das Schwarze Auge", "symbol": "DSA" }))
        .send()
        .await
        .expect("Failed to create rule system");
    assert_eq!(response.status(), StatusCode::CREATED);
    let rule_system: Value = response.json().await.unwrap();
    let rule_system_id = rule_system["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/item-types", BASE_URL))
        .json(&json!({
            "kind": "book_title",
            "product_number": "DSA-1001",
            "title": "Basisregelwerk",
            "author": "Ulrich Kiesow",
            "isbn": "978-3-95752-001-9",
            "rule_system_id": rule_system_id
        }))
        .send()
        .await
        .expect("Failed to create item type");
    assert_eq!(response.status(), StatusCode::CREATED);
    let item_type: Value = response.json().await.unwrap();
    let type_id = item_type["id"].as_i64().unwrap();
    assert_eq!(item_type["kind"], "book_title");
    assert_eq!(item_type["rule_system_id"].as_i64(), Some(rule_system_id));

    // Distinct owner and holder
    let owner_id = create_user(&client, "Olga", "Owner").await;
    let holder_id = create_user(&client, "Hans", "Holder").await;
    assert_ne!(owner_id, holder_id);

    let response = client
        .post(format!("{}/items", BASE_URL))
        .json(&json!({
            "type_id": type_id,
            "owner_id": owner_id,
            "holder_id": holder_id,
            "condition_descr": "well-worn, coffee stain on cover"
        }))
        .send()
        .await
        .expect("Failed to create item");
    assert_eq!(response.status(), StatusCode::CREATED);
    let item: Value = response.json().await.unwrap();
    let item_id = item["id"].as_i64().unwrap();

    // Reading it back yields the same key references
    let body: Value = client
        .get(format!("{}/items/{}", BASE_URL, item_id))
        .send()
        .await
        .expect("Failed to fetch item")
        .json()
        .await
        .expect("Failed to parse item");
    assert_eq!(body["type_id"].as_i64(), Some(type_id));
    assert_eq!(body["owner_id"].as_i64(), Some(owner_id));
    assert_eq!(body["holder_id"].as_i64(), Some(holder_id));

    // Deleting a still-referenced user is rejected
    let response = client
        .delete(format!("{}/users/{}", BASE_URL, owner_id))
        .send()
        .await
        .expect("Failed to send delete request");
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Clearing the references makes the delete go through
    let response = client
        .delete(format!("{}/items/{}", BASE_URL, item_id))
        .send()
        .await
        .expect("Failed to delete item");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = client
        .delete(format!("{}/users/{}", BASE_URL, owner_id))
        .send()
        .await
        .expect("Failed to delete owner");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}
