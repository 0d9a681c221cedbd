//! End-to-end tests against a live server.
//!
//! Requires a running instance (`cargo run`) backed by a PostgreSQL
//! database with `sql/schema.sql` applied, which is why every test is
//! `#[ignore]` by default:
//!
//!   cargo test --test integration_workforce_e2e -- --ignored

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::{Value, json};

struct TestContext {
    client: reqwest::Client,
    base_url: String,
}

impl TestContext {
    fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: std::env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:3000".to_string()),
        }
    }

    fn get_timestamp() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }
}

#[tokio::test]
#[ignore = "requires a running server and PostgreSQL"]
async fn register_login_and_profile_round_trip() {
    let context = TestContext::new();
    let timestamp = TestContext::get_timestamp();
    let email = format!("testuser_{}@example.com", timestamp);

    let response = context
        .client
        .post(format!("{}/api/auth/register", context.base_url))
        .json(&json!({
            "username": format!("testuser_{}", timestamp),
            "email": email,
            "password": "SecurePass123!@#"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201, "Registration failed");

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["id"].is_i64());

    let response = context
        .client
        .post(format!("{}/api/auth/login", context.base_url))
        .json(&json!({
            "email": email,
            "password": "SecurePass123!@#"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200, "Login failed");

    let body: Value = response.json().await.unwrap();
    let token = body["token"].as_str().expect("token in login response");
    assert_eq!(body["user"]["role"], "employee");

    let response = context
        .client
        .get(format!("{}/api/auth/profile", context.base_url))
        .bearer_auth(token)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200, "Profile fetch failed");

    let profile: Value = response.json().await.unwrap();
    assert_eq!(profile["id"], body["user"]["id"]);
}

#[tokio::test]
#[ignore = "requires a running server and PostgreSQL"]
async fn department_crud_round_trip() {
    let context = TestContext::new();
    let timestamp = TestContext::get_timestamp();
    let code = format!("ENG{}", timestamp % 100_000);

    let response = context
        .client
        .post(format!("{}/api/departments", context.base_url))
        .json(&json!({ "code": code, "name": "Engineering" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201, "Create failed");

    let body: Value = response.json().await.unwrap();
    let id = body["id"].as_i64().expect("numeric id");

    let response = context
        .client
        .get(format!("{}/api/departments/{}", context.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200, "Get by id failed");

    let department: Value = response.json().await.unwrap();
    assert_eq!(department["code"], code.as_str());
    assert_eq!(department["name"], "Engineering");

    let response = context
        .client
        .patch(format!("{}/api/departments/{}", context.base_url, id))
        .json(&json!({ "name": "Platform Engineering" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200, "Patch failed");

    let response = context
        .client
        .delete(format!("{}/api/departments/{}", context.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200, "Delete failed");

    let response = context
        .client
        .get(format!("{}/api/departments/{}", context.base_url, id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404, "Deleted row still visible");
}

#[tokio::test]
#[ignore = "requires a running server and PostgreSQL"]
async fn list_meta_is_consistent_with_search() {
    let context = TestContext::new();

    let response = context
        .client
        .get(format!(
            "{}/api/departments?page=1&limit=5",
            context.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    let total = body["meta"]["total"].as_i64().unwrap();
    let total_pages = body["meta"]["totalPages"].as_i64().unwrap();
    assert_eq!(body["meta"]["limit"], 5);
    assert_eq!(total_pages, (total + 4) / 5);
    assert!(body["data"].as_array().unwrap().len() <= 5);

    // Nonexistent id and unknown row behaviors.
    let response = context
        .client
        .patch(format!("{}/api/shifts/999999", context.base_url))
        .json(&json!({ "name": "X" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}
