/// Endpoint smoke tests for a running signaling relay
///
/// Drives a live server over HTTP, replacing ad-hoc curl checks.
/// Point it elsewhere with `SIGNALING_BASE_URL`.
///
/// Test Categories:
/// - Health and liveness
/// - Publish / fetch round trip
/// - Overwrite semantics
/// - Validation and not-found errors
/// - Legacy route aliases

use reqwest::{Client, Response, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

pub struct ApiTestClient {
    client: Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: std::env::var("SIGNALING_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response, reqwest::Error> {
        self.client.get(format!("{}{}", self.base_url, path)).send().await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Response, reqwest::Error> {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
    }
}

/// Test results tracker
#[derive(Debug, Default)]
pub struct TestResults {
    pub passed: u32,
    pub failed: u32,
    pub failures: Vec<String>,
}

impl TestResults {
    pub fn pass(&mut self, test_name: &str) {
        self.passed += 1;
        println!("PASS {}", test_name);
    }

    pub fn fail(&mut self, test_name: &str, error: &str) {
        self.failed += 1;
        self.failures.push(format!("{}: {}", test_name, error));
        println!("FAIL {}: {}", test_name, error);
    }

    /// Records the outcome of one expectation on a response.
    pub fn check(&mut self, test_name: &str, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => self.pass(test_name),
            Err(e) => self.fail(test_name, &e),
        }
    }

    pub fn summary(&self) {
        println!("\nTest Summary:");
        println!("Passed: {}", self.passed);
        println!("Failed: {}", self.failed);

        if !self.failures.is_empty() {
            println!("\nFailures:");
            for failure in &self.failures {
                println!("  - {}", failure);
            }
        }
    }
}

async fn expect_json(
    response: Result<Response, reqwest::Error>,
    expected_status: StatusCode,
) -> Result<Value, String> {
    let response = response.map_err(|e| e.to_string())?;
    let status = response.status();
    if status != expected_status {
        return Err(format!("Status: {} (expected {})", status, expected_status));
    }
    response.json::<Value>().await.map_err(|e| e.to_string())
}

fn expect_field(json: &Value, field: &str, expected: &Value) -> Result<(), String> {
    if &json[field] == expected {
        Ok(())
    } else {
        Err(format!("{} was {}, expected {}", field, json[field], expected))
    }
}

pub async fn run_endpoint_tests() -> TestResults {
    let client = ApiTestClient::new();
    let mut results = TestResults::default();

    println!("Starting signaling endpoint tests against {}", client.base_url);

    // HEALTH
    let outcome = expect_json(client.get("/signaling/health").await, StatusCode::OK)
        .await
        .and_then(|json| expect_field(&json, "status", &json!("healthy")));
    results.check("Signaling health", outcome);

    // ROUND TRIP
    let appointment_id = format!("smoke-{}", Uuid::new_v4());
    let first = Uuid::new_v4().to_string();
    let second = Uuid::new_v4().to_string();

    let outcome = expect_json(
        client
            .post("/peer-id", json!({ "appointmentId": appointment_id, "peerId": first }))
            .await,
        StatusCode::OK,
    )
    .await
    .and_then(|json| expect_field(&json, "success", &json!(true)));
    results.check("Publish peer ID", outcome);

    let fetch_path = format!("/peer-id?appointmentId={}", appointment_id);
    let outcome = expect_json(client.get(&fetch_path).await, StatusCode::OK)
        .await
        .and_then(|json| expect_field(&json, "peerId", &json!(first)));
    results.check("Fetch published peer ID", outcome);

    // OVERWRITE
    let outcome = expect_json(
        client
            .post("/peer-id", json!({ "appointmentId": appointment_id, "peerId": second }))
            .await,
        StatusCode::OK,
    )
    .await
    .map(|_| ());
    results.check("Republish peer ID", outcome);

    let outcome = expect_json(client.get(&fetch_path).await, StatusCode::OK)
        .await
        .and_then(|json| expect_field(&json, "peerId", &json!(second)));
    results.check("Fetch returns latest peer ID", outcome);

    // ERRORS
    let outcome = expect_json(
        client
            .get(&format!("/peer-id?appointmentId=missing-{}", Uuid::new_v4()))
            .await,
        StatusCode::NOT_FOUND,
    )
    .await
    .map(|_| ());
    results.check("Unknown appointment is 404", outcome);

    let outcome = expect_json(client.get("/peer-id").await, StatusCode::BAD_REQUEST)
        .await
        .and_then(|json| expect_field(&json, "error", &json!("Missing appointmentId")));
    results.check("Fetch without appointmentId is 400", outcome);

    let outcome = expect_json(
        client.post("/peer-id", json!({ "peerId": first })).await,
        StatusCode::BAD_REQUEST,
    )
    .await
    .map(|_| ());
    results.check("Publish without appointmentId is 400", outcome);

    // LEGACY ALIASES
    let outcome = expect_json(
        client
            .get(&format!("/notifications/get-peer-id?appointmentId={}", appointment_id))
            .await,
        StatusCode::OK,
    )
    .await
    .and_then(|json| expect_field(&json, "peerId", &json!(second)));
    results.check("Legacy fetch alias sees same store", outcome);

    results
}

#[tokio::main]
async fn main() {
    let results = run_endpoint_tests().await;
    results.summary();

    if results.failed > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_tracking() {
        let mut results = TestResults::default();
        results.check("ok", Ok(()));
        results.check("bad", Err("Status: 500".to_string()));

        assert_eq!(results.passed, 1);
        assert_eq!(results.failed, 1);
        assert_eq!(results.failures, vec!["bad: Status: 500".to_string()]);
    }

    #[test]
    fn test_expect_field() {
        let body = json!({ "peerId": "p-123" });
        assert!(expect_field(&body, "peerId", &json!("p-123")).is_ok());
        assert!(expect_field(&body, "peerId", &json!("p-456")).is_err());
        assert!(expect_field(&body, "success", &json!(true)).is_err());
    }
}
