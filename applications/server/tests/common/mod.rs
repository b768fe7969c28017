/// Common test utilities and fixtures
use axum::{body::Body, http::Request, response::Response, Router};
use roster_server::{api, services::PasswordSource, AppState, ProxyRequest};
use tower::util::ServiceExt;

/// Password every test service assigns to created users
pub const TEST_PASSWORD: &str = "auto-gen-test-pwd";

/// Fresh state with an empty store
pub fn create_test_state() -> AppState {
    AppState::in_memory(PasswordSource::Fixed(TEST_PASSWORD.to_string()))
}

/// Router over a fresh state
pub fn create_test_app() -> Router {
    api::create_router(create_test_state())
}

/// Send one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST proxy event with a create body
pub fn create_event(body: &str) -> ProxyRequest {
    ProxyRequest::new("POST").with_body(body)
}

/// GET proxy event for one email
pub fn fetch_event(email: &str) -> ProxyRequest {
    ProxyRequest::new("GET").with_query("email", email)
}

pub mod fixtures {
    pub const ALICE: &str =
        r#"{"email":"alice@example.com","firstname":"Alice","lastname":"Liddell","age":30}"#;
    pub const ALICE_EMAIL: &str = "alice@example.com";
}
