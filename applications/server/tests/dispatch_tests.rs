/// Dispatcher tests
/// Run proxy events through the dispatcher against an in-memory store
mod common;

use axum::http::StatusCode;
use common::{create_event, create_test_state, fetch_event, fixtures, TEST_PASSWORD};
use proptest::prelude::*;
use roster_core::{RosterError, UserRecord};
use roster_server::{dispatch, services::PasswordSource, AppState, ProxyRequest, ServerError};

fn body(response: &roster_server::ProxyResponse) -> serde_json::Value {
    serde_json::from_str(&response.body).unwrap()
}

/// Create then fetch returns the record with the generated password
#[tokio::test]
async fn test_create_then_fetch() {
    let state = create_test_state();

    let created = dispatch(state.users.as_ref(), &create_event(fixtures::ALICE))
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);
    assert_eq!(created.body, r#"{"message":"Create user successfully"}"#);
    assert_eq!(created.headers["content-type"], "application/json");

    let fetched = dispatch(state.users.as_ref(), &fetch_event(fixtures::ALICE_EMAIL))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);

    let user: UserRecord = serde_json::from_str(&fetched.body).unwrap();
    assert_eq!(
        user,
        UserRecord {
            email: "alice@example.com".to_string(),
            firstname: "Alice".to_string(),
            lastname: "Liddell".to_string(),
            age: 30,
            password: TEST_PASSWORD.to_string(),
        }
    );
}

/// Caller-supplied password is overwritten
#[tokio::test]
async fn test_create_ignores_supplied_password() {
    let state = create_test_state();

    dispatch(
        state.users.as_ref(),
        &create_event(
            r#"{"email":"a@b.com","firstname":"A","lastname":"B","age":30,"password":"hunter2"}"#,
        ),
    )
    .await
    .unwrap();

    let fetched = dispatch(state.users.as_ref(), &fetch_event("a@b.com"))
        .await
        .unwrap();
    assert_eq!(body(&fetched)["password"], TEST_PASSWORD);
}

/// Empty or absent email is rejected before the store is consulted
#[tokio::test]
async fn test_fetch_requires_email() {
    let state = create_test_state();
    dispatch(state.users.as_ref(), &create_event(fixtures::ALICE))
        .await
        .unwrap();

    for event in [ProxyRequest::new("GET"), fetch_event("")] {
        let response = dispatch(state.users.as_ref(), &event).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body, r#"{"errMsg":"email is required"}"#);
    }
}

#[tokio::test]
async fn test_fetch_unknown_email() {
    let state = create_test_state();

    let response = dispatch(state.users.as_ref(), &fetch_event("nobody@example.com"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.body, r#"{"errMsg":"email is not found"}"#);
}

/// Each missing field yields its own message and leaves the store unchanged
#[tokio::test]
async fn test_create_validation_messages() {
    let cases = [
        ("not json", "request is invalid json format"),
        ("", "request is invalid json format"),
        (r#"{"email":"a@b.com","age":"30"}"#, "request is invalid json format"),
        ("[]", "request is invalid json format"),
        (r#"["a@b.com","A","B",30]"#, "request is invalid json format"),
        (r#"{"email":null,"firstname":"A","lastname":"B","age":30}"#, "email is required"),
        (r#"{"email":"a@b.com","firstname":"A","lastname":"B","age":null}"#, "age is required"),
        (r#"{"firstname":"A","lastname":"B","age":30}"#, "email is required"),
        (r#"{"email":"a@b.com","lastname":"B","age":30}"#, "firstname is required"),
        (r#"{"email":"a@b.com","firstname":"A","age":30}"#, "lastname is required"),
        (r#"{"email":"a@b.com","firstname":"A","lastname":"B"}"#, "age is required"),
        (r#"{"email":"a@b.com","firstname":"A","lastname":"B","age":0}"#, "age is required"),
        (r#"{"email":"","firstname":"","lastname":"","age":0}"#, "email is required"),
    ];

    for (request_body, expected) in cases {
        let state = create_test_state();

        let response = dispatch(state.users.as_ref(), &create_event(request_body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {request_body:?}");
        assert_eq!(body(&response)["errMsg"], expected, "body {request_body:?}");
        assert!(body(&response).get("message").is_none());

        let fetched = dispatch(state.users.as_ref(), &fetch_event("a@b.com"))
            .await
            .unwrap();
        assert_eq!(fetched.body, r#"{"errMsg":"email is not found"}"#);
    }
}

/// Repeated keys keep their last value and keys match regardless of case
#[tokio::test]
async fn test_create_key_matching() {
    let state = create_test_state();

    let created = dispatch(
        state.users.as_ref(),
        &create_event(
            r#"{"email":"first@b.com","firstname":"A","lastname":"B","age":30,"email":"last@b.com"}"#,
        ),
    )
    .await
    .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let fetched = dispatch(state.users.as_ref(), &fetch_event("first@b.com"))
        .await
        .unwrap();
    assert_eq!(body(&fetched)["errMsg"], "email is not found");

    let fetched = dispatch(state.users.as_ref(), &fetch_event("last@b.com"))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::OK);

    let created = dispatch(
        state.users.as_ref(),
        &create_event(r#"{"Email":"case@b.com","FirstName":"C","LASTNAME":"D","Age":41}"#),
    )
    .await
    .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let fetched = dispatch(state.users.as_ref(), &fetch_event("case@b.com"))
        .await
        .unwrap();
    let record = body(&fetched);
    assert_eq!(record["firstname"], "C");
    assert_eq!(record["lastname"], "D");
    assert_eq!(record["age"], 41);
}

/// Second create for the same email is rejected and the first record kept
#[tokio::test]
async fn test_duplicate_create() {
    let state = create_test_state();

    dispatch(state.users.as_ref(), &create_event(fixtures::ALICE))
        .await
        .unwrap();

    let duplicate = dispatch(
        state.users.as_ref(),
        &create_event(
            r#"{"email":"alice@example.com","firstname":"Other","lastname":"Person","age":99}"#,
        ),
    )
    .await
    .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        duplicate.body,
        r#"{"errMsg":"email alice@example.com is already exists"}"#
    );

    let fetched = dispatch(state.users.as_ref(), &fetch_event(fixtures::ALICE_EMAIL))
        .await
        .unwrap();
    let kept = body(&fetched);
    assert_eq!(kept["firstname"], "Alice");
    assert_eq!(kept["age"], 30);
}

/// PUT fails the invocation and produces no envelope
#[tokio::test]
async fn test_put_is_a_hard_failure() {
    let state = create_test_state();

    let result = dispatch(
        state.users.as_ref(),
        &ProxyRequest::new("PUT").with_body(fixtures::ALICE),
    )
    .await;

    match result {
        Err(ServerError::Handler(RosterError::Unhandled)) => {}
        other => panic!("expected hard failure, got {other:?}"),
    }

    // No side effect
    let fetched = dispatch(state.users.as_ref(), &fetch_event(fixtures::ALICE_EMAIL))
        .await
        .unwrap();
    assert_eq!(fetched.status(), StatusCode::BAD_REQUEST);
}

/// Unknown methods get the same 400 whatever the request carries
#[tokio::test]
async fn test_unknown_method_is_not_allowed() {
    let state = create_test_state();

    for event in [
        ProxyRequest::new("DELETE"),
        ProxyRequest::new("DELETE")
            .with_query("email", "a@b.com")
            .with_body(fixtures::ALICE),
        ProxyRequest::new("PATCH").with_body("not json"),
        ProxyRequest::new("post"),
    ] {
        let response = dispatch(state.users.as_ref(), &event).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.body,
            r#"{"message":"request http method is not allowed"}"#
        );
    }

    // `post` in lower case must not have created anything
    let fetched = dispatch(state.users.as_ref(), &fetch_event(fixtures::ALICE_EMAIL))
        .await
        .unwrap();
    assert_eq!(fetched.body, r#"{"errMsg":"email is not found"}"#);
}

/// Unset environment password yields an empty password
#[tokio::test]
async fn test_unset_env_password_is_empty() {
    let state = AppState::in_memory(PasswordSource::Env(
        "ROSTER_TEST_UNSET_AUTO_GEN_PWD".to_string(),
    ));

    dispatch(state.users.as_ref(), &create_event(fixtures::ALICE))
        .await
        .unwrap();

    let fetched = dispatch(state.users.as_ref(), &fetch_event(fixtures::ALICE_EMAIL))
        .await
        .unwrap();
    assert_eq!(body(&fetched)["password"], "");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any valid record, create then fetch returns it with the generated password
    #[test]
    fn prop_create_fetch_round_trip(
        email in "[a-z0-9]{1,16}@[a-z]{1,10}\\.(com|org|net)",
        firstname in "\\PC{1,20}",
        lastname in "\\PC{1,20}",
        age in any::<i64>().prop_filter("age must be non-zero", |a| *a != 0),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let state = create_test_state();

        let request_body = serde_json::json!({
            "email": email,
            "firstname": firstname,
            "lastname": lastname,
            "age": age,
        })
        .to_string();

        let created = runtime
            .block_on(dispatch(state.users.as_ref(), &create_event(&request_body)))
            .unwrap();
        prop_assert_eq!(created.status(), StatusCode::OK);

        let fetched = runtime
            .block_on(dispatch(state.users.as_ref(), &fetch_event(&email)))
            .unwrap();
        prop_assert_eq!(fetched.status(), StatusCode::OK);

        let user: UserRecord = serde_json::from_str(&fetched.body).unwrap();
        prop_assert_eq!(
            user,
            UserRecord {
                email,
                firstname,
                lastname,
                age,
                password: TEST_PASSWORD.to_string(),
            }
        );
    }
}
