/// Gateway-style adapter: plain HTTP in, proxy event through the dispatcher,
/// HTTP out
use crate::{
    dispatch::dispatch,
    event::{ProxyRequest, ProxyResponse},
    state::AppState,
};
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;

/// Fallback for every path not claimed by another route
pub async fn gateway(
    State(app_state): State<AppState>,
    method: Method,
    Query(query_string_parameters): Query<BTreeMap<String, String>>,
    body: Bytes,
) -> Response {
    // Proxy events carry the body as a string; invalid UTF-8 is replaced
    let event = ProxyRequest {
        http_method: method.as_str().to_string(),
        query_string_parameters,
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    match dispatch(app_state.users.as_ref(), &event).await {
        Ok(response) => response.into_response(),
        Err(e) => {
            tracing::error!("Invocation failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "message": "Internal server error" })),
            )
                .into_response()
        }
    }
}

impl IntoResponse for ProxyResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status(), self.body).into_response();

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!("Dropping invalid response header {:?}", name),
            }
        }

        response
    }
}
