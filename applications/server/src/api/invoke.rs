/// Direct invocation route
///
/// Accepts a raw proxy event the way a function runtime would deliver it and
/// answers with the proxy response event.
use crate::{
    dispatch::dispatch,
    error::Result,
    event::{ProxyRequest, ProxyResponse},
    state::AppState,
};
use axum::{extract::State, Json};

/// POST /invoke
pub async fn invoke(
    State(app_state): State<AppState>,
    Json(event): Json<ProxyRequest>,
) -> Result<Json<ProxyResponse>> {
    let response = dispatch(app_state.users.as_ref(), &event).await?;
    Ok(Json(response))
}
