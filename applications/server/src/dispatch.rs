/// Method dispatch for proxy events
use crate::{
    error::Result,
    event::{ProxyRequest, ProxyResponse},
    services::UserHandler,
};
use http::Method;

/// Route a proxy event to exactly one handler operation by its method
///
/// Method tokens are matched exactly; `get` is not `GET`.
pub async fn dispatch<H>(handler: &H, request: &ProxyRequest) -> Result<ProxyResponse>
where
    H: UserHandler + ?Sized,
{
    tracing::debug!("REQ: {:?}", request);

    match Method::from_bytes(request.http_method.as_bytes()) {
        Ok(Method::GET) => handler.get_user(request).await,
        Ok(Method::POST) => handler.create_user(request).await,
        Ok(Method::PUT) => handler.just_return_err(request).await,
        _ => {
            tracing::warn!("method is not allowed, method: {:?}", request.http_method);
            handler.method_not_allowed().await
        }
    }
}
