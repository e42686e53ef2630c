use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::{Router, middleware};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;
use crate::utils::AppError;
use crate::utils::logger::ACCESS_LOG_TARGET;

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: ACCESS_LOG_TARGET, "{} {} {}", method, uri, status);

    response
}

/// Handler 发生 panic 时返回统一的 500 错误体, 而不是直接断开连接
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    AppError::internal(format!("Request handler panicked: {detail}")).into_response()
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::reservation::router())
}

/// Build the complete service: routes, state and tower-http layers
///
/// The returned router can be served over TCP or driven in-process with
/// `tower::ServiceExt::oneshot`.
pub fn build_router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(CatchPanicLayer::custom(handle_panic))
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use http::StatusCode;
    use shared::error::ApiError;

    #[tokio::test]
    async fn test_panic_becomes_internal_error_body() {
        let response = handle_panic(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "INTERNAL_SERVER_ERROR");
        assert_eq!(body.message, "Request handler panicked: index out of bounds");
    }

    #[tokio::test]
    async fn test_formatted_panic_message_is_kept() {
        let response = handle_panic(Box::new(format!("bad value {}", 7)));
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ApiError = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.message, "Request handler panicked: bad value 7");
    }
}
