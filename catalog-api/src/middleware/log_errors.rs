use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

// 错误日志中间件
pub async fn log_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(%method, %path, %status, "request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, %status, "request rejected");
    }

    response
}
