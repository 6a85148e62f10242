use axum::body::{self, Body};
use axum::extract::{Request, State};
use axum::response::Response;
use axum::routing::any;
use axum::Router;
use quickpoll_app::infrastructure::proxy::{strip_hop_by_hop, BackendProxy, API_PREFIX};
use quickpoll_errors::AppError;
use std::sync::Arc;

pub fn routes(backend: Arc<BackendProxy>) -> Router {
    Router::new()
        .route(API_PREFIX, any(forward))
        .route(&format!("{API_PREFIX}/"), any(forward))
        .route(&format!("{API_PREFIX}/{{*path}}"), any(forward))
        .with_state(backend)
}

async fn forward(
    State(backend): State<Arc<BackendProxy>>,
    request: Request,
) -> Result<Response, AppError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or(API_PREFIX);

    // Buffered in full, without a size cap.
    let body = body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| AppError::Internal(format!("failed to read request body: {e}")))?;

    let upstream = backend
        .forward(parts.method, path_and_query, parts.headers, body)
        .await?;

    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);

    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
