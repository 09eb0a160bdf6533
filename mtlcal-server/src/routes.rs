//! Request interception: cache first, then the network.

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::state::AppState;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors (an unreachable origin, mostly) to HTTP responses
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Fallback handler for every request: serve the cached asset when the
/// install step stored one, otherwise relay the network response as-is.
/// A miss never writes to the cache.
pub async fn intercept(State(state): State<AppState>, uri: Uri) -> Result<Response, AppError> {
    let path = uri.path();

    if let Some(body) = state.cache.lookup(path) {
        return Ok(([(header::CONTENT_TYPE, content_type_for(path))], body).into_response());
    }

    let relayed = state.origin.relay(path).await?;

    let mut response = Response::builder().status(relayed.status);
    if let Some(content_type) = relayed.content_type {
        response = response.header(header::CONTENT_TYPE, content_type);
    }

    Ok(response.body(Body::from(relayed.body))?)
}

/// Content type from the asset path. The precache list is small enough to
/// enumerate its extensions.
fn content_type_for(path: &str) -> &'static str {
    if path == "/" {
        return "text/html";
    }
    match path.rsplit('.').next() {
        Some("html") => "text/html",
        Some("ico") => "image/x-icon",
        Some("json") => "application/json",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AssetCache;
    use crate::origin::Origin;
    use axum::{Router, body::to_bytes, http::Request, routing::get};
    use tower::util::ServiceExt;

    /// App under test: a cache seeded with one version directory, an
    /// origin serving different content than the cache holds.
    async fn test_app(root: &std::path::Path) -> Router {
        let live = root.join("v1");
        std::fs::create_dir_all(&live).unwrap();
        std::fs::write(live.join("index.html"), b"cached index").unwrap();

        let origin_app = Router::new()
            .route("/index.html", get(|| async { "network index" }))
            .route("/fresh.css", get(|| async { "network css" }));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, origin_app).await.unwrap();
        });

        let state = AppState {
            cache: AssetCache::new(root, "v1"),
            origin: Origin::new(format!("http://{}", addr)),
        };

        Router::new().fallback(intercept).with_state(state)
    }

    async fn body_of(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    #[tokio::test]
    async fn cached_asset_wins_over_the_network() {
        let root = tempfile::tempdir().unwrap();
        let app = test_app(root.path()).await;

        let response = app
            .oneshot(Request::builder().uri("/index.html").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/html"
        );
        assert_eq!(body_of(response).await, b"cached index");
    }

    #[tokio::test]
    async fn miss_relays_the_network_without_caching() {
        let root = tempfile::tempdir().unwrap();
        let app = test_app(root.path()).await;

        let response = app
            .oneshot(Request::builder().uri("/fresh.css").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_of(response).await, b"network css");

        // The cache only grows via install
        let cache = AssetCache::new(root.path(), "v1");
        assert_eq!(cache.lookup("/fresh.css"), None);
    }

    #[tokio::test]
    async fn origin_errors_pass_through() {
        let root = tempfile::tempdir().unwrap();
        let app = test_app(root.path()).await;

        let response = app
            .oneshot(Request::builder().uri("/missing.png").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn content_types_cover_the_precache_list() {
        assert_eq!(content_type_for("/"), "text/html");
        assert_eq!(content_type_for("/index.html"), "text/html");
        assert_eq!(content_type_for("/favicon.ico"), "image/x-icon");
        assert_eq!(content_type_for("/manifest.json"), "application/json");
        assert_eq!(content_type_for("/logo192.png"), "image/png");
    }
}
