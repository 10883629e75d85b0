// CORS configuration

use axum::{http::HeaderValue, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

/// Allow the listed origins, or any origin when the list is empty.
pub fn apply_cors(router: Router, allowed_origins: &[String]) -> Router {
    let allow_origin: AllowOrigin = if allowed_origins.is_empty() {
        Any.into()
    } else {
        allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect::<Vec<_>>()
            .into()
    };

    router.layer(
        CorsLayer::new()
            .allow_origin(allow_origin)
            .allow_methods(Any)
            .allow_headers(Any),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    async fn allow_origin_header(origins: &[String], origin: &str) -> Option<String> {
        let app = apply_cors(Router::new().route("/", get(|| async { "ok" })), origins);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header("origin", origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_any_origin_by_default() {
        assert_eq!(allow_origin_header(&[], "http://example.com").await.as_deref(), Some("*"));
    }

    #[tokio::test]
    async fn test_listed_origins_only() {
        let origins = vec!["http://localhost:3000".to_string()];
        assert_eq!(
            allow_origin_header(&origins, "http://localhost:3000").await.as_deref(),
            Some("http://localhost:3000")
        );
        assert_eq!(allow_origin_header(&origins, "http://evil.example").await, None);
    }
}
