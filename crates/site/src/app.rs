//! Router assembly.
//!
//! Kept apart from `main` so tests can serve the exact same stack on an
//! ephemeral port.

use std::time::Duration;

use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::{create_session_layer, security_headers_middleware};
use crate::routes;
use crate::state::AppState;

/// Build the site router with its middleware stack.
///
/// Sentry layers are not included; the binary adds them outermost.
///
/// # Errors
///
/// Returns `sqlx::Error` if the session table cannot be created.
pub async fn build(state: AppState) -> Result<Router, sqlx::Error> {
    let session_layer = create_session_layer(state.pool(), state.config()).await?;
    let static_dir = ServeDir::new(&state.config().static_dir);

    Ok(Router::new()
        .merge(routes::routes())
        .nest_service("/static", static_dir)
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(session_layer)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>, latency: Duration, span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::catalog::default_projects;
    use crate::config::SiteConfig;
    use crate::db::testing::fresh_pool;

    async fn router(pool: sqlx::SqlitePool) -> Router {
        let config = SiteConfig::from_lookup(|_| None).unwrap();
        build(AppState::new(config, pool, default_projects()))
            .await
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_ok() {
        let (_dir, pool) = fresh_pool().await;
        let response = router(pool).await.oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_readiness_fails_when_store_closed() {
        let (_dir, pool) = fresh_pool().await;
        let app = router(pool.clone()).await;

        let response = app.clone().oneshot(get("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        pool.close().await;
        let response = app.oneshot(get("/health/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_home_renders_with_headers() {
        let (_dir, pool) = fresh_pool().await;
        let response = router(pool).await.oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    }

    #[tokio::test]
    async fn test_contact_redirects_to_anchor() {
        let (_dir, pool) = fresh_pool().await;
        let request = Request::builder()
            .method("POST")
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Jane&email=jane%40x.com&message=Hello+there%2C+this+works"))
            .unwrap();

        let response = router(pool.clone()).await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/#contact");
        assert!(response.headers().contains_key(header::SET_COOKIE));
        assert_eq!(
            crate::db::ContactRepository::new(&pool)
                .count_messages()
                .await
                .unwrap(),
            1
        );
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (_dir, pool) = fresh_pool().await;
        let response = router(pool).await.oneshot(get("/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
