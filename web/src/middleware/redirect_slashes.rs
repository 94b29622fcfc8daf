use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Redirects `/path/` to `/path`, keeping the query string.
///
/// The redirect is permanent and preserves the method, so form posts to a
/// slash-terminated path still land on their handler.
pub async fn redirect_slashes(request: Request, next: Next) -> Response {
    match without_trailing_slash(request.uri().path()) {
        Some(path) => {
            let location = match request.uri().query() {
                Some(query) => format!("{path}?{query}"),
                None => path,
            };
            Redirect::permanent(&location).into_response()
        }
        None => next.run(request).await,
    }
}

/// Leading slashes are collapsed so the target can never become a
/// protocol-relative URL such as `//other.host`.
fn without_trailing_slash(path: &str) -> Option<String> {
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }
    Some(format!(
        "/{}",
        path.trim_end_matches('/').trim_start_matches('/')
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        middleware::from_fn,
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    #[test]
    fn test_without_trailing_slash() {
        assert_eq!(without_trailing_slash("/"), None);
        assert_eq!(without_trailing_slash("/counter"), None);
        assert_eq!(without_trailing_slash("/counter/"), Some("/counter".into()));
        assert_eq!(without_trailing_slash("/todos//"), Some("/todos".into()));
        assert_eq!(without_trailing_slash("//"), Some("/".into()));
        assert_eq!(
            without_trailing_slash("//other.host/"),
            Some("/other.host".into())
        );
    }

    #[tokio::test]
    async fn test_redirect_keeps_query_string() {
        let app = Router::new()
            .route("/counter", get(|| async { "counter" }))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(from_fn(redirect_slashes));

        let request = Request::builder()
            .uri("/counter/?m=2")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/counter?m=2");
    }

    #[tokio::test]
    async fn test_other_paths_pass_through() {
        let app = Router::new()
            .route("/counter", get(|| async { "counter" }))
            .fallback(|| async { StatusCode::NOT_FOUND })
            .layer(from_fn(redirect_slashes));

        let request = Request::builder()
            .uri("/counter")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
