use axum::{
    body::Body,
    http::{HeaderValue, Request, Response, header},
    middleware::Next,
};

const STATIC_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico", ".css", ".js", ".woff", ".woff2",
];

/// Static files: cached for a year. Everything else, pages and form
/// partials included, is never cached.
pub async fn cache_control_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let is_static_file = is_static_path(req.uri().path());
    let mut response = next.run(req).await;

    let is_success = response.status().is_success();
    let headers = response.headers_mut();

    if is_static_file && is_success {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=31536000, immutable"),
        );
    } else {
        headers.insert(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store, no-cache, must-revalidate, proxy-revalidate"),
        );
        headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    }

    response
}

fn is_static_path(path: &str) -> bool {
    path.starts_with("/static/")
        || path == "/favicon.ico"
        || STATIC_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
