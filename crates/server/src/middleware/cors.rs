use axum::{
    http::{
        HeaderValue, Method,
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, AUTHORIZATION, CONTENT_TYPE,
        },
    },
    response::Response,
};
use tower_http::cors::{Any, CorsLayer};

pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";
pub const ALLOWED_METHODS: &str = "GET,POST,DELETE";

/// Answers preflight requests and tags simple requests with `*`.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
}

/// Every response, errors included, carries the cross-origin headers.
pub async fn add_cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();

    headers
        .entry(ACCESS_CONTROL_ALLOW_ORIGIN)
        .or_insert(HeaderValue::from_static("*"));
    headers
        .entry(ACCESS_CONTROL_ALLOW_HEADERS)
        .or_insert(HeaderValue::from_static(ALLOWED_HEADERS));
    headers
        .entry(ACCESS_CONTROL_ALLOW_METHODS)
        .or_insert(HeaderValue::from_static(ALLOWED_METHODS));

    response
}
