//! HTTP response building module
//!
//! Builders for every response the browser sends. A builder never panics:
//! if `http` rejects a header value the failure is logged and a bare
//! response is returned instead.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

const ALLOW: &str = "GET, HEAD, OPTIONS";

/// Build 404 Not Found response with an HTML body
pub fn build_404_response(html: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = html.len();
    Response::builder()
        .status(404)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(head_or(is_head, Bytes::from(html))))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", ALLOW)
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 500 Internal Server Error response
pub fn build_500_response(is_head: bool) -> Response<Full<Bytes>> {
    let body = Bytes::from("500 Internal Server Error");
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .header("Content-Length", body.len())
        .body(Full::new(head_or(is_head, body)))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder().status(204).header("Allow", ALLOW);

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", ALLOW)
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 302 redirect response
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build generic HTML response
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(head_or(is_head, Bytes::from(content))))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a download response carrying `Content-Disposition: attachment`
pub fn build_attachment_response(
    data: Bytes,
    content_type: &str,
    disposition: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .header("Content-Disposition", disposition)
        .header("Cache-Control", "no-cache")
        .body(Full::new(head_or(is_head, data)))
        .unwrap_or_else(|e| {
            log_build_error("attachment", &e);
            build_500_response(is_head)
        })
}

fn head_or(is_head: bool, body: Bytes) -> Bytes {
    if is_head {
        Bytes::new()
    } else {
        body
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
