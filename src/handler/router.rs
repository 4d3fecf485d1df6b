//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for method validation,
//! route matching, access logging and dispatching.

use crate::config::AppState;
use crate::handler::files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::header::HeaderValue;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    /// Request path as received, still percent-encoded
    pub path: &'a str,
    pub is_head: bool,
    /// Set by the route that answered, for the access log
    pub outcome: &'static str,
}

/// Main entry point for HTTP request handling
///
/// The request body is never read, so any body type is accepted.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();
    let method = req.method();
    let uri = req.uri();

    logger::log_headers_count(req.headers().len(), state.config.logging.show_headers);

    let mut ctx = RequestContext {
        path: uri.path(),
        is_head: *method == Method::HEAD,
        outcome: "-",
    };

    let mut response = match check_http_method(method, state.config.http.enable_cors) {
        Some(resp) => {
            ctx.outcome = "method";
            resp
        }
        None => route_request(&mut ctx, &state).await,
    };

    if let Ok(server) = state.config.http.server_name.parse::<HeaderValue>() {
        response.headers_mut().insert(hyper::header::SERVER, server);
    }

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = version_label(req.version()).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = usize::try_from(response.body().size_hint().lower()).unwrap_or(0);
        entry.referer = header_string(&req, "referer");
        entry.user_agent = header_string(&req, "user-agent");
        entry.outcome = ctx.outcome;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return appropriate response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route request based on path and the tree mount point
async fn route_request(
    ctx: &mut RequestContext<'_>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let mount = state.mount();
    let path = ctx.path;

    // 1. Index and bare mount redirect to the tree root
    if mount != "/" && (path == "/" || path == mount.trim_end_matches('/')) {
        ctx.outcome = "redirect";
        return http::build_redirect_response(mount);
    }

    // 2. File tree
    if let Some(rel) = path.strip_prefix(mount) {
        return files::serve(ctx, rel, state).await;
    }

    // 3. Anything else
    ctx.outcome = "not_found";
    files::not_found(ctx, path.trim_start_matches('/'), state)
}

const fn version_label(version: hyper::Version) -> &'static str {
    match version {
        hyper::Version::HTTP_09 => "0.9",
        hyper::Version::HTTP_10 => "1.0",
        hyper::Version::HTTP_2 => "2",
        hyper::Version::HTTP_3 => "3",
        _ => "1.1",
    }
}

fn header_string<B>(req: &Request<B>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
