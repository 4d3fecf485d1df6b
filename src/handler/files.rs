//! File tree pages
//!
//! Bridges an HTTP request onto the browsing core and turns the outcome into
//! a response: rendered listing, rendered file, or attachment.

use crate::browser::{BrowseError, Browsed, LinkContext, Outcome};
use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use percent_encoding::percent_decode_str;
use std::sync::Arc;

/// Link context backed by the request being served
#[derive(Debug, Clone)]
pub struct RequestLinks {
    current: String,
    root: String,
}

impl RequestLinks {
    pub fn new(current: &str, root: &str) -> Self {
        Self {
            current: current.to_string(),
            root: root.to_string(),
        }
    }
}

impl LinkContext for RequestLinks {
    fn current_url(&self) -> &str {
        &self.current
    }

    fn tree_root(&self) -> &str {
        &self.root
    }
}

/// Serve `rel` (the request path below the mount, still percent-encoded)
pub async fn serve(
    ctx: &mut RequestContext<'_>,
    rel: &str,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let rel = percent_decode_str(rel).decode_utf8_lossy().into_owned();
    let links = RequestLinks::new(ctx.path, state.mount());

    let browse_state = Arc::clone(state);
    let browse_rel = rel.clone();
    let result = tokio::task::spawn_blocking(move || {
        browse_state.browser.browse(&browse_rel, &links)
    })
    .await;

    match result {
        Ok(Ok(browsed)) => respond(ctx, browsed, state),
        Ok(Err(BrowseError::NotFound(full_path))) => {
            logger::log_debug(&format!("No such file or directory: {full_path}"));
            ctx.outcome = "not_found";
            not_found(ctx, &rel, state)
        }
        Ok(Err(e)) => {
            logger::log_error(&format!("Failed to browse '/{rel}': {e}"));
            ctx.outcome = "error";
            http::build_500_response(ctx.is_head)
        }
        Err(e) => {
            logger::log_error(&format!("Browse task for '/{rel}' failed: {e}"));
            ctx.outcome = "error";
            http::build_500_response(ctx.is_head)
        }
    }
}

fn respond(
    ctx: &mut RequestContext<'_>,
    browsed: Browsed,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let Browsed { resolved, outcome } = browsed;
    let page = match outcome {
        Outcome::Directory(listing) => {
            ctx.outcome = "listing";
            state
                .renderer
                .render_listing(state.mount(), &resolved, &listing)
        }
        Outcome::Inline(view) => {
            ctx.outcome = "view";
            state.renderer.render_file(state.mount(), &resolved, &view)
        }
        Outcome::Download(download) => {
            ctx.outcome = "download";
            let disposition = download.content_disposition();
            return http::build_attachment_response(
                download.data,
                download.content_type,
                &disposition,
                ctx.is_head,
            );
        }
    };

    match page {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render '/{}': {e}", resolved.rel));
            ctx.outcome = "error";
            http::build_500_response(ctx.is_head)
        }
    }
}

/// Rendered 404 page for a path that does not exist
pub fn not_found(ctx: &RequestContext<'_>, rel: &str, state: &AppState) -> Response<Full<Bytes>> {
    match state.renderer.render_not_found(state.mount(), rel) {
        Ok(html) => http::build_404_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render 404 page: {e}"));
            http::build_404_response("404 Not Found".to_string(), ctx.is_head)
        }
    }
}
