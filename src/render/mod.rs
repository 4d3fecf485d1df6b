//! HTML page rendering
//!
//! Templates are compiled into the binary and rendered with tera. Values are
//! HTML-escaped by tera since every template name ends in `.html`.

use crate::browser::{Breadcrumb, Entry, EntryKind, FileView, Listing, Resolved};
use chrono::{DateTime, Local};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("templates/base.html")),
    ("file_tree.html", include_str!("templates/file_tree.html")),
    ("file_content.html", include_str!("templates/file_content.html")),
    ("not_found.html", include_str!("templates/not_found.html")),
];

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
#[error("template error: {0}")]
pub struct RenderError(#[from] tera::Error);

#[derive(Serialize)]
struct EntryView<'a> {
    name: &'a str,
    link: &'a str,
    modified: String,
    kind: EntryKind,
}

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    /// Render a directory listing page
    pub fn render_listing(
        &self,
        mount: &str,
        resolved: &Resolved,
        listing: &Listing,
    ) -> Result<String, RenderError> {
        let mut ctx = page_context(mount, &resolved.rel, &resolved.breadcrumbs);
        ctx.insert("dirs", &entry_views(&listing.dirs));
        ctx.insert("files", &entry_views(&listing.files));
        ctx.insert("parent", &listing.parent);
        Ok(self.tera.render("file_tree.html", &ctx)?)
    }

    /// Render a file shown inline
    pub fn render_file(
        &self,
        mount: &str,
        resolved: &Resolved,
        view: &FileView,
    ) -> Result<String, RenderError> {
        let mut ctx = page_context(mount, &resolved.rel, &resolved.breadcrumbs);
        ctx.insert("file_content", &view.content);
        ctx.insert("file_type", view.file_type);
        ctx.insert("mtime", &format_time(&view.modified));
        ctx.insert("filesize", &format_size(view.size));
        ctx.insert("filename", &view.name);
        Ok(self.tera.render("file_content.html", &ctx)?)
    }

    pub fn render_not_found(&self, mount: &str, rel: &str) -> Result<String, RenderError> {
        let ctx = page_context(mount, rel, &[]);
        Ok(self.tera.render("not_found.html", &ctx)?)
    }
}

fn page_context(mount: &str, rel: &str, breadcrumbs: &[Breadcrumb]) -> Context {
    let mut ctx = Context::new();
    // Active navigation tab
    ctx.insert("nav_files", "active");
    ctx.insert("mount", mount);
    ctx.insert("path", rel);
    ctx.insert("breadcrumbs", breadcrumbs);
    ctx
}

fn entry_views(entries: &[Entry]) -> Vec<EntryView<'_>> {
    entries
        .iter()
        .map(|e| EntryView {
            name: &e.name,
            link: &e.link,
            modified: format_time(&e.modified),
            kind: e.kind,
        })
        .collect()
}

fn format_time(time: &DateTime<Local>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Format file size for display (e.g. "512B", "1.2K", "3.4M")
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000_000 {
        format!("{:.1}G", bytes as f64 / 1_000_000_000.0)
    } else if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{bytes}B")
    }
}
