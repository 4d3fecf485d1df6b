//! Path resolution and breadcrumb trail

use super::context::{join_link, LinkContext};
use super::error::BrowseError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One step of the navigation trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub link: String,
    pub label: String,
}

/// A request path resolved against the root directory
#[derive(Debug, Clone)]
pub struct Resolved {
    pub full_path: PathBuf,
    /// Relative path as requested (decoded)
    pub rel: String,
    pub breadcrumbs: Vec<Breadcrumb>,
}

/// Non-empty `/`-delimited segments of a relative path
pub fn segments(rel: &str) -> impl Iterator<Item = &str> {
    rel.split('/').filter(|s| !s.is_empty())
}

/// Build the breadcrumb trail of `rel`, starting from `base_link`.
///
/// Each link extends the previous one by a single segment.
pub fn breadcrumbs(base_link: &str, rel: &str) -> Vec<Breadcrumb> {
    let mut link = base_link.to_string();
    segments(rel)
        .map(|segment| {
            link = join_link(&link, segment);
            Breadcrumb {
                link: link.clone(),
                label: segment.to_string(),
            }
        })
        .collect()
}

/// Resolve `rel` under `root`.
///
/// An empty path resolves to the root itself without an existence check.
/// With `confine` set, any `..` segment is reported as not found.
pub fn resolve(
    root: &Path,
    rel: &str,
    ctx: &impl LinkContext,
    confine: bool,
) -> Result<Resolved, BrowseError> {
    if rel.is_empty() {
        return Ok(Resolved {
            full_path: root.to_path_buf(),
            rel: String::new(),
            breadcrumbs: Vec::new(),
        });
    }

    let full_path = root.join(rel.trim_start_matches('/'));
    if confine && segments(rel).any(|s| s == "..") {
        return Err(BrowseError::not_found(&full_path));
    }
    if !full_path.exists() {
        return Err(BrowseError::not_found(&full_path));
    }

    let root_link = ctx.tree_root();
    let base_link = root_link.strip_suffix('/').unwrap_or(root_link);

    Ok(Resolved {
        breadcrumbs: breadcrumbs(base_link, rel),
        full_path,
        rel: rel.to_string(),
    })
}
