//! File tree browsing
//!
//! Framework-independent core: resolve a relative request path against the
//! root directory, then decide how the node is presented.
//! Everything here is synchronous and stateless per call.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod path;
pub mod suffix;

pub use context::LinkContext;
pub use dispatch::{Download, Entry, FileView, Listing, Outcome};
pub use error::BrowseError;
pub use path::{Breadcrumb, Resolved};
pub use suffix::EntryKind;

use std::path::{Path, PathBuf};

/// Result of browsing one request path
#[derive(Debug, Clone)]
pub struct Browsed {
    pub resolved: Resolved,
    pub outcome: Outcome,
}

/// Browses a single root directory
#[derive(Debug, Clone)]
pub struct Browser {
    root: PathBuf,
    confine: bool,
}

impl Browser {
    pub fn new(root: impl Into<PathBuf>, confine_to_root: bool) -> Self {
        Self {
            root: root.into(),
            confine: confine_to_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve then dispatch `rel`
    pub fn browse(&self, rel: &str, ctx: &impl LinkContext) -> Result<Browsed, BrowseError> {
        let resolved = path::resolve(&self.root, rel, ctx, self.confine)?;
        let outcome = dispatch::dispatch(&resolved.full_path, &resolved.rel, ctx)?;
        Ok(Browsed { resolved, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::context::StaticLinks;
    use std::fs;

    #[test]
    fn test_browse_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("readme.md"), "# hi").unwrap();

        let ctx = StaticLinks {
            current: "/files/".to_string(),
            root: "/files/".to_string(),
        };
        let browsed = Browser::new(dir.path(), true).browse("", &ctx).unwrap();
        assert!(browsed.resolved.breadcrumbs.is_empty());
        let Outcome::Directory(listing) = browsed.outcome else {
            panic!("expected listing");
        };
        assert_eq!(listing.dirs.len(), 1);
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.parent, None);
    }

    #[test]
    fn test_browse_nested_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/b/c.log"), "line").unwrap();

        let ctx = StaticLinks {
            current: "/files/a/b/c.log".to_string(),
            root: "/files/".to_string(),
        };
        let browsed = Browser::new(dir.path(), true).browse("a/b/c.log", &ctx).unwrap();
        let labels: Vec<_> = browsed
            .resolved
            .breadcrumbs
            .iter()
            .map(|b| b.label.as_str())
            .collect();
        assert_eq!(labels, ["a", "b", "c.log"]);
        assert!(matches!(browsed.outcome, Outcome::Inline(ref v) if v.content == "line"));
    }

    #[test]
    fn test_browse_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = StaticLinks {
            current: "/files/ghost".to_string(),
            root: "/files/".to_string(),
        };
        let err = Browser::new(dir.path(), true).browse("ghost", &ctx).unwrap_err();
        assert!(err.is_not_found());
    }
}
