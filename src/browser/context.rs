//! Request context capability
//!
//! The browsing core never looks at the HTTP request directly. Links are
//! derived from whatever implements [`LinkContext`].

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped when a file name becomes a URL path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub trait LinkContext {
    /// URL of the request being served, as received (still percent-encoded)
    fn current_url(&self) -> &str;

    /// Link to the root of the file tree, with a trailing slash
    fn tree_root(&self) -> &str;
}

/// Append one path segment to a link, escaping it as needed
pub fn join_link(base: &str, segment: &str) -> String {
    format!("{base}/{}", utf8_percent_encode(segment, SEGMENT))
}

/// Fixed links for exercising the core without a request
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct StaticLinks {
    pub current: String,
    pub root: String,
}

#[cfg(test)]
impl LinkContext for StaticLinks {
    fn current_url(&self) -> &str {
        &self.current
    }

    fn tree_root(&self) -> &str {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_link_plain() {
        assert_eq!(join_link("/files", "src"), "/files/src");
        assert_eq!(join_link("", "a"), "/a");
    }

    #[test]
    fn test_join_link_escapes() {
        assert_eq!(join_link("/files", "my notes.txt"), "/files/my%20notes.txt");
        assert_eq!(join_link("/files", "100%"), "/files/100%25");
        assert_eq!(join_link("/files", "what?#"), "/files/what%3F%23");
        assert_eq!(join_link("/files", "日本"), "/files/%E6%97%A5%E6%9C%AC");
    }
}
