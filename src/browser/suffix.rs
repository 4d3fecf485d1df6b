//! File suffix tables
//!
//! Static lookup tables deciding which files are shown inline and how
//! entries are decorated in a directory listing.

use serde::Serialize;

/// Source-code suffixes and the highlighting language they are shown with
pub static CODE_SUFFIXES: &[(&str, &str)] = &[
    ("py", "python"),
    ("c", "c"),
    ("cpp", "c"),
    ("html", "html"),
    ("css", "css"),
    ("js", "javascript"),
    ("h", "c"),
    ("conf", "text"),
    ("txt", "text"),
    ("json", "javascript"),
];

/// Plain-text suffixes
pub static TEXT_SUFFIXES: &[(&str, &str)] = &[
    ("conf", "text"),
    ("txt", "text"),
    ("md", "text"),
    ("log", "text"),
];

/// Archive suffixes, only used to pick a listing icon
pub static ARCHIVE_SUFFIXES: &[&str] = &["zip", "rar", "tar", "tgz", "7z", "gz"];

/// Display category of a listing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Directory,
    Code,
    Text,
    Archive,
    Other,
}

/// Extract the suffix of a file name.
///
/// This is the text after the last `.`; a name without a dot is its own suffix.
///
/// # Examples
/// ```
/// use filetree::browser::suffix::file_suffix;
/// assert_eq!(file_suffix("notes.txt"), "txt");
/// assert_eq!(file_suffix("archive.tar.gz"), "gz");
/// assert_eq!(file_suffix("Makefile"), "Makefile");
/// ```
pub fn file_suffix(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn find(table: &'static [(&'static str, &'static str)], suffix: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| *key == suffix)
        .map(|(_, file_type)| *file_type)
}

/// Declared content type of an inline-viewable suffix.
///
/// Text entries take precedence over code entries for suffixes present in both.
pub fn inline_type(suffix: &str) -> Option<&'static str> {
    find(TEXT_SUFFIXES, suffix).or_else(|| find(CODE_SUFFIXES, suffix))
}

pub fn is_archive(suffix: &str) -> bool {
    ARCHIVE_SUFFIXES.contains(&suffix)
}

/// Classify a file name for listing decoration
pub fn classify(name: &str) -> EntryKind {
    let suffix = file_suffix(name);
    if find(CODE_SUFFIXES, suffix).is_some() {
        EntryKind::Code
    } else if find(TEXT_SUFFIXES, suffix).is_some() {
        EntryKind::Text
    } else if is_archive(suffix) {
        EntryKind::Archive
    } else {
        EntryKind::Other
    }
}
