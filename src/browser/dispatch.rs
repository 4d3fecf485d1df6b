//! Content dispatch
//!
//! Decides, from the node type and file suffix alone, whether a resolved path
//! becomes a directory listing, an inline view or a download.

use super::context::{join_link, LinkContext};
use super::error::BrowseError;
use super::suffix::{self, EntryKind};
use crate::http::mime;
use crate::logger;
use chrono::{DateTime, Local};
use hyper::body::Bytes;
use std::fs;
use std::path::{Path, PathBuf};

/// One child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub link: String,
    pub modified: DateTime<Local>,
    pub kind: EntryKind,
}

#[derive(Debug, Clone)]
pub struct Listing {
    pub dirs: Vec<Entry>,
    pub files: Vec<Entry>,
    /// Link one level up, `None` at the tree root
    pub parent: Option<String>,
}

/// A text file shown inline
#[derive(Debug, Clone)]
pub struct FileView {
    pub name: String,
    pub content: String,
    pub file_type: &'static str,
    pub modified: DateTime<Local>,
    pub size: u64,
}

/// A file sent as an attachment
#[derive(Debug, Clone)]
pub struct Download {
    pub name: String,
    pub content_type: &'static str,
    pub data: Bytes,
}

impl Download {
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.name)
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    Directory(Listing),
    Inline(FileView),
    Download(Download),
}

/// Dispatch a resolved path.
///
/// `rel` is the requested relative path, only used to tell whether we are at
/// the root of the tree.
pub fn dispatch(
    full_path: &Path,
    rel: &str,
    ctx: &impl LinkContext,
) -> Result<Outcome, BrowseError> {
    if full_path.is_dir() {
        return list_directory(full_path, rel, ctx).map(Outcome::Directory);
    }

    let name = base_name(full_path);
    match suffix::inline_type(suffix::file_suffix(&name)) {
        Some(file_type) => read_inline(full_path, name, file_type).map(Outcome::Inline),
        None => read_download(full_path, name).map(Outcome::Download),
    }
}

/// List the immediate children of `dir`, directories and files apart
pub fn list_directory(
    dir: &Path,
    rel: &str,
    ctx: &impl LinkContext,
) -> Result<Listing, BrowseError> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        // Links are decoded as UTF-8, so such a name could never be requested back
        let Ok(name) = entry.file_name().into_string() else {
            logger::log_debug(&format!("Skipping non-UTF-8 entry: {}", path.display()));
            continue;
        };
        if path.is_dir() {
            dirs.push((name, path));
        } else if path.is_file() {
            files.push((name, path));
        }
    }

    let url = ctx.current_url().trim_end_matches('/');
    let parent = if rel.is_empty() {
        None
    } else {
        Some(url.rsplit_once('/').map_or("", |(head, _)| head).to_string())
    };

    Ok(Listing {
        dirs: build_entries(dirs, url, |_| EntryKind::Directory)?,
        files: build_entries(files, url, suffix::classify)?,
        parent,
    })
}

fn build_entries(
    mut children: Vec<(String, PathBuf)>,
    url: &str,
    kind: impl Fn(&str) -> EntryKind,
) -> Result<Vec<Entry>, BrowseError> {
    children.sort_by(|a, b| a.0.cmp(&b.0));
    children
        .into_iter()
        .map(|(name, path)| -> Result<Entry, BrowseError> {
            Ok(Entry {
                link: join_link(url, &name),
                modified: modified_time(&path)?,
                kind: kind(&name),
                name,
            })
        })
        .collect()
}

fn read_inline(path: &Path, name: String, file_type: &'static str) -> Result<FileView, BrowseError> {
    let content = fs::read_to_string(path)?;
    let metadata = fs::metadata(path)?;
    Ok(FileView {
        name,
        content,
        file_type,
        modified: metadata.modified()?.into(),
        size: metadata.len(),
    })
}

fn read_download(path: &Path, name: String) -> Result<Download, BrowseError> {
    let data = fs::read(path)?;
    let content_type = mime::get_content_type(path.extension().and_then(|e| e.to_str()));
    Ok(Download {
        name,
        content_type,
        data: Bytes::from(data),
    })
}

fn modified_time(path: &Path) -> Result<DateTime<Local>, BrowseError> {
    Ok(fs::metadata(path)?.modified()?.into())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::context::StaticLinks;

    fn at(current: &str) -> StaticLinks {
        StaticLinks {
            current: current.to_string(),
            root: "/files/".to_string(),
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_listing_partitions_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for d in ["zeta", "Alpha", "beta"] {
            fs::create_dir(dir.path().join(d)).unwrap();
        }
        for f in ["b.txt", "B.txt", "a.zip", "run"] {
            fs::write(dir.path().join(f), "x").unwrap();
        }

        let listing = list_directory(dir.path(), "", &at("/files/")).unwrap();
        assert_eq!(names(&listing.dirs), ["Alpha", "beta", "zeta"]);
        assert_eq!(names(&listing.files), ["B.txt", "a.zip", "b.txt", "run"]);
        assert!(listing.dirs.iter().all(|e| e.kind == EntryKind::Directory));
        assert_eq!(listing.files[1].kind, EntryKind::Archive);
        assert_eq!(listing.files[3].kind, EntryKind::Other);
        assert_eq!(listing.parent, None);
    }

    #[test]
    fn test_listing_links_and_parent() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub dir")).unwrap();
        fs::write(dir.path().join("x.py"), "print(1)").unwrap();

        let listing = list_directory(dir.path(), "a/b", &at("/files/a/b/")).unwrap();
        assert_eq!(listing.dirs[0].link, "/files/a/b/sub%20dir");
        assert_eq!(listing.files[0].link, "/files/a/b/x.py");
        assert_eq!(listing.parent.as_deref(), Some("/files/a"));
    }

    #[test]
    fn test_listing_root_links() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("x.py"), "").unwrap();
        let listing = list_directory(dir.path(), "", &at("/files/")).unwrap();
        assert_eq!(listing.files[0].link, "/files/x.py");
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let listing = list_directory(dir.path(), "empty", &at("/files/empty")).unwrap();
        assert!(listing.dirs.is_empty());
        assert!(listing.files.is_empty());
        assert_eq!(listing.parent.as_deref(), Some("/files"));
    }

    #[test]
    fn test_inline_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "hello\nworld\n").unwrap();

        match dispatch(&path, "notes.txt", &at("/files/notes.txt")).unwrap() {
            Outcome::Inline(view) => {
                assert_eq!(view.content, "hello\nworld\n");
                assert_eq!(view.file_type, "text");
                assert_eq!(view.name, "notes.txt");
                assert_eq!(view.size, 12);
            }
            other => panic!("expected inline view, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_code_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("main.py");
        fs::write(&path, "print('hi')").unwrap();

        let Outcome::Inline(view) = dispatch(&path, "main.py", &at("/files/main.py")).unwrap()
        else {
            panic!("expected inline view");
        };
        assert_eq!(view.file_type, "python");
    }

    #[test]
    fn test_download_unknown_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.zip");
        fs::write(&path, [0x50, 0x4b, 0x03, 0x04]).unwrap();

        let Outcome::Download(download) =
            dispatch(&path, "archive.zip", &at("/files/archive.zip")).unwrap()
        else {
            panic!("expected download");
        };
        assert!(download.content_disposition().contains("filename=archive.zip"));
        assert_eq!(download.content_type, "application/zip");
        assert_eq!(&download.data[..], &[0x50, 0x4b, 0x03, 0x04]);
    }

    #[test]
    fn test_text_content_without_known_suffix_downloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("NOTES.TXT");
        fs::write(&path, "plain text").unwrap();

        let outcome = dispatch(&path, "NOTES.TXT", &at("/files/NOTES.TXT")).unwrap();
        assert!(matches!(outcome, Outcome::Download(_)));
    }

    #[test]
    fn test_dotless_name_is_its_own_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("txt");
        fs::write(&path, "inline").unwrap();

        let outcome = dispatch(&path, "txt", &at("/files/txt")).unwrap();
        assert!(matches!(outcome, Outcome::Inline(_)));
    }

    #[test]
    fn test_invalid_utf8_inline_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.log");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let err = dispatch(&path, "bad.log", &at("/files/bad.log")).unwrap_err();
        assert!(matches!(err, BrowseError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_followed_and_dangling_skipped() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/inner.txt"), "through a link").unwrap();
        fs::write(root.join("f.txt"), "plain").unwrap();
        symlink(root.join("real"), root.join("ldir")).unwrap();
        symlink(root.join("f.txt"), root.join("lfile.txt")).unwrap();
        symlink(root.join("missing"), root.join("dangling")).unwrap();

        let listing = list_directory(root, "", &at("/files/")).unwrap();
        assert_eq!(names(&listing.dirs), ["ldir", "real"]);
        assert_eq!(names(&listing.files), ["f.txt", "lfile.txt"]);
        assert_eq!(listing.dirs[0].link, "/files/ldir");
    }

    #[cfg(unix)]
    #[test]
    fn test_file_inside_symlinked_directory() {
        use std::os::unix::fs::symlink;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/inner.txt"), "through a link").unwrap();
        symlink(root.join("real"), root.join("ldir")).unwrap();

        let path = root.join("ldir/inner.txt");
        let Outcome::Inline(view) =
            dispatch(&path, "ldir/inner.txt", &at("/files/ldir/inner.txt")).unwrap()
        else {
            panic!("expected inline view");
        };
        assert_eq!(view.name, "inner.txt");
        assert_eq!(view.content, "through a link");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ok.txt"), "fine").unwrap();
        fs::write(dir.path().join(OsStr::from_bytes(b"bad\xffname.txt")), "lost").unwrap();
        fs::create_dir(dir.path().join(OsStr::from_bytes(b"dir\xfe"))).unwrap();

        let listing = list_directory(dir.path(), "", &at("/files/")).unwrap();
        assert!(listing.dirs.is_empty());
        assert_eq!(names(&listing.files), ["ok.txt"]);
    }

    #[test]
    fn test_directory_with_suffix_is_listed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.zip");
        fs::create_dir(&path).unwrap();

        let outcome = dispatch(&path, "site.zip", &at("/files/site.zip")).unwrap();
        assert!(matches!(outcome, Outcome::Directory(_)));
    }
}
