//! MIME type lookup for downloads
//!
//! Attachments get a Content-Type guessed from the extension only; file
//! contents are never inspected.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use filetree::http::mime::get_content_type;
/// assert_eq!(get_content_type(Some("pdf")), "application/pdf");
/// assert_eq!(get_content_type(Some("tgz")), "application/gzip");
/// assert_eq!(get_content_type(None), "application/octet-stream");
/// ```
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Archives
        Some("zip") => "application/zip",
        Some("gz" | "tgz") => "application/gzip",
        Some("tar") => "application/x-tar",
        Some("rar") => "application/vnd.rar",
        Some("7z") => "application/x-7z-compressed",
        Some("bz2") => "application/x-bzip2",
        Some("xz") => "application/x-xz",

        // Documents
        Some("pdf") => "application/pdf",
        Some("csv") => "text/csv",
        Some("xml") => "application/xml",
        Some("yaml" | "yml") => "application/yaml",
        Some("toml") => "application/toml",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Audio / video
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",

        // Default
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("zip")), "application/zip");
        assert_eq!(get_content_type(Some("tar")), "application/x-tar");
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("jpeg")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("bin")), "application/octet-stream");
        assert_eq!(get_content_type(Some("PNG")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }
}
