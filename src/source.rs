//! Image source resolution.
//!
//! Resolves image URLs into raw bytes plus a content-type label. Local
//! paths resolve against an optional base directory; `http(s)` URLs are
//! fetched with a single blocking request and no retry. Every failure is
//! an ordinary error the renderer converts into its alt-text fallback.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::probe;

/// Raw image bytes plus their content-type label.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    /// Image file bytes
    pub data: Vec<u8>,
    /// MIME content type (e.g., "image/png")
    pub content_type: String,
}

/// Resolver turning image URLs into bytes.
pub trait ImageSource {
    /// Fetch the image behind `url`.
    fn fetch(&self, url: &str) -> Result<ResolvedImage>;
}

/// Default image source: local files (relative to an optional base
/// directory, or `file:` URIs) and remote `http(s)` URLs.
#[derive(Debug, Clone, Default)]
pub struct FileAndHttpSource {
    base_path: Option<PathBuf>,
}

impl FileAndHttpSource {
    /// Create a source resolving relative paths against `base_path`.
    pub fn new(base_path: Option<PathBuf>) -> Self {
        Self { base_path }
    }

    fn read_file(&self, path: &Path) -> Result<ResolvedImage> {
        let resolved = match (&self.base_path, path.is_relative()) {
            (Some(base), true) => base.join(path),
            _ => path.to_path_buf(),
        };
        let data = std::fs::read(&resolved)?;
        let content_type = content_type_for_path(&resolved)
            .or_else(|| probe::sniff_content_type(&data))
            .unwrap_or("image/png");
        Ok(ResolvedImage {
            data,
            content_type: content_type.to_string(),
        })
    }

    #[cfg(feature = "remote-images")]
    fn fetch_remote(&self, url: &str) -> Result<ResolvedImage> {
        let response = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Error::ImageFetch(e.to_string()))?;
        let header_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or(v).trim().to_string());
        let data = response
            .bytes()
            .map_err(|e| Error::ImageFetch(e.to_string()))?
            .to_vec();
        let content_type = header_type
            .filter(|t| !t.is_empty())
            .or_else(|| probe::sniff_content_type(&data).map(str::to_string))
            .unwrap_or_else(|| "image/png".to_string());
        Ok(ResolvedImage { data, content_type })
    }

    #[cfg(not(feature = "remote-images"))]
    fn fetch_remote(&self, url: &str) -> Result<ResolvedImage> {
        Err(Error::ImageFetch(format!(
            "remote images disabled at build time: {url}"
        )))
    }
}

impl ImageSource for FileAndHttpSource {
    fn fetch(&self, url: &str) -> Result<ResolvedImage> {
        if url.is_empty() {
            return Err(Error::ImageFetch("empty image URL".into()));
        }
        if url.starts_with("http://") || url.starts_with("https://") {
            self.fetch_remote(url)
        } else if let Some(path) = url.strip_prefix("file://") {
            self.read_file(Path::new(path))
        } else {
            self.read_file(Path::new(url))
        }
    }
}

/// Content type from a file extension, if recognized.
pub fn content_type_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_content_type_for_path() {
        assert_eq!(
            content_type_for_path(Path::new("a/b.PNG")),
            Some("image/png")
        );
        assert_eq!(
            content_type_for_path(Path::new("x.jpeg")),
            Some("image/jpeg")
        );
        assert_eq!(content_type_for_path(Path::new("x.webp")), None);
        assert_eq!(content_type_for_path(Path::new("noext")), None);
    }

    #[test]
    fn test_fetch_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.gif");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"GIF89a\x10\x00\x10\x00\x00\x00\x00").unwrap();

        let source = FileAndHttpSource::new(Some(dir.path().to_path_buf()));
        let resolved = source.fetch("pic.gif").unwrap();
        assert_eq!(resolved.content_type, "image/gif");
        assert!(resolved.data.starts_with(b"GIF"));
    }

    #[test]
    fn test_fetch_missing_file() {
        let source = FileAndHttpSource::default();
        assert!(source.fetch("definitely/not/here.png").is_err());
    }

    #[test]
    fn test_fetch_empty_url() {
        let source = FileAndHttpSource::default();
        assert!(matches!(source.fetch(""), Err(Error::ImageFetch(_))));
    }

    #[test]
    fn test_content_type_sniffed_without_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("headerless");
        std::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0, 0]).unwrap();

        let source = FileAndHttpSource::new(Some(dir.path().to_path_buf()));
        let resolved = source.fetch("headerless").unwrap();
        assert_eq!(resolved.content_type, "image/jpeg");
    }
}
