//! Mapping from request pathnames to pre-rendered pages on the documentation host.
//!
//! The host serves one `index.html` per documentation directory under
//! `/generated-docs/`. Pieces are joined by plain concatenation: no slashes
//! are added or collapsed, so a host with a trailing slash yields `//`.

mod path;

pub use path::{references_file, strip_docs_segment, DOCS_SEGMENT};

/// Directory on the documentation host holding the generated pages.
pub const GENERATED_DOCS_SEGMENT: &str = "/generated-docs/";

/// File fetched for every documentation directory.
pub const INDEX_FILENAME: &str = "index.html";

/// Builds `{docs_host}/generated-docs/{pathname without first "/docs/"}index.html`.
///
/// Returns `None` when the pathname references a file, in which case nothing
/// should be fetched.
///
/// # Examples
///
/// - `target_url("https://h", "/docs/guide/")` → `Some("https://h/generated-docs/guide/index.html")`
/// - `target_url("https://h", "/docs/install.pdf")` → `None`
pub fn target_url(docs_host: &str, pathname: &str) -> Option<String> {
    if references_file(pathname) {
        return None;
    }
    let relative = strip_docs_segment(pathname);
    Some(format!(
        "{}{}{}{}",
        docs_host, GENERATED_DOCS_SEGMENT, relative, INDEX_FILENAME
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOST: &str = "https://docs.example.com";

    #[test]
    fn guide_directory() {
        assert_eq!(
            target_url(HOST, "/docs/guide/").as_deref(),
            Some("https://docs.example.com/generated-docs/guide/index.html")
        );
    }

    #[test]
    fn repeated_docs_segment_removed_once() {
        assert_eq!(
            target_url(HOST, "/docs/docs/api/").as_deref(),
            Some("https://docs.example.com/generated-docs/docs/api/index.html")
        );
    }

    #[test]
    fn docs_root() {
        assert_eq!(
            target_url(HOST, "/docs/").as_deref(),
            Some("https://docs.example.com/generated-docs/index.html")
        );
    }

    #[test]
    fn path_without_trailing_slash_is_concatenated_verbatim() {
        assert_eq!(
            target_url(HOST, "/docs/guide").as_deref(),
            Some("https://docs.example.com/generated-docs/guideindex.html")
        );
    }

    #[test]
    fn file_paths_are_skipped() {
        assert_eq!(target_url(HOST, "/docs/install.pdf"), None);
        assert_eq!(target_url(HOST, "/docs/img/logo.png"), None);
    }

    #[test]
    fn host_trailing_slash_not_collapsed() {
        assert_eq!(
            target_url("http://h/", "/docs/a/").as_deref(),
            Some("http://h//generated-docs/a/index.html")
        );
    }
}
