//! Pathname checks and rewriting.

/// Segment removed from request paths before they are mapped onto the host.
pub const DOCS_SEGMENT: &str = "/docs/";

/// True when the pathname names a concrete file (an asset such as `/docs/install.pdf`).
///
/// Any `.` anywhere in the path counts, including in directory names.
pub fn references_file(pathname: &str) -> bool {
    pathname.contains('.')
}

/// Removes the first occurrence of `/docs/` and leaves everything else untouched.
pub fn strip_docs_segment(pathname: &str) -> String {
    pathname.replacen(DOCS_SEGMENT, "", 1)
}
