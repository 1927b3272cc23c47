/// Directory every committed document lives under.
pub const DOCS_PREFIX: &str = "docs/";

/// Root a logical path under [`DOCS_PREFIX`].
///
/// Paths that already carry the prefix are returned unchanged, so the
/// operation is idempotent and never stacks a second prefix.
pub fn normalize_docs_path(path: &str) -> String {
    if path.starts_with(DOCS_PREFIX) {
        path.to_string()
    } else {
        format!("{}{}", DOCS_PREFIX, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_is_added() {
        assert_eq!(normalize_docs_path("report.json"), "docs/report.json");
        assert_eq!(
            normalize_docs_path("2026/schedule.json"),
            "docs/2026/schedule.json"
        );
    }

    #[test]
    fn test_prefixed_path_is_identity() {
        assert_eq!(
            normalize_docs_path("docs/report.json"),
            "docs/report.json"
        );
        assert_eq!(
            normalize_docs_path(&normalize_docs_path("report.json")),
            "docs/report.json"
        );
    }

    #[test]
    fn test_prefix_substring_elsewhere_is_not_enough() {
        assert_eq!(
            normalize_docs_path("notes/docs/report.json"),
            "docs/notes/docs/report.json"
        );
        assert_eq!(normalize_docs_path("docstore.json"), "docs/docstore.json");
    }

    #[test]
    fn test_empty_path_becomes_bare_prefix() {
        assert_eq!(normalize_docs_path(""), "docs/");
    }
}
