//! Filename sanitization for row identifiers.

/// Sanitize an identifier for use as a filename.
///
/// Replaces characters that are invalid in filenames across platforms
/// and prevents path traversal attacks. Typical video identifiers pass
/// through unchanged.
pub fn sanitize_identifier(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();

    // Prevent path traversal: replace ".." with "__"
    sanitized.replace("..", "__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_identifier_passthrough() {
        assert_eq!(sanitize_identifier("dQw4w9WgXcQ"), "dQw4w9WgXcQ");
        assert_eq!(sanitize_identifier("-abc_123"), "-abc_123");
    }

    #[test]
    fn test_sanitize_identifier_replaces_invalid() {
        assert_eq!(sanitize_identifier("a/b:c*d"), "a_b_c_d");
        assert_eq!(sanitize_identifier("id?name"), "id_name");
        assert_eq!(sanitize_identifier("a\\b|c"), "a_b_c");
    }

    #[test]
    fn test_sanitize_identifier_prevents_path_traversal() {
        assert_eq!(sanitize_identifier(".."), "__");
        assert_eq!(sanitize_identifier("../etc"), "___etc");
        assert_eq!(sanitize_identifier("foo/../bar"), "foo____bar");
        // Single dots are preserved
        assert_eq!(sanitize_identifier("clip.v2"), "clip.v2");
    }
}
