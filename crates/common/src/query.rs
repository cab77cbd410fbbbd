//! Filter normalization for list queries.

/// Normalize a username filter as typed by an administrator.
///
/// Surrounding whitespace is trimmed and a leading `@` is stripped, so
/// `"@Alice "` becomes `"Alice"`. Returns `None` when nothing is left.
pub fn normalize_username(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let stripped = trimmed.strip_prefix('@').unwrap_or(trimmed).trim();

    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("@Alice "), Some("Alice".to_string()));
        assert_eq!(normalize_username("  bob"), Some("bob".to_string()));
        assert_eq!(normalize_username("@"), None);
        assert_eq!(normalize_username("   "), None);
    }

    #[test]
    fn test_only_one_at_is_stripped() {
        assert_eq!(normalize_username("@@carol"), Some("@carol".to_string()));
    }
}
